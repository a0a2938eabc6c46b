use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

pub(crate) const DEFAULT_SCHEMA_FILE_EXTS: [&str; 3] = ["graphql", "graphqls", "gql"];

/// Strips an optional leading `.` from each extension.
pub(crate) fn normalize_exts(exts: &[String]) -> Vec<String> {
    exts.iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Finds every schema file at or under `paths`, in argument order and, within
/// each directory, sorted by file name.
///
/// A single file argument is taken even when its extension is not in `exts`.
pub(crate) fn find_schema_files(
    paths: &[PathBuf],
    exts: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    let exts = normalize_exts(exts);
    let mut file_paths = vec![];
    let mut walk_errors = vec![];

    log::debug!("Scanning {} input paths...", paths.len());
    for path in paths {
        let walker = WalkDir::new(path.as_path())
            .follow_links(true)
            .sort_by_file_name();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    let entry_path = entry.path();
                    if !entry.file_type().is_file() {
                        log::trace!("Skipping non-file: {entry_path:#?}.");
                        continue;
                    }
                    if has_schema_ext(entry_path, &exts) {
                        log::trace!("Found schema file at {entry_path:#?}.");
                        file_paths.push(entry_path.to_path_buf());
                    } else {
                        log::trace!("Skipping file with other extension: {entry_path:#?}.");
                    }
                },

                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    walk_errors.push(e.to_string());
                },
            }
        }
    }

    if !walk_errors.is_empty() {
        anyhow::bail!(
            "Failed to scan input paths:\n{}",
            walk_errors.iter()
                .map(|e| format!("  * {e}"))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }

    if file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding with {first_arg_path:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            format_exts(&exts),
        );
        file_paths.push(first_arg_path.clone());
    }

    if file_paths.is_empty() {
        anyhow::bail!(
            "No GraphQL schema files found under {} (looked for {}).",
            paths.iter()
                .map(|path| format!("{}", path.display()))
                .collect::<Vec<_>>()
                .join(", "),
            format_exts(&exts),
        );
    }

    log::debug!("Found {} GraphQL schema files.", file_paths.len());
    Ok(file_paths)
}

fn has_schema_ext(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| exts.iter().any(|allowed| allowed == ext.as_ref()))
}

fn format_exts(exts: &[String]) -> String {
    exts.iter()
        .map(|ext| format!("`.{ext}`"))
        .collect::<Vec<_>>()
        .join(", ")
}
