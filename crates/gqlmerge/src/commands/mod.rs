mod check;
mod merge;

use crate::file_reader;
use crate::schema_files;
use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use libgqlmerge::ast::Document;
use libgqlmerge::SdlError;
use libgqlmerge::SdlSource;
use merge::MergeCmd;
use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(name = "gqlmerge")]
pub(crate) enum CommandEnum {
    /// Merge every schema file found under the input paths into one file.
    Merge(Box<MergeCmd>),

    /// Parse and merge the input paths without writing anything.
    Check(Box<CheckCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Merge(cmd) => cmd.run(cli).await,
            Self::Check(cmd) => cmd.run(cli).await,
        }
    }
}

/// The result of loading and merging a set of schema files.
pub(crate) struct MergedSchema {
    pub document: Document,
    pub num_files: usize,
}

/// Finds, reads, parses and merges the schema files under `paths`.
///
/// Failures come back as ready-to-print text; merge errors are rendered with
/// a snippet of the offending file.
pub(crate) async fn load_and_merge(
    paths: &[PathBuf],
    graphql_file_exts: &[String],
) -> Result<MergedSchema, String> {
    let file_paths = schema_files::find_schema_files(paths, graphql_file_exts)
        .map_err(|e| format!("{e:#}"))?;
    let sources = file_reader::read_sources(&file_paths)
        .await
        .map_err(|e| e.to_string())?;
    let num_files = sources.len();

    let merged = tokio::task::spawn_blocking(move || {
        libgqlmerge::parse_sources(&sources)
            .and_then(libgqlmerge::merge)
            .map_err(|err| render_error(&err, &sources))
    })
    .await
    .map_err(|join_err| format!("Merge task failed: {join_err}"))??;

    Ok(MergedSchema {
        document: merged,
        num_files,
    })
}

fn render_error(err: &SdlError, sources: &[SdlSource]) -> String {
    let source_text = sources
        .iter()
        .find(|source| source.file_name == err.span().file_name)
        .map(|source| source.text.as_str());
    err.format_detailed(source_text)
}
