use libgqlmerge::SdlSource;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[error("Failed to read {path:#?}: {source}")]
pub(crate) struct ReadContentError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Reads one schema file. The path as given becomes the file name used in
/// diagnostics.
pub(crate) async fn read_source(path: &Path) -> Result<SdlSource, ReadContentError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ReadContentError {
            path: path.to_path_buf(),
            source,
        })?;
    log::trace!("Read {} bytes from {path:#?}.", text.len());
    Ok(SdlSource::new(path.display().to_string(), text))
}

/// Reads all files concurrently, keeping the input order.
pub(crate) async fn read_sources(paths: &[PathBuf]) -> Result<Vec<SdlSource>, ReadContentError> {
    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(async move { read_source(&path).await }))
        .collect();

    let mut sources = Vec::with_capacity(handles.len());
    for (handle, path) in handles.into_iter().zip(paths) {
        let source = handle.await.map_err(|join_err| ReadContentError {
            path: path.clone(),
            source: std::io::Error::other(join_err),
        })??;
        sources.push(source);
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::read_source;
    use std::path::Path;

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let err = read_source(Path::new("does/not/exist.graphql")).await.unwrap_err();
        assert_eq!(err.path, Path::new("does/not/exist.graphql"));
        assert!(err.to_string().starts_with("Failed to read \"does/not/exist.graphql\""));
    }
}
