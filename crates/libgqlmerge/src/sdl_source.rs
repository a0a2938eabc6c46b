use std::sync::Arc;

/// One input file handed to [`merge_sources()`](crate::merge_sources): an
/// opaque label used in diagnostics plus the already-read text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SdlSource {
    pub file_name: Arc<str>,
    pub text: String,
}

impl SdlSource {
    pub fn new(file_name: impl Into<Arc<str>>, text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: text.into(),
        }
    }
}
