//! Extraction error types for dsk-extract.

/// Errors raised while preparing an extractor.
///
/// Extraction itself never fails; only compiling the configured patterns can.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Name label pattern has no capture group: {0}")]
    MissingCaptureGroup(String),
}

/// Compile `pattern`, tagging failures with the offending source.
pub(crate) fn compile(pattern: &str) -> Result<regex::Regex, ExtractError> {
    regex::Regex::new(pattern).map_err(|source| ExtractError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}
