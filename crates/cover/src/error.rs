use thiserror::Error;

/// Errors that can occur while loading a license set from serialized form.
///
/// Matching itself reports no errors: every input is accepted and degenerate
/// inputs simply produce no coverage.
#[derive(Debug, Error)]
pub enum SetError {
    #[error("invalid license set JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("license set contains no entries")]
    EmptySet,
}
