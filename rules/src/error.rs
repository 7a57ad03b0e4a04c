use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `given` is the option value exactly as the caller supplied it; `valid`
    /// is every registered language key joined with `", "`.
    #[error("invalid language given {given:?}, expected one of: {valid:?}")]
    InvalidLanguage {
        given: String,
        valid: String,
    },

    #[error("Unknown rule \"{0}\"")]
    UnknownRule(String),

    #[error("Invalid rule: {0}")]
    InvalidRule(String),
}
