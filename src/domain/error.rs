use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Candidate source error: {0}")]
    Source(String),

    #[error("Probe error: {0}")]
    Probe(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl DomainError {
    /// Caller-input errors are the only kind that propagate out of the
    /// public entry points; everything else is absorbed into a fallback.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, DomainError::InvalidInput(_))
    }
}
