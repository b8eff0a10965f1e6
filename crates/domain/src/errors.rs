use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("The 'name' parameter is required.")]
    MissingName,

    #[error("Type '{0}' is not supported.")]
    UnsupportedRecordType(String),

    /// The query string could not be decoded (e.g. a repeated key).
    #[error("{0}")]
    MalformedQuery(String),

    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    #[error("{0}")]
    Resolution(String),
}

impl DomainError {
    /// Errors caused by the request itself, reported before any lookup happens.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DomainError::MissingName
                | DomainError::UnsupportedRecordType(_)
                | DomainError::MalformedQuery(_)
        )
    }
}
