use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or a body that is not a DoH envelope.
    #[error("Unable to connect to the server.")]
    Connection,

    /// The server answered with a non-zero status.
    #[error("{0}")]
    Dns(String),

    #[error("Invalid server URL '{0}': {1}")]
    InvalidBaseUrl(String, String),

    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
