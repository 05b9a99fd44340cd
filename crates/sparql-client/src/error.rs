#[derive(Debug, thiserror::Error)]
pub enum SparqlError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("client already closed")]
    AlreadyClosed,
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
    #[error("Unexpected status code {status}")]
    UnexpectedStatus { status: u16 },
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("TLS error: {0}")]
    Tls(String),
}

impl From<reqwest::Error> for SparqlError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return SparqlError::Network(NetworkError::Timeout(err.to_string()));
        }
        SparqlError::Network(NetworkError::ConnectionFailed(err.to_string()))
    }
}
