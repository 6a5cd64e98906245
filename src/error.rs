use thiserror::Error;

#[derive(Error, Debug)]
pub enum PubProxyError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request to proxy API failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("Unexpected proxy API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("No proxy available")]
    NoProxy,

    #[error("Failed to build proxy transport: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl PubProxyError {
    /// The API answered with a well-formed but empty proxy list.
    pub fn is_no_proxy(&self) -> bool {
        matches!(self, PubProxyError::NoProxy)
    }

    pub fn is_network(&self) -> bool {
        matches!(self, PubProxyError::Network(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, PubProxyError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, PubProxyError>;
