use crate::config::ConfigError;

/// Failures talking to the amplifier
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout or a broken body read
    #[error("Network communication error: {0}")]
    Network(String),

    /// The amplifier answered with something other than the expected JSON
    #[error("Failed to parse amplifier response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}

/// Any error surfaced by the controller
#[derive(Debug, thiserror::Error)]
pub enum YamahaError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, YamahaError>;
