use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenwrightError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown export format: {0}")]
    UnknownFormat(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
