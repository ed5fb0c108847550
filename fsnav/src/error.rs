pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("index error: {0}")]
    IndexError(#[from] fstree::error::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CLI input error: {0}")]
    CliInputError(String),
    #[error("{0}")]
    CommandError(String),
    #[error("could not set up logging: {0}")]
    LoggingError(String),
}
