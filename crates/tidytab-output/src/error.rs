use thiserror::Error;

pub type Result<T> = std::result::Result<T, OutputError>;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to encode record: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush serialized output: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialized output was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
