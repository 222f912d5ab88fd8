use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Debug, Error)]
pub enum IngestError {
    /// An opening quote with no matching close before end of input.
    #[error("malformed input: quote opened on line {line} is never closed")]
    UnbalancedQuote { line: usize },

    #[error("failed to decode record: {0}")]
    Csv(#[from] csv::Error),
}
