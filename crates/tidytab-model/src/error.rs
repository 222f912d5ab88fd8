use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("unrecognized missing-value policy {value:?} (expected keep, drop, or fill)")]
    InvalidPolicy { value: String },
}
