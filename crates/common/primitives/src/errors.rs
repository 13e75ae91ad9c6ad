use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BytesError {
    #[error("hex string without 0x prefix")]
    MissingPrefix,

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("expected {expected} bytes, got {actual}")]
    BadLength { expected: usize, actual: usize },
}
