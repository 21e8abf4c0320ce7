use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    #[error("Empty input: no symbols to build a tree from")]
    EmptyInput,
    #[error("Input too large: {len} bytes exceeds limit of {max}")]
    InputTooLarge { len: usize, max: usize },
    #[error("Tree mismatch: {0}")]
    TreeMismatch(String),
    #[error("Decode error at bit {bit_index}: {reason}")]
    DecodeError { bit_index: usize, reason: String },
    #[error("Invalid tree: {0}")]
    InvalidTree(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HuffError {
    pub fn decode_error(bit_index: usize, reason: impl Into<String>) -> Self {
        Self::DecodeError { bit_index, reason: reason.into() }
    }

    pub fn mismatch(reason: impl Into<String>) -> Self {
        Self::TreeMismatch(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, HuffError>;
