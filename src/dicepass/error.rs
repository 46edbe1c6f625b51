use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("No words available: the active word list is empty")]
    CatalogEmpty,

    #[error("Minimum length {min_len} is greater than maximum length {max_len}")]
    InfeasibleConstraint { min_len: i64, max_len: i64 },

    #[error("Word count {word_count} is above the limit of {max} words")]
    WordCountTooLarge { word_count: u64, max: usize },

    #[error("Could not meet the length limits after {attempts} attempts; adjust min/max length or word count")]
    ConstraintUnsatisfiable { attempts: usize },
}

pub type Result<T> = std::result::Result<T, DiceError>;
