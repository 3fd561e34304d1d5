use thiserror::Error;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown sort key: {0}")]
    InvalidSortKey(String),

    #[error("invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("unknown filter field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
