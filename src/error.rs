// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length must be between {min} and {max} characters (got {got})")]
    InvalidLength { min: usize, max: usize, got: usize },

    #[error("Word count must be between {min} and {max} (got {got})")]
    InvalidWordCount { min: usize, max: usize, got: usize },

    #[error("Count must be between 1 and {max} (got {got})")]
    InvalidCount { max: usize, got: usize },

    #[error("Could not generate password with given constraints.")]
    EmptyPool,

    #[error("Unknown generation type: {0}")]
    UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
