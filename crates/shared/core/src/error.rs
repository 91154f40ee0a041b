use thiserror::Error;

/// Errors raised by the path generator, agents and clusters
///
/// All of these are reported to the immediate caller; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WealthError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Sequence exhausted after {consumed} steps")]
    SequenceExhausted { consumed: usize },

    #[error("Value of agent {0} read before it was set")]
    UninitializedValue(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl WealthError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        WealthError::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, WealthError>;
