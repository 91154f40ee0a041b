use thiserror::Error;
use wealth_core::WealthError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Simulation(#[from] WealthError),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
