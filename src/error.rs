use thiserror::Error;

/// Conditions that stop the machine from starting or from recording its journal.
///
/// None of these can be triggered by what a customer types; rejected input is
/// modelled by [`InputRejection`] instead.
#[derive(Error, Debug)]
pub enum VendingError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration parse error: {0}")]
    ConfigParseError(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, VendingError>;

/// A recoverable rejection of a single input token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputRejection {
    #[error("invalid coin denomination: {token:?}")]
    InvalidCoinDenomination { token: String },
    #[error("menu choice is not a number: {token:?}")]
    NotANumber { token: String },
    #[error("menu choice out of range: {choice}")]
    UnknownOption { choice: String },
}
