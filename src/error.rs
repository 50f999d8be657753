use crate::domain::transaction::TransactionResult;
use thiserror::Error;

/// Raised when a settled transaction reports `aborted`.
///
/// Carries the full original result so the caller can inspect the exit code,
/// fees or any output the contract produced before aborting.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Transaction aborted with code {exit_code}")]
pub struct TransactionAborted {
    pub exit_code: i32,
    pub result: Box<TransactionResult>,
}

impl TransactionAborted {
    pub const KIND: &'static str = "TransactionAborted";

    pub fn new(result: TransactionResult) -> Self {
        Self {
            exit_code: result.transaction.exit_code,
            result: Box::new(result),
        }
    }

    pub fn kind(&self) -> &'static str {
        Self::KIND
    }

    pub fn into_result(self) -> TransactionResult {
        *self.result
    }
}

#[derive(Error, Debug)]
pub enum SdkError {
    #[error(transparent)]
    TransactionAborted(#[from] TransactionAborted),
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Request timed out: {0}")]
    Timeout(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl SdkError {
    /// Stable discriminator tag for matching without inspecting messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SdkError::TransactionAborted(_) => TransactionAborted::KIND,
            SdkError::Transport(_) => "Transport",
            SdkError::Timeout(_) => "Timeout",
            SdkError::Config(_) => "Config",
            SdkError::Io(_) => "Io",
            SdkError::Json(_) => "Json",
            SdkError::Toml(_) => "Toml",
            SdkError::Csv(_) => "Csv",
            SdkError::InvalidAmount(_) => "InvalidAmount",
        }
    }

    /// Returns the aborted transaction when this error was caused by one.
    pub fn as_aborted(&self) -> Option<&TransactionAborted> {
        match self {
            SdkError::TransactionAborted(aborted) => Some(aborted),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SdkError>;
