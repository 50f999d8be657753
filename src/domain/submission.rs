use super::transaction::TransactionResult;
use crate::error::{Result, SdkError};
use serde::Deserialize;

/// A recorded settlement of one submission: either the network's answer or
/// the error the submission failed with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SubmissionRecord {
    Settled(TransactionResult),
    Failed {
        error: String,
        #[serde(default)]
        timeout: bool,
    },
}

impl SubmissionRecord {
    pub fn into_outcome(self) -> Result<TransactionResult> {
        match self {
            SubmissionRecord::Settled(result) => Ok(result),
            SubmissionRecord::Failed { error, timeout: true } => Err(SdkError::Timeout(error)),
            SubmissionRecord::Failed { error, timeout: false } => Err(SdkError::Transport(error)),
        }
    }
}
