use super::notification::Notification;
use super::transaction::TransactionResult;
use crate::config::ContractConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Sends a transaction to a contract and waits for it to settle.
#[async_trait]
pub trait TransactionSubmitter: Send + Sync {
    async fn submit(&self, target: &ContractConfig) -> Result<TransactionResult>;
}

/// Surfaces a status message to whoever operates the application.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: Notification);
}

pub type SubmitterBox = Box<dyn TransactionSubmitter>;
pub type NotifierBox = Box<dyn Notifier>;
