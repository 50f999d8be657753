use crate::config::ContractConfig;
use crate::domain::notification::Notification;
use crate::domain::ports::{Notifier, TransactionSubmitter};
use crate::domain::submission::SubmissionRecord;
use crate::domain::transaction::TransactionResult;
use crate::error::{Result, SdkError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// A submitter that settles each submission with the next pre-recorded
/// outcome, in order.
///
/// Uses `Arc<Mutex<VecDeque<_>>>` so clones share one queue. Useful for
/// replaying captured network answers and for tests.
#[derive(Default, Clone)]
pub struct ReplaySubmitter {
    queue: Arc<Mutex<VecDeque<SubmissionRecord>>>,
    targets: Arc<RwLock<Vec<ContractConfig>>>,
}

impl ReplaySubmitter {
    /// Creates a submitter that will replay `records` front to back.
    pub fn new(records: impl IntoIterator<Item = SubmissionRecord>) -> Self {
        Self {
            queue: Arc::new(Mutex::new(records.into_iter().collect())),
            targets: Arc::default(),
        }
    }

    pub async fn push(&self, record: SubmissionRecord) {
        self.queue.lock().await.push_back(record);
    }

    pub async fn remaining(&self) -> usize {
        self.queue.lock().await.len()
    }

    /// Every contract a submission was sent to, in call order.
    pub async fn targets(&self) -> Vec<ContractConfig> {
        self.targets.read().await.clone()
    }
}

#[async_trait]
impl TransactionSubmitter for ReplaySubmitter {
    async fn submit(&self, target: &ContractConfig) -> Result<TransactionResult> {
        self.targets.write().await.push(target.clone());
        let record = self.queue.lock().await.pop_front();
        match record {
            Some(record) => record.into_outcome(),
            None => Err(SdkError::Transport("replay queue exhausted".to_string())),
        }
    }
}

/// A notifier that keeps every notification in memory.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: Notification) {
        self.notifications.write().await.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Severity;
    use crate::domain::transaction::Transaction;

    #[tokio::test]
    async fn test_replay_submitter_settles_in_order() {
        let submitter = ReplaySubmitter::new([
            SubmissionRecord::Settled(TransactionResult::new(Transaction::succeeded())),
            SubmissionRecord::Settled(TransactionResult::new(Transaction::aborted(51))),
        ]);
        let target = ContractConfig::new("0:aa", "0:bb");

        let first = submitter.submit(&target).await.unwrap();
        let second = submitter.submit(&target).await.unwrap();

        assert!(!first.transaction.aborted);
        assert_eq!(second.transaction.exit_code, 51);
        assert_eq!(submitter.remaining().await, 0);
        assert_eq!(submitter.targets().await, vec![target.clone(), target]);
    }

    #[tokio::test]
    async fn test_replay_submitter_reports_exhaustion() {
        let submitter = ReplaySubmitter::default();

        let err = submitter.submit(&ContractConfig::default()).await.unwrap_err();

        assert!(matches!(err, SdkError::Transport(ref m) if m == "replay queue exhausted"));
    }

    #[tokio::test]
    async fn test_replay_submitter_clones_share_queue() {
        let submitter = ReplaySubmitter::default();
        let clone = submitter.clone();
        clone
            .push(SubmissionRecord::Failed {
                error: "gone".into(),
                timeout: true,
            })
            .await;

        let err = submitter.submit(&ContractConfig::default()).await.unwrap_err();
        assert_eq!(err.kind(), "Timeout");
    }

    #[tokio::test]
    async fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify(Notification::success("Message sent")).await;
        notifier.notify(Notification::error("boom")).await;

        let seen = notifier.notifications().await;
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].severity, Severity::Success);
        assert_eq!(seen[1].message, "boom");
    }
}
