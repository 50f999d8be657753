use super::reporter::report_outcome;
use super::validator::OutcomeExt;
use crate::config::ContractConfig;
use crate::domain::outcome::OutcomeSummary;
use crate::domain::ports::{NotifierBox, SubmitterBox};
use crate::domain::transaction::TransactionResult;
use crate::error::Result;

/// Submits transactions to one contract and reports how each one settled.
///
/// The target contract is fixed at construction time, so switching providers
/// means building a new runner with a different [`ContractConfig`].
pub struct OutcomeRunner {
    submitter: SubmitterBox,
    notifier: NotifierBox,
    contract: ContractConfig,
}

impl OutcomeRunner {
    /// Creates a new `OutcomeRunner`.
    ///
    /// # Arguments
    ///
    /// * `submitter` - Sends transactions and waits for them to settle.
    /// * `notifier` - Receives one notification per processed submission.
    /// * `contract` - The contract every submission targets.
    pub fn new(submitter: SubmitterBox, notifier: NotifierBox, contract: ContractConfig) -> Self {
        Self {
            submitter,
            notifier,
            contract,
        }
    }

    pub fn contract(&self) -> &ContractConfig {
        &self.contract
    }

    /// Submits one transaction and fails if it was aborted.
    pub async fn submit_and_check(&self) -> Result<TransactionResult> {
        self.submitter.submit(&self.contract).check_aborted().await
    }

    /// Submits, validates and reports one transaction.
    pub async fn process(&self, index: usize) -> OutcomeSummary {
        let outcome = self.submit_and_check().await;
        match &outcome {
            Ok(result) => tracing::debug!(
                index,
                exit_code = result.transaction.exit_code,
                "transaction settled"
            ),
            Err(e) => tracing::debug!(index, kind = e.kind(), "transaction failed: {e}"),
        }

        report_outcome(self.notifier.as_ref(), &outcome).await;
        OutcomeSummary::from_outcome(index, &outcome)
    }
}
