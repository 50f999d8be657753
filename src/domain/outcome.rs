use super::tokens::Tokens;
use super::transaction::TransactionResult;
use crate::error::SdkError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Ok,
    Aborted,
    Failed,
}

/// One line of the processing report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeSummary {
    pub index: usize,
    pub status: OutcomeStatus,
    pub exit_code: Option<i32>,
    #[serde(serialize_with = "serialize_tokens")]
    pub fees: Tokens,
    pub message: String,
}

fn serialize_tokens<S>(tokens: &Tokens, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(tokens)
}

impl OutcomeSummary {
    pub fn from_outcome(index: usize, outcome: &Result<TransactionResult, SdkError>) -> Self {
        match outcome {
            Ok(result) => Self {
                index,
                status: OutcomeStatus::Ok,
                exit_code: Some(result.transaction.exit_code),
                fees: result.transaction.total_fees.unwrap_or_default(),
                message: String::new(),
            },
            Err(SdkError::TransactionAborted(aborted)) => Self {
                index,
                status: OutcomeStatus::Aborted,
                exit_code: Some(aborted.exit_code),
                fees: aborted.result.transaction.total_fees.unwrap_or_default(),
                message: aborted.to_string(),
            },
            Err(e) => Self {
                index,
                status: OutcomeStatus::Failed,
                exit_code: None,
                fees: Tokens::ZERO,
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::transaction::Transaction;
    use crate::error::TransactionAborted;

    #[test]
    fn test_summary_of_each_outcome() {
        let mut tx = Transaction::succeeded();
        tx.total_fees = Some(Tokens::from_nano(5_000_000));
        let ok = OutcomeSummary::from_outcome(0, &Ok(TransactionResult::new(tx)));
        assert_eq!(ok.status, OutcomeStatus::Ok);
        assert_eq!(ok.exit_code, Some(0));
        assert_eq!(ok.fees, Tokens::from_nano(5_000_000));

        let aborted = OutcomeSummary::from_outcome(
            1,
            &Err(TransactionAborted::new(TransactionResult::new(Transaction::aborted(51))).into()),
        );
        assert_eq!(aborted.status, OutcomeStatus::Aborted);
        assert_eq!(aborted.exit_code, Some(51));
        assert_eq!(aborted.message, "Transaction aborted with code 51");

        let failed = OutcomeSummary::from_outcome(2, &Err(SdkError::Timeout("60s".into())));
        assert_eq!(failed.status, OutcomeStatus::Failed);
        assert_eq!(failed.exit_code, None);
        assert_eq!(failed.message, "Request timed out: 60s");
    }
}
