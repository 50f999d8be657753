use crate::domain::transaction::TransactionResult;
use crate::error::TransactionAborted;
use std::future::{Future, IntoFuture};

/// Classifies a settled transaction result.
///
/// Aborted transactions become a [`TransactionAborted`] carrying the result;
/// everything else is handed back as is.
pub fn check_outcome(result: TransactionResult) -> Result<TransactionResult, TransactionAborted> {
    if result.transaction.aborted {
        return Err(TransactionAborted::new(result));
    }
    Ok(result)
}

/// Awaits a pending submission and fails if the transaction was aborted.
///
/// An error from the submission itself is returned exactly as produced. The
/// caller's error type only needs to be able to hold a [`TransactionAborted`].
pub async fn error_extractor<F, E>(transaction_result: F) -> Result<TransactionResult, E>
where
    F: IntoFuture<Output = Result<TransactionResult, E>>,
    E: From<TransactionAborted>,
{
    let result = transaction_result.await?;
    check_outcome(result).map_err(E::from)
}

/// Adds [`check_aborted`](OutcomeExt::check_aborted) to any future settling
/// with a transaction result.
pub trait OutcomeExt<E>: Future<Output = Result<TransactionResult, E>> + Sized {
    fn check_aborted(self) -> impl Future<Output = Result<TransactionResult, E>>
    where
        E: From<TransactionAborted>,
    {
        error_extractor(self)
    }
}

impl<F, E> OutcomeExt<E> for F where F: Future<Output = Result<TransactionResult, E>> {}
