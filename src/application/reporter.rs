use crate::domain::notification::Notification;
use crate::domain::ports::Notifier;
use crate::domain::transaction::TransactionResult;
use crate::error::SdkError;

pub const SUCCESS_MESSAGE: &str = "Message sent";

/// Turns a validated outcome into a notification for the operator.
pub async fn report_outcome(notifier: &dyn Notifier, outcome: &Result<TransactionResult, SdkError>) {
    let notification = match outcome {
        Ok(_) => Notification::success(SUCCESS_MESSAGE),
        Err(e) => Notification::error(e.to_string()),
    };
    notifier.notify(notification).await;
}
