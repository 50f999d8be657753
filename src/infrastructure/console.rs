use crate::domain::notification::{Notification, Severity};
use crate::domain::ports::Notifier;
use async_trait::async_trait;

/// Forwards notifications to the `toast` tracing target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, notification: Notification) {
        let Notification { message, severity } = notification;
        match severity {
            Severity::Error => tracing::error!(target: "toast", %severity, "{message}"),
            Severity::Success => tracing::info!(target: "toast", %severity, "{message}"),
        }
    }
}
