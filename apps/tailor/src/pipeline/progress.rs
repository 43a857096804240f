//! Progress side channel — ordered, human-readable status strings emitted
//! between stages. Reporting only, never control flow: consumers may relay
//! the messages over a push stream or polling endpoint, and a dropped
//! receiver is silently ignored.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::info;

/// Fire-and-forget reporter handed to the pipeline. Messages are emitted in
/// stage order; consumers must not assume a fixed count or exact wording.
#[derive(Clone, Default)]
pub struct ProgressReporter {
    tx: Option<UnboundedSender<String>>,
}

impl ProgressReporter {
    /// Reporter with no subscriber; messages still land in the log.
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// Creates a reporter and the receiving end of its status stream.
    pub fn channel() -> (Self, UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx: Some(tx) }, rx)
    }

    pub fn report(&self, message: &str) {
        info!("{message}");
        if let Some(tx) = &self.tx {
            // Receiver gone is fine — progress is best-effort.
            let _ = tx.send(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_messages_arrive_in_order() {
        let (reporter, mut rx) = ProgressReporter::channel();
        reporter.report("first");
        reporter.report("second");
        assert_eq!(rx.recv().await.as_deref(), Some("first"));
        assert_eq!(rx.recv().await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_dropped_receiver_does_not_panic() {
        let (reporter, rx) = ProgressReporter::channel();
        drop(rx);
        reporter.report("into the void");
    }

    #[test]
    fn test_disabled_reporter_is_silent() {
        ProgressReporter::disabled().report("nobody listening");
    }
}
