//! # LogWriter — notification tracer
//!
//! A minimal subscriber that reports every notification it receives through
//! [`tracing`] at `INFO` level. Attach it to the wildcard group to trace all
//! traffic of a dispatcher.
//!
//! ## Example output (with `tracing_subscriber::fmt`)
//! ```text
//! INFO grouphook::subscribers::log: notified event="User:created" seq=0 has_payload=false
//! INFO grouphook::subscribers::log: notified event="User:updated" seq=1 has_payload=true
//! ```

use async_trait::async_trait;

use crate::core::{AsyncDispatcher, Dispatcher};
use crate::error::HookError;
use crate::events::Notification;
use crate::subscribers::{Observe, Subscribe};

/// Notification writer subscriber.
#[derive(Debug, Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn write(n: &Notification) {
        tracing::info!(
            event = n.name(),
            seq = n.seq,
            has_payload = n.has_payload(),
            "notified"
        );
    }
}

impl Observe for LogWriter {
    fn update(&self, _dispatcher: &Dispatcher, n: &Notification) -> Result<(), HookError> {
        Self::write(n);
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(
        &self,
        _dispatcher: &AsyncDispatcher,
        n: &Notification,
    ) -> Result<(), HookError> {
        Self::write(n);
        Ok(())
    }

    fn name(&self) -> &str {
        "LogWriter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_log_writer_never_fails() {
        let d = Dispatcher::new();
        d.attach(Arc::new(LogWriter::new()));
        let delivery = d.notify_with("User:created", 42_u32).unwrap();
        assert_eq!(delivery.delivered, 1);
        assert!(delivery.is_clean());
    }

    #[tokio::test]
    async fn test_log_writer_as_async_subscriber() {
        let d = AsyncDispatcher::new();
        d.attach(Arc::new(LogWriter::new())).await;
        let delivery = d.notify("User:updated").await.unwrap();
        assert_eq!(delivery.delivered, 1);
    }
}
