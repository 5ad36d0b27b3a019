//! # Asynchronous subscriber trait.
//!
//! Provides [`Subscribe`], the extension point for handlers driven by
//! [`AsyncDispatcher`](crate::AsyncDispatcher).
//!
//! ## Rules
//! - Handlers are awaited sequentially in delivery order; the next handler
//!   starts only after the previous future completed.
//! - Panics inside the handler future are caught when
//!   [`Config::catch_panics`](crate::Config::catch_panics) is set.
//!
//! ## Example
//! ```rust
//! use async_trait::async_trait;
//! use grouphook::{AsyncDispatcher, HookError, Notification, Subscribe};
//!
//! struct Audit;
//!
//! #[async_trait]
//! impl Subscribe for Audit {
//!     async fn on_event(&self, _d: &AsyncDispatcher, n: &Notification) -> Result<(), HookError> {
//!         let _ = n.name(); // write an audit row, etc.
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "audit" }
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::AsyncDispatcher;
use crate::error::HookError;
use crate::events::Notification;

/// Shared handle to an async subscriber.
pub type SubscriberRef = Arc<dyn Subscribe>;

/// Asynchronous notification handler.
///
/// ### Implementation requirements
/// - Use async I/O; avoid blocking the executor.
/// - Report failures through the returned `Result`.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Processes a single notification.
    ///
    /// Called from the task that awaits `AsyncDispatcher::notify`.
    async fn on_event(
        &self,
        dispatcher: &AsyncDispatcher,
        notification: &Notification,
    ) -> Result<(), HookError>;

    /// Returns the subscriber name used in logs and failure reports.
    ///
    /// Prefer short, descriptive names (e.g., "audit", "mailer").
    /// The default uses `type_name::<Self>()`.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
