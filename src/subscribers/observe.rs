//! # Synchronous subscriber trait.
//!
//! Provides [`Observe`], the extension point for handlers driven by
//! [`Dispatcher`](crate::Dispatcher).
//!
//! ## Rules
//! - Handlers run in-line inside `notify`, one after another.
//! - The dispatcher passes itself, so a handler may attach, detach or notify
//!   again; changes to membership apply from the next `notify` call.
//! - Returning `Err` is recorded (or aborts delivery) according to the
//!   dispatcher's [`FailurePolicy`](crate::FailurePolicy).

use std::sync::Arc;

use crate::core::Dispatcher;
use crate::error::HookError;
use crate::events::Notification;

/// Shared handle to a synchronous subscriber.
///
/// Identity for [`Dispatcher::detach`](crate::Dispatcher::detach) is the
/// allocation behind the `Arc`, so keep a clone of the handle you attached.
pub type ObserverRef = Arc<dyn Observe>;

/// Synchronous notification handler.
///
/// ### Implementation requirements
/// - Keep handlers short; the producer waits for every one of them.
/// - Report failures through the returned `Result` instead of panicking.
pub trait Observe: Send + Sync + 'static {
    /// Handles a single notification.
    ///
    /// `dispatcher` is the dispatcher currently delivering `notification`.
    fn update(&self, dispatcher: &Dispatcher, notification: &Notification)
    -> Result<(), HookError>;

    /// Returns the subscriber name used in logs and failure reports.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
