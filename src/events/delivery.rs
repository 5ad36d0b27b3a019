//! # Outcome of a single `notify` call.
//!
//! [`Delivery`] records how many handlers were invoked and which of them
//! failed. Under [`FailurePolicy::Continue`](crate::FailurePolicy::Continue)
//! every handler in the delivery sequence runs, so `delivered` always equals
//! the number of recipients.

use std::sync::Arc;

use crate::error::HookError;

/// A handler failure recorded during delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Name of the failing subscriber.
    pub subscriber: String,
    /// Zero-based index in the delivery sequence.
    pub position: usize,
    /// Error returned (or panic caught) by the handler.
    pub error: HookError,
}

/// Report of one notification delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Event name that was delivered.
    pub event: Arc<str>,
    /// Number of handlers invoked (including failed ones).
    pub delivered: usize,
    /// Failures in delivery order.
    pub failures: Vec<Failure>,
}

impl Delivery {
    pub(crate) fn new(event: Arc<str>) -> Self {
        Self {
            event,
            delivered: 0,
            failures: Vec::new(),
        }
    }

    /// True if every invoked handler returned `Ok`.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// True if nobody received the notification.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.delivered == 0
    }
}
