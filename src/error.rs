//! Error types used by dispatchers and subscriber handlers.
//!
//! This module defines two enums:
//!
//! - [`HookError`] — failures reported by an individual subscriber handler.
//! - [`DispatchError`] — failures of a whole `notify` call, raised only under
//!   [`FailurePolicy::Abort`](crate::FailurePolicy::Abort).
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logs.

use std::sync::Arc;

use thiserror::Error;

/// # Errors produced by subscriber handlers.
///
/// Returned from [`Observe::update`](crate::Observe::update) and
/// [`Subscribe::on_event`](crate::Subscribe::on_event). The dispatcher never
/// inspects the content; it only records or propagates it according to the
/// configured [`FailurePolicy`](crate::FailurePolicy).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HookError {
    /// Handler reported a failure.
    #[error("handler failed: {error}")]
    Failed {
        /// The underlying error message.
        error: String,
    },

    /// Handler panicked; the panic was caught by the dispatcher.
    #[error("handler panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl HookError {
    /// Shorthand for [`HookError::Failed`].
    ///
    /// # Example
    /// ```
    /// use grouphook::HookError;
    ///
    /// let err = HookError::fail("smtp unavailable");
    /// assert_eq!(err.to_string(), "handler failed: smtp unavailable");
    /// ```
    pub fn fail(error: impl Into<String>) -> Self {
        HookError::Failed {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            HookError::Failed { .. } => "hook_failed",
            HookError::Panicked { .. } => "hook_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HookError::Failed { error } => format!("error: {error}"),
            HookError::Panicked { info } => format!("panic: {info}"),
        }
    }
}

/// # Errors produced by a dispatch call.
///
/// Only [`FailurePolicy::Abort`](crate::FailurePolicy::Abort) turns a handler
/// failure into a `DispatchError`; under the default policy failures are
/// collected in the returned [`Delivery`](crate::Delivery) instead.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Delivery stopped at the first failing handler.
    #[error("dispatch of '{event}' aborted at subscriber '{subscriber}' (position {position}): {source}")]
    Aborted {
        /// Event name being delivered.
        event: Arc<str>,
        /// Name of the failing subscriber.
        subscriber: String,
        /// Zero-based index of the failing subscriber in the delivery sequence.
        position: usize,
        /// The handler's error.
        #[source]
        source: HookError,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use grouphook::{DispatchError, HookError};
    ///
    /// let err = DispatchError::Aborted {
    ///     event: "User:created".into(),
    ///     subscriber: "welcomer".into(),
    ///     position: 0,
    ///     source: HookError::fail("boom"),
    /// };
    /// assert_eq!(err.as_label(), "dispatch_aborted");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::Aborted { .. } => "dispatch_aborted",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::Aborted {
                event,
                subscriber,
                position,
                source,
            } => format!(
                "event={event} subscriber={subscriber} position={position} {}",
                source.as_message()
            ),
        }
    }

    /// The handler error that caused the abort.
    pub fn hook_error(&self) -> &HookError {
        match self {
            DispatchError::Aborted { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_error_labels() {
        assert_eq!(HookError::fail("x").as_label(), "hook_failed");
        let panicked = HookError::Panicked {
            info: "oops".into(),
        };
        assert_eq!(panicked.as_label(), "hook_panicked");
        assert_eq!(panicked.as_message(), "panic: oops");
    }

    #[test]
    fn test_dispatch_error_exposes_source() {
        let err = DispatchError::Aborted {
            event: "deleted".into(),
            subscriber: "audit".into(),
            position: 2,
            source: HookError::fail("disk full"),
        };
        assert_eq!(err.hook_error(), &HookError::fail("disk full"));
        assert_eq!(
            err.as_message(),
            "event=deleted subscriber=audit position=2 error: disk full"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
