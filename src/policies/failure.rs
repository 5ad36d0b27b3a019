//! # Failure policies for notification delivery.
//!
//! [`FailurePolicy`] decides whether the remaining subscribers still receive a
//! notification after one handler has failed.
//!
//! - [`FailurePolicy::Continue`] every handler runs; failures are collected (default).
//! - [`FailurePolicy::Abort`] the first failure stops delivery and is returned as an error.
//!
//! ## Choosing the right policy
//!
//! **Independent side effects** (logging, mail, metrics):
//! ```text
//! FailurePolicy::Continue   → Delivery { failures: [..] }, notify returns Ok
//! ```
//!
//! **Chained hooks** (later handlers rely on earlier ones):
//! ```text
//! FailurePolicy::Abort      → notify returns Err(DispatchError::Aborted { .. })
//! ```

/// Policy controlling delivery after a handler failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Deliver to every remaining subscriber and report failures in the
    /// returned [`Delivery`](crate::Delivery) (default).
    #[default]
    Continue,
    /// Stop at the first failing handler.
    Abort,
}

impl FailurePolicy {
    /// Returns `true` if delivery should stop after a failure.
    #[inline]
    pub fn stops_on_failure(self) -> bool {
        matches!(self, FailurePolicy::Abort)
    }
}
