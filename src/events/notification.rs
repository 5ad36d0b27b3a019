//! # Notifications delivered to subscribers.
//!
//! A [`Notification`] carries the event name (which doubles as the group
//! name used for routing), an optional type-erased [`Payload`], and ordering
//! metadata.
//!
//! ## Ordering guarantees
//! Each notification gets a process-wide sequence number (`seq`) that
//! increases monotonically. Use it to correlate deliveries across
//! dispatchers.
//!
//! ## Example
//! ```rust
//! use grouphook::Notification;
//!
//! #[derive(Debug, PartialEq)]
//! struct User { name: &'static str }
//!
//! let n = Notification::new("User:created").with_payload(User { name: "ada" });
//!
//! assert_eq!(n.name(), "User:created");
//! assert_eq!(n.payload::<User>(), Some(&User { name: "ada" }));
//! assert_eq!(n.payload::<u32>(), None);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for notification ordering.
static NOTIFICATION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Shared, type-erased payload attached to a notification.
pub type Payload = Arc<dyn Any + Send + Sync>;

/// One event as seen by subscribers.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - `name`: event name, matched literally against group names
/// - `payload`: optional data, shared between all recipients
#[derive(Clone)]
pub struct Notification {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    name: Arc<str>,
    payload: Option<Payload>,
}

impl Notification {
    /// Creates a notification with the current timestamp and next sequence number.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            seq: NOTIFICATION_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            name: name.into(),
            payload: None,
        }
    }

    /// Attaches a payload value.
    #[inline]
    pub fn with_payload<T: Any + Send + Sync>(mut self, payload: T) -> Self {
        self.payload = Some(Arc::new(payload));
        self
    }

    /// Attaches an already shared payload.
    #[inline]
    pub fn with_shared_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Event name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Event name as a shared string (cheap to clone).
    #[inline]
    pub fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// Returns the payload downcast to `T`, or `None` if absent or of another type.
    #[inline]
    pub fn payload<T: Any>(&self) -> Option<&T> {
        self.payload.as_deref().and_then(|p| p.downcast_ref::<T>())
    }

    /// Returns the raw payload handle.
    #[inline]
    pub fn raw_payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// True if a payload is attached.
    #[inline]
    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("seq", &self.seq)
            .field("name", &self.name)
            .field("has_payload", &self.payload.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let a = Notification::new("a");
        let b = Notification::new("b");
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_payload_is_shared_between_clones() {
        let n = Notification::new("reading").with_payload(vec![32_i32, 75]);
        let copy = n.clone();
        assert_eq!(copy.payload::<Vec<i32>>(), Some(&vec![32, 75]));
        assert!(Arc::ptr_eq(
            n.raw_payload().expect("payload"),
            copy.raw_payload().expect("payload")
        ));
        assert_eq!(copy.seq, n.seq);
    }

    #[test]
    fn test_missing_payload() {
        let n = Notification::new("User:updated");
        assert!(!n.has_payload());
        assert_eq!(n.payload::<String>(), None);
    }

    #[test]
    fn test_timestamp_taken_at_creation() {
        let before = SystemTime::now();
        let n = Notification::new("User:created");
        let after = SystemTime::now();
        assert!(before <= n.at && n.at <= after);
        assert_eq!(n.clone().at, n.at);
    }

    #[test]
    fn test_shared_payload_is_not_copied() {
        let shared: Payload = Arc::new(String::from("ada"));
        let a = Notification::new("User:created").with_shared_payload(Arc::clone(&shared));
        let b = Notification::new("User:deleted").with_shared_payload(Arc::clone(&shared));

        assert!(a.has_payload());
        assert_eq!(a.payload::<String>().map(String::as_str), Some("ada"));
        assert!(Arc::ptr_eq(a.raw_payload().expect("payload"), &shared));
        assert!(Arc::ptr_eq(b.raw_payload().expect("payload"), &shared));
        assert_eq!(Arc::strong_count(&shared), 3);
    }
}
