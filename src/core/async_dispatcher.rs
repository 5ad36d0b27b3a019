//! # AsyncDispatcher - grouped dispatch for async handlers.
//!
//! Same group semantics as [`Dispatcher`](crate::Dispatcher), for
//! [`Subscribe`] implementations whose handlers are `async`.
//!
//! ## Delivery
//! ```text
//! notify("User:created").await
//!   ├─► snapshot = groups["User:created"] ++ groups["all"]   (read lock released)
//!   └─► for sub in snapshot (in order):
//!         sub.on_event(&dispatcher, &notification).await   (catch_unwind if enabled)
//! ```
//!
//! ## Rules
//! - Handlers are awaited one at a time; there is no concurrent fan-out, so
//!   the observable order is identical to the synchronous dispatcher.
//! - Attach/detach from inside a handler apply from the next `notify`.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::RwLock;

use crate::core::builder::AsyncDispatcherBuilder;
use crate::core::config::Config;
use crate::core::panic::panic_message;
use crate::core::registry::Registry;
use crate::error::{DispatchError, HookError};
use crate::events::{Delivery, Failure, Notification};
use crate::subscribers::{Subscribe, SubscriberRef};

/// Asynchronous grouped event dispatcher.
///
/// # Example
/// ```
/// use futures::FutureExt;
/// use grouphook::{AsyncDispatcher, HookError, Notification, SubscriberFn};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let dispatcher = AsyncDispatcher::new();
///     dispatcher
///         .attach_to(
///             SubscriberFn::arc("mailer", |_d, n: Notification| {
///                 async move {
///                     println!("mail for {}", n.name());
///                     Ok::<_, HookError>(())
///                 }
///                 .boxed()
///             }),
///             "User:created",
///         )
///         .await;
///
///     let delivery = dispatcher.notify("User:created").await?;
///     assert_eq!(delivery.delivered, 1);
///     Ok(())
/// }
/// ```
pub struct AsyncDispatcher {
    cfg: Config,
    registry: RwLock<Registry<dyn Subscribe>>,
}

impl AsyncDispatcher {
    /// Creates a dispatcher with [`Config::default`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a dispatcher with the given configuration.
    #[must_use]
    pub fn with_config(cfg: Config) -> Self {
        let registry = Registry::new(cfg.wildcard_name());
        Self::from_parts(cfg, registry)
    }

    /// Returns a builder for pre-wiring subscribers.
    pub fn builder(cfg: Config) -> AsyncDispatcherBuilder {
        AsyncDispatcherBuilder::new(cfg)
    }

    pub(crate) fn from_parts(cfg: Config, registry: Registry<dyn Subscribe>) -> Self {
        Self {
            cfg,
            registry: RwLock::new(registry),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Name of the wildcard group.
    pub fn wildcard(&self) -> &str {
        self.cfg.wildcard_name()
    }

    /// Subscribes `sub` to every event (wildcard group).
    pub async fn attach(&self, sub: SubscriberRef) {
        self.attach_to(sub, self.wildcard()).await;
    }

    /// Subscribes `sub` to events named `group`, after any existing members.
    pub async fn attach_to(&self, sub: SubscriberRef, group: &str) {
        tracing::trace!(group, subscriber = sub.name(), "attach");
        self.registry.write().await.attach(sub, group);
    }

    /// Removes `sub` from the wildcard group.
    pub async fn detach<T: ?Sized>(&self, sub: &Arc<T>) -> usize {
        self.detach_from(sub, self.wildcard()).await
    }

    /// Removes every occurrence of `sub` from `group`; returns the number removed.
    pub async fn detach_from<T: ?Sized>(&self, sub: &Arc<T>, group: &str) -> usize {
        let removed = self.registry.write().await.detach(sub, group);
        tracing::trace!(group, removed, "detach");
        removed
    }

    /// Notifies subscribers of `name` and then wildcard subscribers.
    pub async fn notify(&self, name: &str) -> Result<Delivery, DispatchError> {
        self.publish(Notification::new(name)).await
    }

    /// Like [`notify`](Self::notify), attaching `payload` to the notification.
    pub async fn notify_with<T: Any + Send + Sync>(
        &self,
        name: &str,
        payload: T,
    ) -> Result<Delivery, DispatchError> {
        self.publish(Notification::new(name).with_payload(payload))
            .await
    }

    /// Delivers a prepared notification, awaiting each handler in order.
    ///
    /// # Errors
    /// Returns [`DispatchError::Aborted`] only under
    /// [`FailurePolicy::Abort`](crate::FailurePolicy::Abort).
    pub async fn publish(&self, notification: Notification) -> Result<Delivery, DispatchError> {
        let recipients = self.registry.read().await.delivery(notification.name());
        tracing::debug!(
            event = notification.name(),
            seq = notification.seq,
            recipients = recipients.len(),
            "dispatching"
        );

        let mut delivery = Delivery::new(Arc::clone(notification.name_arc()));
        for (position, sub) in recipients.iter().enumerate() {
            delivery.delivered += 1;
            let Err(error) = self.invoke(sub.as_ref(), &notification).await else {
                continue;
            };

            tracing::warn!(
                event = notification.name(),
                subscriber = sub.name(),
                position,
                label = error.as_label(),
                "{}",
                error.as_message()
            );
            if self.cfg.on_failure.stops_on_failure() {
                return Err(DispatchError::Aborted {
                    event: Arc::clone(notification.name_arc()),
                    subscriber: sub.name().to_string(),
                    position,
                    source: error,
                });
            }
            delivery.failures.push(Failure {
                subscriber: sub.name().to_string(),
                position,
                error,
            });
        }
        Ok(delivery)
    }

    async fn invoke(
        &self,
        sub: &dyn Subscribe,
        notification: &Notification,
    ) -> Result<(), HookError> {
        let fut = sub.on_event(self, notification);
        if !self.cfg.catch_panics {
            return fut.await;
        }
        match AssertUnwindSafe(fut).catch_unwind().await {
            Ok(outcome) => outcome,
            Err(payload) => Err(HookError::Panicked {
                info: panic_message(&*payload),
            }),
        }
    }

    /// Number of entries in `group` (duplicates included).
    pub async fn len(&self, group: &str) -> usize {
        self.registry.read().await.len(group)
    }

    /// True if no group has any subscriber.
    pub async fn is_empty(&self) -> bool {
        self.registry.read().await.is_empty()
    }

    /// True if `sub` is attached to `group`.
    pub async fn contains<T: ?Sized>(&self, sub: &Arc<T>, group: &str) -> bool {
        self.registry.read().await.contains(sub, group)
    }

    /// Known group names, sorted. Always includes the wildcard group.
    pub async fn groups(&self) -> Vec<String> {
        self.registry.read().await.groups()
    }

    /// Snapshot of the members of `group` in insertion order.
    pub async fn subscribers(&self, group: &str) -> Vec<SubscriberRef> {
        self.registry.read().await.members(group).to_vec()
    }
}

impl Default for AsyncDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
