//! # Closure-backed async subscriber (`SubscriberFn`)
//!
//! [`SubscriberFn`] wraps a closure that receives the delivering
//! [`AsyncDispatcher`] and an owned clone of the notification (cheap: name and
//! payload are `Arc`-backed), and returns a boxed future per delivery.
//! The future may borrow the dispatcher, e.g. to attach, detach or notify
//! from inside the handler.
//!
//! ## Example
//! ```rust
//! use futures::FutureExt;
//! use grouphook::{HookError, Notification, SubscriberFn, SubscriberRef};
//!
//! let s: SubscriberRef = SubscriberFn::arc("mailer", |_d, n: Notification| {
//!     async move {
//!         let _ = n.name(); // send mail...
//!         Ok::<_, HookError>(())
//!     }
//!     .boxed()
//! });
//!
//! assert_eq!(s.name(), "mailer");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;

use crate::core::AsyncDispatcher;
use crate::error::HookError;
use crate::events::Notification;
use crate::subscribers::Subscribe;

/// Function-backed async subscriber.
pub struct SubscriberFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscriberFn<F>
where
    F: for<'a> Fn(&'a AsyncDispatcher, Notification) -> BoxFuture<'a, Result<(), HookError>>
        + Send
        + Sync
        + 'static,
{
    /// Creates a new function-backed subscriber.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for SubscriberFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberFn").field("name", &self.name).finish()
    }
}

#[async_trait]
impl<F> Subscribe for SubscriberFn<F>
where
    F: for<'a> Fn(&'a AsyncDispatcher, Notification) -> BoxFuture<'a, Result<(), HookError>>
        + Send
        + Sync
        + 'static, // Fn, not FnMut
{
    async fn on_event(
        &self,
        dispatcher: &AsyncDispatcher,
        notification: &Notification,
    ) -> Result<(), HookError> {
        (self.f)(dispatcher, notification.clone()).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
