//! # Closure-backed observer (`ObserverFn`)
//!
//! [`ObserverFn`] wraps a closure `F: Fn(&Dispatcher, &Notification) -> Result<(), HookError>`
//! so that hooks can be registered without declaring a type per handler.
//!
//! ## Example
//! ```rust
//! use grouphook::{Dispatcher, Notification, ObserverFn, ObserverRef};
//!
//! let hook: ObserverRef = ObserverFn::arc("function1", |_d: &Dispatcher, n: &Notification| {
//!     println!("{}: function1", n.name());
//!     Ok(())
//! });
//!
//! assert_eq!(hook.name(), "function1");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::core::Dispatcher;
use crate::error::HookError;
use crate::events::Notification;
use crate::subscribers::Observe;

/// Function-backed synchronous subscriber.
pub struct ObserverFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ObserverFn<F>
where
    F: Fn(&Dispatcher, &Notification) -> Result<(), HookError> + Send + Sync + 'static,
{
    /// Creates a new function-backed observer.
    ///
    /// Prefer [`ObserverFn::arc`] when you immediately need an [`ObserverRef`](crate::ObserverRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the observer and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> fmt::Debug for ObserverFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverFn").field("name", &self.name).finish()
    }
}

impl<F> Observe for ObserverFn<F>
where
    F: Fn(&Dispatcher, &Notification) -> Result<(), HookError> + Send + Sync + 'static,
{
    fn update(
        &self,
        dispatcher: &Dispatcher,
        notification: &Notification,
    ) -> Result<(), HookError> {
        (self.f)(dispatcher, notification)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
