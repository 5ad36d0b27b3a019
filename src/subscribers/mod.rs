//! # Subscribers: the receiving side of a dispatcher.
//!
//! This module provides the subscriber traits and the adapters that turn
//! plain closures into subscribers.
//!
//! ## Architecture
//! ```text
//! Dispatcher::notify("User:created")
//!     │
//!     ├──► group "User:created" ──► Observe::update(&Dispatcher, &Notification)
//!     │                                  │
//!     │                             ┌────┴─────┬──────────┬─────────┐
//!     │                             ▼          ▼          ▼         ▼
//!     │                         Welcomer   ObserverFn  LogWriter   ...
//!     │
//!     └──► group "all" (wildcard) ──► Observe::update(..)
//! ```
//!
//! ## Subscriber kinds
//! - [`Observe`] synchronous handler, used by [`Dispatcher`](crate::Dispatcher)
//! - [`Subscribe`] async handler, used by [`AsyncDispatcher`](crate::AsyncDispatcher)
//! - [`ObserverFn`], [`SubscriberFn`] closure-backed implementations
//!
//! ## Implementing a custom observer
//! ```
//! use grouphook::{Dispatcher, HookError, Notification, Observe};
//!
//! struct Welcomer;
//!
//! impl Observe for Welcomer {
//!     fn update(&self, _d: &Dispatcher, n: &Notification) -> Result<(), HookError> {
//!         if n.name() == "User:created" {
//!             // send the welcome mail
//!         }
//!         Ok(())
//!     }
//!
//!     fn name(&self) -> &str { "welcomer" }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod observe;
mod observer_fn;
mod subscribe;
mod subscriber_fn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use observe::{Observe, ObserverRef};
pub use observer_fn::ObserverFn;
pub use subscribe::{Subscribe, SubscriberRef};
pub use subscriber_fn::SubscriberFn;
