//! # grouphook
//!
//! **grouphook** is a small grouped event dispatcher (observer pattern with
//! named hooks) for Rust.
//!
//! Subscribers attach either to one named group ("only `User:deleted`") or
//! to the wildcard group (`"all"`), whose members receive every event.
//! Producers call `notify(name)`; the dispatcher delivers the notification
//! to the named group first and to the wildcard group second, each in
//! insertion order.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   Logger1    │   │   Logger2    │   │   Welcomer   │
//!     │  (all)       │   │ (deleted)    │   │ (created)    │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼ attach           ▼ attach_to        ▼ attach_to
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Dispatcher                                                       │
//! │  - Config (wildcard name, FailurePolicy, catch_panics)            │
//! │  - Registry: "all"     → [Logger1]                                │
//! │              "deleted" → [Logger2]                                │
//! │              "created" → [Welcomer]                               │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   │ notify("deleted")
//!                                   ▼
//!               snapshot = ["deleted"] ++ ["all"] = [Logger2, Logger1]
//!                                   │
//!                      ┌────────────┴────────────┐
//!                      ▼                         ▼
//!              Logger2.update()  ──then──►  Logger1.update()
//!                                   │
//!                                   ▼
//!                     Delivery { delivered: 2, failures: [] }
//! ```
//!
//! ## Features
//! | Area              | Description                                                  | Key types / traits                         |
//! |-------------------|--------------------------------------------------------------|--------------------------------------------|
//! | **Dispatch**      | Grouped delivery, named group first then wildcard.           | [`Dispatcher`], [`AsyncDispatcher`]        |
//! | **Subscribers**   | Handler traits and closure adapters.                         | [`Observe`], [`Subscribe`], [`ObserverFn`] |
//! | **Notifications** | Event name, typed payload, ordering metadata.                | [`Notification`], [`Delivery`]             |
//! | **Policies**      | Continue or abort after a failing handler.                   | [`FailurePolicy`]                          |
//! | **Errors**        | Typed errors for handlers and dispatch.                      | [`HookError`], [`DispatchError`]           |
//! | **Configuration** | Wildcard name, failure policy, panic isolation.              | [`Config`]                                 |
//!
//! ## Optional features
//! - `logging` (default): exports [`LogWriter`], a subscriber that traces every notification.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use grouphook::{Dispatcher, Notification, ObserverFn, ObserverRef};
//!
//! let out = Arc::new(Mutex::new(Vec::new()));
//! let logger = |label: &'static str| -> ObserverRef {
//!     let out = Arc::clone(&out);
//!     ObserverFn::arc(label, move |_d: &Dispatcher, n: &Notification| {
//!         out.lock().unwrap().push(format!("{label}: {}", n.name()));
//!         Ok(())
//!     })
//! };
//!
//! let user = Dispatcher::new();
//! user.attach(logger("Logger1"));
//! user.attach_to(logger("Logger2"), "User:deleted");
//!
//! user.notify("User:updated").unwrap();
//! user.notify("User:deleted").unwrap();
//!
//! assert_eq!(
//!     *out.lock().unwrap(),
//!     vec!["Logger1: User:updated", "Logger2: User:deleted", "Logger1: User:deleted"]
//! );
//! ```
mod core;
mod error;
mod events;
mod policies;
mod subscribers;

// ---- Public re-exports ----

pub use crate::core::{
    AsyncDispatcher, AsyncDispatcherBuilder, Config, Dispatcher, DispatcherBuilder, Registry,
    WILDCARD,
};
pub use error::{DispatchError, HookError};
pub use events::{Delivery, Failure, Notification, Payload};
pub use policies::FailurePolicy;
pub use subscribers::{Observe, ObserverFn, ObserverRef, Subscribe, SubscriberFn, SubscriberRef};

// Optional: expose a built-in tracing subscriber.
// Enable with: `--features logging` (on by default)
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
