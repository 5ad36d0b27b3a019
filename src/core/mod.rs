//! Dispatcher core: group table and delivery.
//!
//! The public API from this module is [`Dispatcher`], [`AsyncDispatcher`],
//! their builders and [`Config`].
//!
//! Internal modules:
//! - [`registry`]: group name → ordered subscriber handles, shared by both dispatchers;
//! - [`dispatcher`]: synchronous delivery to [`Observe`](crate::Observe) handlers;
//! - [`async_dispatcher`]: sequential delivery to [`Subscribe`](crate::Subscribe) handlers;
//! - [`builder`]: pre-wiring subscriptions before the dispatcher is shared;
//! - [`config`]: wildcard name, failure policy, panic handling;
//! - [`panic`]: rendering caught panic payloads.

mod async_dispatcher;
mod builder;
mod config;
mod dispatcher;
mod panic;
mod registry;

pub use async_dispatcher::AsyncDispatcher;
pub use builder::{AsyncDispatcherBuilder, DispatcherBuilder};
pub use config::{Config, WILDCARD};
pub use dispatcher::Dispatcher;
pub use registry::Registry;
