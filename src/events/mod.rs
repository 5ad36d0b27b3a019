//! Notifications and delivery reports.
//!
//! This module groups the **data model** that flows through a dispatcher:
//! what a subscriber receives and what `notify` returns.
//!
//! ## Contents
//! - [`Notification`] event name, optional payload and ordering metadata
//! - [`Payload`] type-erased, shareable payload handle
//! - [`Delivery`], [`Failure`] outcome of one `notify` call
//!
//! ## Quick reference
//! - **Producers**: `Dispatcher::notify*`, `AsyncDispatcher::notify*`, or any
//!   code that builds a [`Notification`] and calls `publish`.
//! - **Consumers**: [`Observe`](crate::Observe) and
//!   [`Subscribe`](crate::Subscribe) implementations.

mod delivery;
mod notification;

pub use delivery::{Delivery, Failure};
pub use notification::{Notification, Payload};
