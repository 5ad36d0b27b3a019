//! Delivery policies.
//!
//! This module groups the knobs that control **what happens when a handler
//! fails** while a notification is being delivered.
//!
//! ## Contents
//! - [`FailurePolicy`] keep delivering (default) or stop at the first failure
//!
//! ## Quick wiring
//! ```text
//! Config { on_failure: FailurePolicy, catch_panics: bool, .. }
//!      └─► Dispatcher::notify / AsyncDispatcher::notify use:
//!           - catch_panics to turn a handler panic into HookError::Panicked
//!           - on_failure to decide continue/abort after a HookError
//! ```

mod failure;

pub use failure::FailurePolicy;
