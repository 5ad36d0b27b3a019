//! # Dispatcher configuration.
//!
//! Provides [`Config`] centralized settings shared by
//! [`Dispatcher`](crate::Dispatcher) and [`AsyncDispatcher`](crate::AsyncDispatcher).
//!
//! ## Sentinel values
//! - `wildcard = ""` → treated as [`WILDCARD`] (`"all"`)

use std::borrow::Cow;

use crate::policies::FailurePolicy;

/// Conventional name of the wildcard group.
pub const WILDCARD: &str = "all";

/// Configuration for a dispatcher.
///
/// ## Field semantics
/// - `wildcard`: group whose subscribers receive every notification
/// - `on_failure`: what `notify` does after a handler returned an error
/// - `catch_panics`: convert handler panics into
///   [`HookError::Panicked`](crate::HookError::Panicked)
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the wildcard group.
    ///
    /// Subscribers attached under this name are notified for every event,
    /// after the subscribers of the event's own group.
    pub wildcard: Cow<'static, str>,

    /// Delivery behaviour after a handler failure.
    pub on_failure: FailurePolicy,

    /// Catch panics raised by handlers.
    ///
    /// - `true` → the panic becomes a `HookError::Panicked` and is handled by `on_failure`
    /// - `false` → the panic unwinds through `notify` to the caller
    pub catch_panics: bool,
}

impl Config {
    /// Returns the wildcard group name, falling back to [`WILDCARD`] when empty.
    #[inline]
    pub fn wildcard_name(&self) -> &str {
        if self.wildcard.is_empty() {
            WILDCARD
        } else {
            &self.wildcard
        }
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `wildcard = "all"`
    /// - `on_failure = FailurePolicy::Continue`
    /// - `catch_panics = true`
    fn default() -> Self {
        Self {
            wildcard: Cow::Borrowed(WILDCARD),
            on_failure: FailurePolicy::default(),
            catch_panics: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_wildcard_falls_back() {
        let cfg = Config {
            wildcard: Cow::Borrowed(""),
            ..Config::default()
        };
        assert_eq!(cfg.wildcard_name(), "all");
    }

    #[test]
    fn test_custom_wildcard() {
        let cfg = Config {
            wildcard: "*".into(),
            ..Config::default()
        };
        assert_eq!(cfg.wildcard_name(), "*");
    }
}
