//! Builders that pre-wire subscribers before a dispatcher is shared.

use crate::core::async_dispatcher::AsyncDispatcher;
use crate::core::config::Config;
use crate::core::dispatcher::Dispatcher;
use crate::core::registry::Registry;
use crate::subscribers::{ObserverRef, SubscriberRef};

/// Builder for constructing a [`Dispatcher`] with initial subscriptions.
///
/// Groups are attached in the order the `with_*` calls were made.
pub struct DispatcherBuilder {
    cfg: Config,
    subscriptions: Vec<(Option<String>, Vec<ObserverRef>)>,
}

impl DispatcherBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscriptions: Vec::new(),
        }
    }

    /// Subscribes `subscribers` to events named `group`.
    pub fn with_subscribers(
        mut self,
        group: impl Into<String>,
        subscribers: Vec<ObserverRef>,
    ) -> Self {
        self.subscriptions.push((Some(group.into()), subscribers));
        self
    }

    /// Subscribes `subscribers` to every event.
    pub fn with_wildcard_subscribers(mut self, subscribers: Vec<ObserverRef>) -> Self {
        self.subscriptions.push((None, subscribers));
        self
    }

    /// Builds the dispatcher.
    pub fn build(self) -> Dispatcher {
        let registry = fill(&self.cfg, self.subscriptions);
        Dispatcher::from_parts(self.cfg, registry)
    }
}

/// Builder for constructing an [`AsyncDispatcher`] with initial subscriptions.
pub struct AsyncDispatcherBuilder {
    cfg: Config,
    subscriptions: Vec<(Option<String>, Vec<SubscriberRef>)>,
}

impl AsyncDispatcherBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscriptions: Vec::new(),
        }
    }

    /// Subscribes `subscribers` to events named `group`.
    pub fn with_subscribers(
        mut self,
        group: impl Into<String>,
        subscribers: Vec<SubscriberRef>,
    ) -> Self {
        self.subscriptions.push((Some(group.into()), subscribers));
        self
    }

    /// Subscribes `subscribers` to every event.
    pub fn with_wildcard_subscribers(mut self, subscribers: Vec<SubscriberRef>) -> Self {
        self.subscriptions.push((None, subscribers));
        self
    }

    /// Builds the dispatcher.
    pub fn build(self) -> AsyncDispatcher {
        let registry = fill(&self.cfg, self.subscriptions);
        AsyncDispatcher::from_parts(self.cfg, registry)
    }
}

fn fill<S: ?Sized>(
    cfg: &Config,
    subscriptions: Vec<(Option<String>, Vec<std::sync::Arc<S>>)>,
) -> Registry<S> {
    let mut registry = Registry::new(cfg.wildcard_name());
    for (group, subs) in subscriptions {
        let group = group.as_deref().unwrap_or(cfg.wildcard_name());
        for sub in subs {
            registry.attach(sub, group);
        }
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HookError;
    use crate::events::Notification;
    use crate::subscribers::ObserverFn;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_builder_wires_groups_in_order() {
        let log = Arc::new(Mutex::new(Vec::<String>::new()));
        let hook = |label: &'static str| -> ObserverRef {
            let log = Arc::clone(&log);
            ObserverFn::arc(label, move |_d: &Dispatcher, n: &Notification| {
                log.lock().unwrap().push(format!("{label}:{}", n.name()));
                Ok::<(), HookError>(())
            })
        };

        let d = Dispatcher::builder(Config::default())
            .with_wildcard_subscribers(vec![hook("function1")])
            .with_subscribers("User:created", vec![hook("function2")])
            .build();

        d.notify("User:created").unwrap();
        d.notify("User:updated").unwrap();
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "function2:User:created",
                "function1:User:created",
                "function1:User:updated",
            ]
        );
    }
}
