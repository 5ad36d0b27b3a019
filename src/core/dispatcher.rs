//! # Dispatcher - synchronous grouped event dispatch.
//!
//! [`Dispatcher`] owns the group table and delivers notifications to
//! [`Observe`] implementations in-line.
//!
//! ## Delivery
//! ```text
//! notify("User:deleted")
//!   ├─► snapshot = groups["User:deleted"] ++ groups["all"]   (lock released)
//!   └─► for sub in snapshot (in order):
//!         sub.update(&dispatcher, &notification)
//!           ├─ Ok  ──► next
//!           └─ Err ──► FailurePolicy::Continue ─► record Failure, next
//!                      FailurePolicy::Abort    ─► return Err(DispatchError::Aborted)
//! ```
//!
//! ## Rules
//! - `notify` returns only after every handler in the snapshot has returned.
//! - The snapshot is taken before the first handler runs: attach/detach
//!   performed by a handler apply from the next `notify`.
//! - Handlers may call `notify` again (nested delivery runs to completion
//!   before the outer one continues).

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::builder::DispatcherBuilder;
use crate::core::config::Config;
use crate::core::panic::panic_message;
use crate::core::registry::Registry;
use crate::error::{DispatchError, HookError};
use crate::events::{Delivery, Failure, Notification};
use crate::subscribers::{Observe, ObserverRef};

/// Synchronous grouped event dispatcher (the "subject").
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
/// use grouphook::{Dispatcher, Notification, ObserverFn};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let log = Arc::clone(&seen);
///
/// let dispatcher = Dispatcher::new();
/// dispatcher.attach_to(
///     ObserverFn::arc("welcomer", move |_d: &Dispatcher, n: &Notification| {
///         log.lock().unwrap().push(n.name().to_string());
///         Ok(())
///     }),
///     "User:created",
/// );
///
/// dispatcher.notify("User:created").unwrap();
/// dispatcher.notify("User:updated").unwrap();
/// assert_eq!(*seen.lock().unwrap(), vec!["User:created"]);
/// ```
pub struct Dispatcher {
    cfg: Config,
    registry: RwLock<Registry<dyn Observe>>,
}

impl Dispatcher {
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
    pub fn builder(cfg: Config) -> DispatcherBuilder {
        DispatcherBuilder::new(cfg)
    }

    pub(crate) fn from_parts(cfg: Config, registry: Registry<dyn Observe>) -> Self {
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

    fn read(&self) -> RwLockReadGuard<'_, Registry<dyn Observe>> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry<dyn Observe>> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribes `sub` to every event (wildcard group).
    pub fn attach(&self, sub: ObserverRef) {
        self.attach_to(sub, self.wildcard());
    }

    /// Subscribes `sub` to events named `group`, after any existing members.
    ///
    /// Attaching the same handle twice makes it receive each event twice.
    pub fn attach_to(&self, sub: ObserverRef, group: &str) {
        tracing::trace!(group, subscriber = sub.name(), "attach");
        self.write().attach(sub, group);
    }

    /// Removes `sub` from the wildcard group. See [`detach_from`](Self::detach_from).
    pub fn detach<T: ?Sized>(&self, sub: &Arc<T>) -> usize {
        self.detach_from(sub, self.wildcard())
    }

    /// Removes every occurrence of `sub` from `group`.
    ///
    /// Membership in other groups is untouched. Returns how many entries were
    /// removed; detaching an absent subscriber is a no-op returning 0.
    pub fn detach_from<T: ?Sized>(&self, sub: &Arc<T>, group: &str) -> usize {
        let removed = self.write().detach(sub, group);
        tracing::trace!(group, removed, "detach");
        removed
    }

    /// Notifies subscribers of `name` and then wildcard subscribers.
    pub fn notify(&self, name: &str) -> Result<Delivery, DispatchError> {
        self.publish(Notification::new(name))
    }

    /// Like [`notify`](Self::notify), attaching `payload` to the notification.
    pub fn notify_with<T: Any + Send + Sync>(
        &self,
        name: &str,
        payload: T,
    ) -> Result<Delivery, DispatchError> {
        self.publish(Notification::new(name).with_payload(payload))
    }

    /// Delivers a prepared notification.
    ///
    /// # Errors
    /// Returns [`DispatchError::Aborted`] only under
    /// [`FailurePolicy::Abort`](crate::FailurePolicy::Abort); otherwise
    /// handler failures are listed in [`Delivery::failures`].
    pub fn publish(&self, notification: Notification) -> Result<Delivery, DispatchError> {
        let recipients = self.read().delivery(notification.name());
        tracing::debug!(
            event = notification.name(),
            seq = notification.seq,
            recipients = recipients.len(),
            "dispatching"
        );

        let mut delivery = Delivery::new(Arc::clone(notification.name_arc()));
        for (position, sub) in recipients.iter().enumerate() {
            delivery.delivered += 1;
            let Err(error) = self.invoke(sub.as_ref(), &notification) else {
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

    fn invoke(&self, sub: &dyn Observe, notification: &Notification) -> Result<(), HookError> {
        if !self.cfg.catch_panics {
            return sub.update(self, notification);
        }
        match panic::catch_unwind(AssertUnwindSafe(|| sub.update(self, notification))) {
            Ok(outcome) => outcome,
            Err(payload) => Err(HookError::Panicked {
                info: panic_message(&*payload),
            }),
        }
    }

    /// Number of entries in `group` (duplicates included).
    pub fn len(&self, group: &str) -> usize {
        self.read().len(group)
    }

    /// True if no group has any subscriber.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// True if `sub` is attached to `group`.
    pub fn contains<T: ?Sized>(&self, sub: &Arc<T>, group: &str) -> bool {
        self.read().contains(sub, group)
    }

    /// Known group names, sorted. Always includes the wildcard group.
    pub fn groups(&self) -> Vec<String> {
        self.read().groups()
    }

    /// Snapshot of the members of `group` in insertion order.
    pub fn subscribers(&self, group: &str) -> Vec<ObserverRef> {
        self.read().members(group).to_vec()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::FailurePolicy;
    use crate::subscribers::ObserverFn;
    use std::sync::Mutex;

    type Log = Arc<Mutex<Vec<String>>>;

    struct Recorder {
        label: &'static str,
        log: Log,
    }

    impl Observe for Recorder {
        fn update(&self, _d: &Dispatcher, n: &Notification) -> Result<(), HookError> {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}({})", self.label, n.name()));
            Ok(())
        }

        fn name(&self) -> &str {
            self.label
        }
    }

    fn recorder(label: &'static str, log: &Log) -> Arc<Recorder> {
        Arc::new(Recorder {
            label,
            log: Arc::clone(log),
        })
    }

    fn failing(label: &'static str, log: &Log) -> ObserverRef {
        let log = Arc::clone(log);
        ObserverFn::arc(label, move |_d: &Dispatcher, n: &Notification| {
            log.lock().unwrap().push(format!("{label}({})", n.name()));
            Err(HookError::fail("boom"))
        })
    }

    fn taken(log: &Log) -> Vec<String> {
        std::mem::take(&mut *log.lock().unwrap())
    }

    #[test]
    fn test_named_group_in_attach_order() {
        let log = Log::default();
        let d = Dispatcher::new();
        for label in ["a", "b", "c", "d"] {
            d.attach_to(recorder(label, &log), "tick");
        }

        let delivery = d.notify("tick").unwrap();
        assert_eq!(delivery.delivered, 4);
        assert!(delivery.is_clean());
        assert_eq!(taken(&log), vec!["a(tick)", "b(tick)", "c(tick)", "d(tick)"]);
    }

    #[test]
    fn test_user_lifecycle_scenario() {
        let log = Log::default();
        let d = Dispatcher::new();
        d.attach(recorder("Logger1", &log));
        d.attach_to(recorder("Logger2", &log), "deleted");
        d.attach_to(recorder("Welcomer", &log), "created");

        d.notify("created").unwrap();
        d.notify("updated").unwrap();
        d.notify("deleted").unwrap();

        assert_eq!(
            taken(&log),
            vec![
                "Welcomer(created)",
                "Logger1(created)",
                "Logger1(updated)",
                "Logger2(deleted)",
                "Logger1(deleted)",
            ]
        );
    }

    #[test]
    fn test_named_before_wildcard_regardless_of_attach_order() {
        let log = Log::default();
        let d = Dispatcher::new();
        d.attach(recorder("w", &log));
        d.attach_to(recorder("n", &log), "evt");

        d.notify("evt").unwrap();
        assert_eq!(taken(&log), vec!["n(evt)", "w(evt)"]);
    }

    #[test]
    fn test_wildcard_sees_every_event() {
        let log = Log::default();
        let d = Dispatcher::new();
        d.attach(recorder("w", &log));

        for name in ["x", "y", "z"] {
            d.notify(name).unwrap();
        }
        assert_eq!(taken(&log), vec!["w(x)", "w(y)", "w(z)"]);
    }

    #[test]
    fn test_notify_wildcard_name_reaches_wildcard_twice() {
        let log = Log::default();
        let d = Dispatcher::new();
        d.attach(recorder("w1", &log));
        d.attach(recorder("w2", &log));

        let delivery = d.notify("all").unwrap();
        assert_eq!(delivery.delivered, 4);
        assert_eq!(taken(&log), vec!["w1(all)", "w2(all)", "w1(all)", "w2(all)"]);
    }

    #[test]
    fn test_notify_without_subscribers_is_noop() {
        let d = Dispatcher::new();
        let delivery = d.notify("nobody").unwrap();
        assert!(delivery.is_empty());
        assert!(delivery.is_clean());
        assert_eq!(&*delivery.event, "nobody");
    }

    #[test]
    fn test_detach_only_affects_one_group() {
        let log = Log::default();
        let d = Dispatcher::new();
        let s = recorder("s", &log);
        d.attach_to(s.clone(), "a");
        d.attach_to(s.clone(), "b");

        assert_eq!(d.detach_from(&s, "a"), 1);
        d.notify("a").unwrap();
        d.notify("b").unwrap();
        assert_eq!(taken(&log), vec!["s(b)"]);
        assert!(d.contains(&s, "b"));
        assert!(!d.contains(&s, "a"));
    }

    #[test]
    fn test_detach_wildcard_keeps_named_membership() {
        let log = Log::default();
        let d = Dispatcher::new();
        let s = recorder("s", &log);
        d.attach(s.clone());
        d.attach_to(s.clone(), "evt");

        assert_eq!(d.detach(&s), 1);
        d.notify("evt").unwrap();
        d.notify("other").unwrap();
        assert_eq!(taken(&log), vec!["s(evt)"]);
    }

    #[test]
    fn test_duplicates_are_delivered_and_detached_together() {
        let log = Log::default();
        let d = Dispatcher::new();
        let s = recorder("s", &log);
        d.attach_to(s.clone(), "evt");
        d.attach_to(s.clone(), "evt");

        assert_eq!(d.notify("evt").unwrap().delivered, 2);
        assert_eq!(taken(&log), vec!["s(evt)", "s(evt)"]);

        assert_eq!(d.detach_from(&s, "evt"), 2);
        assert_eq!(d.notify("evt").unwrap().delivered, 0);
    }

    #[test]
    fn test_detach_preserves_order_of_others() {
        let log = Log::default();
        let d = Dispatcher::new();
        let a = recorder("a", &log);
        let b = recorder("b", &log);
        let c = recorder("c", &log);
        d.attach_to(a.clone(), "g");
        d.attach_to(b.clone(), "g");
        d.attach_to(c.clone(), "g");

        d.detach_from(&b, "g");
        d.notify("g").unwrap();
        assert_eq!(taken(&log), vec!["a(g)", "c(g)"]);
    }

    #[test]
    fn test_detach_absent_is_noop() {
        let log = Log::default();
        let d = Dispatcher::new();
        let s = recorder("s", &log);
        assert_eq!(d.detach(&s), 0);
        assert_eq!(d.detach_from(&s, "never"), 0);
        assert_eq!(d.groups(), vec!["all".to_string()]);
    }

    #[test]
    fn test_unseen_groups_are_not_created() {
        let d = Dispatcher::new();
        d.notify("ghost").unwrap();
        assert_eq!(d.groups(), vec!["all".to_string()]);
        assert_eq!(d.len("ghost"), 0);
    }

    #[test]
    fn test_continue_policy_runs_remaining_handlers() {
        let log = Log::default();
        let d = Dispatcher::new();
        d.attach_to(recorder("first", &log), "evt");
        d.attach_to(failing("broken", &log), "evt");
        d.attach(recorder("last", &log));

        let delivery = d.notify("evt").unwrap();
        assert_eq!(delivery.delivered, 3);
        assert_eq!(
            delivery.failures,
            vec![Failure {
                subscriber: "broken".into(),
                position: 1,
                error: HookError::fail("boom"),
            }]
        );
        assert_eq!(taken(&log), vec!["first(evt)", "broken(evt)", "last(evt)"]);
    }

    #[test]
    fn test_abort_policy_stops_at_first_failure() {
        let log = Log::default();
        let d = Dispatcher::with_config(Config {
            on_failure: FailurePolicy::Abort,
            ..Config::default()
        });
        d.attach_to(recorder("first", &log), "evt");
        d.attach_to(failing("broken", &log), "evt");
        d.attach(recorder("last", &log));

        let err = d.notify("evt").unwrap_err();
        match &err {
            DispatchError::Aborted {
                event,
                subscriber,
                position,
                source,
            } => {
                assert_eq!(&**event, "evt");
                assert_eq!(subscriber, "broken");
                assert_eq!(*position, 1);
                assert_eq!(source, &HookError::fail("boom"));
            }
        }
        assert_eq!(taken(&log), vec!["first(evt)", "broken(evt)"]);
    }

    #[test]
    fn test_panicking_handler_is_isolated() {
        let log = Log::default();
        let d = Dispatcher::new();
        d.attach_to(
            ObserverFn::arc("panicky", |_d: &Dispatcher, _n: &Notification| {
                panic!("handler exploded")
            }),
            "evt",
        );
        d.attach(recorder("after", &log));

        let delivery = d.notify("evt").unwrap();
        assert_eq!(delivery.failures.len(), 1);
        assert_eq!(
            delivery.failures[0].error,
            HookError::Panicked {
                info: "handler exploded".into()
            }
        );
        assert_eq!(taken(&log), vec!["after(evt)"]);
    }

    #[test]
    #[should_panic(expected = "handler exploded")]
    fn test_panics_propagate_when_not_caught() {
        let d = Dispatcher::with_config(Config {
            catch_panics: false,
            ..Config::default()
        });
        d.attach(ObserverFn::arc(
            "panicky",
            |_d: &Dispatcher, _n: &Notification| panic!("handler exploded"),
        ));
        let _ = d.notify("evt");
    }

    #[test]
    fn test_attach_during_notify_applies_to_next_notify() {
        let log = Log::default();
        let d = Dispatcher::new();
        let late = recorder("late", &log);
        let late_for_hook: ObserverRef = late.clone();
        d.attach(ObserverFn::arc(
            "registrar",
            move |d: &Dispatcher, _n: &Notification| {
                d.attach(Arc::clone(&late_for_hook));
                Ok(())
            },
        ));

        assert_eq!(d.notify("first").unwrap().delivered, 1);
        assert!(taken(&log).is_empty());

        d.notify("second").unwrap();
        assert_eq!(taken(&log), vec!["late(second)"]);
    }

    #[test]
    fn test_nested_notify_completes_before_outer_continues() {
        let log = Log::default();
        let d = Dispatcher::new();
        d.attach_to(
            ObserverFn::arc("cascade", |d: &Dispatcher, _n: &Notification| {
                d.notify("User:welcomed").map(|_| ()).map_err(|e| HookError::fail(e.as_message()))
            }),
            "User:created",
        );
        d.attach(recorder("log", &log));

        d.notify("User:created").unwrap();
        assert_eq!(
            taken(&log),
            vec!["log(User:welcomed)", "log(User:created)"]
        );
    }

    #[test]
    fn test_payload_reaches_every_recipient() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let d = Dispatcher::new();
        for group in ["reading", "all"] {
            let seen = Arc::clone(&seen);
            d.attach_to(
                ObserverFn::arc(group.to_string(), move |_d: &Dispatcher, n: &Notification| {
                    let (t, h) = n.payload::<(i32, i32)>().copied().unwrap_or_default();
                    seen.lock().unwrap().push(t + h);
                    Ok(())
                }),
                group,
            );
        }

        d.notify_with("reading", (32, 75)).unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![107, 107]);
    }

    #[test]
    fn test_custom_wildcard_name() {
        let log = Log::default();
        let d = Dispatcher::with_config(Config {
            wildcard: "*".into(),
            ..Config::default()
        });
        d.attach(recorder("star", &log));
        d.attach_to(recorder("literal-all", &log), "all");

        d.notify("evt").unwrap();
        assert_eq!(taken(&log), vec!["star(evt)"]);
        assert_eq!(d.groups(), vec!["*".to_string(), "all".to_string()]);
    }

    #[test]
    fn test_config_is_visible_to_handlers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let d = Dispatcher::with_config(Config {
            wildcard: "*".into(),
            on_failure: FailurePolicy::Abort,
            catch_panics: false,
        });
        assert_eq!(d.config().on_failure, FailurePolicy::Abort);
        assert!(!d.config().catch_panics);
        assert_eq!(d.config().wildcard_name(), "*");

        d.attach(ObserverFn::arc("inspector", move |d: &Dispatcher, _n: &Notification| {
            let cfg = d.config();
            sink.lock().unwrap().push((cfg.wildcard_name().to_string(), cfg.on_failure));
            Ok(())
        }));
        d.notify("evt").unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![("*".to_string(), FailurePolicy::Abort)]);
    }

    #[test]
    fn test_introspection() {
        let log = Log::default();
        let d = Dispatcher::new();
        assert!(d.is_empty());
        let s = recorder("s", &log);
        d.attach_to(s.clone(), "g");
        d.attach_to(s.clone(), "g");
        assert!(!d.is_empty());
        assert_eq!(d.len("g"), 2);
        assert_eq!(d.subscribers("g").len(), 2);
        assert_eq!(d.subscribers("g")[0].name(), "s");
    }
}
