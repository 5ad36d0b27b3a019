//! # Example: user_hooks
//!
//! A `User` entity embeds a [`Dispatcher`] and announces its lifecycle as
//! `User:created`, `User:updated` and `User:deleted`.
//!
//! Shows how to:
//! - Implement the [`Observe`] trait for named handler types.
//! - Subscribe to every event (wildcard) or to a single event name.
//! - Rely on the delivery order: named group first, wildcard second.
//!
//! ## Flow
//! ```text
//! user.create() ──► notify("User:created")
//!     ├─► Welcomer.update()      (group "User:created")
//!     └─► Logger1.update()       (group "all")
//! user.update() ──► notify("User:updated")
//!     └─► Logger1.update()
//! user.delete() ──► notify("User:deleted")
//!     ├─► Logger2.update()       (group "User:deleted")
//!     └─► Logger1.update()
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example user_hooks
//! ```
//!
//! ## Output
//! ```text
//! Welcomer: sending email.
//! Logger1: User:created.
//! Logger1: User:updated.
//! Logger2: User:deleted.
//! Logger1: User:deleted.
//! ```

use std::sync::Arc;

use grouphook::{DispatchError, Dispatcher, HookError, Notification, Observe};

/// Domain object that is also the subject of its own events.
struct User {
    hooks: Dispatcher,
}

impl User {
    fn new() -> Self {
        Self {
            hooks: Dispatcher::new(),
        }
    }

    fn create(&self) -> Result<(), DispatchError> {
        // user creation...
        self.hooks.notify("User:created").map(|_| ())
    }

    fn update(&self) -> Result<(), DispatchError> {
        self.hooks.notify("User:updated").map(|_| ())
    }

    fn delete(&self) -> Result<(), DispatchError> {
        self.hooks.notify("User:deleted").map(|_| ())
    }
}

struct Logger1;

impl Observe for Logger1 {
    fn update(&self, _d: &Dispatcher, n: &Notification) -> Result<(), HookError> {
        println!("Logger1: {}.", n.name());
        Ok(())
    }

    fn name(&self) -> &str {
        "Logger1"
    }
}

struct Logger2;

impl Observe for Logger2 {
    fn update(&self, _d: &Dispatcher, n: &Notification) -> Result<(), HookError> {
        println!("Logger2: {}.", n.name());
        Ok(())
    }

    fn name(&self) -> &str {
        "Logger2"
    }
}

struct Welcomer;

impl Observe for Welcomer {
    fn update(&self, _d: &Dispatcher, _n: &Notification) -> Result<(), HookError> {
        println!("Welcomer: sending email.");
        Ok(())
    }

    fn name(&self) -> &str {
        "Welcomer"
    }
}

fn main() -> Result<(), DispatchError> {
    let user = User::new();

    // logger 1 hears every user event
    user.hooks.attach(Arc::new(Logger1));
    // logger 2 only hears deletions
    user.hooks.attach_to(Arc::new(Logger2), "User:deleted");
    // the welcomer only hears creations
    user.hooks.attach_to(Arc::new(Welcomer), "User:created");

    user.create()?;
    user.update()?;
    user.delete()?;
    Ok(())
}
