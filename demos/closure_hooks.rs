//! # Example: closure_hooks
//!
//! Hook system built from closures instead of handler types.
//!
//! Shows how to:
//! - Wrap closures with [`ObserverFn`].
//! - Pre-wire hooks with [`Dispatcher::builder`].
//! - Pass a payload and read it back with [`Notification::payload`].
//!
//! ## Run
//! ```bash
//! cargo run --example closure_hooks
//! ```
//!
//! ## Output
//! ```text
//! User:created: function2 (ada)
//! User:created: function1
//! User:updated: function1
//! ```

use grouphook::{Config, Dispatcher, Notification, ObserverFn, ObserverRef};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let function1: ObserverRef = ObserverFn::arc("function1", |_d: &Dispatcher, n: &Notification| {
        println!("{}: function1", n.name());
        Ok(())
    });

    let function2: ObserverRef = ObserverFn::arc("function2", |_d: &Dispatcher, n: &Notification| {
        let who = n.payload::<String>().map(String::as_str).unwrap_or("?");
        println!("{}: function2 ({who})", n.name());
        Ok(())
    });

    let user = Dispatcher::builder(Config::default())
        .with_wildcard_subscribers(vec![function1])
        .with_subscribers("User:created", vec![function2])
        .build();

    user.notify_with("User:created", String::from("ada"))?;
    user.notify("User:updated")?;
    Ok(())
}
