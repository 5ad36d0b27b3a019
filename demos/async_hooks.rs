//! # Example: async_hooks
//!
//! The same grouped dispatch with async handlers, traced by [`LogWriter`].
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example async_hooks
//! ```

use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use grouphook::{
    AsyncDispatcher, Config, FailurePolicy, HookError, LogWriter, Notification, SubscriberFn,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cfg = Config {
        on_failure: FailurePolicy::Continue,
        ..Config::default()
    };
    let user = AsyncDispatcher::with_config(cfg);

    user.attach(Arc::new(LogWriter::new())).await;
    user.attach_to(
        SubscriberFn::arc("mailer", |_d, n: Notification| {
            async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                println!("mailer: welcome mail for event {}", n.name());
                Ok::<_, HookError>(())
            }
            .boxed()
        }),
        "User:created",
    )
    .await;
    user.attach_to(
        SubscriberFn::arc("archiver", |_d, _n: Notification| {
            async { Err::<(), _>(HookError::fail("archive offline")) }.boxed()
        }),
        "User:deleted",
    )
    .await;

    for event in ["User:created", "User:updated", "User:deleted"] {
        let delivery = user.notify(event).await?;
        println!(
            "{event}: delivered={} failures={}",
            delivery.delivered,
            delivery.failures.len()
        );
    }
    Ok(())
}
