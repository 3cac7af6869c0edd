//! Logging bootstrap.
//!
//! The library itself only emits `tracing` events (targets `flex_ui::button`,
//! `flex_ui::radio`, `flex_ui::switch`, `flex_ui::config` and
//! `flex_ui::theme`). Applications without a subscriber of their own can call
//! [`init`] to print them.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

pub use tracing;

static TRACING_INSTALLED: Once = Once::new();

/// Installs a console subscriber filtered by `RUST_LOG` (default `info`).
///
/// Idempotent. If another global subscriber is already set, it is kept.
pub fn init() {
    TRACING_INSTALLED.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let result = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_filter(filter))
            .try_init();

        if result.is_err() {
            eprintln!("flex-ui: a global tracing subscriber is already installed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::info!(target: "flex_ui::theme", "still logging");
    }
}
