//! `tracing` subscriber setup for the demo binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DemoConfig;

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` wins over [`DemoConfig::log_filter`] when set. Logs go to
/// stderr so stdout carries only the script output.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init(config: &DemoConfig) {
    tracing_subscriber::registry()
        .with(filter_for(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn filter_for(config: &DemoConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
}
