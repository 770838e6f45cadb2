use crate::config::ObservabilityConfig;
use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber
///
/// Log lines go to stderr so they never mix with the progress output on
/// stdout. `RUST_LOG` wins over the configured level when set.
pub fn init_telemetry(observability: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&observability.log_level))?;
    let registry = tracing_subscriber::registry().with(filter);

    if observability.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    tracing::debug!("modest-bundle telemetry initialized");
    Ok(())
}

/// Create a span carrying the entry and output of one bundle build
pub fn create_build_span(entry: &str, output: &str, dry_run: bool) -> tracing::Span {
    tracing::info_span!(
        "bundle_build",
        entry = entry,
        output = output,
        dry_run = dry_run
    )
}
