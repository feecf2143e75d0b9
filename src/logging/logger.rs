// file: src/logging/logger.rs
// version: 1.0.0
// guid: b0c1d2e3-f4a5-6789-0123-456789bcdefa

//! Logger initialization and configuration

use crate::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| {
            crate::error::RunnerError::config(format!("Failed to initialize logger: {}", e))
        })?;

    Ok(())
}

/// Initialize structured JSON logging (for scheduler-driven runs)
pub fn init_json_logger() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json())
        .try_init()
        .map_err(|e| {
            crate::error::RunnerError::config(format!("Failed to initialize JSON logger: {}", e))
        })?;

    Ok(())
}

/// Create an async scoped logger for pipeline steps
pub async fn with_async_operation_span<F, Fut, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("step", name = operation);
    async move { f().await }.instrument(span).await
}

use tracing::Instrument;
