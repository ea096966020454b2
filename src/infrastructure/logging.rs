//! Tracing subscriber setup for the server and the one-shot CLI

use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    registry::Registry,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter, Layer,
};

use crate::config::{LogFormat, LoggingConfig};

type FormatLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Log to stdout. `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    install(config, std::io::stdout)?;

    tracing::info!(level = %config.level, format = ?config.format, "Logging initialized");
    Ok(())
}

/// Log to stderr, keeping stdout free for command output
pub fn init_stderr_logging(config: &LoggingConfig) -> Result<(), TryInitError> {
    install(config, std::io::stderr)
}

fn install<W>(config: &LoggingConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(format_layer(&config.format, writer))
        .with(level_filter(&config.level))
        .try_init()
}

fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn format_layer<W>(format: &LogFormat, writer: W) -> FormatLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(writer)
            .boxed(),
    }
}
