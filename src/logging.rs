//! Logging initialisation
//!
//! Built on `tracing-subscriber` with per-phase filtering: the lexer target
//! can run at a different level from everything else.

use std::io;

use gfn_config::{LogConfig, LogFormat, LogLevel, LEXER_TARGET};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to install logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

/// Build the target filter for a log configuration
pub fn targets(config: &LogConfig) -> Targets {
    Targets::new()
        .with_default(level_filter(config.global))
        .with_target(LEXER_TARGET, level_filter(config.level_for(LEXER_TARGET)))
}

/// Install the global subscriber, writing to stderr
///
/// Fails if a global subscriber is already installed.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let layer = create_format_layer(config.format, io::stderr).with_filter(targets(config));
    tracing_subscriber::registry().with(layer).try_init()?;
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> impl Layer<Registry>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_writer(make_writer)
            .boxed(),
    }
}
