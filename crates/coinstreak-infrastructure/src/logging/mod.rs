//! Logging setup.
//!
//! Two sinks are installed:
//! - one-line JSON records in a daily rolling file
//! - human-readable colored records on stderr (debug builds only)
//!
//! Stdout is left alone because the binary writes its dashboard there.
//! `log` macros are bridged into `tracing`, so both end up in the same sinks.

mod format;

use log::LevelFilter;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

use format::{HumanReadableFormatter, JsonFormatter};

pub const LOG_FILE_PREFIX: &str = "coinstreak.log";

static LOGGER_READY: OnceLock<()> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. `directive` is an `EnvFilter` string used
/// when `RUST_LOG` is not set. Calling this twice is a no-op.
pub fn init_logger(log_dir: PathBuf, directive: &str) -> anyhow::Result<()> {
    if LOGGER_READY.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&log_dir)?;

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(JsonFormatter::new(env!("CARGO_PKG_VERSION")))
        .with_filter(build_filter(directive));

    let stderr_layer = if cfg!(debug_assertions) {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(HumanReadableFormatter::new())
                .with_filter(build_filter(directive)),
        )
    } else {
        None
    };

    let subscriber = Registry::default().with(json_layer).with(stderr_layer);

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOGGER_READY.set(());

    tracing::info!(
        target: "coinstreak::logging",
        log_dir = %log_dir.display(),
        filter = directive,
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "Debug" } else { "Release" },
        "Logger initialized"
    );

    Ok(())
}

fn default_directive() -> &'static str {
    if cfg!(debug_assertions) {
        "debug,coinstreak=trace"
    } else {
        "info"
    }
}

/// `RUST_LOG` wins over `directive`; a bad directive falls back to the
/// build-profile default.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(default_directive()))
}
