//! Structured logging initialization
//!
//! The library itself only emits `tracing` events; embedding programs
//! decide whether and how to subscribe. `init_tracing` is a convenience
//! for binaries and tests that want the standard setup: an `EnvFilter`
//! honoring the `SKEIN_LOG` environment variable, writing compact or
//! JSON lines to stderr.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging.
///
/// `log_level` falls back to `skein=warn` when unset; the `SKEIN_LOG`
/// environment variable overrides both. Returns an error if a global
/// subscriber is already installed.
pub fn init_tracing(
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = log_level.unwrap_or("warn");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("SKEIN_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("skein={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
