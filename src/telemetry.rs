//! Tracing subscriber setup with format selection.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global tracing subscriber.
///
/// `log_level` is an `EnvFilter` directive such as `info` or
/// `trilium_blog=debug,tower_http=info`; an unparsable directive falls back
/// to `info`. `log_format` selects the output: `json` for one JSON object
/// per event, anything else for human-readable text.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true).flatten_event(true))
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init()
            .context("Failed to initialize tracing subscriber")?;
    }

    Ok(())
}

/// Reads the filter directive from `RUST_LOG`, or `default` when unset or empty.
pub fn env_log_level(default: &str) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|level| !level.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_second_init_fails() {
        assert!(init_tracing("not a [valid filter", "json").is_ok());
        assert!(init_tracing("info", "text").is_err());
    }

    #[test]
    #[serial]
    fn test_env_log_level_defaults_when_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("RUST_LOG");
        }
        assert_eq!(env_log_level("warn"), "warn");

        unsafe {
            env::set_var("RUST_LOG", "  ");
        }
        assert_eq!(env_log_level("warn"), "warn");

        unsafe {
            env::set_var("RUST_LOG", "trilium_blog=debug");
        }
        assert_eq!(env_log_level("warn"), "trilium_blog=debug");

        unsafe {
            env::remove_var("RUST_LOG");
        }
    }
}
