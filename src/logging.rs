//! Logging
//!
//! Structured logging via `tracing`. Logs go to stderr so they never mix
//! with command output on stdout. `RUST_LOG` wins over the configured level.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Build the filter for `config`, letting `RUST_LOG` override it.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(rust_log.as_deref(), &config.level)
}

fn build_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(config: &LoggingConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        let config = LoggingConfig::default();
        init(&config);
        init(&config);
        tracing::warn!("still alive");
    }

    #[test]
    fn test_bad_level_falls_back() {
        assert_eq!(build_filter(None, "not a [valid filter").to_string(), "warn");
        assert_eq!(
            build_filter(Some("not a [valid filter"), "not a [valid filter either").to_string(),
            "warn"
        );
    }

    #[test]
    fn test_rust_log_wins_over_config() {
        assert_eq!(build_filter(Some("debug"), "error").to_string(), "debug");
        assert_eq!(build_filter(None, "info").to_string(), "info");
        assert_eq!(build_filter(Some("not a [valid filter"), "info").to_string(), "info");
    }
}
