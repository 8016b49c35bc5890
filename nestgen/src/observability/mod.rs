//! Observability (logging)
//!
//! Structured diagnostics go to stderr through `tracing`; user-facing output
//! stays on stdout so dry-run listings can be piped.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an explicit filter directive
pub const LOG_ENV: &str = "NESTGEN_LOG";

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Number of `-v` flags given on the command line
    pub verbosity: u8,

    /// Emit JSON lines instead of human-readable records
    pub json: bool,
}

impl ObservabilityConfig {
    /// Create new observability config
    #[must_use]
    pub const fn new(verbosity: u8) -> Self {
        Self {
            verbosity,
            json: false,
        }
    }

    /// Enable JSON formatting
    #[must_use]
    pub const fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Filter directive used when `NESTGEN_LOG` is unset
    #[must_use]
    pub const fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info,nestgen=info",
            2 => "info,nestgen=debug",
            _ => "debug,nestgen=trace",
        }
    }
}

/// Initialize the tracing subscriber
///
/// # Example
///
/// ```rust,no_run
/// use nestgen::observability::{self, ObservabilityConfig};
///
/// observability::init(&ObservabilityConfig::new(1));
/// tracing::info!("generator started");
/// ```
pub fn init(config: &ObservabilityConfig) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let registry = tracing_subscriber::registry().with(env_filter);

    // A subscriber may already be installed (tests, embedding); keep the first one.
    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .without_time()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if let Err(err) = result {
        tracing::debug!(%err, "tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert_eq!(config.verbosity, 0);
        assert!(!config.json);
        assert_eq!(config.default_directive(), "warn");
    }

    #[test]
    fn test_builder() {
        let config = ObservabilityConfig::new(2).with_json();
        assert!(config.json);
        assert_eq!(config.default_directive(), "info,nestgen=debug");
        assert_eq!(ObservabilityConfig::new(9).default_directive(), "debug,nestgen=trace");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(&ObservabilityConfig::new(0));
        init(&ObservabilityConfig::new(3));
    }
}
