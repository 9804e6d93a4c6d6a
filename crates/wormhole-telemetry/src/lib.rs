//! Tracing setup shared by the Wormhole binaries.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Deployment environment, which decides log format and default verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Human-readable multi-line output at debug level.
    Local,
    /// JSON lines at debug level.
    Dev,
    /// Compact single-line output at info level.
    Prod,
}

impl Environment {
    /// Filter used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> &'static str {
        match self {
            Environment::Local | Environment::Dev => "debug",
            Environment::Prod => "info",
        }
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to install tracing subscriber: {0}")]
    Init(String),
}

fn env_filter(environment: Environment) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(environment.default_directive()))
}

/// Installs the global tracing subscriber for `environment`.
///
/// `RUST_LOG` overrides the environment's default level. Fails if a global
/// subscriber is already installed.
pub fn init(environment: Environment) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(environment));

    let result = match environment {
        Environment::Local => builder.pretty().try_init(),
        Environment::Dev => builder.json().try_init(),
        Environment::Prod => builder.compact().try_init(),
    };

    result.map_err(|e| TelemetryError::Init(e.to_string()))
}
