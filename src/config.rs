use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address override (e.g. "0.0.0.0:8080"); defaults to the Leptos
    /// site address
    pub listen: Option<String>,

    /// Unix socket path; takes precedence over `listen` when set
    pub socket: Option<String>,

    /// OpenTelemetry configuration
    #[serde(default)]
    pub otel: OtelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtelConfig {
    /// OTLP endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Deployment environment name
    #[serde(default = "default_environment")]
    pub environment: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:4318".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

impl Default for OtelConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            environment: default_environment(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - PORTFOLIO_LISTEN
    /// - PORTFOLIO_SOCKET
    /// - PORTFOLIO_OTEL_ENDPOINT
    /// - PORTFOLIO_OTEL_ENVIRONMENT
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            // Merge PORTFOLIO_ prefixed env vars with nested structure
            .merge(Env::prefixed("PORTFOLIO_").split("_"))
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Default, Serialize)]
struct ConfigDefaults {
    otel: OtelConfig,
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn test_default_config() {
        Jail::expect_with(|_| {
            let config = Config::load()?;
            assert!(config.listen.is_none());
            assert!(config.socket.is_none());
            assert_eq!(config.otel.endpoint, "http://127.0.0.1:4318");
            assert_eq!(config.otel.environment, "development");
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_LISTEN", "0.0.0.0:8080");
            jail.set_env("PORTFOLIO_SOCKET", "/run/portfolio.sock");
            jail.set_env("PORTFOLIO_OTEL_ENVIRONMENT", "production");

            let config = Config::load()?;
            assert_eq!(config.listen.as_deref(), Some("0.0.0.0:8080"));
            assert_eq!(config.socket.as_deref(), Some("/run/portfolio.sock"));
            assert_eq!(config.otel.environment, "production");
            assert_eq!(config.otel.endpoint, "http://127.0.0.1:4318");
            Ok(())
        });
    }
}
