//! Server configuration, loaded from environment variables at startup.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

/// Used only in development mode when `SESSION_SECRET` is unset.
const DEV_SECRET_KEY: &str = "dev-secret-key-change-in-production";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_owned())),
        }
    }
}

/// Secret key material. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// `true` when the insecure development fallback is in use.
    pub fn is_dev_fallback(&self) -> bool {
        self.0 == DEV_SECRET_KEY
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SESSION_SECRET must be set when GENVISION_ENV=production")]
    MissingSecret,

    #[error("unknown GENVISION_ENV value '{0}' (expected 'development' or 'production')")]
    UnknownEnvironment(String),
}

/// Runtime configuration for genvision-server.
///
/// Every field except the secret key has a default that works out of the box.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:5000"`).
    pub bind_address: String,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    pub environment: Environment,

    pub secret_key: SecretKey,

    /// Directory served under `/static` (placeholder videos live in `videos/`).
    pub static_dir: String,

    /// Delay applied to every generation request.
    pub simulated_latency: Duration,

    /// Comma-separated CORS origins; `None` allows any origin.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI at `/swagger-ui`.
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build [`Config`] from an arbitrary key lookup.
    ///
    /// Fails in production mode when no secret key is provided.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        let flag = |key: &str, default: bool| {
            lookup(key)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(default)
        };

        let environment: Environment = env_or("GENVISION_ENV", "development").parse()?;

        let secret_key = match lookup("SESSION_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => SecretKey(secret),
            None if environment == Environment::Production => {
                return Err(ConfigError::MissingSecret);
            }
            None => SecretKey(DEV_SECRET_KEY.to_owned()),
        };

        let latency_ms = lookup("GENVISION_SIMULATED_LATENCY_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(2_000);

        Ok(Self {
            bind_address: env_or("GENVISION_BIND", "0.0.0.0:5000"),
            log_level: env_or("GENVISION_LOG", "info"),
            log_json: flag("GENVISION_LOG_JSON", false),
            environment,
            secret_key,
            static_dir: env_or("GENVISION_STATIC_DIR", "static"),
            simulated_latency: Duration::from_millis(latency_ms),
            cors_allowed_origins: lookup("GENVISION_CORS_ORIGINS").filter(|v| !v.trim().is_empty()),
            enable_swagger: flag("GENVISION_ENABLE_SWAGGER", true),
        })
    }
}
