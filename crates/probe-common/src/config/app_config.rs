//! Application configuration structs
//!
//! Loads configuration from environment variables once at startup. Handlers
//! receive the resulting [`AppConfig`] through router state and never read the
//! process environment themselves.

use std::env;
use std::net::{IpAddr, SocketAddr};

use probe_core::Backend;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub backends: BackendTargets,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Parse an `APP_ENV` value, case-insensitively
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Connection targets, one per backend
///
/// `None` means the variable was unset or empty.
#[derive(Debug, Clone, Default)]
pub struct BackendTargets {
    pub postgres: Option<String>,
    pub mysql: Option<String>,
    pub redis: Option<String>,
    pub mongodb: Option<String>,
}

impl BackendTargets {
    /// Target configured for `backend`, if any
    #[must_use]
    pub fn get(&self, backend: Backend) -> Option<&str> {
        let target = match backend {
            Backend::Postgres => &self.postgres,
            Backend::MySql => &self.mysql,
            Backend::Redis => &self.redis,
            Backend::Mongo => &self.mongodb,
        };
        target.as_deref()
    }

    /// Set or clear the target for `backend`
    pub fn set(&mut self, backend: Backend, target: Option<String>) {
        let slot = match backend {
            Backend::Postgres => &mut self.postgres,
            Backend::MySql => &mut self.mysql,
            Backend::Redis => &mut self.redis,
            Backend::Mongo => &mut self.mongodb,
        };
        *slot = target.filter(|t| !t.trim().is_empty());
    }

    /// Builder-style variant of [`BackendTargets::set`]
    #[must_use]
    pub fn with(mut self, backend: Backend, target: impl Into<String>) -> Self {
        self.set(backend, Some(target.into()));
        self
    }
}

// Default value functions
fn default_app_name() -> String {
    "probe-server".to_string()
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    80
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    /// Returns an error if `PORT` or `HOST` hold unparseable values
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Unset and empty are the same thing everywhere below
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match var("PORT") {
            Some(s) => s
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT", s))?,
            None => default_port(),
        };

        let host = match var("HOST") {
            Some(s) => s
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("HOST", s))?,
            None => default_host(),
        };

        let mut backends = BackendTargets::default();
        for backend in Backend::ALL {
            backends.set(backend, var(backend.env_var()));
        }

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            server: ServerConfig { host, port },
            backends,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: default_app_name(),
                env: Environment::default(),
            },
            server: ServerConfig::default(),
            backends: BackendTargets::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
