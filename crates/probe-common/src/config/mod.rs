//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BackendTargets, ConfigError, Environment, ServerConfig,
};
