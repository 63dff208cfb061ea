//! Configuration structs

mod app_config;

pub use app_config::{
    AccountsConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment,
    IdConfig, JwtConfig, RateLimitConfig, ServerConfig,
};
