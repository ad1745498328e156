//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `WAYFINDER`
//! prefix and `__` as the nesting separator.
//!
//! # Example
//!
//! ```no_run
//! use wayfinder::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod backend;
mod error;
mod server;

pub use backend::BackendConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Scoring backend configuration (base URL, timeout)
    #[serde(default)]
    pub backend: BackendConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads environment variables
    /// with the `WAYFINDER` prefix:
    ///
    /// - `WAYFINDER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WAYFINDER__BACKEND__BASE_URL=...` -> `backend.base_url = ...`
    ///
    /// Every section has defaults, so an empty environment still loads;
    /// in particular a missing backend base URL is reported at call time
    /// by the gateway, not here.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WAYFINDER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.backend.validate()?;
        Ok(())
    }
}
