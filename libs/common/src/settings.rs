//! Server configuration
//!
//! The service only needs to know where to listen. Values come from
//! built-in defaults, overridden by `SERVER_HOST` and `SERVER_PORT`.

use ::config::{Config, Environment};
use serde::Deserialize;

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: i64 = 5000;

/// Server configuration struct
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Host name or address to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT as u16,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig from defaults and environment variables
    ///
    /// # Environment Variables
    /// - `SERVER_HOST`: bind host (default: "localhost")
    /// - `SERVER_PORT`: bind port (default: 5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", DEFAULT_PORT)?
            .add_source(Environment::with_prefix("SERVER").try_parsing(true))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Address in `host:port` form, used for binding and as the link authority
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
