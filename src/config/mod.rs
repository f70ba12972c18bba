// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{AssetsConfig, Config};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// `PORT` and then `NODE_PORT` from the process environment take
    /// precedence over every other source for the listening port.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let port = port_override(std::env::var("PORT").ok(), std::env::var("NODE_PORT").ok());
        Self::load_with_port(config_path, port)
    }

    fn load_with_port(config_path: &str, port: Option<String>) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", concat!("statusdemo/", env!("CARGO_PKG_VERSION")))?
            .set_default("assets.dir", "client")?
            .set_override_option("server.port", port)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Pick the port override: `PORT` first, then `NODE_PORT`. Blank values are ignored.
fn port_override(port: Option<String>, node_port: Option<String>) -> Option<String> {
    port.into_iter()
        .chain(node_port)
        .map(|p| p.trim().to_string())
        .find(|p| !p.is_empty())
}
