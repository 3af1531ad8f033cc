//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Sidecar Configuration ===
    /// HTTP port of the co-located Dapr sidecar.
    #[serde(default = "default_dapr_http_port")]
    pub dapr_http_port: u16,

    // === Server Configuration ===
    /// Port this service listens on (all interfaces).
    #[serde(default = "default_app_port")]
    pub app_port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_dapr_http_port() -> u16 {
    3500
}

fn default_app_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.dapr_http_port == 0 {
            return Err("DAPR_HTTP_PORT must be non-zero".to_string());
        }

        if self.app_port == 0 {
            return Err("APP_PORT must be non-zero".to_string());
        }

        if self.app_port == self.dapr_http_port {
            return Err("APP_PORT must differ from DAPR_HTTP_PORT".to_string());
        }

        Ok(())
    }

    /// Base URL of the sidecar's state API, built once at startup.
    pub fn state_url(&self) -> String {
        format!("http://localhost:{}/v1.0/state", self.dapr_http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dapr_http_port: default_dapr_http_port(),
            app_port: default_app_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
