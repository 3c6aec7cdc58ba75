use crate::config::env::env;

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Maximum request body size in bytes (default: 1MB)
    pub max_body_size: usize,
}

impl ServerConfig {
    /// Build config from environment variables
    pub fn from_env() -> Self {
        Self {
            host: env("SERVER_HOST", "127.0.0.1".to_string()),
            port: env("SERVER_PORT", 3000),
            max_body_size: env("SERVER_MAX_BODY_SIZE", 1024 * 1024),
        }
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_what_is_given() {
        let base = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_body_size: 64,
        };

        let config = base.clone().with_overrides(None, Some(8081));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8081);

        let config = base.with_overrides(Some("0.0.0.0".to_string()), None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_body_size, 64);
    }
}
