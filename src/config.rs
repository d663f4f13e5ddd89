//! Configuration types.

/// Server configuration, built from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener on.
    pub bind_host: String,
    /// Port to bind the HTTP listener on.
    pub port: u16,
}

impl ServerConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let bind_host =
            std::env::var("MAIL_SCRUB_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port: u16 = std::env::var("MAIL_SCRUB_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        Self { bind_host, port }
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = ServerConfig {
            bind_host: "127.0.0.1".to_string(),
            port: 9999,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9999");
    }

    #[test]
    fn default_listens_on_8080() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }
}
