use std::env;

use super::storage_config::ConfigError;

const DEFAULT_IP: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

/// HTTP listener address. SERVICE_IP defaults to loopback and SERVICE_PORT
/// to 8080; a port that is not a valid `u16` fails startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let ip = lookup("SERVICE_IP")
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty())
            .unwrap_or_else(|| DEFAULT_IP.to_string());

        let port = match lookup("SERVICE_PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { ip, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn should_listen_on_loopback_8080_by_default() {
        let config = load(&[]).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn should_read_ip_and_port() {
        let config = load(&[("SERVICE_IP", "0.0.0.0"), ("SERVICE_PORT", " 3000 ")]).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn should_reject_port_out_of_range() {
        let result = load(&[("SERVICE_PORT", "70000")]);

        assert!(matches!(result.unwrap_err(), ConfigError::InvalidPort(p) if p == "70000"));
    }
}
