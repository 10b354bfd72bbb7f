use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::errors::ConfigError;

pub const HOST_VAR: &str = "COLORNAME_HOST";
pub const PORT_VAR: &str = "COLORNAME_PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 8000;

/// Where the server listens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`; unset or blank variables use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(HOST_VAR).filter(|v| !v.trim().is_empty()) {
            config.host = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost {
                    var: HOST_VAR,
                    value,
                })?;
        }

        if let Some(value) = lookup(PORT_VAR).filter(|v| !v.trim().is_empty()) {
            config.port = value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort {
                    var: PORT_VAR,
                    value,
                })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
