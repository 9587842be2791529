use std::{env, net::SocketAddr};

use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub bind_port: u16,
    pub transport: Transport,
    pub catalog: Catalog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Stdio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Full,
    Minimal,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("BIND_PORT must be a valid u16")]
    InvalidPort,
    #[error("CALC_TRANSPORT must be one of: http, stdio")]
    InvalidTransport,
    #[error("CALC_CATALOG must be one of: full, minimal")]
    InvalidCatalog,
    #[error("invalid bind address or port")]
    InvalidSocket,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
        let bind_port = env::var("BIND_PORT")
            .ok()
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(5234);

        let transport = match normalized(env::var("CALC_TRANSPORT").ok()).as_deref() {
            None | Some("http") => Transport::Http,
            Some("stdio") => Transport::Stdio,
            Some(_) => return Err(ConfigError::InvalidTransport),
        };

        let catalog = match normalized(env::var("CALC_CATALOG").ok()).as_deref() {
            None | Some("full") => Catalog::Full,
            Some("minimal") => Catalog::Minimal,
            Some(_) => return Err(ConfigError::InvalidCatalog),
        };

        let config = Self {
            bind_addr,
            bind_port,
            transport,
            catalog,
        };

        let _ = config.bind_socket()?;
        Ok(config)
    }

    pub fn bind_socket(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_addr, self.bind_port)
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidSocket)
    }
}

fn normalized(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_ascii_lowercase())
        .filter(|value| !value.is_empty())
}
