use crate::models::{JwkMetadata, DEFAULT_KEY_ID, DEFAULT_KEY_USE};
use std::collections::HashMap;
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;

/// Host the publication listener binds to unless `BIND_HOST` is set.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone)]
pub struct Config {
    /// PEM file holding the public key to publish.
    pub key_path: PathBuf,
    pub bind_address: SocketAddr,
    pub metadata: JwkMetadata,
    /// Separate listener for the Prometheus exporter, disabled when `None`.
    pub metrics_bind_address: Option<SocketAddr>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Usage: {0} <pub_key_file_path> <port>")]
    Usage(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),
}

impl Config {
    /// Load configuration from process arguments and environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let args: Vec<String> = env::args().collect();
        Self::from_sources(&args, &env::vars().collect())
    }

    /// Load configuration from an argument list and a variable map (for testing)
    ///
    /// `args` includes the program name, followed by exactly two positional
    /// arguments: the PEM path and the listen port.
    pub fn from_sources(args: &[String], vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let program = args
            .first()
            .cloned()
            .unwrap_or_else(|| "jwks-server".to_string());

        let (key_path, port) = match args {
            [_, key_path, port] => (key_path, port),
            _ => return Err(ConfigError::Usage(program)),
        };

        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;

        let host = vars
            .get("BIND_HOST")
            .map(String::as_str)
            .unwrap_or(DEFAULT_BIND_HOST);
        let host: IpAddr = host
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress(host.to_string()))?;

        let metrics_bind_address = vars
            .get("METRICS_BIND_ADDRESS")
            .map(|addr| {
                addr.parse::<SocketAddr>()
                    .map_err(|_| ConfigError::InvalidBindAddress(addr.clone()))
            })
            .transpose()?;

        let metadata = JwkMetadata {
            kid: vars
                .get("JWK_KEY_ID")
                .cloned()
                .unwrap_or_else(|| DEFAULT_KEY_ID.to_string()),
            use_: vars
                .get("JWK_USE")
                .cloned()
                .unwrap_or_else(|| DEFAULT_KEY_USE.to_string()),
            alg: vars.get("JWK_ALG").filter(|alg| !alg.is_empty()).cloned(),
        };

        Ok(Config {
            key_path: PathBuf::from(key_path),
            bind_address: SocketAddr::new(host, port),
            metadata,
            metrics_bind_address,
        })
    }
}
