use serde::Deserialize;
use std::fs::read_to_string;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

/// Contents of the optional TOML config file. Every field may be left out.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub address: Option<IpAddr>,
    pub port: Option<u16>,
    pub key_file_path: Option<String>,
    pub cert_file_path: Option<String>,
    pub seed: Option<u64>,
}

#[derive(Debug, PartialEq)]
pub struct TlsConfig {
    pub key_file_path: String,
    pub cert_file_path: String,
}

/// Fully resolved settings the server starts with.
#[derive(Debug, PartialEq)]
pub struct Settings {
    pub addr: SocketAddr,
    pub tls: Option<TlsConfig>,
    pub seed: Option<u64>,
}

impl ServerConfig {
    pub fn from_file(path: &str) -> Result<ServerConfig, ConfigError> {
        let contents = read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Values in `overrides` win over the ones in `self`.
    pub fn merge(self, overrides: ServerConfig) -> ServerConfig {
        ServerConfig {
            address: overrides.address.or(self.address),
            port: overrides.port.or(self.port),
            key_file_path: overrides.key_file_path.or(self.key_file_path),
            cert_file_path: overrides.cert_file_path.or(self.cert_file_path),
            seed: overrides.seed.or(self.seed),
        }
    }

    pub fn resolve(self) -> Result<Settings, ConfigError> {
        let tls = match (self.key_file_path, self.cert_file_path) {
            (Some(key_file_path), Some(cert_file_path)) => Some(TlsConfig {
                key_file_path,
                cert_file_path,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteTls),
        };
        Ok(Settings {
            addr: SocketAddr::new(
                self.address.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
                self.port.unwrap_or(DEFAULT_PORT),
            ),
            tls,
            seed: self.seed,
        })
    }
}
