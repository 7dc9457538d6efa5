//! Service configuration, read from the environment (and a `.env` file, if present).
//!
//! | Variable | Default |
//! |----------|---------|
//! | `BIND_ADDR` | `0.0.0.0` |
//! | `USUARIOS_PORT` | `5002` |
//! | `PEDIDOS_PORT` | `8003` |
//! | `PRODUCTOS_PORT` | `8001` |
//! | `DATA_DIR` | `data` |
//! | `FILE_BACKED` | `pedidos` (comma separated resource names, may be empty) |
//! | `RUST_LOG` | `info` |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const RESOURCES: [&str; 3] = ["usuarios", "pedidos", "productos"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("unknown resource in FILE_BACKED: {0:?}")]
    UnknownResource(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub usuarios_port: u16,
    pub pedidos_port: u16,
    pub productos_port: u16,
    pub data_dir: PathBuf,
    /// Resources persisted under `data_dir`; the rest live in memory.
    pub file_backed: Vec<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            usuarios_port: 5002,
            pedidos_port: 8003,
            productos_port: 8001,
            data_dir: PathBuf::from("data"),
            file_backed: vec!["pedidos".to_string()],
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds a config from any variable source. Unset variables take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let file_backed = match lookup("FILE_BACKED") {
            Some(list) => parse_resource_list(&list)?,
            None => defaults.file_backed,
        };

        Ok(Self {
            bind_addr: parse_var(&lookup, "BIND_ADDR")?.unwrap_or(defaults.bind_addr),
            usuarios_port: parse_var(&lookup, "USUARIOS_PORT")?.unwrap_or(defaults.usuarios_port),
            pedidos_port: parse_var(&lookup, "PEDIDOS_PORT")?.unwrap_or(defaults.pedidos_port),
            productos_port: parse_var(&lookup, "PRODUCTOS_PORT")?
                .unwrap_or(defaults.productos_port),
            data_dir: lookup("DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            file_backed,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }

    pub fn is_file_backed(&self, resource: &str) -> bool {
        self.file_backed.iter().any(|r| r == resource)
    }

    pub fn addr(&self, port: u16) -> SocketAddr {
        SocketAddr::new(self.bind_addr, port)
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(var)
        .map(|value| value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }))
        .transpose()
}

fn parse_resource_list(list: &str) -> Result<Vec<String>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            if RESOURCES.contains(&name) {
                Ok(name.to_string())
            } else {
                Err(ConfigError::UnknownResource(name.to_string()))
            }
        })
        .collect()
}
