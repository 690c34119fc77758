use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ServerError;

/// Crate version, reported at startup.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Reads `HOST`, `PORT` and `STATIC_DIR`. Call after `dotenvy::dotenv()`
    /// so a local `.env` is honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        Self {
            host,
            port,
            static_dir,
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        parse_addr(&self.host, self.port)
    }

    /// Where to try once the configured port is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr, ServerError> {
        parse_addr(&self.host, self.port.saturating_add(1))
    }
}

fn parse_addr(host: &str, port: u16) -> Result<SocketAddr, ServerError> {
    let addr = format!("{}:{}", host, port);
    addr.parse()
        .map_err(|source| ServerError::InvalidAddress { addr, source })
}
