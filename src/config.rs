use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::database::{activity_store::ActivityStore, seed};
use crate::error::ConfigError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

/// Server settings, read from the environment (and `.env` via dotenvy in `main`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub seed_file: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_file: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                key: "PORT",
                value: raw,
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_file: get("ACTIVITIES_SEED_FILE").map(PathBuf::from),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.socket_addr_for_port(self.port)
    }

    pub fn socket_addr_for_port(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, port);
        raw.parse().map_err(|_| ConfigError::InvalidEnv {
            key: "HOST",
            value: self.host.clone(),
        })
    }

    /// Store seeded from `seed_file` when set, otherwise from the built-in activities.
    pub fn build_store(&self) -> Result<ActivityStore, ConfigError> {
        let directory = match &self.seed_file {
            Some(path) => seed::load_seed_file(path)?,
            None => seed::default_activities(),
        };
        Ok(ActivityStore::new(directory))
    }
}
