//! Server configuration, read from the environment at startup

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Storage backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageKind {
    #[default]
    Json,
    Memory,
}

impl std::fmt::Display for StorageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageKind::Json => write!(f, "json"),
            StorageKind::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(StorageKind::Json),
            "memory" => Ok(StorageKind::Memory),
            _ => Err(format!("Unknown storage kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub storage: StorageKind,
    /// Directory holding prompts.json and collections.json
    pub data_dir: PathBuf,
}

impl ServerConfig {
    /// Read `PROMPTLAB_*` variables from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr = lookup("PROMPTLAB_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("Invalid PROMPTLAB_BIND_ADDR: {}", bind_addr))?;

        let storage = match lookup("PROMPTLAB_STORAGE") {
            Some(kind) => kind.parse::<StorageKind>().map_err(anyhow::Error::msg)?,
            None => StorageKind::default(),
        };

        let data_dir = lookup("PROMPTLAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            bind_addr,
            storage,
            data_dir,
        })
    }
}
