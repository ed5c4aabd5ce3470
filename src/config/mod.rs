use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::error;

const DEFAULT_PORT: u16 = 4310;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

/// Runtime configuration.
///
/// Priority (highest to lowest):
///   1. CLI / env — passed as `Some(value)` from clap
///   2. TOML file at `{data_dir}/config.toml`
///   3. Built-in defaults
#[derive(Debug, Clone)]
pub struct OfferdConfig {
    pub port: u16,
    /// Bind address for the REST server (OFFERD_BIND, default: "127.0.0.1").
    pub bind_address: String,
    /// Generated documents and config live under here.
    pub data_dir: PathBuf,
    pub log: String,
    /// Log output format: "pretty" (default) | "json".
    pub log_format: String,
}

/// `{data_dir}/config.toml` — every field optional.
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    port: Option<u16>,
    bind_address: Option<String>,
    log: Option<String>,
    log_format: Option<String>,
}

impl OfferdConfig {
    pub fn new(
        port: Option<u16>,
        data_dir: Option<PathBuf>,
        log: Option<String>,
        bind_address: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        // Load TOML as the lowest-priority layer
        let toml = load_toml(&data_dir).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let bind_address = bind_address
            .or(std::env::var("OFFERD_BIND").ok().filter(|s| !s.is_empty()))
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let log_format = std::env::var("OFFERD_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        Self {
            port,
            bind_address,
            data_dir,
            log,
            log_format,
        }
    }

    /// Directory generated offer documents are written to and served from.
    pub fn documents_dir(&self) -> PathBuf {
        self.data_dir.join("documents")
    }
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("OFFERD_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".offerd");
    }
    PathBuf::from(".offerd")
}
