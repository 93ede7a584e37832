use crate::constants::{DEFAULT_PORT, DEFAULT_SERVICE_NAME};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub server: ServerConfig,
    pub items: ItemsConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    /// Reported in the `service` field of the health payload.
    pub service_name: String,
    /// Grace period for in-flight requests once a shutdown signal arrives.
    pub shutdown_timeout_secs: u64,
}

/// How the item registry assigns ids to newly created items.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// `len + 1` at insertion time. Ids can repeat after a delete.
    #[default]
    Length,
    /// One past the highest id ever issued. Ids are never reused.
    Monotonic,
}

/// Item registry configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ItemsConfig {
    pub id_strategy: IdStrategy,
    /// Start with the built-in sample items instead of an empty collection.
    pub seed: bool,
}

/// Tracing output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level directive (`trace`..`error`, or `off`).
    pub level: String,
    /// Explicit env-filter directives; takes precedence over `RUST_LOG`.
    pub filter: Option<String>,
    /// Enables daily rolling log files in this directory.
    pub directory: Option<PathBuf>,
    /// Write file logs as JSON lines.
    pub json: bool,
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            service_name: DEFAULT_SERVICE_NAME.to_owned(),
            shutdown_timeout_secs: 30,
        }
    }
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self { id_strategy: IdStrategy::default(), seed: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, directory: None, json: false }
    }
}
