use config::{Config, Environment, File, Map};
use ihub_domain::constants::{ENV_PREFIX, ENV_SEPARATOR, PORT_ENV};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

/// Errors raised while assembling or deserializing configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to build config ({context}): {source}")]
    Build {
        #[source]
        source: config::ConfigError,
        context: &'static str,
    },
    #[error("Failed to deserialize config: {source}")]
    Deserialize {
        #[source]
        source: config::ConfigError,
    },
}

/// A layered configuration loader that combines file-based settings with environment overrides.
///
/// Sources, lowest precedence first:
/// 1. **Defaults**: every config section is `#[serde(default)]`, so absent keys keep their defaults.
/// 2. **File**: `server.toml` (or any format `config` recognises by extension).
/// 3. **Structured overrides**: variables prefixed with `IHUB__`, nested with `__`
///    (e.g. `IHUB__ITEMS__ID_STRATEGY=monotonic` maps to `items.id_strategy`).
/// 4. **`PORT`**: the plain port variable wins over everything else for `server.port`.
///
/// The environment is read from the process unless [`ConfigLoader::env`] supplies a fixed set.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    file: Option<(PathBuf, bool)>,
    env: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads settings from `path`, failing if it does not exist.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some((path.as_ref().to_path_buf(), true));
        self
    }

    /// Loads settings from `path` when present, silently skipping it otherwise.
    #[must_use]
    pub fn optional_file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some((path.as_ref().to_path_buf(), false));
        self
    }

    /// Replaces the process environment with a fixed variable set.
    #[must_use]
    pub fn env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Builds the layered configuration and deserializes it into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Build`] if a required file is missing, a file cannot be parsed,
    /// or the `PORT` override cannot be applied. Returns [`ConfigError::Deserialize`] if the
    /// merged values do not match the structure of `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let mut builder = Config::builder();

        if let Some((path, required)) = &self.file {
            info!(path = %path.display(), required, "Loading config file");
            builder = builder.add_source(File::from(path.as_path()).required(*required));
        }

        let port = match &self.env {
            Some(vars) => vars.get(PORT_ENV).cloned(),
            None => std::env::var(PORT_ENV).ok(),
        };
        if let Some(port) = &port {
            debug!(port = %port, "Applying {PORT_ENV} override");
        }

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(self.env),
            )
            .set_override_option("server.port", port)
            .map_err(|source| ConfigError::Build { source, context: "port override" })?
            .build()
            .map_err(|source| ConfigError::Build { source, context: "sources" })?;

        config.try_deserialize::<T>().map_err(|source| ConfigError::Deserialize { source })
    }
}

/// Loads configuration from an optional file plus the process environment.
///
/// `None` looks for a `server.*` file in the working directory and skips it when absent;
/// an explicit path must exist.
///
/// # Errors
/// See [`ConfigLoader::load`].
///
/// # Example
/// ```rust
/// use ihub_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    let loader = match path {
        Some(path) => loader.file(path),
        None => loader.optional_file(DEFAULT_CONFIG_FILE),
    };
    loader.load()
}
