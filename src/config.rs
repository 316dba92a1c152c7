use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use figment::providers::{Data, Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::core::resolver::ResolutionMode;
use crate::core::sources::ScrapedSourceConfig;

const ENV_PREFIX: &str = "SOLLAGARATHI_";

/// Errors raised while assembling the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] figment::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub resolver: ResolverSettings,
    pub sources: SourcesConfig,
    pub suggest: SuggestConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

/// Lexicon store location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Override the database file. Defaults to `<data_dir>/sollagarathi.db`.
    pub path: Option<PathBuf>,
    /// Override the data directory.
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    pub level: String,
    /// Override the log directory. Defaults to `<data_dir>/logs`.
    pub dir: Option<PathBuf>,
}

/// Waterfall behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    pub mode: ResolutionMode,
    /// Per-adapter timeout in milliseconds.
    pub source_timeout_ms: u64,
    /// Write externally confirmed words back into the lexicon.
    pub cache_fill: bool,
}

/// External dictionary sources, in priority order after the local store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub wiktionary_enabled: bool,
    pub wiktionary_endpoint: String,
    pub scraped: Vec<ScrapedSourceConfig>,
}

/// English to Tamil suggestion path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    pub transliteration_enabled: bool,
    pub transliteration_endpoint: String,
    pub max_candidates: usize,
    /// Extra English concept words merged over the built-in map.
    pub concepts_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            resolver: ResolverSettings::default(),
            sources: SourcesConfig::default(),
            suggest: SuggestConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: None,
            data_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            mode: ResolutionMode::FirstMatch,
            source_timeout_ms: 4_000,
            cache_fill: true,
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            wiktionary_enabled: true,
            wiktionary_endpoint: crate::core::sources::WIKTIONARY_API_URL.to_string(),
            scraped: vec![
                ScrapedSourceConfig::tamil_lexicon(),
                ScrapedSourceConfig::agarathi(),
            ],
        }
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            transliteration_enabled: true,
            transliteration_endpoint: crate::core::suggest::INPUT_TOOLS_URL.to_string(),
            max_candidates: 5,
            concepts_path: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AppConfig {
    /// Defaults, then the TOML file at `path` (if present), then
    /// `SOLLAGARATHI_*` variables (`__` separates nested keys), then the bare
    /// `PORT`/`DATABASE_PATH`.
    /// Any invalid value fails the whole load.
    pub fn try_load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::layered(Toml::file(path), ENV_PREFIX)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Parse configuration from a TOML string layered over the defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::string(contents))
            .extract()
            .map_err(ConfigError::from)
    }

    fn layered(file: Data<Toml>, env_prefix: &str) -> Figment {
        Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(file)
            .merge(Env::prefixed(env_prefix).split("__"))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()))
            .merge(Env::raw().only(&["DATABASE_PATH"]).map(|_| "database.path".into()))
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.database.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("sollagarathi"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    /// Resolved lexicon database file.
    pub fn database_path(&self) -> PathBuf {
        self.database
            .path
            .clone()
            .unwrap_or_else(|| self.data_dir().join(crate::database::DATABASE_FILE))
    }

    /// Resolved log directory.
    pub fn log_dir(&self) -> PathBuf {
        self.logging
            .dir
            .clone()
            .unwrap_or_else(|| self.data_dir().join("logs"))
    }

    /// Default location of the config file.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("sollagarathi").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
