use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use validator::Validate;
use crate::models::{TargetTraits, TraitWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub targets: TargetTraits,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    /// Roster served when a request brings no birds of its own
    #[serde(default = "default_sample_roster")]
    pub sample_roster: Option<String>,
    /// Base directory for relative image paths
    pub image_root: Option<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            sample_roster: default_sample_roster(),
            image_root: None,
        }
    }
}

fn default_sample_roster() -> Option<String> { Some("data/sample.csv".to_string()) }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
    /// Largest roster accepted for one ranking pass. Every sire x dam pair is
    /// materialized before the top-K cut, so this bounds memory per request:
    /// 1000 birds split evenly yield 250k pairs.
    #[serde(default = "default_max_birds")]
    pub max_birds: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_birds: default_max_birds(),
        }
    }
}

fn default_limit() -> u16 { 20 }
fn default_max_limit() -> u16 { 100 }
fn default_max_birds() -> usize { 1000 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: TraitWeights,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with LOFT__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., LOFT__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize::<Self>()?
            .checked()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize::<Self>()?
            .checked()
    }

    /// Reject settings the ranker cannot score with, such as negative weights
    pub fn checked(self) -> Result<Self, ConfigError> {
        self.scoring
            .weights
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid scoring.weights: {}", e)))?;
        Ok(self)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("LOFT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
