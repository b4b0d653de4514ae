use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use serde::Deserialize;
use std::path::Path;

/// Application configuration
///
/// The skill taxonomy and the decision thresholds are compiled in and are
/// not part of the configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub screening: ScreeningSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
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

#[derive(Debug, Clone, Deserialize)]
pub struct ScreeningSettings {
    /// Upper bound on resume length, in characters
    #[serde(default = "default_max_resume_chars")]
    pub max_resume_chars: usize,
}

impl Default for ScreeningSettings {
    fn default() -> Self {
        Self {
            max_resume_chars: default_max_resume_chars(),
        }
    }
}

fn default_max_resume_chars() -> usize { 200_000 }

impl Settings {
    /// Load configuration from defaults, files and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SCREEN__)
    pub fn load() -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        with_defaults()?
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("server.workers", 4)?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())?
        .set_default("screening.max_resume_chars", default_max_resume_chars() as u64)
}

/// e.g., SCREEN__SERVER__PORT -> server.port
fn env_source() -> Environment {
    Environment::with_prefix("SCREEN")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
