use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::GeoPoint;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub commute: CommuteSettings,
    #[serde(default)]
    pub filter: FilterSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
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

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_properties_file")]
    pub properties_file: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            properties_file: default_properties_file(),
        }
    }
}

fn default_properties_file() -> String {
    "data/properties.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommuteSettings {
    #[serde(default = "default_reference_latitude")]
    pub reference_latitude: f64,
    #[serde(default = "default_reference_longitude")]
    pub reference_longitude: f64,
}

impl CommuteSettings {
    /// The campus coordinate all commute distances are measured from.
    pub fn reference_point(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.reference_latitude,
            longitude: self.reference_longitude,
        }
    }
}

impl Default for CommuteSettings {
    fn default() -> Self {
        Self {
            reference_latitude: default_reference_latitude(),
            reference_longitude: default_reference_longitude(),
        }
    }
}

fn default_reference_latitude() -> f64 {
    43.0015
}
fn default_reference_longitude() -> f64 {
    -78.7876
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    #[serde(default = "default_min_price")]
    pub default_min_price: f64,
    #[serde(default = "default_max_price")]
    pub default_max_price: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            default_min_price: default_min_price(),
            default_max_price: default_max_price(),
        }
    }
}

fn default_min_price() -> f64 {
    0.0
}
fn default_max_price() -> f64 {
    10_000.0
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

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ROOMSCOUT_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ROOMSCOUT_)
            // e.g., ROOMSCOUT_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("ROOMSCOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ROOMSCOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply bare environment overrides that don't follow the prefix scheme.
/// `PROPERTIES_FILE` points the store at an alternate backing file.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(path) = env::var("PROPERTIES_FILE") {
        builder = builder.set_override("data.properties_file", path)?;
    }

    builder.build()
}
