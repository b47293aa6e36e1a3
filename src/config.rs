use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::matcher::DEFAULT_THRESHOLD;
use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
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
    /// Largest accepted JSON body; batches of requests can be large
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_max_payload_bytes() -> usize { 4 * 1024 * 1024 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Scores must be strictly above this to be returned
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_threshold() -> u32 { DEFAULT_THRESHOLD }
fn default_limit() -> usize { 20 }
fn default_max_limit() -> usize { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_relevance_base")]
    pub relevance_base: u32,
    #[serde(default = "default_keyword_per_hit")]
    pub keyword_per_hit: u32,
    #[serde(default = "default_keyword_max")]
    pub keyword_max: u32,
    #[serde(default = "default_region_weight")]
    pub region: u32,
    #[serde(default = "default_certification_weight")]
    pub certification: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            relevance_base: default_relevance_base(),
            keyword_per_hit: default_keyword_per_hit(),
            keyword_max: default_keyword_max(),
            region: default_region_weight(),
            certification: default_certification_weight(),
        }
    }
}

fn default_relevance_base() -> u32 { 40 }
fn default_keyword_per_hit() -> u32 { 5 }
fn default_keyword_max() -> u32 { 30 }
fn default_region_weight() -> u32 { 15 }
fn default_certification_weight() -> u32 { 15 }

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            relevance_base: config.relevance_base,
            keyword_per_hit: config.keyword_per_hit,
            keyword_max: config.keyword_max,
            region: config.region,
            certification: config.certification,
        }
    }
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
    /// 4. Environment variables (prefixed with RFP_MATCH)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RFP_MATCH__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Matcher built from the configured weights and threshold
    pub fn matcher(&self) -> crate::core::Matcher {
        crate::core::Matcher::new((&self.scoring.weights).into(), self.matching.threshold)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("RFP_MATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
