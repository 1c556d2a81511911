use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::deck::DEFAULT_SHUFFLE_PASSES;

pub const CONFIG_ENV: &str = "SHOWDOWN_CONFIG";
pub const SEED_ENV: &str = "SHOWDOWN_SEED";
pub const SHUFFLE_PASSES_ENV: &str = "SHOWDOWN_SHUFFLE_PASSES";
pub const LOG_PATH_ENV: &str = "SHOWDOWN_LOG_PATH";

/// Settings for dealing and for recording evaluations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DealerConfig {
    /// Deck seed; `None` seeds from OS randomness
    pub seed: Option<u64>,
    /// Number of full shuffles applied per deal
    pub shuffle_passes: u32,
    /// Where evaluation records are appended, if anywhere
    pub log_path: Option<PathBuf>,
}

impl Default for DealerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_passes: DEFAULT_SHUFFLE_PASSES,
            log_path: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub shuffle_passes: ValueSource,
    pub log_path: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            shuffle_passes: ValueSource::Default,
            log_path: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: DealerConfig,
    pub sources: ConfigSources,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    shuffle_passes: Option<u32>,
    #[serde(default)]
    log_path: Option<PathBuf>,
}

impl DealerConfig {
    /// Parses a TOML document on top of the defaults.
    pub fn from_toml_str(s: &str) -> Result<DealerConfig, ConfigError> {
        let mut cfg = DealerConfig::default();
        let mut sources = ConfigSources::default();
        apply_file(&mut cfg, &mut sources, toml::from_str(s)?);
        validate(&cfg)?;
        Ok(cfg)
    }
}

fn apply_file(cfg: &mut DealerConfig, sources: &mut ConfigSources, f: FileConfig) {
    if let Some(v) = f.seed {
        cfg.seed = Some(v);
        sources.seed = ValueSource::File;
    }
    if let Some(v) = f.shuffle_passes {
        cfg.shuffle_passes = v;
        sources.shuffle_passes = ValueSource::File;
    }
    if let Some(v) = f.log_path {
        cfg.log_path = Some(v);
        sources.log_path = ValueSource::File;
    }
}

pub fn load() -> Result<DealerConfig, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves the configuration from the process environment.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_sources_from(|key| std::env::var(key).ok())
}

/// Resolves defaults, then the file named by `SHOWDOWN_CONFIG`, then the
/// individual `SHOWDOWN_*` overrides, reading variables through `lookup`.
pub fn load_with_sources_from<F>(lookup: F) -> Result<ConfigResolved, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = DealerConfig::default();
    let mut sources = ConfigSources::default();
    let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(path) = var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        apply_file(&mut cfg, &mut sources, toml::from_str(&s)?);
    }

    if let Some(seed) = var(SEED_ENV) {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {seed}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Some(passes) = var(SHUFFLE_PASSES_ENV) {
        cfg.shuffle_passes = passes
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid shuffle passes: {passes}")))?;
        sources.shuffle_passes = ValueSource::Env;
    }
    if let Some(path) = var(LOG_PATH_ENV) {
        cfg.log_path = Some(PathBuf::from(path));
        sources.log_path = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

fn validate(cfg: &DealerConfig) -> Result<(), ConfigError> {
    if cfg.shuffle_passes == 0 {
        return Err(ConfigError::Invalid(
            "shuffle_passes must be >=1".into(),
        ));
    }
    Ok(())
}
