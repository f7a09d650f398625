//! Configuration loading
//!
//! An optional TOML file supplies the inputs used when the command line
//! leaves them out. Lookup order: explicit `--config` path, then
//! `<config home>/retention-roi/config.toml`, then built-in defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::calculator::RoiInputs;
use crate::error::{Result, RoiError};

/// Default inputs, used for any value not given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputDefaults {
    pub employee_count: f64,
    pub avg_salary: f64,
    pub turnover_rate_pct: f64,
    pub reduction_pct: f64,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            employee_count: 250.0,
            avg_salary: 60_000.0,
            turnover_rate_pct: 15.0,
            reduction_pct: 5.0,
        }
    }
}

impl InputDefaults {
    pub fn to_inputs(&self) -> RoiInputs {
        RoiInputs::new(
            self.employee_count,
            self.avg_salary,
            self.turnover_rate_pct,
            self.reduction_pct,
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub defaults: InputDefaults,
}

/// Where the effective configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    BuiltIn,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Default config file location, if a config directory can be determined
pub fn default_config_path() -> Option<PathBuf> {
    dir_spec::config_home().map(|dir| dir.join("retention-roi").join("config.toml"))
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| RoiError::ConfigError(e.to_string()).into())
}

/// Load configuration.
///
/// An explicit path must exist. The default location is optional: if the
/// file is absent, built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            other => {
                debug!(path = ?other, "no config file found, using built-in defaults");
                return Ok(LoadedConfig {
                    config: Config::default(),
                    source: ConfigSource::BuiltIn,
                });
            }
        },
    };

    let text = std::fs::read_to_string(&path)
        .map_err(RoiError::from)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config =
        parse_config(&text).with_context(|| format!("invalid config file {}", path.display()))?;

    debug!(path = %path.display(), "loaded config");
    Ok(LoadedConfig {
        config,
        source: ConfigSource::File(path),
    })
}
