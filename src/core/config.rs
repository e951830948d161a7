//! User configuration
//!
//! Settings come from `config.yaml` in the user config directory, then from
//! environment variables, then built-in defaults. Loading never fails: an
//! unreadable or invalid file is logged and skipped.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::hours::HourPolicy;
use crate::core::life_limit::DEFAULT_WARNING_THRESHOLD_HOURS;

pub const ENV_WARNING_THRESHOLD: &str = "ELB_WARNING_THRESHOLD";
pub const ENV_HOUR_POLICY: &str = "ELB_HOUR_POLICY";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Hours of remaining life at which a part starts to warn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_threshold_hours: Option<f64>,

    /// Hours policy for parts swapped in from inventory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour_policy: Option<HourPolicy>,
}

impl Config {
    /// Load from the user config file and the environment
    pub fn load() -> Self {
        let mut config = Self::config_path()
            .filter(|p| p.exists())
            .map(|p| Self::load_file(&p))
            .unwrap_or_default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Path to the user config file, if a home directory can be determined
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "engine-logbook").map(|d| d.config_dir().join("config.yaml"))
    }

    /// Read a config file, falling back to defaults on any problem
    pub fn load_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read config file");
                return Self::default();
            }
        };
        match serde_yml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                Self::default()
            }
        }
    }

    /// Override settings from environment-style lookups
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup(ENV_WARNING_THRESHOLD) {
            match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() && v >= 0.0 => self.warning_threshold_hours = Some(v),
                _ => warn!(value = %raw, "ignoring invalid {}", ENV_WARNING_THRESHOLD),
            }
        }
        if let Some(raw) = lookup(ENV_HOUR_POLICY) {
            match raw.parse::<HourPolicy>() {
                Ok(policy) => self.hour_policy = Some(policy),
                Err(e) => warn!("ignoring {}: {}", ENV_HOUR_POLICY, e),
            }
        }
    }

    pub fn warning_threshold(&self) -> f64 {
        self.warning_threshold_hours
            .unwrap_or(DEFAULT_WARNING_THRESHOLD_HOURS)
    }

    pub fn hour_policy(&self) -> HourPolicy {
        self.hour_policy.unwrap_or_default()
    }
}
