use crate::core::eligibility::ExclusionScope;
use crate::errors::{AppError, AppResult};
use crate::models::Line;
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Record file (CSV). Relative paths live under the config directory.
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_audit")]
    pub audit: String,
    /// bcrypt hash of the secret required by `edit` and `del`.
    #[serde(default)]
    pub secret_hash: Option<String>,
    #[serde(default = "default_line")]
    pub default_line: Line,
    #[serde(default = "default_lookback_months")]
    pub lookback_months: u32,
    #[serde(default)]
    pub exclusion_scope: ExclusionScope,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_audit() -> String {
    Config::config_dir()
        .join("wheelgauge.sqlite")
        .to_string_lossy()
        .to_string()
}
fn default_line() -> Line {
    Line::Line4
}
fn default_lookback_months() -> u32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            audit: default_audit(),
            secret_hash: None,
            default_line: default_line(),
            lookback_months: default_lookback_months(),
            exclusion_scope: ExclusionScope::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("wheelgauge")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".wheelgauge")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("wheelgauge.conf")
    }

    /// Default record file
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("wheelgauge.csv")
    }

    pub fn store_path(&self) -> PathBuf {
        resolve_in(&self.store, &Self::config_dir())
    }

    pub fn audit_path(&self) -> PathBuf {
        resolve_in(&self.audit, &Self::config_dir())
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        fs::write(Self::config_file(), self.to_yaml()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let cfg = Config::from_yaml("store: /data/wheels.csv\n").unwrap();
        assert_eq!(cfg.store, "/data/wheels.csv");
        assert_eq!(cfg.default_line, Line::Line4);
        assert_eq!(cfg.lookback_months, 3);
        assert_eq!(cfg.exclusion_scope, ExclusionScope::Line);
        assert!(cfg.secret_hash.is_none());
    }

    #[test]
    fn yaml_round_trip_keeps_settings() {
        let cfg = Config {
            store: "/data/wheels.csv".into(),
            audit: "/data/audit.sqlite".into(),
            secret_hash: Some("$2b$04$abc".into()),
            default_line: Line::Line5,
            lookback_months: 2,
            exclusion_scope: ExclusionScope::Global,
        };
        let yaml = cfg.to_yaml().unwrap();
        assert!(yaml.contains("default_line: L5"));
        assert!(yaml.contains("exclusion_scope: global"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), cfg);
    }
}
