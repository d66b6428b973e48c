//! TOML-based application configuration.
//!
//! Stores planner preferences:
//! - Timeline scale (pixel height of an hour row)
//! - Whether touching blocks are laid out as overlapping
//! - Defaults for new blocks
//! - Appearance
//!
//! Configuration is stored at `<data dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::data_dir;
use crate::error::{ConfigError, Result};
use crate::planner::clock::{parse_hhmm, MINUTES_PER_DAY};
use crate::planner::{BoundaryPolicy, LayoutOptions, TimelineScale, DEFAULT_PIXELS_PER_HOUR};

/// Planner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_pixels_per_hour")]
    pub pixels_per_hour: u32,
    /// Lay out `A.end == B.start` as a conflict.
    #[serde(default)]
    pub touching_blocks_conflict: bool,
    #[serde(default = "default_block_minutes")]
    pub default_block_minutes: u32,
    #[serde(default = "default_start")]
    pub default_start: String,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub dark_mode: bool,
    #[serde(default = "default_accent_color")]
    pub highlight_color: String,
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_pixels_per_hour() -> u32 {
    DEFAULT_PIXELS_PER_HOUR
}
fn default_block_minutes() -> u32 {
    60
}
fn default_start() -> String {
    "09:00".into()
}
fn default_true() -> bool {
    true
}
fn default_accent_color() -> String {
    "#3b82f6".into()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            pixels_per_hour: default_pixels_per_hour(),
            touching_blocks_conflict: false,
            default_block_minutes: default_block_minutes(),
            default_start: default_start(),
        }
    }
}

impl PlannerConfig {
    /// Check values that deserialize fine but make no sense for the planner.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            key: format!("planner.{key}"),
            message,
        };
        if self.pixels_per_hour == 0 {
            return Err(invalid("pixels_per_hour", "must be at least 1".into()));
        }
        if self.default_block_minutes == 0 || self.default_block_minutes > MINUTES_PER_DAY {
            return Err(invalid(
                "default_block_minutes",
                format!(
                    "{} is outside 1..={MINUTES_PER_DAY}",
                    self.default_block_minutes
                ),
            ));
        }
        parse_hhmm(&self.default_start)
            .map_err(|e| invalid("default_start", e.to_string()))?;
        Ok(())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            highlight_color: default_accent_color(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        let mut current = root;
        while let Some(part) = parts.next() {
            if part.is_empty() {
                return Err(unknown());
            }
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;
            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Number(_) => {
                    let n = value
                        .parse::<u64>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                    serde_json::Value::Number(n.into())
                }
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };
            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the data directory, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if no file exists.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content)?;
                cfg.planner.validate()?;
                debug!(path = %path.display(), "loaded config");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Persist to the data directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default config");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key in memory. Returns error if key is unknown,
    /// the value does not fit the key's type, or the planner rejects it.
    /// On error `self` is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config = serde_json::from_value(json)?;
        updated.planner.validate()?;
        *self = updated;
        Ok(())
    }

    /// Dot-path keys and their values, sorted by key.
    pub fn entries(&self) -> Vec<(String, String)> {
        fn walk(prefix: &str, value: &serde_json::Value, out: &mut Vec<(String, String)>) {
            match value {
                serde_json::Value::Object(map) => {
                    for (key, child) in map {
                        let path = if prefix.is_empty() {
                            key.clone()
                        } else {
                            format!("{prefix}.{key}")
                        };
                        walk(&path, child, out);
                    }
                }
                serde_json::Value::String(s) => out.push((prefix.to_string(), s.clone())),
                other => out.push((prefix.to_string(), other.to_string())),
            }
        }

        let mut out = Vec::new();
        if let Ok(json) = serde_json::to_value(self) {
            walk("", &json, &mut out);
        }
        out
    }

    /// Layout options selected by this config.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            boundary: if self.planner.touching_blocks_conflict {
                BoundaryPolicy::TouchingConflicts
            } else {
                BoundaryPolicy::TouchingShares
            },
        }
    }

    /// Timeline scale selected by this config.
    pub fn timeline_scale(&self) -> TimelineScale {
        TimelineScale::from_pixels_per_hour(self.planner.pixels_per_hour)
    }
}
