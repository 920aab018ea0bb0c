//! Controller configuration.
//!
//! Loaded from TOML. Every field is optional:
//!
//! ```toml
//! manifest_path = "actions.json"
//! action_set = "/actions/main"
//! priority = 0
//!
//! [actions]
//! push_to_talk = "/actions/main/in/Talk"
//! ```
//!
//! `[actions]` overrides the manifest action name of individual features; any
//! feature not listed uses [`Feature::action_name`].

use crate::error::ConfigError;
use crate::feature::{Feature, DEFAULT_ACTION_SET};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Action manifest handed to the runtime before any handle is resolved.
    pub manifest_path: Option<PathBuf>,
    /// Name of the single action set activated every tick.
    pub action_set: String,
    /// Priority of the active set.
    pub priority: i32,
    /// Per-feature action name overrides.
    pub actions: BTreeMap<Feature, String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            manifest_path: None,
            action_set: DEFAULT_ACTION_SET.to_string(),
            priority: 0,
            actions: BTreeMap::new(),
        }
    }
}

impl InputConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read a TOML config file. A relative `manifest_path` is resolved against
    /// the config file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;

        if let (Some(manifest), Some(dir)) = (config.manifest_path.as_mut(), path.parent()) {
            if manifest.is_relative() {
                *manifest = dir.join(&*manifest);
            }
        }

        Ok(config)
    }

    /// Effective action name for `feature`.
    pub fn action_name(&self, feature: Feature) -> &str {
        self.actions
            .get(&feature)
            .map(String::as_str)
            .unwrap_or_else(|| feature.action_name())
    }
}
