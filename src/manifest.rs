//! JSON action manifest.
//!
//! The runtime resolves action names against a manifest file listing every
//! action, its type and its set. [`ActionManifest`] models the parts this crate
//! reads: it can generate the manifest matching an [`InputConfig`], and the
//! controller checks its own wiring against a loaded one
//! (see [`InputController::validate`]).
//!
//! Keys not modelled here (localization, bindings content) are ignored on read.
//!
//! [`InputController::validate`]: crate::controller::InputController::validate

use crate::action::ActionType;
use crate::config::InputConfig;
use crate::error::ConfigError;
use crate::feature::Feature;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Manifest `type` string of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestActionType {
    Boolean,
    Vector1,
    Vector2,
    Vector3,
    Vibration,
    Pose,
    Skeleton,
}

impl ManifestActionType {
    /// The data type fetched for this action, if it is a button or axis action.
    pub fn action_type(self) -> Option<ActionType> {
        match self {
            ManifestActionType::Boolean => Some(ActionType::Digital),
            ManifestActionType::Vector1
            | ManifestActionType::Vector2
            | ManifestActionType::Vector3 => Some(ActionType::Analog),
            ManifestActionType::Vibration
            | ManifestActionType::Pose
            | ManifestActionType::Skeleton => None,
        }
    }
}

impl From<ActionType> for ManifestActionType {
    fn from(ty: ActionType) -> Self {
        match ty {
            ActionType::Digital => ManifestActionType::Boolean,
            ActionType::Analog => ManifestActionType::Vector1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestAction {
    pub name: String,
    #[serde(rename = "type")]
    pub action_type: ManifestActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestActionSet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultBinding {
    pub controller_type: String,
    pub binding_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionManifest {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_bindings: Vec<DefaultBinding>,
    #[serde(default)]
    pub actions: Vec<ManifestAction>,
    #[serde(default)]
    pub action_sets: Vec<ManifestActionSet>,
}

impl ActionManifest {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Manifest declaring the configured action set and one boolean action per feature.
    pub fn for_config(config: &InputConfig) -> Self {
        let actions = Feature::ALL
            .iter()
            .map(|&feature| ManifestAction {
                name: config.action_name(feature).to_string(),
                action_type: ManifestActionType::Boolean,
                requirement: Some("optional".to_string()),
            })
            .collect();

        Self {
            default_bindings: Vec::new(),
            actions,
            action_sets: vec![ManifestActionSet {
                name: config.action_set.clone(),
                usage: Some("leftright".to_string()),
            }],
        }
    }

    /// Action names compare case-insensitively, as the runtime does.
    pub fn find_action(&self, name: &str) -> Option<&ManifestAction> {
        self.actions
            .iter()
            .find(|action| action.name.eq_ignore_ascii_case(name))
    }

    pub fn has_action_set(&self, name: &str) -> bool {
        self.action_sets
            .iter()
            .any(|set| set.name.eq_ignore_ascii_case(name))
    }
}
