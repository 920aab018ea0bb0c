//! The input controller.
//!
//! [`InputController`] owns the runtime gateway, the action set and one
//! [`Action`] per [`Feature`]. Per tick, call [`refresh`](InputController::refresh)
//! once and then any number of queries:
//!
//! ```ignore
//! let mut input = InputController::with_defaults(runtime);
//! loop {
//!     input.refresh();
//!     if input.next_song()? {
//!         player.next();
//!     }
//!     if input.push_to_talk()? {
//!         voice.transmit();
//!     }
//! }
//! ```
//!
//! Misnamed actions are not reported by the runtime when they are resolved; the
//! feature simply never activates. Run [`validate`](InputController::validate)
//! against the manifest at startup to catch them.

use crate::action::{Action, ActionSet, ActionType};
use crate::config::InputConfig;
use crate::data::ActiveActionSet;
use crate::error::InputError;
use crate::feature::Feature;
use crate::fetch::fetch_digital;
use crate::gateway::InputGateway;
use crate::manifest::{ActionManifest, ManifestActionType};
use crate::snapshot::Snapshot;
use log::{debug, error, warn};
use std::collections::BTreeMap;
use std::fmt;

pub struct InputController<G: InputGateway> {
    gateway: G,
    action_set: ActionSet,
    /// Indexed by [`Feature::index`].
    actions: Vec<Action>,
    active_sets: Vec<ActiveActionSet>,
}

impl<G: InputGateway> InputController<G> {
    /// Load the manifest (if configured), resolve the action set and every
    /// feature action, and install the active-set descriptor.
    pub fn new(mut gateway: G, config: &InputConfig) -> Self {
        if let Some(path) = &config.manifest_path {
            if let Err(e) = gateway.set_action_manifest_path(path) {
                error!(
                    "Failed to load action manifest {}. Runtime error: {e} (code {})",
                    path.display(),
                    e.code()
                );
            }
        }

        let action_set = ActionSet::new(config.action_set.as_str(), &mut gateway);
        let actions = Feature::ALL
            .iter()
            .map(|&feature| {
                Action::new(config.action_name(feature), ActionType::Digital, &mut gateway)
            })
            .collect();

        let active_sets =
            vec![ActiveActionSet::new(action_set.handle()).with_priority(config.priority)];

        debug!(
            "Input controller ready: set {} ({} actions)",
            action_set.name(),
            Feature::ALL.len()
        );

        Self {
            gateway,
            action_set,
            actions,
            active_sets,
        }
    }

    pub fn with_defaults(gateway: G) -> Self {
        Self::new(gateway, &InputConfig::default())
    }

    /// Recompute action state for the active set. Call once per tick.
    ///
    /// A failed update is logged; queries this tick then observe the runtime's
    /// previous state.
    pub fn refresh(&mut self) {
        if let Err(e) = self.gateway.update_action_state(&self.active_sets) {
            error!(
                "Error during action state update. Runtime error: {e} (code {})",
                e.code()
            );
        }
    }

    /// Fetch the feature's action and interpret it with the feature's activation mode.
    pub fn query(&mut self, feature: Feature) -> Result<bool, InputError> {
        let action = &self.actions[feature.index()];
        let data = fetch_digital(&mut self.gateway, action)?;
        Ok(feature.activation().interpret(&data))
    }

    /// Evaluate every feature once for the current tick.
    pub fn snapshot(&mut self) -> Result<Snapshot, InputError> {
        let mut states = BTreeMap::new();
        for feature in Feature::ALL {
            states.insert(feature, self.query(feature)?);
        }
        Ok(Snapshot(states))
    }

    /// `true` on the tick the next-track button is pressed.
    pub fn next_song(&mut self) -> Result<bool, InputError> {
        self.query(Feature::NextTrack)
    }

    /// `true` on the tick the previous-track button is pressed.
    pub fn previous_song(&mut self) -> Result<bool, InputError> {
        self.query(Feature::PreviousTrack)
    }

    /// `true` on the tick the pause/play button is pressed.
    pub fn pause_play_song(&mut self) -> Result<bool, InputError> {
        self.query(Feature::PausePlayTrack)
    }

    /// `true` on the tick the stop button is pressed.
    pub fn stop_song(&mut self) -> Result<bool, InputError> {
        self.query(Feature::StopTrack)
    }

    pub fn left_hand_playspace_rotate(&mut self) -> Result<bool, InputError> {
        self.query(Feature::LeftHandPlayspaceRotate)
    }

    pub fn right_hand_playspace_rotate(&mut self) -> Result<bool, InputError> {
        self.query(Feature::RightHandPlayspaceRotate)
    }

    pub fn left_hand_playspace_move(&mut self) -> Result<bool, InputError> {
        self.query(Feature::LeftHandPlayspaceMove)
    }

    pub fn right_hand_playspace_move(&mut self) -> Result<bool, InputError> {
        self.query(Feature::RightHandPlayspaceMove)
    }

    pub fn optional_override_left_hand_playspace_rotate(&mut self) -> Result<bool, InputError> {
        self.query(Feature::OptionalOverrideLeftHandPlayspaceRotate)
    }

    pub fn optional_override_right_hand_playspace_rotate(&mut self) -> Result<bool, InputError> {
        self.query(Feature::OptionalOverrideRightHandPlayspaceRotate)
    }

    pub fn optional_override_left_hand_playspace_move(&mut self) -> Result<bool, InputError> {
        self.query(Feature::OptionalOverrideLeftHandPlayspaceMove)
    }

    pub fn optional_override_right_hand_playspace_move(&mut self) -> Result<bool, InputError> {
        self.query(Feature::OptionalOverrideRightHandPlayspaceMove)
    }

    /// `true` every tick the push-to-talk button is held.
    pub fn push_to_talk(&mut self) -> Result<bool, InputError> {
        self.query(Feature::PushToTalk)
    }

    /// Check the controller's wiring against the runtime's action manifest.
    ///
    /// Every issue is also logged as a warning.
    pub fn validate(&self, manifest: &ActionManifest) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if !self.action_set.is_resolved() {
            issues.push(ValidationIssue::UnresolvedActionSet {
                name: self.action_set.name().to_string(),
            });
        }
        if !manifest.has_action_set(self.action_set.name()) {
            issues.push(ValidationIssue::ActionSetNotInManifest {
                name: self.action_set.name().to_string(),
            });
        }

        for (feature, action) in Feature::ALL.iter().zip(&self.actions) {
            if !action.is_resolved() {
                issues.push(ValidationIssue::UnresolvedAction {
                    feature: *feature,
                    name: action.name().to_string(),
                });
            }

            match manifest.find_action(action.name()) {
                None => issues.push(ValidationIssue::NotInManifest {
                    feature: *feature,
                    name: action.name().to_string(),
                }),
                Some(entry) if entry.action_type.action_type() != Some(action.action_type()) => {
                    issues.push(ValidationIssue::TypeMismatch {
                        feature: *feature,
                        name: action.name().to_string(),
                        declared: action.action_type(),
                        manifest: entry.action_type,
                    })
                }
                Some(_) => {}
            }
        }

        for issue in &issues {
            warn!("Input validation: {issue}");
        }

        issues
    }

    pub fn action(&self, feature: Feature) -> &Action {
        &self.actions[feature.index()]
    }

    pub fn action_set(&self) -> &ActionSet {
        &self.action_set
    }

    pub fn active_sets(&self) -> &[ActiveActionSet] {
        &self.active_sets
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    pub fn into_gateway(self) -> G {
        self.gateway
    }
}

/// A wiring problem found by [`InputController::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    UnresolvedActionSet {
        name: String,
    },
    ActionSetNotInManifest {
        name: String,
    },
    UnresolvedAction {
        feature: Feature,
        name: String,
    },
    NotInManifest {
        feature: Feature,
        name: String,
    },
    TypeMismatch {
        feature: Feature,
        name: String,
        declared: ActionType,
        manifest: ManifestActionType,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::UnresolvedActionSet { name } => {
                write!(f, "action set {name} has no runtime handle")
            }
            ValidationIssue::ActionSetNotInManifest { name } => {
                write!(f, "action set {name} is not declared in the manifest")
            }
            ValidationIssue::UnresolvedAction { feature, name } => {
                write!(f, "{feature}: action {name} has no runtime handle")
            }
            ValidationIssue::NotInManifest { feature, name } => {
                write!(f, "{feature}: action {name} is not declared in the manifest")
            }
            ValidationIssue::TypeMismatch {
                feature,
                name,
                declared,
                manifest,
            } => write!(
                f,
                "{feature}: action {name} is used as {declared:?} but the manifest declares {manifest:?}"
            ),
        }
    }
}
