//! Catalog of the application features driven by input actions.
//!
//! Each [`Feature`] knows the manifest action it reads and whether it is a
//! one-shot command ([`Activation::Once`]) or a hold-to-use control
//! ([`Activation::Constant`]). The controller evaluates every feature through
//! this table, so adding a feature means adding a variant and its two rows here.

use crate::activation::Activation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Action set every catalog action belongs to.
pub const DEFAULT_ACTION_SET: &str = "/actions/main";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    NextTrack,
    PreviousTrack,
    PausePlayTrack,
    StopTrack,
    LeftHandPlayspaceRotate,
    RightHandPlayspaceRotate,
    LeftHandPlayspaceMove,
    RightHandPlayspaceMove,
    OptionalOverrideLeftHandPlayspaceRotate,
    OptionalOverrideRightHandPlayspaceRotate,
    OptionalOverrideLeftHandPlayspaceMove,
    OptionalOverrideRightHandPlayspaceMove,
    PushToTalk,
}

impl Feature {
    /// Every feature, in declaration order.
    pub const ALL: [Feature; 13] = [
        Feature::NextTrack,
        Feature::PreviousTrack,
        Feature::PausePlayTrack,
        Feature::StopTrack,
        Feature::LeftHandPlayspaceRotate,
        Feature::RightHandPlayspaceRotate,
        Feature::LeftHandPlayspaceMove,
        Feature::RightHandPlayspaceMove,
        Feature::OptionalOverrideLeftHandPlayspaceRotate,
        Feature::OptionalOverrideRightHandPlayspaceRotate,
        Feature::OptionalOverrideLeftHandPlayspaceMove,
        Feature::OptionalOverrideRightHandPlayspaceMove,
        Feature::PushToTalk,
    ];

    /// Position in [`Feature::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Default manifest path of the action backing this feature.
    pub fn action_name(self) -> &'static str {
        match self {
            Feature::NextTrack => "/actions/main/in/NextTrack",
            Feature::PreviousTrack => "/actions/main/in/PreviousTrack",
            Feature::PausePlayTrack => "/actions/main/in/PausePlayTrack",
            Feature::StopTrack => "/actions/main/in/StopTrack",
            Feature::LeftHandPlayspaceRotate => "/actions/main/in/LeftHandSpaceTurn",
            Feature::RightHandPlayspaceRotate => "/actions/main/in/RightHandSpaceTurn",
            Feature::LeftHandPlayspaceMove => "/actions/main/in/LeftHandSpaceDrag",
            Feature::RightHandPlayspaceMove => "/actions/main/in/RightHandSpaceDrag",
            Feature::OptionalOverrideLeftHandPlayspaceRotate => {
                "/actions/main/in/OptionalOverrideLeftHandSpaceTurn"
            }
            Feature::OptionalOverrideRightHandPlayspaceRotate => {
                "/actions/main/in/OptionalOverrideRightHandSpaceTurn"
            }
            Feature::OptionalOverrideLeftHandPlayspaceMove => {
                "/actions/main/in/OptionalOverrideLeftHandSpaceDrag"
            }
            Feature::OptionalOverrideRightHandPlayspaceMove => {
                "/actions/main/in/OptionalOverrideRightHandSpaceDrag"
            }
            Feature::PushToTalk => "/actions/main/in/PushToTalk",
        }
    }

    pub fn activation(self) -> Activation {
        match self {
            // Transport controls are discrete commands.
            Feature::NextTrack
            | Feature::PreviousTrack
            | Feature::PausePlayTrack
            | Feature::StopTrack => Activation::Once,
            Feature::LeftHandPlayspaceRotate
            | Feature::RightHandPlayspaceRotate
            | Feature::LeftHandPlayspaceMove
            | Feature::RightHandPlayspaceMove
            | Feature::OptionalOverrideLeftHandPlayspaceRotate
            | Feature::OptionalOverrideRightHandPlayspaceRotate
            | Feature::OptionalOverrideLeftHandPlayspaceMove
            | Feature::OptionalOverrideRightHandPlayspaceMove
            | Feature::PushToTalk => Activation::Constant,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
