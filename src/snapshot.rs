//! Per-tick snapshot of every feature.
//!
//! [`Snapshot`] is an **owned**, read-only view of all features at one tick,
//! produced by [`InputController::snapshot`](crate::controller::InputController::snapshot).
//! It is cheap to clone for fan-out to several consumers within the tick.
//!
//! # Semantics
//! - Values are already interpreted: a one-shot feature is `true` only on the
//!   tick its button went down.
//! - Taking a snapshot fetches every feature once. It does **not** refresh; call
//!   `refresh()` first.
//! - Do not keep a snapshot past its tick. Edge-triggered values are only
//!   meaningful for the tick they were taken in.
//!
//! # Example
//! ```ignore
//! controller.refresh();
//! let snap = controller.snapshot()?;
//! for feature in snap.active() {
//!     println!("{feature} is active");
//! }
//! ```

use crate::feature::Feature;
use serde::Serialize;
use std::collections::BTreeMap;

/// Owned snapshot of interpreted feature states (`feature → active`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot(pub BTreeMap<Feature, bool>);

impl Snapshot {
    /// State of `feature`, if it was evaluated.
    #[inline]
    pub fn get(&self, feature: Feature) -> Option<bool> {
        self.0.get(&feature).copied()
    }

    /// `true` if `feature` is active in this snapshot (`false` if missing).
    #[inline]
    pub fn is_active(&self, feature: Feature) -> bool {
        self.get(feature).unwrap_or(false)
    }

    /// Iterate `(feature, active)` pairs in catalog order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Feature, bool)> + '_ {
        self.0.iter().map(|(&feature, &active)| (feature, active))
    }

    /// Features active in this snapshot, in catalog order.
    pub fn active(&self) -> impl Iterator<Item = Feature> + '_ {
        self.iter()
            .filter_map(|(feature, active)| active.then_some(feature))
    }

    /// Consume the snapshot and return the inner map.
    #[inline]
    pub fn into_inner(self) -> BTreeMap<Feature, bool> {
        self.0
    }
}
