//! Per-tick action data and active-set descriptors.
//!
//! The runtime recomputes action state once per [`update_action_state`] call and
//! hands back small value structs on every fetch. Nothing in this crate keeps
//! them across ticks; the runtime tracks the previous tick itself, which is how
//! [`DigitalActionData::changed`] is derived.
//!
//! ## Value conventions
//! - **Digital:** `state` is the current level, `changed` is `true` only on the
//!   tick where `state` differs from the previous tick.
//! - **Analog:** axes as reported by the runtime (sticks are typically `[-1.0, 1.0]`,
//!   triggers `[0.0, 1.0]`). Deltas are relative to the previous tick.
//!
//! The `Default` value of both structs is the "nothing happened" value returned
//! when the runtime call fails.
//!
//! [`update_action_state`]: crate::gateway::InputGateway::update_action_state

use crate::action::{ActionSetHandle, DeviceRestriction};

/// State of a digital (button) action for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitalActionData {
    /// The action is bound and its set is active.
    pub active: bool,
    /// Current logical level (pressed).
    pub state: bool,
    /// `state` differs from the previous tick.
    pub changed: bool,
}

/// State of an analog action for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalogActionData {
    /// The action is bound and its set is active.
    pub active: bool,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub delta_x: f32,
    pub delta_y: f32,
    pub delta_z: f32,
}

/// Describes one action set to activate for the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveActionSet {
    pub set: ActionSetHandle,
    /// Limit the set to one input source.
    pub restricted_to: DeviceRestriction,
    /// Higher priorities win when sets bind the same input.
    pub priority: i32,
}

impl ActiveActionSet {
    /// Unrestricted descriptor with priority `0`.
    pub fn new(set: ActionSetHandle) -> Self {
        Self {
            set,
            restricted_to: DeviceRestriction::Unrestricted,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
