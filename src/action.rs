//! Named actions and action sets.
//!
//! An [`Action`] is one input declared in the runtime's action manifest, identified
//! by a stable path such as `/actions/main/in/NextTrack`. The runtime only
//! understands opaque handles, so every action resolves its name to an
//! [`ActionHandle`] once, when it is constructed.
//!
//! Resolution failures are not fatal. The handle stays [`ActionHandle::INVALID`],
//! the failure is logged, and every later fetch against it fails at the runtime
//! (and is logged again) rather than panicking.

use crate::gateway::InputGateway;
use log::error;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of data an action produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    /// On/off button state.
    Digital,
    /// One to three continuous axes.
    Analog,
}

/// Opaque runtime handle for an action. `0` is never a valid handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ActionHandle(pub u64);

impl ActionHandle {
    pub const INVALID: Self = Self(0);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Opaque runtime handle for an action set. `0` is never a valid handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ActionSetHandle(pub u64);

impl ActionSetHandle {
    pub const INVALID: Self = Self(0);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// Opaque runtime handle for an input source (a controller, a hand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputValueHandle(pub u64);

/// Which input source a request applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DeviceRestriction {
    /// Whichever device the action is currently bound to.
    #[default]
    Unrestricted,
    /// Only the given source.
    Device(InputValueHandle),
}

/// A single named, typed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    name: String,
    action_type: ActionType,
    handle: ActionHandle,
}

impl Action {
    /// Declare an action and resolve its runtime handle.
    pub fn new<G: InputGateway + ?Sized>(
        name: impl Into<String>,
        action_type: ActionType,
        gateway: &mut G,
    ) -> Self {
        let name = name.into();
        let handle = match gateway.action_handle(&name) {
            Ok(handle) => handle,
            Err(e) => {
                error!(
                    "Failed to resolve action handle for {name}. Runtime error: {e} (code {})",
                    e.code()
                );
                ActionHandle::INVALID
            }
        };

        Self {
            name,
            action_type,
            handle,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn action_type(&self) -> ActionType {
        self.action_type
    }

    pub fn handle(&self) -> ActionHandle {
        self.handle
    }

    pub fn is_resolved(&self) -> bool {
        self.handle.is_valid()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.name, self.action_type)
    }
}

/// A named group of actions that the runtime activates together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSet {
    name: String,
    handle: ActionSetHandle,
}

impl ActionSet {
    /// Declare an action set and resolve its runtime handle.
    pub fn new<G: InputGateway + ?Sized>(name: impl Into<String>, gateway: &mut G) -> Self {
        let name = name.into();
        let handle = match gateway.action_set_handle(&name) {
            Ok(handle) => handle,
            Err(e) => {
                error!(
                    "Failed to resolve action set handle for {name}. Runtime error: {e} (code {})",
                    e.code()
                );
                ActionSetHandle::INVALID
            }
        };

        Self { name, handle }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handle(&self) -> ActionSetHandle {
        self.handle
    }

    pub fn is_resolved(&self) -> bool {
        self.handle.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ActiveActionSet, AnalogActionData, DigitalActionData};
    use crate::error::GatewayError;
    use std::path::Path;

    /// Resolves every name except the ones listed in `missing`.
    struct Names {
        missing: Vec<&'static str>,
        next: u64,
    }

    impl Names {
        fn resolve(&mut self, name: &str) -> Result<u64, GatewayError> {
            if self.missing.contains(&name) {
                return Err(GatewayError::NameNotFound);
            }
            self.next += 1;
            Ok(self.next)
        }
    }

    impl InputGateway for Names {
        fn set_action_manifest_path(&mut self, _path: &Path) -> Result<(), GatewayError> {
            Ok(())
        }

        fn action_set_handle(&mut self, name: &str) -> Result<ActionSetHandle, GatewayError> {
            self.resolve(name).map(ActionSetHandle)
        }

        fn action_handle(&mut self, name: &str) -> Result<ActionHandle, GatewayError> {
            self.resolve(name).map(ActionHandle)
        }

        fn digital_action_data(
            &mut self,
            _action: ActionHandle,
            _restrict: DeviceRestriction,
        ) -> Result<DigitalActionData, GatewayError> {
            Err(GatewayError::NoData)
        }

        fn analog_action_data(
            &mut self,
            _action: ActionHandle,
            _restrict: DeviceRestriction,
        ) -> Result<AnalogActionData, GatewayError> {
            Err(GatewayError::NoData)
        }

        fn update_action_state(&mut self, _sets: &[ActiveActionSet]) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    #[test]
    fn resolves_handle_at_construction() {
        let mut gw = Names {
            missing: vec![],
            next: 0,
        };
        let action = Action::new("/actions/main/in/StopTrack", ActionType::Digital, &mut gw);
        assert_eq!(action.name(), "/actions/main/in/StopTrack");
        assert_eq!(action.action_type(), ActionType::Digital);
        assert_eq!(action.handle(), ActionHandle(1));
        assert!(action.is_resolved());
    }

    #[test]
    fn failed_resolution_leaves_invalid_handle() {
        let mut gw = Names {
            missing: vec!["/actions/main/in/Typo", "/actions/typo"],
            next: 0,
        };
        let action = Action::new("/actions/main/in/Typo", ActionType::Analog, &mut gw);
        assert_eq!(action.handle(), ActionHandle::INVALID);
        assert!(!action.is_resolved());

        let set = ActionSet::new("/actions/typo", &mut gw);
        assert_eq!(set.handle(), ActionSetHandle::INVALID);
        assert!(!set.is_resolved());
    }

    #[test]
    fn default_restriction_is_unrestricted() {
        assert_eq!(DeviceRestriction::default(), DeviceRestriction::Unrestricted);
    }
}
