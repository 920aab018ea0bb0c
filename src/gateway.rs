use crate::action::{ActionHandle, ActionSetHandle, DeviceRestriction};
use crate::data::{ActiveActionSet, AnalogActionData, DigitalActionData};
use crate::error::GatewayError;
use std::path::Path;

/// The device-input runtime that owns the real action state.
///
/// Implemented by runtime bindings and by [`VirtualRuntime`] for tests and demos.
/// Every call is a single synchronous round-trip; a non-success result code is
/// reported as `Err`.
///
/// [`VirtualRuntime`]: crate::backends::virtual_runtime::VirtualRuntime
pub trait InputGateway {
    /// Load the action manifest the runtime resolves names against.
    fn set_action_manifest_path(&mut self, path: &Path) -> Result<(), GatewayError>;

    fn action_set_handle(&mut self, name: &str) -> Result<ActionSetHandle, GatewayError>;

    fn action_handle(&mut self, name: &str) -> Result<ActionHandle, GatewayError>;

    fn digital_action_data(
        &mut self,
        action: ActionHandle,
        restrict: DeviceRestriction,
    ) -> Result<DigitalActionData, GatewayError>;

    fn analog_action_data(
        &mut self,
        action: ActionHandle,
        restrict: DeviceRestriction,
    ) -> Result<AnalogActionData, GatewayError>;

    /// Recompute action state for the given sets. Call once per tick.
    fn update_action_state(&mut self, sets: &[ActiveActionSet]) -> Result<(), GatewayError>;
}

impl<G: InputGateway + ?Sized> InputGateway for &mut G {
    fn set_action_manifest_path(&mut self, path: &Path) -> Result<(), GatewayError> {
        (**self).set_action_manifest_path(path)
    }

    fn action_set_handle(&mut self, name: &str) -> Result<ActionSetHandle, GatewayError> {
        (**self).action_set_handle(name)
    }

    fn action_handle(&mut self, name: &str) -> Result<ActionHandle, GatewayError> {
        (**self).action_handle(name)
    }

    fn digital_action_data(
        &mut self,
        action: ActionHandle,
        restrict: DeviceRestriction,
    ) -> Result<DigitalActionData, GatewayError> {
        (**self).digital_action_data(action, restrict)
    }

    fn analog_action_data(
        &mut self,
        action: ActionHandle,
        restrict: DeviceRestriction,
    ) -> Result<AnalogActionData, GatewayError> {
        (**self).analog_action_data(action, restrict)
    }

    fn update_action_state(&mut self, sets: &[ActiveActionSet]) -> Result<(), GatewayError> {
        (**self).update_action_state(sets)
    }
}

impl<G: InputGateway + ?Sized> InputGateway for Box<G> {
    fn set_action_manifest_path(&mut self, path: &Path) -> Result<(), GatewayError> {
        (**self).set_action_manifest_path(path)
    }

    fn action_set_handle(&mut self, name: &str) -> Result<ActionSetHandle, GatewayError> {
        (**self).action_set_handle(name)
    }

    fn action_handle(&mut self, name: &str) -> Result<ActionHandle, GatewayError> {
        (**self).action_handle(name)
    }

    fn digital_action_data(
        &mut self,
        action: ActionHandle,
        restrict: DeviceRestriction,
    ) -> Result<DigitalActionData, GatewayError> {
        (**self).digital_action_data(action, restrict)
    }

    fn analog_action_data(
        &mut self,
        action: ActionHandle,
        restrict: DeviceRestriction,
    ) -> Result<AnalogActionData, GatewayError> {
        (**self).analog_action_data(action, restrict)
    }

    fn update_action_state(&mut self, sets: &[ActiveActionSet]) -> Result<(), GatewayError> {
        (**self).update_action_state(sets)
    }
}
