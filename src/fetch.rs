//! Single round-trips to the runtime for one action's data.
//!
//! The two failure kinds are handled asymmetrically:
//! - asking for the wrong data type is a wiring bug, so it is logged and returned
//!   as [`InputError::TypeMismatch`] before the runtime is touched;
//! - a runtime error is expected now and then, so it is logged once and the zero
//!   value is returned ("not pressed" for buttons).

use crate::action::{Action, ActionType, DeviceRestriction};
use crate::data::{AnalogActionData, DigitalActionData};
use crate::error::InputError;
use crate::gateway::InputGateway;
use log::error;

/// Fetch this tick's state of a digital action.
pub fn fetch_digital<G: InputGateway + ?Sized>(
    gateway: &mut G,
    action: &Action,
) -> Result<DigitalActionData, InputError> {
    ensure_type(action, ActionType::Digital)?;

    match gateway.digital_action_data(action.handle(), DeviceRestriction::Unrestricted) {
        Ok(data) => Ok(data),
        Err(e) => {
            error!(
                "Error getting digital action data for {}. Runtime error: {} (code {})",
                action.name(),
                e,
                e.code()
            );
            Ok(DigitalActionData::default())
        }
    }
}

/// Fetch this tick's state of an analog action.
pub fn fetch_analog<G: InputGateway + ?Sized>(
    gateway: &mut G,
    action: &Action,
) -> Result<AnalogActionData, InputError> {
    ensure_type(action, ActionType::Analog)?;

    match gateway.analog_action_data(action.handle(), DeviceRestriction::Unrestricted) {
        Ok(data) => Ok(data),
        Err(e) => {
            error!(
                "Error getting analog action data for {}. Runtime error: {} (code {})",
                action.name(),
                e,
                e.code()
            );
            Ok(AnalogActionData::default())
        }
    }
}

fn ensure_type(action: &Action, requested: ActionType) -> Result<(), InputError> {
    if action.action_type() == requested {
        return Ok(());
    }

    error!(
        "Action was passed to the {:?} fetch without being a {:?} type. Action: {}",
        requested,
        requested,
        action.name()
    );

    Err(InputError::TypeMismatch {
        action: action.name().to_string(),
        declared: action.action_type(),
        requested,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionHandle, ActionSetHandle};
    use crate::data::ActiveActionSet;
    use crate::error::GatewayError;
    use std::path::Path;

    /// Replies with a fixed result and counts data requests.
    struct Fixed {
        digital: Result<DigitalActionData, GatewayError>,
        analog: Result<AnalogActionData, GatewayError>,
        calls: usize,
        last_restrict: Option<DeviceRestriction>,
    }

    impl Fixed {
        fn ok() -> Self {
            Self {
                digital: Ok(DigitalActionData {
                    active: true,
                    state: true,
                    changed: true,
                }),
                analog: Ok(AnalogActionData {
                    active: true,
                    x: 0.5,
                    ..Default::default()
                }),
                calls: 0,
                last_restrict: None,
            }
        }

        fn failing(err: GatewayError) -> Self {
            Self {
                digital: Err(err),
                analog: Err(err),
                calls: 0,
                last_restrict: None,
            }
        }
    }

    impl InputGateway for Fixed {
        fn set_action_manifest_path(&mut self, _path: &Path) -> Result<(), GatewayError> {
            Ok(())
        }

        fn action_set_handle(&mut self, _name: &str) -> Result<ActionSetHandle, GatewayError> {
            Ok(ActionSetHandle(1))
        }

        fn action_handle(&mut self, _name: &str) -> Result<ActionHandle, GatewayError> {
            Ok(ActionHandle(7))
        }

        fn digital_action_data(
            &mut self,
            _action: ActionHandle,
            restrict: DeviceRestriction,
        ) -> Result<DigitalActionData, GatewayError> {
            self.calls += 1;
            self.last_restrict = Some(restrict);
            self.digital
        }

        fn analog_action_data(
            &mut self,
            _action: ActionHandle,
            restrict: DeviceRestriction,
        ) -> Result<AnalogActionData, GatewayError> {
            self.calls += 1;
            self.last_restrict = Some(restrict);
            self.analog
        }

        fn update_action_state(&mut self, _sets: &[ActiveActionSet]) -> Result<(), GatewayError> {
            Ok(())
        }
    }

    #[test]
    fn digital_fetch_passes_data_through_unrestricted() {
        let mut gw = Fixed::ok();
        let action = Action::new("/actions/main/in/NextTrack", ActionType::Digital, &mut gw);

        let data = fetch_digital(&mut gw, &action).unwrap();
        assert!(data.state && data.changed);
        assert_eq!(gw.calls, 1);
        assert_eq!(gw.last_restrict, Some(DeviceRestriction::Unrestricted));
    }

    #[test]
    fn digital_fetch_on_analog_action_skips_runtime() {
        let mut gw = Fixed::ok();
        let action = Action::new("/actions/main/in/Throttle", ActionType::Analog, &mut gw);

        let err = fetch_digital(&mut gw, &action).unwrap_err();
        assert_eq!(
            err,
            InputError::TypeMismatch {
                action: "/actions/main/in/Throttle".into(),
                declared: ActionType::Analog,
                requested: ActionType::Digital,
            }
        );
        assert_eq!(gw.calls, 0);
    }

    #[test]
    fn analog_fetch_on_digital_action_skips_runtime() {
        let mut gw = Fixed::ok();
        let action = Action::new("/actions/main/in/StopTrack", ActionType::Digital, &mut gw);

        let err = fetch_analog(&mut gw, &action).unwrap_err();
        assert!(matches!(
            err,
            InputError::TypeMismatch {
                declared: ActionType::Digital,
                requested: ActionType::Analog,
                ..
            }
        ));
        assert_eq!(gw.calls, 0);
    }

    #[test]
    fn runtime_errors_degrade_to_zero_values() {
        let mut gw = Fixed::failing(GatewayError::IpcError);
        let button = Action::new("/actions/main/in/PushToTalk", ActionType::Digital, &mut gw);
        let stick = Action::new("/actions/main/in/Scroll", ActionType::Analog, &mut gw);

        assert_eq!(
            fetch_digital(&mut gw, &button).unwrap(),
            DigitalActionData::default()
        );
        assert_eq!(
            fetch_analog(&mut gw, &stick).unwrap(),
            AnalogActionData::default()
        );
        assert_eq!(gw.calls, 2);
    }

    #[test]
    fn analog_fetch_returns_axes() {
        let mut gw = Fixed::ok();
        let stick = Action::new("/actions/main/in/Scroll", ActionType::Analog, &mut gw);

        let data = fetch_analog(&mut gw, &stick).unwrap();
        assert!(data.active);
        assert_eq!(data.x, 0.5);
    }
}
