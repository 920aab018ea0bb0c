//! Edge and level interpretation of digital action data.
//!
//! - [`activated_once`] fires on the tick a button goes down and stays `false`
//!   while it is held. Release and press again to fire again.
//! - [`activated_constant`] fires on every tick the button is down.

use crate::action::Action;
use crate::data::DigitalActionData;
use crate::error::InputError;
use crate::fetch::fetch_digital;
use crate::gateway::InputGateway;
use serde::{Deserialize, Serialize};

/// How a feature reads its button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// Edge: one-shot on press.
    Once,
    /// Level: while held.
    Constant,
}

impl Activation {
    #[inline]
    pub fn interpret(self, data: &DigitalActionData) -> bool {
        match self {
            Activation::Once => activated_once(data),
            Activation::Constant => activated_constant(data),
        }
    }
}

#[inline]
pub fn activated_once(data: &DigitalActionData) -> bool {
    data.state && data.changed
}

#[inline]
pub fn activated_constant(data: &DigitalActionData) -> bool {
    data.state
}

/// Fetch `action` and report whether it was pressed this tick.
pub fn is_activated_once<G: InputGateway + ?Sized>(
    gateway: &mut G,
    action: &Action,
) -> Result<bool, InputError> {
    fetch_digital(gateway, action).map(|data| activated_once(&data))
}

/// Fetch `action` and report whether it is held this tick.
pub fn is_activated_constant<G: InputGateway + ?Sized>(
    gateway: &mut G,
    action: &Action,
) -> Result<bool, InputError> {
    fetch_digital(gateway, action).map(|data| activated_constant(&data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(state: bool, changed: bool) -> DigitalActionData {
        DigitalActionData {
            active: true,
            state,
            changed,
        }
    }

    #[test]
    fn once_fires_only_on_press_edge() {
        assert!(activated_once(&data(true, true)));
        assert!(!activated_once(&data(true, false)));
        assert!(!activated_once(&data(false, true)));
        assert!(!activated_once(&data(false, false)));
    }

    #[test]
    fn constant_follows_state() {
        for changed in [false, true] {
            assert!(activated_constant(&data(true, changed)));
            assert!(!activated_constant(&data(false, changed)));
        }
    }

    #[test]
    fn interpret_dispatches_on_mode() {
        let held = data(true, false);
        assert!(!Activation::Once.interpret(&held));
        assert!(Activation::Constant.interpret(&held));
    }
}
