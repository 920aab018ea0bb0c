//! In-memory input runtime.
//!
//! [`VirtualRuntime`] implements [`InputGateway`] without any hardware, which
//! makes it usable for demos, tests and headless runs. It behaves like the real
//! runtime in the ways the controller depends on:
//!
//! - handles are handed out for any name (names compare case-insensitively), so a
//!   typo is never reported at resolution time;
//! - raw button/axis state is staged with [`press`](VirtualRuntime::press),
//!   [`release`](VirtualRuntime::release) and [`set_axes`](VirtualRuntime::set_axes)
//!   and only becomes visible on the next
//!   [`update_action_state`](InputGateway::update_action_state), which also derives
//!   `changed` and the analog deltas from the previous tick;
//! - an action reads as inactive (all zero) unless its set is active, or, once a
//!   manifest is loaded, if the manifest does not declare it;
//! - fetching data of the wrong manifest type fails with `WrongType`.
//!
//! Failures can be scripted with [`fail_next_update`](VirtualRuntime::fail_next_update)
//! and [`fail_action`](VirtualRuntime::fail_action).

use crate::action::{ActionHandle, ActionSetHandle, ActionType, DeviceRestriction};
use crate::data::{ActiveActionSet, AnalogActionData, DigitalActionData};
use crate::error::GatewayError;
use crate::gateway::InputGateway;
use crate::manifest::ActionManifest;
use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Default)]
struct VirtualAction {
    name: String,
    pressed: bool,
    axes: [f32; 3],
    digital: DigitalActionData,
    analog: AnalogActionData,
    failure: Option<GatewayError>,
}

#[derive(Debug, Default)]
pub struct VirtualRuntime {
    manifest: Option<ActionManifest>,
    /// Handle `n` is index `n - 1`.
    sets: Vec<String>,
    actions: Vec<VirtualAction>,
    by_name: HashMap<String, usize>,
    next_update_failure: Option<GatewayError>,
    last_active_sets: Vec<ActiveActionSet>,
    update_count: usize,
    fetch_count: usize,
}

impl VirtualRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime with `manifest` already loaded.
    pub fn with_manifest(manifest: ActionManifest) -> Self {
        Self {
            manifest: Some(manifest),
            ..Self::default()
        }
    }

    pub fn manifest(&self) -> Option<&ActionManifest> {
        self.manifest.as_ref()
    }

    /// Stage a press; visible after the next update.
    pub fn press(&mut self, name: &str) {
        self.set_pressed(name, true);
    }

    /// Stage a release; visible after the next update.
    pub fn release(&mut self, name: &str) {
        self.set_pressed(name, false);
    }

    pub fn set_pressed(&mut self, name: &str, pressed: bool) {
        let idx = self.register(name);
        self.actions[idx].pressed = pressed;
    }

    /// Stage a single-axis value.
    pub fn set_axis(&mut self, name: &str, value: f32) {
        self.set_axes(name, [value, 0.0, 0.0]);
    }

    /// Stage all three axes of an analog action.
    pub fn set_axes(&mut self, name: &str, axes: [f32; 3]) {
        let idx = self.register(name);
        self.actions[idx].axes = axes;
    }

    /// Make the next `update_action_state` call fail with `err`.
    pub fn fail_next_update(&mut self, err: GatewayError) {
        self.next_update_failure = Some(err);
    }

    /// Make every data fetch for `name` fail with `err` until cleared.
    pub fn fail_action(&mut self, name: &str, err: GatewayError) {
        let idx = self.register(name);
        self.actions[idx].failure = Some(err);
    }

    pub fn clear_failure(&mut self, name: &str) {
        let idx = self.register(name);
        self.actions[idx].failure = None;
    }

    /// Number of `update_action_state` calls, successful or not.
    pub fn update_count(&self) -> usize {
        self.update_count
    }

    /// Number of digital and analog data requests.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }

    /// Descriptors passed to the most recent successful update.
    pub fn last_active_sets(&self) -> &[ActiveActionSet] {
        &self.last_active_sets
    }

    fn register(&mut self, name: &str) -> usize {
        let key = name.to_lowercase();
        if let Some(&idx) = self.by_name.get(&key) {
            return idx;
        }

        let idx = self.actions.len();
        self.actions.push(VirtualAction {
            name: name.to_string(),
            ..VirtualAction::default()
        });
        self.by_name.insert(key, idx);
        idx
    }

    fn action_index(&self, handle: ActionHandle) -> Result<usize, GatewayError> {
        let idx = (handle.0 as usize)
            .checked_sub(1)
            .ok_or(GatewayError::InvalidHandle)?;
        if idx < self.actions.len() {
            Ok(idx)
        } else {
            Err(GatewayError::InvalidHandle)
        }
    }

    /// Type the loaded manifest declares for `name`. `None` without a manifest.
    fn declared(&self, name: &str) -> Option<Option<ActionType>> {
        self.manifest
            .as_ref()
            .map(|m| m.find_action(name).and_then(|a| a.action_type.action_type()))
    }

    fn check_fetch(
        &mut self,
        action: ActionHandle,
        restrict: DeviceRestriction,
        requested: ActionType,
    ) -> Result<usize, GatewayError> {
        self.fetch_count += 1;

        let idx = self.action_index(action)?;
        if let DeviceRestriction::Device(_) = restrict {
            return Err(GatewayError::InvalidDevice);
        }
        if let Some(err) = self.actions[idx].failure {
            return Err(err);
        }
        if let Some(Some(declared)) = self.declared(&self.actions[idx].name) {
            if declared != requested {
                return Err(GatewayError::WrongType);
            }
        }
        Ok(idx)
    }

    fn is_live(&self, action: &VirtualAction, active_sets: &[String]) -> bool {
        let in_active_set = active_sets.iter().any(|set| {
            action
                .name
                .to_lowercase()
                .starts_with(&format!("{}/", set.to_lowercase()))
        });
        let declared = match self.declared(&action.name) {
            None => true,
            Some(ty) => ty.is_some(),
        };
        in_active_set && declared
    }
}

impl InputGateway for VirtualRuntime {
    fn set_action_manifest_path(&mut self, path: &Path) -> Result<(), GatewayError> {
        match ActionManifest::load(path) {
            Ok(manifest) => {
                debug!(
                    "Virtual runtime loaded manifest {} ({} actions)",
                    path.display(),
                    manifest.actions.len()
                );
                self.manifest = Some(manifest);
                Ok(())
            }
            Err(e) => {
                warn!("Virtual runtime rejected manifest {}: {e}", path.display());
                Err(GatewayError::MismatchedActionManifest)
            }
        }
    }

    fn action_set_handle(&mut self, name: &str) -> Result<ActionSetHandle, GatewayError> {
        let idx = match self.sets.iter().position(|s| s.eq_ignore_ascii_case(name)) {
            Some(idx) => idx,
            None => {
                self.sets.push(name.to_string());
                self.sets.len() - 1
            }
        };
        Ok(ActionSetHandle(idx as u64 + 1))
    }

    fn action_handle(&mut self, name: &str) -> Result<ActionHandle, GatewayError> {
        Ok(ActionHandle(self.register(name) as u64 + 1))
    }

    fn digital_action_data(
        &mut self,
        action: ActionHandle,
        restrict: DeviceRestriction,
    ) -> Result<DigitalActionData, GatewayError> {
        let idx = self.check_fetch(action, restrict, ActionType::Digital)?;
        Ok(self.actions[idx].digital)
    }

    fn analog_action_data(
        &mut self,
        action: ActionHandle,
        restrict: DeviceRestriction,
    ) -> Result<AnalogActionData, GatewayError> {
        let idx = self.check_fetch(action, restrict, ActionType::Analog)?;
        Ok(self.actions[idx].analog)
    }

    fn update_action_state(&mut self, sets: &[ActiveActionSet]) -> Result<(), GatewayError> {
        self.update_count += 1;

        if let Some(err) = self.next_update_failure.take() {
            return Err(err);
        }
        if sets.is_empty() {
            return Err(GatewayError::NoActiveActionSet);
        }

        let mut active = Vec::with_capacity(sets.len());
        for descriptor in sets {
            let name = (descriptor.set.0 as usize)
                .checked_sub(1)
                .and_then(|idx| self.sets.get(idx))
                .ok_or(GatewayError::InvalidHandle)?;
            active.push(name.clone());
        }

        let live: Vec<bool> = self
            .actions
            .iter()
            .map(|action| self.is_live(action, &active))
            .collect();

        for (action, live) in self.actions.iter_mut().zip(live) {
            let state = live && action.pressed;
            action.digital = DigitalActionData {
                active: live,
                state,
                changed: state != action.digital.state,
            };

            let [x, y, z] = if live { action.axes } else { [0.0; 3] };
            let prev = action.analog;
            action.analog = AnalogActionData {
                active: live,
                x,
                y,
                z,
                delta_x: x - prev.x,
                delta_y: y - prev.y,
                delta_z: z - prev.z,
            };
        }

        self.last_active_sets = sets.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{ManifestAction, ManifestActionSet, ManifestActionType};

    const NEXT: &str = "/actions/main/in/NextTrack";
    const SCROLL: &str = "/actions/main/in/Scroll";

    fn main_set(rt: &mut VirtualRuntime) -> Vec<ActiveActionSet> {
        let set = rt.action_set_handle("/actions/main").unwrap();
        vec![ActiveActionSet::new(set)]
    }

    fn digital(rt: &mut VirtualRuntime, name: &str) -> DigitalActionData {
        let handle = rt.action_handle(name).unwrap();
        rt.digital_action_data(handle, DeviceRestriction::Unrestricted)
            .unwrap()
    }

    #[test]
    fn handles_are_stable_and_case_insensitive() {
        let mut rt = VirtualRuntime::new();
        let a = rt.action_handle(NEXT).unwrap();
        let b = rt.action_handle("/actions/main/in/nexttrack").unwrap();
        assert_eq!(a, b);
        assert!(a.is_valid());
        assert_ne!(rt.action_handle(SCROLL).unwrap(), a);

        let s1 = rt.action_set_handle("/actions/main").unwrap();
        let s2 = rt.action_set_handle("/Actions/Main").unwrap();
        assert_eq!(s1, s2);
    }

    #[test]
    fn staged_state_is_latched_on_update() {
        let mut rt = VirtualRuntime::new();
        let sets = main_set(&mut rt);

        rt.press(NEXT);
        assert!(!digital(&mut rt, NEXT).state);

        rt.update_action_state(&sets).unwrap();
        let data = digital(&mut rt, NEXT);
        assert!(data.active && data.state && data.changed);

        rt.update_action_state(&sets).unwrap();
        let data = digital(&mut rt, NEXT);
        assert!(data.state && !data.changed);

        rt.release(NEXT);
        rt.update_action_state(&sets).unwrap();
        let data = digital(&mut rt, NEXT);
        assert!(!data.state && data.changed);
    }

    #[test]
    fn actions_outside_active_sets_read_inactive() {
        let mut rt = VirtualRuntime::new();
        let other = rt.action_set_handle("/actions/other").unwrap();

        rt.press(NEXT);
        rt.update_action_state(&[ActiveActionSet::new(other)]).unwrap();
        assert_eq!(digital(&mut rt, NEXT), DigitalActionData::default());
    }

    #[test]
    fn update_rejects_empty_and_unknown_sets() {
        let mut rt = VirtualRuntime::new();
        assert_eq!(
            rt.update_action_state(&[]),
            Err(GatewayError::NoActiveActionSet)
        );
        assert_eq!(
            rt.update_action_state(&[ActiveActionSet::new(ActionSetHandle(99))]),
            Err(GatewayError::InvalidHandle)
        );
        assert_eq!(rt.update_count(), 2);
        assert!(rt.last_active_sets().is_empty());
    }

    #[test]
    fn scripted_failures() {
        let mut rt = VirtualRuntime::new();
        let sets = main_set(&mut rt);

        rt.fail_next_update(GatewayError::IpcError);
        assert_eq!(rt.update_action_state(&sets), Err(GatewayError::IpcError));
        assert_eq!(rt.update_action_state(&sets), Ok(()));

        let handle = rt.action_handle(NEXT).unwrap();
        rt.fail_action(NEXT, GatewayError::NoData);
        assert_eq!(
            rt.digital_action_data(handle, DeviceRestriction::Unrestricted),
            Err(GatewayError::NoData)
        );
        rt.clear_failure(NEXT);
        assert!(rt
            .digital_action_data(handle, DeviceRestriction::Unrestricted)
            .is_ok());
        assert_eq!(rt.fetch_count(), 2);
    }

    #[test]
    fn unknown_handle_and_device_restriction_fail() {
        let mut rt = VirtualRuntime::new();
        assert_eq!(
            rt.digital_action_data(ActionHandle::INVALID, DeviceRestriction::Unrestricted),
            Err(GatewayError::InvalidHandle)
        );

        let handle = rt.action_handle(NEXT).unwrap();
        assert_eq!(
            rt.digital_action_data(
                handle,
                DeviceRestriction::Device(crate::action::InputValueHandle(3))
            ),
            Err(GatewayError::InvalidDevice)
        );
    }

    #[test]
    fn manifest_types_are_enforced() {
        let manifest = ActionManifest {
            default_bindings: Vec::new(),
            actions: vec![
                ManifestAction {
                    name: NEXT.into(),
                    action_type: ManifestActionType::Boolean,
                    requirement: None,
                },
                ManifestAction {
                    name: SCROLL.into(),
                    action_type: ManifestActionType::Vector2,
                    requirement: None,
                },
            ],
            action_sets: vec![ManifestActionSet {
                name: "/actions/main".into(),
                usage: None,
            }],
        };
        let mut rt = VirtualRuntime::with_manifest(manifest);
        let next = rt.action_handle(NEXT).unwrap();
        let scroll = rt.action_handle(SCROLL).unwrap();

        assert_eq!(
            rt.analog_action_data(next, DeviceRestriction::Unrestricted),
            Err(GatewayError::WrongType)
        );
        assert_eq!(
            rt.digital_action_data(scroll, DeviceRestriction::Unrestricted),
            Err(GatewayError::WrongType)
        );
    }

    #[test]
    fn undeclared_actions_never_activate_once_manifest_is_loaded() {
        let mut rt = VirtualRuntime::with_manifest(ActionManifest::default());
        let sets = main_set(&mut rt);

        rt.press("/actions/main/in/Typo");
        rt.update_action_state(&sets).unwrap();
        assert!(!digital(&mut rt, "/actions/main/in/Typo").state);
    }

    #[test]
    fn analog_deltas_follow_previous_tick() {
        let mut rt = VirtualRuntime::new();
        let sets = main_set(&mut rt);
        let handle = rt.action_handle(SCROLL).unwrap();

        rt.set_axes(SCROLL, [0.25, -0.5, 0.0]);
        rt.update_action_state(&sets).unwrap();
        rt.set_axis(SCROLL, 1.0);
        rt.update_action_state(&sets).unwrap();

        let data = rt
            .analog_action_data(handle, DeviceRestriction::Unrestricted)
            .unwrap();
        assert!(data.active);
        assert_eq!((data.x, data.y), (1.0, 0.0));
        assert_eq!((data.delta_x, data.delta_y), (0.75, 0.5));
    }

    #[test]
    fn loading_missing_manifest_file_fails() {
        let mut rt = VirtualRuntime::new();
        assert_eq!(
            rt.set_action_manifest_path(Path::new("/nonexistent/actions.json")),
            Err(GatewayError::MismatchedActionManifest)
        );
        assert!(rt.manifest().is_none());
    }
}
