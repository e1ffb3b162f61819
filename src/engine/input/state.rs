// Held-button state for keyboard, mouse and joysticks

use super::button::{axis_direction_from_event, Button, ButtonKind, Direction};
use super::device::{DeviceHandle, JoystickBackend};
use super::keys::{self, NUM_KEY_CODES};
use super::{AXIS_THRESHOLD, JOY_ENTER_BUTTON, MAX_DEVICES};

/// Number of button slots tracked per joystick
pub const JOY_BUTTON_SLOTS: usize = 128;

/// Held state of one joystick
///
/// Buttons and axis directions are kept in separate tables so a physical
/// button numbered like an axis code (16, 32, ...) can never alias an axis.
#[derive(Debug, Clone)]
struct JoystickState {
    buttons: [bool; JOY_BUTTON_SLOTS],
    axes: [bool; 4],
}

impl JoystickState {
    fn new() -> Self {
        Self {
            buttons: [false; JOY_BUTTON_SLOTS],
            axes: [false; 4],
        }
    }
}

/// The single source of truth for "what is currently held down"
///
/// Flags are written by the platform event pump and read by gameplay
/// (level-triggered) and the menus (see `consume_direction`).
#[derive(Debug, Clone)]
pub struct InputState {
    key_down: [bool; NUM_KEY_CODES],
    joysticks: [JoystickState; MAX_DEVICES],
    /// Slots enumerated at session start; `None` where opening failed
    devices: Vec<Option<DeviceHandle>>,
}

impl InputState {
    /// Create an empty input state with no joysticks open
    pub fn new() -> Self {
        Self {
            key_down: [false; NUM_KEY_CODES],
            joysticks: std::array::from_fn(|_| JoystickState::new()),
            devices: Vec::new(),
        }
    }

    /// Open every connected joystick (at most `MAX_DEVICES`).
    ///
    /// A device that fails to open stays absent for the whole session.
    /// Returns the number of devices opened.
    pub fn open_joysticks(&mut self, backend: &mut dyn JoystickBackend) -> usize {
        self.close_joysticks(backend);

        let count = backend.device_count();
        if count > MAX_DEVICES {
            log::warn!(
                "{} joysticks connected, only the first {} are used",
                count,
                MAX_DEVICES
            );
        }

        for index in 0..count.min(MAX_DEVICES) {
            match backend.open(index) {
                Ok(handle) => {
                    log::info!("Opened joystick {}: {}", index + 1, handle.name);
                    self.devices.push(Some(handle));
                }
                Err(e) => {
                    log::warn!("{}", e);
                    self.devices.push(None);
                }
            }
        }

        self.num_open()
    }

    /// Close all open joysticks and forget their held state
    pub fn close_joysticks(&mut self, backend: &mut dyn JoystickBackend) {
        for handle in self.devices.drain(..).flatten() {
            log::info!("Closing joystick {}", handle.index + 1);
            backend.close(&handle);
        }
        for joystick in &mut self.joysticks {
            *joystick = JoystickState::new();
        }
    }

    /// Number of device slots enumerated at session start
    pub fn num_joys(&self) -> usize {
        self.devices.len()
    }

    /// Number of devices that actually opened
    pub fn num_open(&self) -> usize {
        self.devices.iter().flatten().count()
    }

    /// Whether joystick `device` is open
    pub fn is_open(&self, device: usize) -> bool {
        matches!(self.devices.get(device), Some(Some(_)))
    }

    fn open_devices(&self) -> impl Iterator<Item = usize> + '_ {
        self.devices
            .iter()
            .enumerate()
            .filter_map(|(i, d)| d.as_ref().map(|_| i))
    }

    /// Record a key or mouse button change
    pub fn set_key_down(&mut self, code: u16, down: bool) {
        match self.key_down.get_mut(code as usize) {
            Some(flag) => *flag = down,
            None => log::warn!("Ignoring out-of-range key code {}", code),
        }
    }

    /// Record a joystick button change
    pub fn set_joy_button_down(&mut self, device: usize, number: u8, down: bool) {
        if !self.is_open(device) {
            log::warn!("Ignoring button {} on joystick {} (not open)", number, device);
            return;
        }
        match self.joysticks[device].buttons.get_mut(number as usize) {
            Some(flag) => *flag = down,
            None => log::warn!("Ignoring out-of-range joystick button {}", number),
        }
    }

    /// Record a joystick axis direction change
    pub fn set_joy_axis_down(&mut self, device: usize, direction: Direction, down: bool) {
        if !self.is_open(device) {
            log::warn!("Ignoring axis on joystick {} (not open)", device);
            return;
        }
        self.joysticks[device].axes[direction.index()] = down;
    }

    /// Record axis motion, applying the dead zone.
    ///
    /// Past the threshold the matching direction is held and its opposite
    /// released; inside the dead zone both directions are released.
    pub fn set_axis(&mut self, device: usize, vertical: bool, value: f32) {
        let direction = axis_direction_from_event(vertical, value);
        if value.abs() >= AXIS_THRESHOLD {
            self.set_joy_axis_down(device, direction, true);
            self.set_joy_axis_down(device, direction.opposite(), false);
        } else {
            self.set_joy_axis_down(device, direction, false);
            self.set_joy_axis_down(device, direction.opposite(), false);
        }
    }

    fn flag_mut(&mut self, button: Button) -> Option<&mut bool> {
        match button.decode() {
            ButtonKind::Key(code) => self.key_down.get_mut(code as usize),
            ButtonKind::JoyButton { device, number } if device < MAX_DEVICES => {
                self.joysticks[device].buttons.get_mut(number as usize)
            }
            ButtonKind::JoyAxis { device, direction } if device < MAX_DEVICES => {
                Some(&mut self.joysticks[device].axes[direction.index()])
            }
            _ => None,
        }
    }

    /// Whether `button` is currently held
    pub fn is_down(&self, button: Button) -> bool {
        match button.decode() {
            ButtonKind::Key(code) => self.key_down.get(code as usize).copied().unwrap_or(false),
            ButtonKind::JoyButton { device, number } => self
                .joysticks
                .get(device)
                .and_then(|j| j.buttons.get(number as usize))
                .copied()
                .unwrap_or(false),
            ButtonKind::JoyAxis { device, direction } => self
                .joysticks
                .get(device)
                .map(|j| j.axes[direction.index()])
                .unwrap_or(false),
            ButtonKind::Unknown(_) => false,
        }
    }

    /// Mark `button` as released until the next press
    pub fn clear(&mut self, button: Button) {
        if let Some(flag) = self.flag_mut(button) {
            *flag = false;
        }
    }

    pub(crate) fn key_down(&self, code: u16) -> bool {
        self.key_down.get(code as usize).copied().unwrap_or(false)
    }

    /// Clear a key if held. Returns whether it was held.
    pub(crate) fn take_key(&mut self, code: u16) -> bool {
        match self.key_down.get_mut(code as usize) {
            Some(flag) if *flag => {
                *flag = false;
                true
            }
            _ => false,
        }
    }

    /// Clear the first open device holding `direction`. Returns whether one was.
    pub(crate) fn take_axis(&mut self, direction: Direction) -> bool {
        let held = self
            .open_devices()
            .find(|&d| self.joysticks[d].axes[direction.index()]);
        match held {
            Some(device) => {
                self.joysticks[device].axes[direction.index()] = false;
                true
            }
            None => false,
        }
    }

    /// Whether space, return, or the enter button on any open joystick is held
    pub fn is_enter_held(&self) -> bool {
        if self.key_down(keys::SPACE) || self.key_down(keys::RETURN) {
            return true;
        }
        self.open_devices()
            .any(|d| self.joysticks[d].buttons[JOY_ENTER_BUTTON as usize])
    }

    /// Release every enter button so one confirmation is consumed once
    pub fn clear_enter_buttons(&mut self) {
        self.key_down[keys::RETURN as usize] = false;
        self.key_down[keys::SPACE as usize] = false;
        for joystick in &mut self.joysticks {
            joystick.buttons[JOY_ENTER_BUTTON as usize] = false;
        }
    }

    /// Release everything currently held
    pub fn reset(&mut self) {
        self.key_down = [false; NUM_KEY_CODES];
        for joystick in &mut self.joysticks {
            *joystick = JoystickState::new();
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
