// Gamepad support through gilrs

use gilrs::{Axis, Button as PadButton, EventType, GamepadId, Gilrs};

use super::button::Direction;
use super::device::{DeviceHandle, JoystickBackend};
use super::state::InputState;
use super::InputError;

/// Button number reported for a gilrs button.
///
/// Face buttons come first so the east button lands on the menu enter
/// button number.
fn button_number(button: PadButton) -> Option<u8> {
    let number = match button {
        PadButton::South => 0,
        PadButton::East => 1,
        PadButton::West => 2,
        PadButton::North => 3,
        PadButton::LeftTrigger => 4,
        PadButton::RightTrigger => 5,
        PadButton::LeftTrigger2 => 6,
        PadButton::RightTrigger2 => 7,
        PadButton::Select => 8,
        PadButton::Start => 9,
        PadButton::Mode => 10,
        PadButton::LeftThumb => 11,
        PadButton::RightThumb => 12,
        PadButton::C => 13,
        PadButton::Z => 14,
        _ => return None,
    };
    Some(number)
}

/// D-pad buttons are reported as axis directions
fn dpad_direction(button: PadButton) -> Option<Direction> {
    match button {
        PadButton::DPadUp => Some(Direction::Up),
        PadButton::DPadRight => Some(Direction::Right),
        PadButton::DPadDown => Some(Direction::Down),
        PadButton::DPadLeft => Some(Direction::Left),
        _ => None,
    }
}

fn apply_button(input: &mut InputState, device: usize, button: PadButton, down: bool) {
    if let Some(direction) = dpad_direction(button) {
        input.set_joy_axis_down(device, direction, down);
    } else if let Some(number) = button_number(button) {
        input.set_joy_button_down(device, number, down);
    }
}

/// Joystick backend over gilrs
///
/// Gamepads connected when the backend is created are assigned slots in
/// enumeration order. Later connections are ignored.
pub struct GilrsBackend {
    /// None if gamepad support could not be initialised
    gilrs: Option<Gilrs>,
    /// Gamepad for each slot, in enumeration order
    slots: Vec<GamepadId>,
}

impl GilrsBackend {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(g) => Some(g),
            Err(e) => {
                log::warn!(
                    "{}",
                    InputError::BackendUnavailable(format!("{}. Joysticks will not be available", e))
                );
                None
            }
        };

        let slots = gilrs
            .as_ref()
            .map(|g| {
                g.gamepads()
                    .filter(|(_, pad)| pad.is_connected())
                    .map(|(id, _)| id)
                    .collect()
            })
            .unwrap_or_default();

        Self { gilrs, slots }
    }

    /// Drain pending gamepad events into `input`
    pub fn poll(&mut self, input: &mut InputState) {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return;
        };

        while let Some(event) = gilrs.next_event() {
            let Some(device) = self.slots.iter().position(|&slot| slot == event.id) else {
                if matches!(event.event, EventType::Connected) {
                    log::info!("Gamepad {} connected mid-session, ignoring", event.id);
                }
                continue;
            };

            match event.event {
                EventType::ButtonPressed(button, _) => apply_button(input, device, button, true),
                EventType::ButtonReleased(button, _) => apply_button(input, device, button, false),
                // gilrs reports stick Y with up positive
                EventType::AxisChanged(Axis::LeftStickX, value, _) => {
                    input.set_axis(device, false, value);
                }
                EventType::AxisChanged(Axis::LeftStickY, value, _) => {
                    input.set_axis(device, true, -value);
                }
                EventType::Disconnected => {
                    log::warn!("Joystick {} disconnected", device + 1);
                }
                _ => {}
            }
        }
    }
}

impl Default for GilrsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl JoystickBackend for GilrsBackend {
    fn device_count(&self) -> usize {
        self.slots.len()
    }

    fn open(&mut self, index: usize) -> Result<DeviceHandle, InputError> {
        let gilrs = self
            .gilrs
            .as_ref()
            .ok_or_else(|| InputError::BackendUnavailable("gilrs not initialised".to_string()))?;
        let id = *self
            .slots
            .get(index)
            .ok_or(InputError::DeviceOutOfRange(index))?;

        let pad = gilrs.connected_gamepad(id).ok_or_else(|| InputError::DeviceOpen {
            index,
            reason: "gamepad no longer connected".to_string(),
        })?;

        Ok(DeviceHandle {
            index,
            name: pad.name().to_string(),
        })
    }

    fn close(&mut self, handle: &DeviceHandle) {
        if let Some(&id) = self.slots.get(handle.index) {
            log::debug!("Released gamepad {} (slot {})", id, handle.index + 1);
        }
    }
}
