// Input handling system
//
// Keyboard keys, mouse buttons, joystick buttons and joystick axis
// directions all live in one identifier space (`Button`), backed by a single
// `InputState` that records what is currently held.
//
// ## Architecture
//
// - `button`: Button identifier encoding and decoding
// - `keys`: Keyboard/mouse codes and winit conversion
// - `state`: Held-button state and joystick lifecycle
// - `menu`: Consume-on-read directional queries for menus
// - `names`: Short display labels for buttons
// - `device`: Joystick backend abstraction
// - `gamepad`: gilrs-backed joystick backend
//
// ## Usage Example
//
// ```rust
// use engine::input::{Button, Direction, GilrsBackend, InputState};
//
// let mut backend = GilrsBackend::new();
// let mut input = InputState::new();
// input.open_joysticks(&mut backend);
//
// // Each frame: feed platform events, then poll gamepads
// input.set_key_down(keys::UP, true);
// backend.poll(&mut input);
//
// // Gameplay samples held state...
// if input.is_down(Button::key(keys::LEFT)) { /* turn left */ }
//
// // ...menus consume presses
// if input.consume_direction(Direction::Down) { /* next entry */ }
// ```

pub mod button;
pub mod device;
pub mod gamepad;
pub mod keys;
pub mod menu;
pub mod names;
pub mod state;

pub use button::{Button, Direction};
pub use device::JoystickBackend;
pub use gamepad::GilrsBackend;
pub use state::InputState;

/// Maximum number of joysticks (and players)
pub const MAX_DEVICES: usize = 8;

/// Joystick button treated as enter in the menus
pub const JOY_ENTER_BUTTON: u8 = 1;

/// Label buffer size; labels hold at most one less visible character
pub const BUTTON_NAME_MAX_LEN: usize = 20;

/// Stick deflection needed before an axis direction counts as held
pub const AXIS_THRESHOLD: f32 = 0.5;

/// Input system errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Joystick backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Failed to open joystick {index}: {reason}")]
    DeviceOpen { index: usize, reason: String },

    #[error("No joystick at index {0}")]
    DeviceOutOfRange(usize),
}
