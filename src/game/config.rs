// Match settings and fixed control bindings
//
// Everything here is compile-time configuration; bindings are not remappable.

use crate::engine::input::keys::{self, letter};
use crate::engine::input::{Button, Direction, MAX_DEVICES};

/// Maximum number of players in a match (one per joystick slot)
pub const MAX_PLAYERS: usize = MAX_DEVICES;

/// Number of keyboard/mouse control sets
pub const KEYBOARD_PLAYERS: usize = 4;

/// Arena and movement tuning
#[derive(Debug, Clone)]
pub struct MatchSettings {
    /// Arena width in world units
    pub arena_width: f32,
    /// Arena height in world units
    pub arena_height: f32,
    /// Forward speed (units/second)
    pub base_speed: f32,
    /// Steering rate (radians/second)
    pub turn_rate: f32,
    /// Speed multiplier while lightning speed is active
    pub lightning_factor: f32,
    /// Speed multiplier for players caught in a frost wave
    pub freeze_factor: f32,
    /// Speed multiplier for players caught in a chili run
    pub chili_factor: f32,
    /// Distance covered by a time step
    pub timestep_distance: f32,
}

pub const DEFAULT_SETTINGS: MatchSettings = MatchSettings {
    arena_width: 800.0,
    arena_height: 600.0,
    base_speed: 80.0,
    turn_rate: 3.0,
    lightning_factor: 2.0,
    freeze_factor: 0.3,
    chili_factor: 1.6,
    timestep_distance: 90.0,
};

impl Default for MatchSettings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}

/// The three buttons a player steers and fires with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub left: Button,
    pub right: Button,
    pub weapon: Button,
}

impl Controls {
    const fn keys(left: u16, right: u16, weapon: u16) -> Self {
        Self {
            left: Button::key(left),
            right: Button::key(right),
            weapon: Button::key(weapon),
        }
    }

    /// Stick left/right to steer, south face button to fire
    pub fn joystick(device: usize) -> Option<Self> {
        Some(Self {
            left: Button::joy_axis(device, Direction::Left)?,
            right: Button::joy_axis(device, Direction::Right)?,
            weapon: Button::joy_button(device, 0)?,
        })
    }
}

/// Keyboard and mouse control sets, in seat order
pub const KEYBOARD_CONTROLS: [Controls; KEYBOARD_PLAYERS] = [
    Controls::keys(keys::LEFT, keys::RIGHT, keys::UP),
    Controls::keys(letter('z'), letter('c'), letter('x')),
    Controls::keys(keys::MOUSE_LEFT, keys::MOUSE_RIGHT, keys::MOUSE_MIDDLE),
    Controls::keys(letter('m'), keys::PERIOD, keys::COMMA),
];

/// Seat controls for a match: `keyboard_players` keyboard seats followed by
/// one seat per open joystick, capped at `MAX_PLAYERS`.
pub fn lineup(keyboard_players: usize, joysticks: &[usize]) -> Vec<Controls> {
    KEYBOARD_CONTROLS
        .iter()
        .take(keyboard_players)
        .copied()
        .chain(joysticks.iter().filter_map(|&d| Controls::joystick(d)))
        .take(MAX_PLAYERS)
        .collect()
}
