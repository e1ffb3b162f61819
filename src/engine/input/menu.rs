// Edge-triggered directional input for menu navigation

use super::button::Direction;
use super::keys::{self, letter};
use super::state::InputState;

/// Keys accepted for each menu direction, in priority order
const MENU_KEYS: [[u16; 3]; 4] = [
    [keys::UP, letter('k'), letter('p')],
    [keys::RIGHT, letter('l'), letter('f')],
    [keys::DOWN, letter('j'), letter('n')],
    [keys::LEFT, letter('h'), letter('b')],
];

impl InputState {
    /// Consume one press of `direction`.
    ///
    /// Checks the arrow key and its two letter aliases, then the matching
    /// axis direction of every open joystick. The first held source found
    /// is cleared and `true` returned; at most one flag is cleared per call.
    pub fn consume_direction(&mut self, direction: Direction) -> bool {
        for code in MENU_KEYS[direction.index()] {
            if self.take_key(code) {
                return true;
            }
        }
        self.take_axis(direction)
    }
}
