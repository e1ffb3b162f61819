// Weapon selection menu shown before each match

use crate::engine::input::{Direction, InputState};

use super::config::Controls;
use super::weapons::WeaponKind;

/// Per-seat weapon picking.
///
/// Up/down moves between seats, left/right cycles the highlighted seat's
/// weapon, enter starts the match.
#[derive(Debug, Clone)]
pub struct WeaponSelect {
    seats: Vec<(Controls, WeaponKind)>,
    cursor: usize,
}

impl WeaponSelect {
    pub fn new(lineup: &[Controls]) -> Self {
        Self {
            seats: lineup
                .iter()
                .map(|&c| (c, WeaponKind::LightningSpeed))
                .collect(),
            cursor: 0,
        }
    }

    /// Keep earlier picks when returning to the menu
    pub fn with_picks(seats: Vec<(Controls, WeaponKind)>) -> Self {
        Self { seats, cursor: 0 }
    }

    pub fn seats(&self) -> &[(Controls, WeaponKind)] {
        &self.seats
    }

    /// Handle this frame's menu input. Returns `true` once enter is pressed.
    pub fn update(&mut self, input: &mut InputState) -> bool {
        let count = self.seats.len();
        if count == 0 {
            return false;
        }

        if input.consume_direction(Direction::Up) {
            self.cursor = (self.cursor + count - 1) % count;
        }
        if input.consume_direction(Direction::Down) {
            self.cursor = (self.cursor + 1) % count;
        }
        if input.consume_direction(Direction::Left) {
            let pick = &mut self.seats[self.cursor].1;
            *pick = pick.prev();
        }
        if input.consume_direction(Direction::Right) {
            let pick = &mut self.seats[self.cursor].1;
            *pick = pick.next();
        }

        if input.is_enter_held() {
            input.clear_enter_buttons();
            return true;
        }
        false
    }

    /// One display line per seat: bindings, weapon and its description
    pub fn lines(&self, input: &InputState) -> Vec<String> {
        self.seats
            .iter()
            .enumerate()
            .map(|(i, (controls, weapon))| {
                let descriptor = weapon.descriptor();
                let timing = match descriptor.duration {
                    0 => "instant".to_string(),
                    ms => format!("{:.1} s", ms as f32 / 1000.0),
                };
                format!(
                    "{} P{} [{} / {} / {}] {} ({}x, {}): {} {}",
                    if i == self.cursor { ">" } else { " " },
                    i + 1,
                    input.name_of(controls.left),
                    input.name_of(controls.right),
                    input.name_of(controls.weapon),
                    descriptor.name,
                    descriptor.charges,
                    timing,
                    descriptor.desc1,
                    descriptor.desc2,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::keys::{self, letter};
    use crate::game::config::lineup;

    fn menu() -> WeaponSelect {
        WeaponSelect::new(&lineup(2, &[]))
    }

    #[test]
    fn test_cycle_weapon() {
        let mut menu = menu();
        let mut input = InputState::new();

        input.set_key_down(keys::RIGHT, true);
        assert!(!menu.update(&mut input));
        assert_eq!(menu.seats()[0].1, WeaponKind::FrostWave);

        // Held key does not repeat until pressed again
        assert!(!menu.update(&mut input));
        assert_eq!(menu.seats()[0].1, WeaponKind::FrostWave);

        input.set_key_down(letter('h'), true);
        menu.update(&mut input);
        assert_eq!(menu.seats()[0].1, WeaponKind::LightningSpeed);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut menu = menu();
        let mut input = InputState::new();

        input.set_key_down(keys::UP, true);
        menu.update(&mut input);
        assert_eq!(menu.cursor, 1);

        input.set_key_down(letter('j'), true);
        menu.update(&mut input);
        assert_eq!(menu.cursor, 0);
    }

    #[test]
    fn test_enter_confirms_once() {
        let mut menu = menu();
        let mut input = InputState::new();

        input.set_key_down(keys::RETURN, true);
        assert!(menu.update(&mut input));
        assert!(!input.is_enter_held());
        assert!(!menu.update(&mut input));
    }

    #[test]
    fn test_lines_show_bindings_and_weapon() {
        let menu = menu();
        let input = InputState::new();
        let lines = menu.lines(&input);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("> P1 [left / right / up] lightning speed (3x, 1.3 s)"));
        assert!(lines[1].starts_with("  P2 [z / c / x]"));
    }

    #[test]
    fn test_empty_lineup() {
        let mut menu = WeaponSelect::new(&[]);
        let mut input = InputState::new();
        input.set_key_down(keys::SPACE, true);
        assert!(!menu.update(&mut input));
    }
}
