// Display labels for buttons

use super::button::{Button, ButtonKind};
use super::keys;
use super::state::InputState;
use super::BUTTON_NAME_MAX_LEN;

/// Label for keys with a fixed name
fn named_key(code: u16) -> Option<&'static str> {
    let name = match code {
        keys::UNKNOWN => "none",
        keys::LEFT => "left",
        keys::RIGHT => "right",
        keys::UP => "up",
        keys::DOWN => "down",
        keys::PAUSE => "pause",
        keys::DELETE => "del",
        keys::INSERT => "ins",
        keys::HOME => "home",
        keys::END => "end",
        keys::MENU => "menu",
        keys::PAGE_UP => "pg up",
        keys::PAGE_DOWN => "pg dn",
        keys::RIGHT_SHIFT => "r-shift",
        keys::LEFT_SHIFT => "l-shift",
        keys::RIGHT_CTRL => "r-ctrl",
        keys::LEFT_CTRL => "l-ctrl",
        keys::RIGHT_ALT => "r-alt",
        keys::LEFT_ALT => "l-alt",
        keys::ALT_GR => "alt gr",
        keys::TAB => "tab",
        keys::PERIOD => ".",
        keys::COMMA => ",",
        keys::SEMICOLON => ";",
        keys::MINUS => "-",
        keys::EQUALS => "=",
        keys::SLASH => "/",
        keys::BACKSLASH => "\\",
        keys::LEFT_BRACKET => "[",
        keys::RIGHT_BRACKET => "]",
        keys::BACKSPACE => "b-space",
        keys::RETURN => "enter",
        keys::SPACE => "space",
        keys::MOUSE_LEFT => "l-mouse",
        keys::MOUSE_MIDDLE => "m-mouse",
        keys::MOUSE_RIGHT => "r-mouse",
        _ => return None,
    };
    Some(name)
}

fn key_name(code: u32) -> String {
    let Ok(code) = u16::try_from(code) else {
        return String::new();
    };
    if let Some(c) = keys::alphanumeric_char(code) {
        return c.to_string();
    }
    if let Some(n) = keys::function_key_number(code) {
        return format!("F{}", n);
    }
    named_key(code).map(str::to_string).unwrap_or_default()
}

/// Short label for `button`.
///
/// Joystick labels carry the device number only when more than one
/// joystick is active. Unnamed buttons give an empty label. Labels never
/// exceed `BUTTON_NAME_MAX_LEN - 1` characters.
pub fn button_name(button: Button, active_joysticks: usize) -> String {
    let multi = active_joysticks > 1;
    let mut name = match button.decode() {
        ButtonKind::JoyButton { device, number } if multi => {
            format!("joy-{} ({})", number as u32 + 1, device + 1)
        }
        ButtonKind::JoyButton { number, .. } => format!("joy-{}", number as u32 + 1),
        ButtonKind::JoyAxis { device, direction } if multi => {
            format!("joy-{} ({})", direction.label(), device + 1)
        }
        ButtonKind::JoyAxis { direction, .. } => format!("joy-{}", direction.label()),
        ButtonKind::Key(code) => key_name(code),
        ButtonKind::Unknown(_) => String::new(),
    };

    if let Some((cut, _)) = name.char_indices().nth(BUTTON_NAME_MAX_LEN - 1) {
        name.truncate(cut);
    }
    name
}

impl InputState {
    /// Label for `button` given the joysticks open this session
    pub fn name_of(&self, button: Button) -> String {
        button_name(button, self.num_open())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::button::Direction;
    use crate::engine::input::device::testing::FakeBackend;
    use crate::engine::input::keys::letter;

    #[test]
    fn test_joystick_button_single_device() {
        let b = Button::joy_button(0, 2).unwrap();
        assert_eq!(button_name(b, 1), "joy-3");
    }

    #[test]
    fn test_joystick_button_multiple_devices() {
        let b = Button::joy_button(1, 0).unwrap();
        assert_eq!(button_name(b, 2), "joy-1 (2)");
    }

    #[test]
    fn test_joystick_axis() {
        let b = Button::joy_axis(3, Direction::Left).unwrap();
        assert_eq!(button_name(b, 1), "joy-left");
        assert_eq!(button_name(b, 4), "joy-left (4)");
    }

    #[test]
    fn test_alphanumeric_keys() {
        assert_eq!(button_name(Button::key(letter('x')), 0), "x");
        assert_eq!(button_name(Button::key(keys::DIGIT_0), 0), "0");
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(button_name(Button::key(keys::F1), 0), "F1");
        assert_eq!(button_name(Button::key(keys::F13 + 1), 0), "F14");
    }

    #[test]
    fn test_named_keys_and_mouse() {
        assert_eq!(button_name(Button::key(keys::PAGE_DOWN), 0), "pg dn");
        assert_eq!(button_name(Button::key(keys::BACKSLASH), 0), "\\");
        assert_eq!(button_name(Button::key(keys::MOUSE_MIDDLE), 0), "m-mouse");
        assert_eq!(button_name(Button::key(keys::UNKNOWN), 0), "none");
        assert_eq!(button_name(Button::key(keys::ALT_GR), 0), "alt gr");
    }

    #[test]
    fn test_unmapped_gives_empty_label() {
        assert_eq!(button_name(Button::key(keys::ESCAPE), 0), "");
        assert_eq!(button_name(Button::key(300), 0), "");
        assert_eq!(button_name(Button::from_raw((1 << 9) | 0x70), 2), "");
    }

    #[test]
    fn test_labels_bounded_and_deterministic() {
        for raw in 0..(9u32 << 9) {
            let b = Button::from_raw(raw);
            let name = button_name(b, 8);
            assert!(name.chars().count() < BUTTON_NAME_MAX_LEN);
            assert_eq!(name, button_name(b, 8));
        }
    }

    #[test]
    fn test_name_of_counts_open_devices() {
        let mut input = InputState::new();
        let b = Button::joy_button(0, 0).unwrap();
        assert_eq!(input.name_of(b), "joy-1");

        input.open_joysticks(&mut FakeBackend::with_devices(2));
        assert_eq!(input.name_of(b), "joy-1 (1)");
    }
}
