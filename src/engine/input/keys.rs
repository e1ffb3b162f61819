// Keyboard and mouse codes
//
// Keys are identified by their USB HID usage ID ("scancode"), so bindings
// follow the physical key position regardless of keyboard layout. Mouse
// buttons share the same code space in the slots HID leaves reserved (1..3).

use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Size of the keyboard/mouse code space. Every code is below this.
pub const NUM_KEY_CODES: usize = 512;

pub const UNKNOWN: u16 = 0;

pub const MOUSE_LEFT: u16 = 1;
pub const MOUSE_MIDDLE: u16 = 2;
pub const MOUSE_RIGHT: u16 = 3;

pub const A: u16 = 4;
pub const Z: u16 = 29;
pub const DIGIT_1: u16 = 30;
pub const DIGIT_0: u16 = 39;

pub const RETURN: u16 = 40;
pub const ESCAPE: u16 = 41;
pub const BACKSPACE: u16 = 42;
pub const TAB: u16 = 43;
pub const SPACE: u16 = 44;
pub const MINUS: u16 = 45;
pub const EQUALS: u16 = 46;
pub const LEFT_BRACKET: u16 = 47;
pub const RIGHT_BRACKET: u16 = 48;
pub const BACKSLASH: u16 = 49;
pub const SEMICOLON: u16 = 51;
pub const COMMA: u16 = 54;
pub const PERIOD: u16 = 55;
pub const SLASH: u16 = 56;

pub const F1: u16 = 58;
pub const F12: u16 = 69;
pub const F13: u16 = 104;
pub const F15: u16 = 106;

pub const PAUSE: u16 = 72;
pub const INSERT: u16 = 73;
pub const HOME: u16 = 74;
pub const PAGE_UP: u16 = 75;
pub const DELETE: u16 = 76;
pub const END: u16 = 77;
pub const PAGE_DOWN: u16 = 78;
pub const RIGHT: u16 = 79;
pub const LEFT: u16 = 80;
pub const DOWN: u16 = 81;
pub const UP: u16 = 82;
pub const MENU: u16 = 118;

pub const LEFT_CTRL: u16 = 224;
pub const LEFT_SHIFT: u16 = 225;
pub const LEFT_ALT: u16 = 226;
pub const RIGHT_CTRL: u16 = 228;
pub const RIGHT_SHIFT: u16 = 229;
pub const RIGHT_ALT: u16 = 230;
pub const ALT_GR: u16 = 257;

/// Code for a letter key, `'a'..='z'` (case-insensitive)
pub const fn letter(c: char) -> u16 {
    let lower = (c as u8) | 0x20;
    A + (lower - b'a') as u16
}

/// Printable character for a letter or digit key
pub fn alphanumeric_char(code: u16) -> Option<char> {
    match code {
        A..=Z => Some((b'a' + (code - A) as u8) as char),
        // HID orders digits 1..9 then 0
        DIGIT_1..=DIGIT_0 => Some((b'0' + ((code - DIGIT_1 + 1) % 10) as u8) as char),
        _ => None,
    }
}

/// F-key number (1-based) for a function key code
pub fn function_key_number(code: u16) -> Option<u16> {
    match code {
        F1..=F12 => Some(code - F1 + 1),
        F13..=F15 => Some(code - F13 + 13),
        _ => None,
    }
}

/// Translate a winit physical key into its code
pub fn from_key_code(key: KeyCode) -> Option<u16> {
    let code = match key {
        KeyCode::KeyA => letter('a'),
        KeyCode::KeyB => letter('b'),
        KeyCode::KeyC => letter('c'),
        KeyCode::KeyD => letter('d'),
        KeyCode::KeyE => letter('e'),
        KeyCode::KeyF => letter('f'),
        KeyCode::KeyG => letter('g'),
        KeyCode::KeyH => letter('h'),
        KeyCode::KeyI => letter('i'),
        KeyCode::KeyJ => letter('j'),
        KeyCode::KeyK => letter('k'),
        KeyCode::KeyL => letter('l'),
        KeyCode::KeyM => letter('m'),
        KeyCode::KeyN => letter('n'),
        KeyCode::KeyO => letter('o'),
        KeyCode::KeyP => letter('p'),
        KeyCode::KeyQ => letter('q'),
        KeyCode::KeyR => letter('r'),
        KeyCode::KeyS => letter('s'),
        KeyCode::KeyT => letter('t'),
        KeyCode::KeyU => letter('u'),
        KeyCode::KeyV => letter('v'),
        KeyCode::KeyW => letter('w'),
        KeyCode::KeyX => letter('x'),
        KeyCode::KeyY => letter('y'),
        KeyCode::KeyZ => letter('z'),
        KeyCode::Digit1 => DIGIT_1,
        KeyCode::Digit2 => DIGIT_1 + 1,
        KeyCode::Digit3 => DIGIT_1 + 2,
        KeyCode::Digit4 => DIGIT_1 + 3,
        KeyCode::Digit5 => DIGIT_1 + 4,
        KeyCode::Digit6 => DIGIT_1 + 5,
        KeyCode::Digit7 => DIGIT_1 + 6,
        KeyCode::Digit8 => DIGIT_1 + 7,
        KeyCode::Digit9 => DIGIT_1 + 8,
        KeyCode::Digit0 => DIGIT_0,
        KeyCode::Enter => RETURN,
        KeyCode::Escape => ESCAPE,
        KeyCode::Backspace => BACKSPACE,
        KeyCode::Tab => TAB,
        KeyCode::Space => SPACE,
        KeyCode::Minus => MINUS,
        KeyCode::Equal => EQUALS,
        KeyCode::BracketLeft => LEFT_BRACKET,
        KeyCode::BracketRight => RIGHT_BRACKET,
        KeyCode::Backslash => BACKSLASH,
        KeyCode::Semicolon => SEMICOLON,
        KeyCode::Comma => COMMA,
        KeyCode::Period => PERIOD,
        KeyCode::Slash => SLASH,
        KeyCode::F1 => F1,
        KeyCode::F2 => F1 + 1,
        KeyCode::F3 => F1 + 2,
        KeyCode::F4 => F1 + 3,
        KeyCode::F5 => F1 + 4,
        KeyCode::F6 => F1 + 5,
        KeyCode::F7 => F1 + 6,
        KeyCode::F8 => F1 + 7,
        KeyCode::F9 => F1 + 8,
        KeyCode::F10 => F1 + 9,
        KeyCode::F11 => F1 + 10,
        KeyCode::F12 => F12,
        KeyCode::F13 => F13,
        KeyCode::F14 => F13 + 1,
        KeyCode::F15 => F15,
        KeyCode::Pause => PAUSE,
        KeyCode::Insert => INSERT,
        KeyCode::Home => HOME,
        KeyCode::PageUp => PAGE_UP,
        KeyCode::Delete => DELETE,
        KeyCode::End => END,
        KeyCode::PageDown => PAGE_DOWN,
        KeyCode::ArrowRight => RIGHT,
        KeyCode::ArrowLeft => LEFT,
        KeyCode::ArrowDown => DOWN,
        KeyCode::ArrowUp => UP,
        KeyCode::ContextMenu => MENU,
        KeyCode::ControlLeft => LEFT_CTRL,
        KeyCode::ShiftLeft => LEFT_SHIFT,
        KeyCode::AltLeft => LEFT_ALT,
        KeyCode::ControlRight => RIGHT_CTRL,
        KeyCode::ShiftRight => RIGHT_SHIFT,
        KeyCode::AltRight => RIGHT_ALT,
        _ => return None,
    };
    Some(code)
}

/// Translate a winit mouse button into its code
pub fn from_mouse_button(button: MouseButton) -> Option<u16> {
    match button {
        MouseButton::Left => Some(MOUSE_LEFT),
        MouseButton::Middle => Some(MOUSE_MIDDLE),
        MouseButton::Right => Some(MOUSE_RIGHT),
        _ => None,
    }
}
