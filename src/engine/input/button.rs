// Logical button identifiers
//
// Every input the game can bind to (keyboard key, mouse button, joystick
// button, joystick axis direction) is addressed by a single `Button` value.
//
// Bit layout of the raw integer:
//
// ```text
//  bits 9..   device field: 0 = keyboard/mouse, n = joystick n - 1
//  bits 4..6  axis direction (0 = none, 1..4 = up/right/down/left)
//  bits 0..6  button number (low 7 bits)
// ```

use super::MAX_DEVICES;

const DEVICE_SHIFT: u32 = 9;
const AXIS_MASK: u32 = 0x70;
const AXIS_SHIFT: u32 = 4;
const NUMBER_MASK: u32 = 0x7f;

/// Highest joystick button number expressible in button form.
/// Larger numbers would spill into the axis bits.
pub const MAX_JOY_BUTTON: u8 = 15;

/// Joystick axis direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 1,
    Right = 2,
    Down = 3,
    Left = 4,
}

impl Direction {
    /// All four directions in encoding order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Decode the 3-bit axis field. Returns `None` for 0 and 5..7.
    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|&d| d as u32 == bits)
    }

    /// The axis code of this direction (`direction << 4`)
    pub fn code(self) -> u8 {
        (self as u8) << AXIS_SHIFT
    }

    /// Zero-based slot, used to index per-device axis tables
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }
}

/// Direction reported by an axis motion event.
///
/// Negative values on the vertical axis point up, negative values on the
/// horizontal axis point left.
pub fn axis_direction_from_event(vertical: bool, value: f32) -> Direction {
    match (vertical, value < 0.0) {
        (true, true) => Direction::Up,
        (true, false) => Direction::Down,
        (false, true) => Direction::Left,
        (false, false) => Direction::Right,
    }
}

/// Decoded form of a [`Button`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Keyboard scancode or mouse button code
    Key(u32),
    /// Button `number` on joystick `device`
    JoyButton { device: usize, number: u8 },
    /// Axis `direction` on joystick `device`
    JoyAxis { device: usize, direction: Direction },
    /// Joystick form whose axis bits name no direction
    Unknown(u32),
}

/// A logical button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Button(u32);

impl Button {
    #[cfg(test)]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Keyboard or mouse code
    pub const fn key(code: u16) -> Self {
        Self(code as u32)
    }

    /// Joystick button. `None` if `device` or `number` is out of range.
    pub fn joy_button(device: usize, number: u8) -> Option<Self> {
        if device >= MAX_DEVICES || number > MAX_JOY_BUTTON {
            return None;
        }
        Some(Self(((device as u32 + 1) << DEVICE_SHIFT) | number as u32))
    }

    /// Joystick axis direction. `None` if `device` is out of range.
    pub fn joy_axis(device: usize, direction: Direction) -> Option<Self> {
        if device >= MAX_DEVICES {
            return None;
        }
        Some(Self(
            ((device as u32 + 1) << DEVICE_SHIFT) | direction.code() as u32,
        ))
    }

    #[cfg(test)]
    pub(crate) const fn raw(self) -> u32 {
        self.0
    }

    fn device_field(self) -> u32 {
        self.0 >> DEVICE_SHIFT
    }

    fn axis_bits(self) -> u32 {
        (self.0 & AXIS_MASK) >> AXIS_SHIFT
    }

    pub fn is_joy_button(self) -> bool {
        self.device_field() > 0 && self.axis_bits() == 0
    }

    pub fn is_joy_axis(self) -> bool {
        self.device_field() > 0 && self.axis_bits() != 0
    }

    /// Joystick device index, or `None` for keyboard/mouse codes
    pub fn device_index(self) -> Option<usize> {
        if self.device_field() > 0 {
            Some(self.device_field() as usize - 1)
        } else {
            None
        }
    }

    /// Low 7 bits of the identifier
    pub fn button_number(self) -> u8 {
        (self.0 & NUMBER_MASK) as u8
    }

    /// Axis direction, or `None` when no valid direction is encoded
    pub fn axis_direction(self) -> Option<Direction> {
        Direction::from_bits(self.axis_bits())
    }

    /// Decode into the tagged form the rest of the input layer works with
    pub fn decode(self) -> ButtonKind {
        let Some(device) = self.device_index() else {
            return ButtonKind::Key(self.0);
        };

        if self.is_joy_button() {
            return ButtonKind::JoyButton {
                device,
                number: self.button_number(),
            };
        }

        match self.axis_direction() {
            Some(direction) if self.is_joy_axis() => ButtonKind::JoyAxis { device, direction },
            _ => ButtonKind::Unknown(self.0),
        }
    }
}
