// Joystick device handles

use super::InputError;

/// An opened joystick, as handed out by a [`JoystickBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceHandle {
    /// Device slot (0-7), the same index joystick identifiers encode
    pub index: usize,
    /// Human-readable device name reported by the backend
    pub name: String,
}

/// Source of joystick devices for a session
///
/// Devices are enumerated and opened once at session start and closed
/// once at the end; there is no hot-plugging.
pub trait JoystickBackend {
    /// Number of devices currently connected
    fn device_count(&self) -> usize;

    /// Open device `index`
    fn open(&mut self, index: usize) -> Result<DeviceHandle, InputError>;

    /// Release a previously opened device
    fn close(&mut self, handle: &DeviceHandle);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Scripted backend: `failing` lists device indices whose open fails
    #[derive(Debug, Default)]
    pub struct FakeBackend {
        pub count: usize,
        pub failing: Vec<usize>,
        pub closed: Vec<usize>,
    }

    impl FakeBackend {
        pub fn with_devices(count: usize) -> Self {
            Self {
                count,
                ..Default::default()
            }
        }
    }

    impl JoystickBackend for FakeBackend {
        fn device_count(&self) -> usize {
            self.count
        }

        fn open(&mut self, index: usize) -> Result<DeviceHandle, InputError> {
            if self.failing.contains(&index) {
                return Err(InputError::DeviceOpen {
                    index,
                    reason: "scripted failure".to_string(),
                });
            }
            Ok(DeviceHandle {
                index,
                name: format!("Fake Pad {}", index + 1),
            })
        }

        fn close(&mut self, handle: &DeviceHandle) {
            self.closed.push(handle.index);
        }
    }
}
