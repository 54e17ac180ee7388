/// Keyboard key identifier.
///
/// Only the keys the demos bind are named; everything else maps to `Unknown`
/// with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    R,

    Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// Signs follow the platform: positive `y` means the wheel was rolled away from
/// the user. This is the opposite of a DOM `WheelEvent.deltaY`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    /// Discrete notches.
    Line { x: f32, y: f32 },
    /// High-precision touchpad deltas in logical pixels.
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Vertical component regardless of unit.
    pub fn y(&self) -> f32 {
        match *self {
            MouseWheelDelta::Line { y, .. } | MouseWheelDelta::Pixel { y, .. } => y,
        }
    }
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an auto-repeat.
        repeat: bool,
    },

    MouseWheel(MouseWheelDelta),

    /// Window focus change.
    Focused(bool),
}
