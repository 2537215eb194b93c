//! Mouse button codes for the abstract input interface.

use serde::{Deserialize, Serialize};

/// Mouse button identifier in the abstract code space.
///
/// [`MouseButton::None`] is the sentinel: it translates to the zero bitmask,
/// never reads as pressed, and is produced by the backward translation for
/// any mask that is not exactly one known button bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Sentinel for "no button".
    None,
    Left,
    Right,
    Middle,
    /// First extra button (usually "back").
    X1,
    /// Second extra button (usually "forward").
    X2,
}

impl MouseButton {
    /// Every real button, excluding the [`MouseButton::None`] sentinel.
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::X1,
        MouseButton::X2,
    ];
}
