//! Logical key codes for the abstract input interface.
//!
//! A [`KeyCode`] names a logical key, independent of keyboard layout and of
//! the backend's numbering.  Three kinds of variants exist:
//!
//! - **Physical keys** — one variant per key position, translated 1:1 to an
//!   SDL scancode by [`crate::sdlmap::scancode`].
//!
//! - **Combined modifiers** — [`KeyCode::Shift`], [`KeyCode::Control`], and
//!   [`KeyCode::Alt`] stand for "either physical side".  A state query for a
//!   combined modifier is true when at least one of its two side keys is
//!   down.  These codes have no scancode of their own and translate forward
//!   to the unknown scancode.
//!
//! - **Forward-only synthetic codes** — [`KeyCode::Print`],
//!   [`KeyCode::SystemLeft`], and [`KeyCode::SystemRight`] exist in the
//!   abstract interface for historical callers but have no backend key.
//!   Like the combined modifiers, they translate forward to unknown and are
//!   never produced by the backward translation.
//!
//! [`KeyCode::Invalid`] is the sentinel for unmapped input in the backward
//! direction; it always reads as not-pressed.

use serde::{Deserialize, Serialize};

/// Logical key identifier in the abstract code space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Sentinel for keys with no mapping.
    Invalid,

    // Editing and whitespace
    Backspace,
    Tab,
    Clear,
    Enter,
    NumpadEnter,

    // Combined modifiers ("either side pressed")
    Shift,
    Control,
    Alt,

    Pause,
    CapsLock,
    Escape,
    Space,

    // Navigation cluster
    PageUp,
    PageDown,
    End,
    Home,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,

    Select,
    /// Forward-only synthetic code; no backend key.
    Print,
    Execute,
    PrintScreen,
    Insert,
    Delete,
    Help,

    // Digit row
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Letters
    KeyA,
    KeyB,
    KeyC,
    KeyD,
    KeyE,
    KeyF,
    KeyG,
    KeyH,
    KeyI,
    KeyJ,
    KeyK,
    KeyL,
    KeyM,
    KeyN,
    KeyO,
    KeyP,
    KeyQ,
    KeyR,
    KeyS,
    KeyT,
    KeyU,
    KeyV,
    KeyW,
    KeyX,
    KeyY,
    KeyZ,

    /// Forward-only synthetic code; the real OS keys are
    /// [`KeyCode::MetaLeft`] and [`KeyCode::MetaRight`].
    SystemLeft,
    /// Forward-only synthetic code; see [`KeyCode::SystemLeft`].
    SystemRight,
    ContextMenu,
    Sleep,

    // Numpad
    Numpad0,
    Numpad1,
    Numpad2,
    Numpad3,
    Numpad4,
    Numpad5,
    Numpad6,
    Numpad7,
    Numpad8,
    Numpad9,
    NumpadMultiply,
    NumpadAdd,
    Separator,
    NumpadSubtract,
    NumpadDecimal,
    NumpadDivide,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    F13,
    F14,
    F15,
    F16,
    F17,
    F18,
    F19,
    F20,
    F21,
    F22,
    F23,
    F24,

    NumLock,
    ScrollLock,

    // Sided modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    MetaLeft,
    MetaRight,

    // Punctuation row
    Semicolon,
    Equal,
    NumpadEqual,
    Comma,
    Minus,
    Period,
    Slash,
    Backquote,
    BracketLeft,
    Backslash,
    BracketRight,
    Quote,
}

impl KeyCode {
    /// For a combined modifier, returns its two physical side codes
    /// `(left, right)`.  Returns `None` for every other code.
    pub fn sides(self) -> Option<(KeyCode, KeyCode)> {
        match self {
            KeyCode::Shift => Some((KeyCode::ShiftLeft, KeyCode::ShiftRight)),
            KeyCode::Control => Some((KeyCode::ControlLeft, KeyCode::ControlRight)),
            KeyCode::Alt => Some((KeyCode::AltLeft, KeyCode::AltRight)),
            _ => None,
        }
    }

    /// Returns `true` if this is a modifier key, combined or sided.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::Shift
                | KeyCode::Control
                | KeyCode::Alt
                | KeyCode::ShiftLeft
                | KeyCode::ShiftRight
                | KeyCode::ControlLeft
                | KeyCode::ControlRight
                | KeyCode::AltLeft
                | KeyCode::AltRight
                | KeyCode::MetaLeft
                | KeyCode::MetaRight
        )
    }

    /// Returns `true` if this code has no backend key of its own: combined
    /// modifiers, the forward-only synthetic codes, and the sentinel.
    pub fn is_synthetic(self) -> bool {
        matches!(
            self,
            KeyCode::Invalid
                | KeyCode::Shift
                | KeyCode::Control
                | KeyCode::Alt
                | KeyCode::Print
                | KeyCode::SystemLeft
                | KeyCode::SystemRight
        )
    }
}
