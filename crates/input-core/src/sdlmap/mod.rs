//! SDL translation tables for the abstract code space.
//!
//! Every function here is total: unmapped input in either direction resolves
//! to an explicit sentinel (`Scancode::UNKNOWN`, `KeyCode::Invalid`,
//! `MouseButton::None`, or `None`) rather than an error.  This is a
//! permissive design choice of the abstract interface, not a fault
//! condition, so no `Result` appears in this module.
//!
//! The numeric values are SDL ABI constants: scancodes (which follow the USB
//! HID keyboard usage page), button bitmasks, and `SDL_SystemCursor` ids.
//! They are spelled out as literals so this crate stays free of any SDL
//! dependency and the tables remain unit-testable everywhere.

pub mod button;
pub mod cursor;
pub mod driver;
pub mod scancode;

use crate::codes::{CursorShape, KeyCode, MouseButton};
use cursor::SystemCursorId;
use scancode::Scancode;

/// Unified translator providing all six translation directions.
pub struct CodeTranslator;

impl CodeTranslator {
    /// Translates an abstract [`KeyCode`] to an SDL scancode.
    ///
    /// Synthetic codes (combined modifiers, forward-only codes, and the
    /// sentinel) return [`Scancode::UNKNOWN`].
    pub fn key_to_scancode(key: KeyCode) -> Scancode {
        scancode::key_to_scancode(key)
    }

    /// Translates an SDL scancode to an abstract [`KeyCode`].
    ///
    /// Returns [`KeyCode::Invalid`] for scancodes with no abstract
    /// equivalent.  Never produces a synthetic code.
    pub fn scancode_to_key(sc: Scancode) -> KeyCode {
        scancode::scancode_to_key(sc)
    }

    /// Translates an abstract [`MouseButton`] to an SDL button bitmask.
    ///
    /// [`MouseButton::None`] returns the zero mask.
    pub fn button_to_mask(button: MouseButton) -> u32 {
        button::button_to_mask(button)
    }

    /// Translates an SDL button bitmask to an abstract [`MouseButton`].
    ///
    /// Only exact single-button masks translate; anything else returns
    /// [`MouseButton::None`].
    pub fn mask_to_button(mask: u32) -> MouseButton {
        button::mask_to_button(mask)
    }

    /// Translates an abstract [`CursorShape`] to an SDL system cursor id.
    ///
    /// Returns `None` for [`CursorShape::Hidden`], which has no native id.
    pub fn shape_to_cursor_id(shape: CursorShape) -> Option<SystemCursorId> {
        cursor::shape_to_cursor_id(shape)
    }

    /// Translates an SDL system cursor id to an abstract [`CursorShape`].
    ///
    /// Returns `None` for ids with no abstract equivalent.
    pub fn cursor_id_to_shape(id: SystemCursorId) -> Option<CursorShape> {
        cursor::cursor_id_to_shape(id)
    }
}
