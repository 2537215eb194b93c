//! Mouse button to SDL button bitmask translation.
//!
//! SDL packs mouse button state into a bitmask where button N occupies bit
//! `1 << (N - 1)`: Left = 1, Middle = 2, Right = 3, X1 = 4, X2 = 5.  A state
//! snapshot is the OR of all currently pressed buttons, so "is this button
//! down" is a single AND against the button's mask.

use crate::codes::MouseButton;

/// `SDL_BUTTON_LMASK`.
pub const BUTTON_LMASK: u32 = 1 << 0;
/// `SDL_BUTTON_MMASK`.
pub const BUTTON_MMASK: u32 = 1 << 1;
/// `SDL_BUTTON_RMASK`.
pub const BUTTON_RMASK: u32 = 1 << 2;
/// `SDL_BUTTON_X1MASK`.
pub const BUTTON_X1MASK: u32 = 1 << 3;
/// `SDL_BUTTON_X2MASK`.
pub const BUTTON_X2MASK: u32 = 1 << 4;

/// Translates an abstract [`MouseButton`] to its SDL bitmask.
///
/// [`MouseButton::None`] returns 0, which never tests as pressed against any
/// state snapshot.
pub fn button_to_mask(button: MouseButton) -> u32 {
    match button {
        MouseButton::None => 0,
        MouseButton::Left => BUTTON_LMASK,
        MouseButton::Right => BUTTON_RMASK,
        MouseButton::Middle => BUTTON_MMASK,
        MouseButton::X1 => BUTTON_X1MASK,
        MouseButton::X2 => BUTTON_X2MASK,
    }
}

/// Translates an exact single-button SDL mask back to a [`MouseButton`].
///
/// Zero, multi-button, and unknown masks all return [`MouseButton::None`].
pub fn mask_to_button(mask: u32) -> MouseButton {
    match mask {
        BUTTON_LMASK => MouseButton::Left,
        BUTTON_RMASK => MouseButton::Right,
        BUTTON_MMASK => MouseButton::Middle,
        BUTTON_X1MASK => MouseButton::X1,
        BUTTON_X2MASK => MouseButton::X2,
        _ => MouseButton::None,
    }
}
