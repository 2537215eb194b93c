//! The native backend boundary.
//!
//! [`InputBackend`] abstracts the handful of SDL query and mutator calls the
//! adapter needs.  The real implementation is a thin passthrough (see
//! [`sdl`], behind the `sdl2` cargo feature); [`mock`] records calls in
//! memory for tests.  The adapter treats every call except cursor creation
//! as infallible, matching how SDL itself reports these operations.

use std::ffi::c_void;

use input_core::sdlmap::cursor::SystemCursorId;
use input_core::{Scancode, VideoDriver, NUM_SCANCODES};

pub mod mock;

#[cfg(feature = "sdl2")]
pub mod sdl;

/// Error type for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("backend initialization failed: {0}")]
    Init(String),
    #[error("system cursor creation failed for {id:?}: {reason}")]
    CursorCreation {
        id: SystemCursorId,
        reason: String,
    },
}

/// Full keyboard state at one instant: one pressed bit per scancode slot.
///
/// Slot 0 (`Scancode::UNKNOWN`) is never pressed, so unmapped abstract codes
/// read as not-pressed without a special case.
#[derive(Debug, Clone)]
pub struct KeyboardSnapshot {
    pressed: [bool; NUM_SCANCODES],
}

impl KeyboardSnapshot {
    /// Returns whether the given scancode's key is down.  Out-of-range
    /// scancodes read as not-pressed.
    pub fn is_pressed(&self, sc: Scancode) -> bool {
        self.pressed.get(sc.0 as usize).copied().unwrap_or(false)
    }

    /// Marks a scancode as pressed.  Out-of-range scancodes are ignored, as
    /// is slot 0, which must stay unpressed.
    pub fn press(&mut self, sc: Scancode) {
        if sc == Scancode::UNKNOWN {
            return;
        }
        if let Some(slot) = self.pressed.get_mut(sc.0 as usize) {
            *slot = true;
        }
    }

    /// Marks a scancode as released.
    pub fn release(&mut self, sc: Scancode) {
        if let Some(slot) = self.pressed.get_mut(sc.0 as usize) {
            *slot = false;
        }
    }
}

impl Default for KeyboardSnapshot {
    fn default() -> Self {
        Self {
            pressed: [false; NUM_SCANCODES],
        }
    }
}

/// Mouse state at one instant: cursor position and the pressed-button
/// bitmask, in either window-local or desktop-global coordinates depending
/// on which query produced it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseSnapshot {
    pub x: i32,
    pub y: i32,
    /// OR of the SDL button masks of all currently pressed buttons.
    pub buttons: u32,
}

/// Opaque handle to a native window, as provided by the windowing layer.
///
/// The adapter never dereferences it; it is forwarded verbatim to the warp
/// call.  [`WindowHandle::FOCUSED`] (the null handle) means "the window with
/// current mouse focus", which is how SDL interprets a null window pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowHandle(*mut c_void);

impl WindowHandle {
    /// The window with current mouse focus.
    pub const FOCUSED: WindowHandle = WindowHandle(std::ptr::null_mut());

    /// Wraps a raw native window pointer.
    pub fn from_raw(raw: *mut c_void) -> Self {
        WindowHandle(raw)
    }

    /// Returns the raw native window pointer.
    pub fn as_raw(self) -> *mut c_void {
        self.0
    }
}

/// The native input library boundary.
///
/// One implementation per build target; the adapter is generic over it so
/// the cursor handle can be an owned RAII type that differs per backend.
pub trait InputBackend {
    /// Owned native cursor handle.  Dropping it releases the native
    /// resource.
    type CursorHandle;

    /// Captures the full keyboard state in one call.
    fn keyboard_snapshot(&self) -> KeyboardSnapshot;

    /// Captures mouse state in window-local coordinates.
    fn mouse_snapshot(&self) -> MouseSnapshot;

    /// Captures mouse state in desktop-global coordinates.
    ///
    /// Only meaningful on drivers where
    /// [`VideoDriver::supports_global_mouse`] holds; the adapter performs
    /// that check once at construction.
    fn global_mouse_snapshot(&self) -> MouseSnapshot;

    /// Warps the OS cursor to window-local coordinates.  Never fails.
    fn warp_cursor(&self, window: WindowHandle, x: u32, y: u32);

    /// Creates a native system cursor for the given id.
    ///
    /// The only fallible native call the adapter makes.
    fn create_system_cursor(&self, id: SystemCursorId) -> Result<Self::CursorHandle, BackendError>;

    /// Makes the given cursor the active one.
    fn apply_cursor(&self, handle: &Self::CursorHandle);

    /// Sets cursor visibility and returns the prior visibility state.
    fn show_cursor(&self, visible: bool) -> bool;

    /// Reports the active video driver, for the one-time capability probe.
    fn video_driver(&self) -> VideoDriver;
}
