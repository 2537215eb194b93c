//! The input adapter: device polling and cursor control behind the abstract
//! code space.
//!
//! All methods are direct, blocking passthroughs to the backend.  The only
//! mutable state is the cursor-handle cache: a fixed-size array with one
//! slot per native [`CursorShape`], populated lazily on first use of a
//! shape.  The adapter owns every handle in the cache; the "currently
//! applied" shape is tracked as an index into it, never as a second owner.
//! Dropping the adapter drops the cache and releases the native cursors.

use thiserror::Error;
use tracing::{debug, info, warn};

use input_core::{CodeTranslator, CoordinateSpace, CursorShape, KeyCode, MouseButton};

use crate::backend::{BackendError, InputBackend, MouseSnapshot, WindowHandle};
use crate::config::{AdapterConfig, GlobalMousePolicy};

/// Error type for adapter operations.
///
/// Cursor creation is the adapter's only failure path; every other native
/// call is treated as infallible.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to create native cursor for {shape:?}")]
    CursorCreation {
        shape: CursorShape,
        #[source]
        source: BackendError,
    },
}

/// Input adapter over a native backend.
///
/// Single-threaded by design: callers must serialize access to one
/// instance.
pub struct InputAdapter<B: InputBackend> {
    backend: B,
    /// Decided once at construction from the video driver and the
    /// configured policy.
    use_global_mouse: bool,
    /// One slot per native shape, keyed by `CursorShape::index()`.
    cursors: [Option<B::CursorHandle>; CursorShape::NATIVE.len()],
    /// Shape of the handle most recently applied via `set_cursor_shape`.
    /// `Hidden` never lands here; hiding does not change the applied
    /// bitmap.
    applied: Option<CursorShape>,
}

impl<B: InputBackend> InputAdapter<B> {
    /// Creates an adapter, performing the one-time global-mouse capability
    /// decision.
    pub fn new(backend: B, config: &AdapterConfig) -> Self {
        let driver = backend.video_driver();
        let use_global_mouse = match config.global_mouse {
            GlobalMousePolicy::Auto => driver.supports_global_mouse(),
            GlobalMousePolicy::Never => false,
        };
        info!(?driver, use_global_mouse, "input adapter initialized");
        Self {
            backend,
            use_global_mouse,
            cursors: std::array::from_fn(|_| None),
            applied: None,
        }
    }

    /// Creates an adapter with the default configuration.
    pub fn with_defaults(backend: B) -> Self {
        Self::new(backend, &AdapterConfig::default())
    }

    /// Access to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether desktop-global mouse queries are in use for button state.
    pub fn uses_global_mouse(&self) -> bool {
        self.use_global_mouse
    }

    /// Returns whether the given key is currently down.
    ///
    /// Takes one keyboard snapshot per call.  Combined modifiers are down
    /// when either physical side is; unmapped codes translate to the
    /// unknown scancode and read as not-pressed.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        let keys = self.backend.keyboard_snapshot();
        if let Some((left, right)) = key.sides() {
            return keys.is_pressed(CodeTranslator::key_to_scancode(left))
                || keys.is_pressed(CodeTranslator::key_to_scancode(right));
        }
        keys.is_pressed(CodeTranslator::key_to_scancode(key))
    }

    /// Returns whether the given mouse button is currently down.
    ///
    /// Reads desktop-global state when the construction-time capability
    /// decision allows it, window-local state otherwise.
    /// [`MouseButton::None`] never reads as pressed.
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        let snapshot = self.button_state_snapshot();
        snapshot.buttons & CodeTranslator::button_to_mask(button) != 0
    }

    /// Returns the cursor position in the requested coordinate space.
    ///
    /// Coordinates are clamped non-negative; window-local and
    /// desktop-global results legitimately differ when the window is not
    /// at the desktop origin.
    pub fn cursor_position(&self, space: CoordinateSpace) -> (u32, u32) {
        let snapshot = match space {
            CoordinateSpace::Window => self.backend.mouse_snapshot(),
            CoordinateSpace::Screen => self.backend.global_mouse_snapshot(),
        };
        (snapshot.x.max(0) as u32, snapshot.y.max(0) as u32)
    }

    /// Warps the OS cursor to window-local coordinates against the given
    /// window.  The warp itself never fails.
    pub fn set_cursor_position(&self, pos: (u32, u32), window: WindowHandle) {
        self.backend.warp_cursor(window, pos.0, pos.1);
    }

    /// Applies a cursor shape.
    ///
    /// [`CursorShape::Hidden`] hides the cursor and always succeeds,
    /// leaving the cache and the applied-shape tracking unchanged.  Any
    /// other shape is created in the native backend on first use and
    /// cached; subsequent requests for the same shape reuse the cached
    /// handle.  Applying a shape shows the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::CursorCreation`] if the backend cannot create
    /// the native cursor.  The cache is left unchanged, so a later request
    /// for the same shape retries the creation.
    pub fn set_cursor_shape(&mut self, shape: CursorShape) -> Result<(), InputError> {
        let Some(native_id) = CodeTranslator::shape_to_cursor_id(shape) else {
            // Hidden: a visibility toggle, not a bitmap selection.
            self.backend.show_cursor(false);
            return Ok(());
        };

        let slot = shape.index();
        if self.cursors[slot].is_none() {
            debug!(?shape, ?native_id, "creating native cursor");
            let handle = self
                .backend
                .create_system_cursor(native_id)
                .map_err(|source| {
                    warn!(?shape, error = %source, "native cursor creation failed");
                    InputError::CursorCreation { shape, source }
                })?;
            self.cursors[slot] = Some(handle);
        }
        if let Some(handle) = self.cursors[slot].as_ref() {
            self.backend.apply_cursor(handle);
        }
        self.applied = Some(shape);
        self.backend.show_cursor(true);
        Ok(())
    }

    /// Toggles cursor visibility; returns the prior visibility state.
    pub fn show_cursor(&mut self, visible: bool) -> bool {
        self.backend.show_cursor(visible)
    }

    /// The shape most recently applied via [`Self::set_cursor_shape`],
    /// if any.  Hiding the cursor does not change this.
    pub fn applied_cursor_shape(&self) -> Option<CursorShape> {
        self.applied
    }

    fn button_state_snapshot(&self) -> MouseSnapshot {
        if self.use_global_mouse {
            self.backend.global_mouse_snapshot()
        } else {
            self.backend.mouse_snapshot()
        }
    }
}
