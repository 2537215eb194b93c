//! Real SDL backend: direct passthrough to the `sdl2` crate.
//!
//! Each trait method forwards to exactly one SDL query or mutator.  Two
//! calls have no safe wrapper in the `sdl2` crate and go through
//! `sdl2::sys` directly: `SDL_GetGlobalMouseState` (desktop-global mouse
//! state) and `SDL_WarpMouseInWindow` against an externally supplied window
//! pointer.
//!
//! Keyboard and mouse snapshots reflect SDL's event-pump state: the
//! application's event loop must keep pumping events (as any SDL
//! application does) for the snapshots to advance.

use tracing::info;

use input_core::sdlmap::cursor::SystemCursorId;
use input_core::{Scancode, VideoDriver};

use super::{BackendError, InputBackend, KeyboardSnapshot, MouseSnapshot, WindowHandle};

/// SDL-backed implementation of [`InputBackend`].
///
/// Holds the SDL context and its event pump; SDL permits only one event
/// pump per process, so only one `SdlBackend` can exist at a time.
pub struct SdlBackend {
    _context: sdl2::Sdl,
    video: sdl2::VideoSubsystem,
    event_pump: sdl2::EventPump,
    mouse: sdl2::mouse::MouseUtil,
}

impl SdlBackend {
    /// Initializes SDL and its video subsystem.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Init`] if SDL cannot initialize (no display,
    /// missing driver, or an event pump already exists).
    pub fn new() -> Result<Self, BackendError> {
        let context = sdl2::init().map_err(BackendError::Init)?;
        let video = context.video().map_err(BackendError::Init)?;
        let event_pump = context.event_pump().map_err(BackendError::Init)?;
        let mouse = context.mouse();
        info!(driver = video.current_video_driver(), "SDL input backend initialized");
        Ok(Self {
            _context: context,
            video,
            event_pump,
            mouse,
        })
    }
}

impl InputBackend for SdlBackend {
    type CursorHandle = sdl2::mouse::Cursor;

    fn keyboard_snapshot(&self) -> KeyboardSnapshot {
        let mut snapshot = KeyboardSnapshot::default();
        for (scancode, pressed) in self.event_pump.keyboard_state().scancodes() {
            if pressed {
                snapshot.press(Scancode(scancode as i32 as u16));
            }
        }
        snapshot
    }

    fn mouse_snapshot(&self) -> MouseSnapshot {
        let state = self.event_pump.mouse_state();
        MouseSnapshot {
            x: state.x(),
            y: state.y(),
            buttons: state.to_sdl_state(),
        }
    }

    fn global_mouse_snapshot(&self) -> MouseSnapshot {
        let mut x = 0i32;
        let mut y = 0i32;
        let buttons = unsafe { sdl2::sys::SDL_GetGlobalMouseState(&mut x, &mut y) };
        MouseSnapshot { x, y, buttons }
    }

    fn warp_cursor(&self, window: WindowHandle, x: u32, y: u32) {
        // A null window means "the window with mouse focus" to SDL, which
        // is exactly the WindowHandle::FOCUSED contract.
        unsafe {
            sdl2::sys::SDL_WarpMouseInWindow(
                window.as_raw() as *mut sdl2::sys::SDL_Window,
                x as i32,
                y as i32,
            );
        }
    }

    fn create_system_cursor(
        &self,
        id: SystemCursorId,
    ) -> Result<sdl2::mouse::Cursor, BackendError> {
        use sdl2::mouse::SystemCursor;
        let system = match id {
            SystemCursorId::ARROW => SystemCursor::Arrow,
            SystemCursorId::IBEAM => SystemCursor::IBeam,
            SystemCursorId::WAIT => SystemCursor::Wait,
            SystemCursorId::CROSSHAIR => SystemCursor::Crosshair,
            SystemCursorId::WAIT_ARROW => SystemCursor::WaitArrow,
            SystemCursorId::SIZE_NWSE => SystemCursor::SizeNWSE,
            SystemCursorId::SIZE_NESW => SystemCursor::SizeNESW,
            SystemCursorId::SIZE_WE => SystemCursor::SizeWE,
            SystemCursorId::SIZE_NS => SystemCursor::SizeNS,
            SystemCursorId::SIZE_ALL => SystemCursor::SizeAll,
            SystemCursorId::NO => SystemCursor::No,
            SystemCursorId::HAND => SystemCursor::Hand,
            _ => {
                return Err(BackendError::CursorCreation {
                    id,
                    reason: "id outside the SDL_SystemCursor range".into(),
                })
            }
        };
        sdl2::mouse::Cursor::from_system(system)
            .map_err(|reason| BackendError::CursorCreation { id, reason })
    }

    fn apply_cursor(&self, handle: &sdl2::mouse::Cursor) {
        handle.set();
    }

    fn show_cursor(&self, visible: bool) -> bool {
        let prior = self.mouse.is_cursor_showing();
        self.mouse.show_cursor(visible);
        prior
    }

    fn video_driver(&self) -> VideoDriver {
        VideoDriver::from_name(self.video.current_video_driver())
    }
}
