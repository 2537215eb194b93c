//! Mock input backend for unit testing.
//!
//! The real backend talks to SDL, which requires a desktop environment,
//! moves the actual cursor, and cannot be observed from test code.  The
//! `MockInputBackend` replaces every native call with in-memory state:
//! tests *set* the keyboard and mouse state the backend should report, and
//! *inspect* the calls the adapter made (warps, cursor creations, applied
//! cursors, visibility toggles).
//!
//! State lives behind `Mutex` fields so the settable pieces have interior
//! mutability through the `&self` trait methods.
//!
//! Use [`MockInputBackend::set_fail_cursor_creation`] to make the cursor
//! creation path fail, which is the only fallible native call and the only
//! error path the adapter has.

use std::sync::Mutex;

use input_core::sdlmap::cursor::SystemCursorId;
use input_core::{Scancode, VideoDriver};

use super::{BackendError, InputBackend, KeyboardSnapshot, MouseSnapshot, WindowHandle};

/// Cursor handle produced by the mock: the requested id plus a serial
/// number, so tests can tell two creations of the same shape apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockCursorHandle {
    pub id: SystemCursorId,
    pub serial: u32,
}

/// A mock backend that records all calls without touching any OS API.
pub struct MockInputBackend {
    keyboard: Mutex<KeyboardSnapshot>,
    mouse: Mutex<MouseSnapshot>,
    global_mouse: Mutex<MouseSnapshot>,
    driver: VideoDriver,
    visible: Mutex<bool>,
    /// When `true`, `create_system_cursor` fails.  Toggle per test.
    fail_cursor_creation: Mutex<bool>,
    /// Records each `(window, x, y)` triple passed to `warp_cursor`.
    pub warps: Mutex<Vec<(WindowHandle, u32, u32)>>,
    /// Records the id of every cursor actually created.
    pub created_cursors: Mutex<Vec<SystemCursorId>>,
    /// Records the id of every handle passed to `apply_cursor`.
    pub applied_cursors: Mutex<Vec<SystemCursorId>>,
}

impl MockInputBackend {
    /// Creates a mock reporting the X11 driver (global mouse supported),
    /// a visible cursor, and no input pressed.
    pub fn new() -> Self {
        Self::with_driver(VideoDriver::X11)
    }

    /// Creates a mock reporting the given video driver.
    pub fn with_driver(driver: VideoDriver) -> Self {
        Self {
            keyboard: Mutex::new(KeyboardSnapshot::default()),
            mouse: Mutex::new(MouseSnapshot::default()),
            global_mouse: Mutex::new(MouseSnapshot::default()),
            driver,
            visible: Mutex::new(true),
            fail_cursor_creation: Mutex::new(false),
            warps: Mutex::new(Vec::new()),
            created_cursors: Mutex::new(Vec::new()),
            applied_cursors: Mutex::new(Vec::new()),
        }
    }

    /// Sets or clears the pressed bit for a scancode.
    pub fn set_key_pressed(&self, sc: Scancode, pressed: bool) {
        let mut keyboard = self.keyboard.lock().unwrap();
        if pressed {
            keyboard.press(sc);
        } else {
            keyboard.release(sc);
        }
    }

    /// Replaces the window-local mouse state the mock reports.
    pub fn set_mouse_state(&self, snapshot: MouseSnapshot) {
        *self.mouse.lock().unwrap() = snapshot;
    }

    /// Replaces the desktop-global mouse state the mock reports.
    pub fn set_global_mouse_state(&self, snapshot: MouseSnapshot) {
        *self.global_mouse.lock().unwrap() = snapshot;
    }

    /// Makes subsequent cursor creations fail (or succeed again).
    pub fn set_fail_cursor_creation(&self, fail: bool) {
        *self.fail_cursor_creation.lock().unwrap() = fail;
    }

    /// Current cursor visibility, for assertions.
    pub fn cursor_visible(&self) -> bool {
        *self.visible.lock().unwrap()
    }

    /// Number of native cursors created so far, for assertions.
    pub fn created_cursor_count(&self) -> usize {
        self.created_cursors.lock().unwrap().len()
    }
}

impl Default for MockInputBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBackend for MockInputBackend {
    type CursorHandle = MockCursorHandle;

    fn keyboard_snapshot(&self) -> KeyboardSnapshot {
        self.keyboard.lock().unwrap().clone()
    }

    fn mouse_snapshot(&self) -> MouseSnapshot {
        *self.mouse.lock().unwrap()
    }

    fn global_mouse_snapshot(&self) -> MouseSnapshot {
        *self.global_mouse.lock().unwrap()
    }

    fn warp_cursor(&self, window: WindowHandle, x: u32, y: u32) {
        self.warps.lock().unwrap().push((window, x, y));
    }

    fn create_system_cursor(&self, id: SystemCursorId) -> Result<MockCursorHandle, BackendError> {
        if *self.fail_cursor_creation.lock().unwrap() {
            return Err(BackendError::CursorCreation {
                id,
                reason: "mock failure".into(),
            });
        }
        let mut created = self.created_cursors.lock().unwrap();
        let serial = created.len() as u32;
        created.push(id);
        Ok(MockCursorHandle { id, serial })
    }

    fn apply_cursor(&self, handle: &MockCursorHandle) {
        self.applied_cursors.lock().unwrap().push(handle.id);
    }

    fn show_cursor(&self, visible: bool) -> bool {
        let mut current = self.visible.lock().unwrap();
        std::mem::replace(&mut *current, visible)
    }

    fn video_driver(&self) -> VideoDriver {
        self.driver
    }
}
