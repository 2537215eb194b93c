//! # input-core
//!
//! Abstract device-code enumerations and the SDL translation tables shared by
//! every consumer of the input adapter.
//!
//! This crate has zero dependencies on OS APIs, windowing libraries, or the
//! SDL runtime itself.  It defines:
//!
//! - **`codes`** – The abstract code space: logical key codes (including the
//!   combinable `Shift`/`Control`/`Alt` modifiers), mouse buttons, cursor
//!   shapes, and cursor coordinate spaces.  This is the vocabulary the
//!   platform-independent input layer speaks.
//!
//! - **`sdlmap`** – Bidirectional translation tables between the abstract
//!   code space and SDL's concrete values: scancodes, button bitmasks, and
//!   system-cursor identifiers, plus the video-driver capability probe.
//!   Every translation is a total function with an explicit sentinel for
//!   unmapped input in either direction.

pub mod codes;
pub mod sdlmap;

// Re-export the most-used types at the crate root so callers can write
// `input_core::KeyCode` instead of `input_core::codes::key::KeyCode`.
pub use codes::cursor::{CoordinateSpace, CursorShape};
pub use codes::key::KeyCode;
pub use codes::mouse::MouseButton;
pub use sdlmap::driver::VideoDriver;
pub use sdlmap::scancode::{Scancode, NUM_SCANCODES};
pub use sdlmap::CodeTranslator;
