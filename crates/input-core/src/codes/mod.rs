//! The abstract device-code space.
//!
//! These enumerations are what the higher-level, platform-independent input
//! layer consumes.  Nothing in this module knows about SDL; the concrete
//! values live in [`crate::sdlmap`].

pub mod cursor;
pub mod key;
pub mod mouse;

pub use cursor::{CoordinateSpace, CursorShape};
pub use key::KeyCode;
pub use mouse::MouseButton;
