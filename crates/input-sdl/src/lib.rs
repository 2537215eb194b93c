//! # input-sdl
//!
//! The SDL input adapter: keyboard and mouse state polling plus OS cursor
//! control, presented behind the abstract code space defined by
//! [`input_core`].
//!
//! The adapter is a pure request/response shim.  Every operation is a
//! direct, blocking passthrough to a native query or mutator; the only state
//! it owns is a small cache of native cursor handles (one per
//! [`input_core::CursorShape`], created lazily, released when the adapter is
//! dropped) and the one-time decision whether desktop-global mouse queries
//! are safe on the active video driver.
//!
//! The native calls sit behind the [`backend::InputBackend`] trait:
//!
//! - [`backend::sdl::SdlBackend`] (cargo feature `sdl2`) forwards to the
//!   real SDL library.
//! - [`backend::mock::MockInputBackend`] records calls in memory so the
//!   adapter logic is testable without a desktop environment.
//!
//! Callers must serialize access to one adapter instance; nothing here is
//! designed for concurrent use.

pub mod adapter;
pub mod backend;
pub mod config;

pub use adapter::{InputAdapter, InputError};
pub use backend::{BackendError, InputBackend, KeyboardSnapshot, MouseSnapshot, WindowHandle};
pub use config::{AdapterConfig, GlobalMousePolicy};
