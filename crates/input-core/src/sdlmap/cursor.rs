//! Cursor shape to SDL system cursor id translation.
//!
//! Reference: the `SDL_SystemCursor` enumeration in SDL_mouse.h.  The ids
//! are small dense integers; SDL resolves them to whatever bitmap the
//! platform cursor backend provides.

use serde::{Deserialize, Serialize};

use crate::codes::CursorShape;

/// SDL system cursor identifier (`SDL_SystemCursor` value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemCursorId(pub u32);

impl SystemCursorId {
    pub const ARROW: SystemCursorId = SystemCursorId(0);
    pub const IBEAM: SystemCursorId = SystemCursorId(1);
    pub const WAIT: SystemCursorId = SystemCursorId(2);
    /// No abstract shape maps to the crosshair; it exists only so the
    /// backward translation can name every SDL id.
    pub const CROSSHAIR: SystemCursorId = SystemCursorId(3);
    pub const WAIT_ARROW: SystemCursorId = SystemCursorId(4);
    pub const SIZE_NWSE: SystemCursorId = SystemCursorId(5);
    pub const SIZE_NESW: SystemCursorId = SystemCursorId(6);
    pub const SIZE_WE: SystemCursorId = SystemCursorId(7);
    pub const SIZE_NS: SystemCursorId = SystemCursorId(8);
    pub const SIZE_ALL: SystemCursorId = SystemCursorId(9);
    pub const NO: SystemCursorId = SystemCursorId(10);
    pub const HAND: SystemCursorId = SystemCursorId(11);
}

/// Translates an abstract [`CursorShape`] to an SDL system cursor id.
///
/// Returns `None` for [`CursorShape::Hidden`]: hiding is a visibility
/// toggle, not a cursor bitmap.
pub fn shape_to_cursor_id(shape: CursorShape) -> Option<SystemCursorId> {
    match shape {
        CursorShape::Arrow => Some(SystemCursorId::ARROW),
        CursorShape::TextInput => Some(SystemCursorId::IBEAM),
        CursorShape::ResizeAll => Some(SystemCursorId::SIZE_ALL),
        CursorShape::ResizeEw => Some(SystemCursorId::SIZE_WE),
        CursorShape::ResizeNs => Some(SystemCursorId::SIZE_NS),
        CursorShape::ResizeNesw => Some(SystemCursorId::SIZE_NESW),
        CursorShape::ResizeNwse => Some(SystemCursorId::SIZE_NWSE),
        CursorShape::Hand => Some(SystemCursorId::HAND),
        CursorShape::NotAllowed => Some(SystemCursorId::NO),
        CursorShape::Wait => Some(SystemCursorId::WAIT),
        CursorShape::WaitArrow => Some(SystemCursorId::WAIT_ARROW),
        CursorShape::Hidden => None,
    }
}

/// Translates an SDL system cursor id back to an abstract [`CursorShape`].
///
/// Returns `None` for ids with no abstract equivalent (the crosshair and
/// anything outside the `SDL_SystemCursor` range).
pub fn cursor_id_to_shape(id: SystemCursorId) -> Option<CursorShape> {
    match id {
        SystemCursorId::ARROW => Some(CursorShape::Arrow),
        SystemCursorId::IBEAM => Some(CursorShape::TextInput),
        SystemCursorId::SIZE_ALL => Some(CursorShape::ResizeAll),
        SystemCursorId::SIZE_WE => Some(CursorShape::ResizeEw),
        SystemCursorId::SIZE_NS => Some(CursorShape::ResizeNs),
        SystemCursorId::SIZE_NESW => Some(CursorShape::ResizeNesw),
        SystemCursorId::SIZE_NWSE => Some(CursorShape::ResizeNwse),
        SystemCursorId::HAND => Some(CursorShape::Hand),
        SystemCursorId::NO => Some(CursorShape::NotAllowed),
        SystemCursorId::WAIT => Some(CursorShape::Wait),
        SystemCursorId::WAIT_ARROW => Some(CursorShape::WaitArrow),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_has_no_native_id() {
        assert_eq!(shape_to_cursor_id(CursorShape::Hidden), None);
    }

    #[test]
    fn test_every_native_shape_has_a_distinct_id() {
        let mut seen = Vec::new();
        for shape in CursorShape::NATIVE {
            let id = shape_to_cursor_id(shape)
                .unwrap_or_else(|| panic!("{shape:?} should have a native id"));
            assert!(!seen.contains(&id), "{shape:?} id {id:?} already used");
            seen.push(id);
        }
    }

    #[test]
    fn test_crosshair_and_unknown_ids_map_back_to_none() {
        assert_eq!(cursor_id_to_shape(SystemCursorId::CROSSHAIR), None);
        assert_eq!(cursor_id_to_shape(SystemCursorId(12)), None);
        assert_eq!(cursor_id_to_shape(SystemCursorId(u32::MAX)), None);
    }
}
