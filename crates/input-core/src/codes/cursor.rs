//! Cursor shapes and cursor coordinate spaces.

use serde::{Deserialize, Serialize};

/// Visual cursor appearance in the abstract code space.
///
/// Every shape except [`CursorShape::Hidden`] corresponds to an OS-provided
/// system cursor; `Hidden` is a pseudo-shape that hides the cursor instead
/// of selecting a bitmap.  Discriminants are dense so the adapter can key a
/// fixed-size handle cache by shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(usize)]
pub enum CursorShape {
    Arrow = 0,
    TextInput = 1,
    ResizeAll = 2,
    /// East-west (horizontal) resize.
    ResizeEw = 3,
    /// North-south (vertical) resize.
    ResizeNs = 4,
    ResizeNesw = 5,
    ResizeNwse = 6,
    Hand = 7,
    /// "Forbidden" / slashed-circle cursor.
    NotAllowed = 8,
    Wait = 9,
    /// Small wait spinner attached to the arrow.
    WaitArrow = 10,
    /// Pseudo-shape: hides the cursor entirely.  Has no native id and is
    /// never cached.
    Hidden = 11,
}

impl CursorShape {
    /// Every shape with a native system cursor, in discriminant order.
    /// Excludes [`CursorShape::Hidden`].
    pub const NATIVE: [CursorShape; 11] = [
        CursorShape::Arrow,
        CursorShape::TextInput,
        CursorShape::ResizeAll,
        CursorShape::ResizeEw,
        CursorShape::ResizeNs,
        CursorShape::ResizeNesw,
        CursorShape::ResizeNwse,
        CursorShape::Hand,
        CursorShape::NotAllowed,
        CursorShape::Wait,
        CursorShape::WaitArrow,
    ];

    /// Dense index of this shape, usable as a cache slot for native shapes.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Coordinate space for cursor position queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoordinateSpace {
    /// Relative to the focused window's client area.
    Window,
    /// Desktop-global (multi-window, multi-monitor) coordinates.
    Screen,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_shapes_have_dense_indices_matching_their_position() {
        for (i, shape) in CursorShape::NATIVE.iter().enumerate() {
            assert_eq!(shape.index(), i, "{shape:?} index mismatch");
        }
    }

    #[test]
    fn test_hidden_is_not_a_native_shape() {
        assert!(!CursorShape::NATIVE.contains(&CursorShape::Hidden));
        assert_eq!(CursorShape::Hidden.index(), CursorShape::NATIVE.len());
    }
}
