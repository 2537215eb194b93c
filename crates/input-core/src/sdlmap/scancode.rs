//! Abstract key code to SDL scancode translation tables.
//!
//! Reference: SDL_scancode.h and USB HID Usage Tables 1.3, Section 10
//! (Keyboard/Keypad page 0x07).
//!
//! # What is a scancode?
//!
//! An SDL scancode identifies a **physical key position**, independent of
//! keyboard layout.  Pressing the key left of Tab produces the same scancode
//! on QWERTY and AZERTY keyboards even though the printed letter differs.
//! SDL adopts the USB HID keyboard usage IDs for its scancode values (letter
//! A is 4, Enter is 40, Left Ctrl is 224), which is why the literals below
//! match the HID tables.
//!
//! # Intentional asymmetry
//!
//! The forward direction is many-to-one: the combined modifiers
//! (`Shift`/`Control`/`Alt`) and the forward-only synthetic codes (`Print`,
//! `SystemLeft`, `SystemRight`) all map to [`Scancode::UNKNOWN`].  The
//! backward table therefore carries no entry for them, and scancode 0 maps
//! to [`KeyCode::Invalid`].  Round-tripping holds for every other code.

use serde::{Deserialize, Serialize};

use crate::codes::KeyCode;

/// Number of scancode slots in an SDL keyboard state snapshot
/// (`SDL_NUM_SCANCODES`).
pub const NUM_SCANCODES: usize = 512;

/// SDL scancode value (a USB HID usage ID on the keyboard page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scancode(pub u16);

impl Scancode {
    /// `SDL_SCANCODE_UNKNOWN`: the sink for every unmapped forward
    /// translation.  Slot 0 of a keyboard snapshot is never pressed, so
    /// unmapped codes read as not-pressed for free.
    pub const UNKNOWN: Scancode = Scancode(0);
}

/// Translates an abstract [`KeyCode`] to an SDL scancode.
///
/// Total over [`KeyCode`]; synthetic codes return [`Scancode::UNKNOWN`].
pub fn key_to_scancode(key: KeyCode) -> Scancode {
    use KeyCode::*;
    Scancode(match key {
        // Synthetic codes: no backend key.
        Invalid | Shift | Control | Alt | Print | SystemLeft | SystemRight => 0,

        Backspace => 42,   // SDL_SCANCODE_BACKSPACE
        Tab => 43,         // SDL_SCANCODE_TAB
        Clear => 156,      // SDL_SCANCODE_CLEAR
        Enter => 40,       // SDL_SCANCODE_RETURN
        NumpadEnter => 88, // SDL_SCANCODE_KP_ENTER
        Pause => 72,       // SDL_SCANCODE_PAUSE
        CapsLock => 57,    // SDL_SCANCODE_CAPSLOCK
        Escape => 41,      // SDL_SCANCODE_ESCAPE
        Space => 44,       // SDL_SCANCODE_SPACE
        PageUp => 75,      // SDL_SCANCODE_PAGEUP
        PageDown => 78,    // SDL_SCANCODE_PAGEDOWN
        End => 77,         // SDL_SCANCODE_END
        Home => 74,        // SDL_SCANCODE_HOME
        ArrowLeft => 80,   // SDL_SCANCODE_LEFT
        ArrowUp => 82,     // SDL_SCANCODE_UP
        ArrowRight => 79,  // SDL_SCANCODE_RIGHT
        ArrowDown => 81,   // SDL_SCANCODE_DOWN
        Select => 119,     // SDL_SCANCODE_SELECT
        Execute => 116,    // SDL_SCANCODE_EXECUTE
        PrintScreen => 70, // SDL_SCANCODE_PRINTSCREEN
        Insert => 73,      // SDL_SCANCODE_INSERT
        Delete => 76,      // SDL_SCANCODE_DELETE
        Help => 117,       // SDL_SCANCODE_HELP

        Digit0 => 39, // SDL_SCANCODE_0
        Digit1 => 30,
        Digit2 => 31,
        Digit3 => 32,
        Digit4 => 33,
        Digit5 => 34,
        Digit6 => 35,
        Digit7 => 36,
        Digit8 => 37,
        Digit9 => 38,

        KeyA => 4, // SDL_SCANCODE_A
        KeyB => 5,
        KeyC => 6,
        KeyD => 7,
        KeyE => 8,
        KeyF => 9,
        KeyG => 10,
        KeyH => 11,
        KeyI => 12,
        KeyJ => 13,
        KeyK => 14,
        KeyL => 15,
        KeyM => 16,
        KeyN => 17,
        KeyO => 18,
        KeyP => 19,
        KeyQ => 20,
        KeyR => 21,
        KeyS => 22,
        KeyT => 23,
        KeyU => 24,
        KeyV => 25,
        KeyW => 26,
        KeyX => 27,
        KeyY => 28,
        KeyZ => 29,

        ContextMenu => 101, // SDL_SCANCODE_APPLICATION
        Sleep => 282,       // SDL_SCANCODE_SLEEP

        Numpad0 => 98, // SDL_SCANCODE_KP_0
        Numpad1 => 89,
        Numpad2 => 90,
        Numpad3 => 91,
        Numpad4 => 92,
        Numpad5 => 93,
        Numpad6 => 94,
        Numpad7 => 95,
        Numpad8 => 96,
        Numpad9 => 97,
        NumpadMultiply => 85, // SDL_SCANCODE_KP_MULTIPLY
        NumpadAdd => 87,      // SDL_SCANCODE_KP_PLUS
        Separator => 159,     // SDL_SCANCODE_SEPARATOR
        NumpadSubtract => 86, // SDL_SCANCODE_KP_MINUS
        NumpadDecimal => 99,  // SDL_SCANCODE_KP_PERIOD
        NumpadDivide => 84,   // SDL_SCANCODE_KP_DIVIDE

        F1 => 58, // SDL_SCANCODE_F1
        F2 => 59,
        F3 => 60,
        F4 => 61,
        F5 => 62,
        F6 => 63,
        F7 => 64,
        F8 => 65,
        F9 => 66,
        F10 => 67,
        F11 => 68,
        F12 => 69,
        F13 => 104, // SDL_SCANCODE_F13
        F14 => 105,
        F15 => 106,
        F16 => 107,
        F17 => 108,
        F18 => 109,
        F19 => 110,
        F20 => 111,
        F21 => 112,
        F22 => 113,
        F23 => 114,
        F24 => 115,

        NumLock => 83,    // SDL_SCANCODE_NUMLOCKCLEAR
        ScrollLock => 71, // SDL_SCANCODE_SCROLLLOCK

        ShiftLeft => 225,    // SDL_SCANCODE_LSHIFT
        ShiftRight => 229,   // SDL_SCANCODE_RSHIFT
        ControlLeft => 224,  // SDL_SCANCODE_LCTRL
        ControlRight => 228, // SDL_SCANCODE_RCTRL
        AltLeft => 226,      // SDL_SCANCODE_LALT
        AltRight => 230,     // SDL_SCANCODE_RALT
        MetaLeft => 227,     // SDL_SCANCODE_LGUI
        MetaRight => 231,    // SDL_SCANCODE_RGUI

        Semicolon => 51,    // SDL_SCANCODE_SEMICOLON
        Equal => 46,        // SDL_SCANCODE_EQUALS
        NumpadEqual => 103, // SDL_SCANCODE_KP_EQUALS
        Comma => 54,        // SDL_SCANCODE_COMMA
        Minus => 45,        // SDL_SCANCODE_MINUS
        Period => 55,       // SDL_SCANCODE_PERIOD
        Slash => 56,        // SDL_SCANCODE_SLASH
        Backquote => 53,    // SDL_SCANCODE_GRAVE
        BracketLeft => 47,  // SDL_SCANCODE_LEFTBRACKET
        Backslash => 49,    // SDL_SCANCODE_BACKSLASH
        BracketRight => 48, // SDL_SCANCODE_RIGHTBRACKET
        Quote => 52,        // SDL_SCANCODE_APOSTROPHE
    })
}

/// Translates an SDL scancode to an abstract [`KeyCode`].
///
/// Returns [`KeyCode::Invalid`] for scancodes outside the table or with no
/// abstract equivalent.
pub fn scancode_to_key(sc: Scancode) -> KeyCode {
    SCANCODE_TO_KEY_TABLE
        .get(sc.0 as usize)
        .copied()
        .unwrap_or(KeyCode::Invalid)
}

/// Complete scancode → key table indexed by scancode (0–511).
///
/// Entries are `KeyCode::Invalid` when no abstract equivalent exists.  The
/// synthetic codes deliberately have no entry here.
const SCANCODE_TO_KEY_TABLE: [KeyCode; NUM_SCANCODES] = {
    use KeyCode::*;
    let mut t = [Invalid; NUM_SCANCODES];

    // ── Letters (4–29) ───────────────────────────────────────────────────────
    t[4] = KeyA;
    t[5] = KeyB;
    t[6] = KeyC;
    t[7] = KeyD;
    t[8] = KeyE;
    t[9] = KeyF;
    t[10] = KeyG;
    t[11] = KeyH;
    t[12] = KeyI;
    t[13] = KeyJ;
    t[14] = KeyK;
    t[15] = KeyL;
    t[16] = KeyM;
    t[17] = KeyN;
    t[18] = KeyO;
    t[19] = KeyP;
    t[20] = KeyQ;
    t[21] = KeyR;
    t[22] = KeyS;
    t[23] = KeyT;
    t[24] = KeyU;
    t[25] = KeyV;
    t[26] = KeyW;
    t[27] = KeyX;
    t[28] = KeyY;
    t[29] = KeyZ;

    // ── Digit row (30–39) ────────────────────────────────────────────────────
    t[30] = Digit1;
    t[31] = Digit2;
    t[32] = Digit3;
    t[33] = Digit4;
    t[34] = Digit5;
    t[35] = Digit6;
    t[36] = Digit7;
    t[37] = Digit8;
    t[38] = Digit9;
    t[39] = Digit0;

    // ── Editing, whitespace, punctuation (40–57) ─────────────────────────────
    t[40] = Enter;
    t[41] = Escape;
    t[42] = Backspace;
    t[43] = Tab;
    t[44] = Space;
    t[45] = Minus;
    t[46] = Equal;
    t[47] = BracketLeft;
    t[48] = BracketRight;
    t[49] = Backslash;
    t[51] = Semicolon;
    t[52] = Quote;
    t[53] = Backquote;
    t[54] = Comma;
    t[55] = Period;
    t[56] = Slash;
    t[57] = CapsLock;

    // ── Function keys F1–F12 (58–69) ─────────────────────────────────────────
    t[58] = F1;
    t[59] = F2;
    t[60] = F3;
    t[61] = F4;
    t[62] = F5;
    t[63] = F6;
    t[64] = F7;
    t[65] = F8;
    t[66] = F9;
    t[67] = F10;
    t[68] = F11;
    t[69] = F12;

    // ── Navigation cluster (70–82) ───────────────────────────────────────────
    t[70] = PrintScreen;
    t[71] = ScrollLock;
    t[72] = Pause;
    t[73] = Insert;
    t[74] = Home;
    t[75] = PageUp;
    t[76] = Delete;
    t[77] = End;
    t[78] = PageDown;
    t[79] = ArrowRight;
    t[80] = ArrowLeft;
    t[81] = ArrowDown;
    t[82] = ArrowUp;

    // ── Numpad (83–99, 103) ──────────────────────────────────────────────────
    t[83] = NumLock;
    t[84] = NumpadDivide;
    t[85] = NumpadMultiply;
    t[86] = NumpadSubtract;
    t[87] = NumpadAdd;
    t[88] = NumpadEnter;
    t[89] = Numpad1;
    t[90] = Numpad2;
    t[91] = Numpad3;
    t[92] = Numpad4;
    t[93] = Numpad5;
    t[94] = Numpad6;
    t[95] = Numpad7;
    t[96] = Numpad8;
    t[97] = Numpad9;
    t[98] = Numpad0;
    t[99] = NumpadDecimal;
    t[103] = NumpadEqual;

    // ── Application keys ─────────────────────────────────────────────────────
    t[101] = ContextMenu;
    t[116] = Execute;
    t[117] = Help;
    t[119] = Select;
    t[156] = Clear;
    t[159] = Separator;
    t[282] = Sleep;

    // ── Function keys F13–F24 (104–115) ──────────────────────────────────────
    t[104] = F13;
    t[105] = F14;
    t[106] = F15;
    t[107] = F16;
    t[108] = F17;
    t[109] = F18;
    t[110] = F19;
    t[111] = F20;
    t[112] = F21;
    t[113] = F22;
    t[114] = F23;
    t[115] = F24;

    // ── Sided modifiers (224–231) ────────────────────────────────────────────
    t[224] = ControlLeft;
    t[225] = ShiftLeft;
    t[226] = AltLeft;
    t[227] = MetaLeft;
    t[228] = ControlRight;
    t[229] = ShiftRight;
    t[230] = AltRight;
    t[231] = MetaRight;

    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_codes_translate_forward_to_unknown() {
        for code in [
            KeyCode::Invalid,
            KeyCode::Shift,
            KeyCode::Control,
            KeyCode::Alt,
            KeyCode::Print,
            KeyCode::SystemLeft,
            KeyCode::SystemRight,
        ] {
            assert_eq!(
                key_to_scancode(code),
                Scancode::UNKNOWN,
                "{code:?} should map to the unknown scancode"
            );
        }
    }

    #[test]
    fn test_scancode_zero_maps_back_to_invalid() {
        assert_eq!(scancode_to_key(Scancode::UNKNOWN), KeyCode::Invalid);
    }

    #[test]
    fn test_out_of_range_scancodes_map_back_to_invalid() {
        for raw in [NUM_SCANCODES as u16, 1000, u16::MAX] {
            assert_eq!(scancode_to_key(Scancode(raw)), KeyCode::Invalid);
        }
    }

    #[test]
    fn test_well_known_scancode_values() {
        // Spot-check against SDL_scancode.h.
        assert_eq!(key_to_scancode(KeyCode::KeyA), Scancode(4));
        assert_eq!(key_to_scancode(KeyCode::Enter), Scancode(40));
        assert_eq!(key_to_scancode(KeyCode::Escape), Scancode(41));
        assert_eq!(key_to_scancode(KeyCode::Space), Scancode(44));
        assert_eq!(key_to_scancode(KeyCode::F1), Scancode(58));
        assert_eq!(key_to_scancode(KeyCode::F24), Scancode(115));
        assert_eq!(key_to_scancode(KeyCode::ControlLeft), Scancode(224));
        assert_eq!(key_to_scancode(KeyCode::MetaRight), Scancode(231));
        assert_eq!(key_to_scancode(KeyCode::Sleep), Scancode(282));
    }

    #[test]
    fn test_sided_modifiers_cover_both_sides_distinctly() {
        let pairs = [
            (KeyCode::ShiftLeft, KeyCode::ShiftRight),
            (KeyCode::ControlLeft, KeyCode::ControlRight),
            (KeyCode::AltLeft, KeyCode::AltRight),
            (KeyCode::MetaLeft, KeyCode::MetaRight),
        ];
        for (left, right) in pairs {
            let (l, r) = (key_to_scancode(left), key_to_scancode(right));
            assert_ne!(l, Scancode::UNKNOWN);
            assert_ne!(r, Scancode::UNKNOWN);
            assert_ne!(l, r, "{left:?}/{right:?} must be distinct scancodes");
        }
    }
}
