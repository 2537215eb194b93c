//! SDL video driver identification and the global-mouse capability probe.
//!
//! SDL reports its active video driver as a string (`SDL_GetCurrentVideoDriver`).
//! Desktop-global mouse queries (`SDL_GetGlobalMouseState`) are only reliable
//! on a known set of drivers, so the adapter decides once at construction
//! whether global queries are safe.  The stringly probe is confined to
//! [`VideoDriver::from_name`]; everything downstream works with the enum.

use serde::{Deserialize, Serialize};

/// Identified SDL video driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoDriver {
    Windows,
    Cocoa,
    X11,
    Wayland,
    /// OS/2 DIVE driver.
    Dive,
    /// OS/2 VMAN driver.
    Vman,
    /// Any driver not in the known set (dummy, offscreen, kmsdrm, ...).
    Unknown,
}

/// Known driver name prefixes, matched against the string SDL reports.
/// Prefix (not equality) match: SDL occasionally suffixes driver names.
const DRIVER_PREFIXES: [(&str, VideoDriver); 6] = [
    ("windows", VideoDriver::Windows),
    ("cocoa", VideoDriver::Cocoa),
    ("x11", VideoDriver::X11),
    ("wayland", VideoDriver::Wayland),
    ("DIVE", VideoDriver::Dive),
    ("VMAN", VideoDriver::Vman),
];

impl VideoDriver {
    /// Identifies a driver from the name SDL reports.
    ///
    /// Unrecognized names (including the empty string) yield
    /// [`VideoDriver::Unknown`].
    pub fn from_name(name: &str) -> VideoDriver {
        for (prefix, driver) in DRIVER_PREFIXES {
            if name.starts_with(prefix) {
                return driver;
            }
        }
        VideoDriver::Unknown
    }

    /// Returns `true` if desktop-global mouse state queries are reliable on
    /// this driver.
    ///
    /// Wayland is deliberately absent: its compositors do not expose global
    /// pointer state to clients.
    pub fn supports_global_mouse(self) -> bool {
        matches!(
            self,
            VideoDriver::Windows
                | VideoDriver::Cocoa
                | VideoDriver::X11
                | VideoDriver::Dive
                | VideoDriver::Vman
        )
    }
}
