//! Caret-hiding platform abstraction.
//!
//! The hotkey text box displays text but does not support cursor-based
//! editing, so when it is hosted inside a native text control the system
//! text-insertion caret has to be hidden each time the widget gains focus.
//!
//! The module automatically selects the appropriate backend based on the
//! target platform:
//! - Windows: `HideCaret` from the Win32 API (the caret is a win32 concept
//!   owned by the window that has focus)
//! - Elsewhere: a no-op stub — non-Windows hosts simply never draw a caret
//!   for this widget

use raw_window_handle::RawWindowHandle;

// Platform-specific implementations
#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "windows")]
use windows as platform;

#[cfg(not(target_os = "windows"))]
mod stub;
#[cfg(not(target_os = "windows"))]
use stub as platform;

/// An opaque native window/control handle used for the caret call.
///
/// Obtained from a [`RawWindowHandle`] via [`NativeHandle::from_raw`]. Only
/// Win32 handles carry a caret; other handle kinds yield `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(isize);

impl NativeHandle {
    /// Extract a native handle from a raw window handle.
    pub fn from_raw(handle: &RawWindowHandle) -> Option<Self> {
        match handle {
            RawWindowHandle::Win32(h) => Some(Self(h.hwnd.get())),
            _ => None,
        }
    }

    /// The raw handle value.
    pub fn as_isize(self) -> isize {
        self.0
    }
}

/// Check if caret hiding is available on this platform.
pub fn is_available() -> bool {
    platform::is_available()
}

/// Hide the text-insertion caret of the given window/control.
///
/// Returns `true` if the platform call succeeded. Failure is logged and is
/// never an error for callers; a visible caret in a widget that ignores it
/// is cosmetic.
pub fn hide_caret(handle: NativeHandle) -> bool {
    platform::hide_caret(handle.as_isize())
}
