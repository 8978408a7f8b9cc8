//! Stub implementation for platforms without a system caret.
//!
//! Non-Windows hosts draw the caret themselves and simply never draw one for
//! this widget, so there is nothing to hide.

/// Caret hiding is not needed on this platform.
pub fn is_available() -> bool {
    false
}

/// No-op on this platform.
pub fn hide_caret(_raw: isize) -> bool {
    false
}
