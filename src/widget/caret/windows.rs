//! Windows caret implementation using the Win32 API.

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::HideCaret;

/// Caret hiding is always available on Windows.
pub fn is_available() -> bool {
    true
}

/// Hide the caret of the given window.
///
/// The call fails if the caret is not owned by the window identified by the
/// handle, e.g. when focus has already moved on by the time the call runs.
pub fn hide_caret(raw: isize) -> bool {
    let hwnd = HWND(raw as *mut std::ffi::c_void);
    match unsafe { HideCaret(hwnd) } {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(raw, %err, "HideCaret failed");
            false
        }
    }
}
