//! Widgets provided by this crate.
//!
//! - [`HotkeyTextBox`]: Text box that captures keyboard hotkey combinations

mod hotkey_text_box;

pub use hotkey_text_box::HotkeyTextBox;
