//! A text box widget for capturing keyboard hotkey combinations.
//!
//! This crate provides [`HotkeyTextBox`], a text-entry control that captures
//! hotkey combinations (modifier flags plus an optional key code) instead of
//! editing text, together with the input-system slice it needs to run inside
//! any host toolkit:
//!
//! - **Hotkey Value**: [`Hotkey`] — structured value with display formatting
//!   ("Ctrl+Shift+A") and parsing
//! - **Capture Policies**: solo-modifier and toggle-key suppression, with a
//!   configurable placeholder for the empty value
//! - **Event Interception**: Qt-style events with accept/ignore semantics;
//!   typed characters, Tab navigation, Alt menu activation, and Delete
//!   editing are all suppressed in favor of capture
//! - **Platform Glue**: winit keyboard conversion (including the Print
//!   Screen raw-release quirk) and the Win32 caret-hiding call
//! - **Signal/Slot System**: type-safe change notification via [`Signal`]
//!
//! # Example
//!
//! ```
//! use hotkey_edit::{Hotkey, HotkeyTextBox, Key};
//! use hotkey_edit::widget::{KeyPressEvent, KeyboardModifiers, WidgetEvent};
//!
//! let mut edit = HotkeyTextBox::new();
//! edit.text_changed.connect(|text| {
//!     println!("display: {}", text);
//! });
//!
//! // Key events delivered by the host are captured, not typed
//! let mut event = WidgetEvent::KeyPress(KeyPressEvent::new(
//!     Key::S,
//!     KeyboardModifiers::CTRL,
//!     "s",
//!     false,
//! ));
//! edit.event(&mut event);
//!
//! assert_eq!(edit.hotkey(), Hotkey::ctrl(Key::S));
//! assert_eq!(edit.text(), "Ctrl+S");
//! ```

mod signal;
pub mod widget;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use widget::{Hotkey, HotkeyParseError, HotkeyTextBox, Key, KeyboardModifiers};
