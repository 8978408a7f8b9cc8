//! Widget input system for hotkey capture.
//!
//! This module provides the input-facing slice of a widget system that the
//! [`HotkeyTextBox`](widgets::HotkeyTextBox) needs to run inside any host
//! toolkit:
//!
//! - [`Hotkey`]: the captured value (modifiers + optional key code) with its
//!   display formatting and parsing
//! - Event types ([`WidgetEvent`] and friends) with Qt-style accept/ignore
//!   semantics, so the widget can suppress the host's default handling
//! - [`keyboard`]: conversions from winit keyboard events
//! - [`caret`]: the platform call that hides the system text caret on focus
//!   gain
//!
//! # Feeding events
//!
//! The host delivers events to the widget's `event` method and honors the
//! accepted flag: an accepted key event must not trigger default editing,
//! focus navigation, or menu activation.
//!
//! ```ignore
//! use hotkey_edit::widget::{HotkeyTextBox, WidgetEvent};
//!
//! fn dispatch(edit: &mut HotkeyTextBox, event: &mut WidgetEvent) {
//!     if !edit.event(event) && event.should_propagate() {
//!         // forward to the host's default handling
//!     }
//! }
//! ```

pub mod caret;
mod events;
mod hotkey;
pub mod keyboard;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use caret::NativeHandle;
pub use events::{
    EventBase, FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyReleaseEvent,
    KeyboardModifiers, TextCommitEvent, WidgetEvent,
};
pub use hotkey::{Hotkey, HotkeyParseError};
pub use widgets::HotkeyTextBox;
