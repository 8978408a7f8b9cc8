//! Hotkey text box widget implementation.
//!
//! This module provides [`HotkeyTextBox`], a text-entry control that captures
//! keyboard hotkey combinations instead of editing text.
//!
//! # Example
//!
//! ```
//! use hotkey_edit::widget::{Hotkey, HotkeyTextBox, Key};
//!
//! // Create a hotkey capture box
//! let mut edit = HotkeyTextBox::new();
//!
//! // Optionally seed an initial combination
//! edit.set_hotkey(Hotkey::ctrl_shift(Key::A));
//! assert_eq!(edit.text(), "Ctrl+Shift+A");
//!
//! // Connect to the changed signal
//! edit.hotkey_changed.connect(|hotkey| {
//!     println!("New hotkey: {}", hotkey);
//! });
//! ```

use crate::signal::Signal;
use crate::widget::caret::{self, NativeHandle};
use crate::widget::events::{Key, KeyboardModifiers, WidgetEvent};
use crate::widget::hotkey::Hotkey;

/// Default placeholder shown while no hotkey is set.
const DEFAULT_NO_KEY_TEXT: &str = "None";

/// A text box that captures keyboard hotkey combinations.
///
/// The widget owns a [`Hotkey`] value and keeps its displayed text in sync
/// with it; typed characters never reach the text. Key events are intercepted
/// before the host's default editing behavior:
///
/// - Any key combination is captured into the hotkey value, including Tab
///   (focus stays on the widget) and Delete (no text is deleted)
/// - Modifier-only presses are captured as partial values; Alt alone never
///   activates a host menu
/// - Backspace clears the value instead of being captured
/// - Print Screen is captured from the key release, since common platforms
///   never deliver a press for it
///
/// Two policies shape the captured value: [`allow_solo_modifiers`]
/// (`false` collapses modifier-only values to none) and [`allow_toggle_keys`]
/// (`false` strips Caps Lock, Num Lock and Scroll Lock down to their
/// modifiers). Every input normalizes to a valid value; nothing is rejected.
///
/// [`allow_solo_modifiers`]: Self::allow_solo_modifiers
/// [`allow_toggle_keys`]: Self::allow_toggle_keys
///
/// # Signals
///
/// - `hotkey_changed(Hotkey)`: Emitted when the normalized value changes
/// - `text_changed(String)`: Emitted when the displayed text changes
pub struct HotkeyTextBox {
    /// Current hotkey value (normalized).
    hotkey: Hotkey,

    /// Displayed text, always the rendering of the current value.
    text: String,

    /// Placeholder text shown while the value is none.
    no_key_text: String,

    /// Whether modifier-only values are kept.
    allow_solo_modifiers: bool,

    /// Whether toggle keys are kept as key codes.
    allow_toggle_keys: bool,

    /// Whether the widget accepts input events.
    enabled: bool,

    /// Whether the widget currently has keyboard focus.
    focused: bool,

    /// Whether the widget needs to be repainted.
    needs_repaint: bool,

    /// Native handle of the hosting window/control, for the caret call.
    native_handle: Option<NativeHandle>,

    /// Signal emitted when the hotkey value changes.
    pub hotkey_changed: Signal<Hotkey>,

    /// Signal emitted when the displayed text changes.
    pub text_changed: Signal<String>,
}

impl HotkeyTextBox {
    /// Create a new hotkey text box holding the none value.
    pub fn new() -> Self {
        Self {
            hotkey: Hotkey::NONE,
            text: DEFAULT_NO_KEY_TEXT.to_string(),
            no_key_text: DEFAULT_NO_KEY_TEXT.to_string(),
            allow_solo_modifiers: false,
            allow_toggle_keys: false,
            enabled: true,
            focused: false,
            needs_repaint: true,
            native_handle: None,
            hotkey_changed: Signal::new(),
            text_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Hotkey Value
    // =========================================================================

    /// Get the current hotkey value.
    pub fn hotkey(&self) -> Hotkey {
        self.hotkey
    }

    /// Set the hotkey value.
    ///
    /// The value is normalized against the configured policies before it is
    /// stored: with [`allow_solo_modifiers`](Self::allow_solo_modifiers)
    /// disabled a value without a key code collapses to none, and with
    /// [`allow_toggle_keys`](Self::allow_toggle_keys) disabled a toggle key
    /// is stripped down to its modifiers. Every input is valid; the displayed
    /// text is re-rendered from the stored value.
    pub fn set_hotkey(&mut self, hotkey: Hotkey) {
        let normalized = self.normalized(hotkey);
        if normalized != hotkey {
            tracing::debug!(?hotkey, ?normalized, "hotkey value normalized");
        }

        let changed = self.hotkey != normalized;
        self.hotkey = normalized;
        self.refresh_text();
        if changed {
            self.hotkey_changed.emit(normalized);
        }
    }

    /// Set the hotkey value using builder pattern.
    pub fn with_hotkey(mut self, hotkey: Hotkey) -> Self {
        self.set_hotkey(hotkey);
        self
    }

    /// Clear the hotkey value.
    pub fn clear(&mut self) {
        self.set_hotkey(Hotkey::NONE);
    }

    /// Get the key component of the current value.
    pub fn key(&self) -> Option<Key> {
        self.hotkey.key()
    }

    /// Set the key component, keeping the current modifiers.
    ///
    /// Routes through [`set_hotkey`](Self::set_hotkey), so normalization
    /// still applies.
    pub fn set_key(&mut self, key: Option<Key>) {
        self.set_hotkey(self.hotkey.with_key(key));
    }

    /// Get the modifier component of the current value.
    pub fn modifiers(&self) -> KeyboardModifiers {
        self.hotkey.modifiers()
    }

    /// Set the modifier component, keeping the current key.
    ///
    /// Routes through [`set_hotkey`](Self::set_hotkey), so normalization
    /// still applies.
    pub fn set_modifiers(&mut self, modifiers: KeyboardModifiers) {
        self.set_hotkey(self.hotkey.with_modifiers(modifiers));
    }

    /// Apply the configured policies to a raw value.
    ///
    /// Solo suppression runs again after a toggle strip so the stored value
    /// is never modifiers-only while the policy forbids it, which also keeps
    /// the setter idempotent.
    fn normalized(&self, mut hotkey: Hotkey) -> Hotkey {
        if !self.allow_solo_modifiers && hotkey.key().is_none() {
            hotkey = Hotkey::NONE;
        }
        if !self.allow_toggle_keys && hotkey.has_toggle_key() {
            hotkey = hotkey.modifiers_only();
            if !self.allow_solo_modifiers {
                hotkey = Hotkey::NONE;
            }
        }
        hotkey
    }

    // =========================================================================
    // Displayed Text
    // =========================================================================

    /// Get the displayed text.
    ///
    /// This is always the rendering of the current value (or the
    /// [`no_key_text`](Self::no_key_text) placeholder for the none value).
    /// The text is a view of the value, not an input channel; there is no
    /// public text setter.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Re-render the displayed text from the current value.
    fn refresh_text(&mut self) {
        let rendered = if self.hotkey.is_none() {
            self.no_key_text.clone()
        } else {
            self.hotkey.to_string()
        };

        if self.text != rendered {
            self.text = rendered.clone();
            self.update();
            self.text_changed.emit(rendered);
        }
    }

    // =========================================================================
    // Placeholder
    // =========================================================================

    /// Get the placeholder text shown while no hotkey is set.
    pub fn no_key_text(&self) -> &str {
        &self.no_key_text
    }

    /// Set the placeholder text shown while no hotkey is set.
    ///
    /// If the current value is none, the displayed text updates immediately.
    pub fn set_no_key_text(&mut self, text: impl Into<String>) {
        self.no_key_text = text.into();
        self.refresh_text();
    }

    /// Set the placeholder text using builder pattern.
    pub fn with_no_key_text(mut self, text: impl Into<String>) -> Self {
        self.set_no_key_text(text);
        self
    }

    // =========================================================================
    // Capture Policies
    // =========================================================================

    /// Check whether modifier-only values are kept.
    pub fn allow_solo_modifiers(&self) -> bool {
        self.allow_solo_modifiers
    }

    /// Set whether modifier-only values are kept.
    ///
    /// Disabling the policy immediately strips a key-code-less value down to
    /// its key-only subset, which for a missing key code is the none value.
    pub fn set_allow_solo_modifiers(&mut self, allow: bool) {
        self.allow_solo_modifiers = allow;
        if !allow && self.hotkey.key().is_none() {
            self.set_hotkey(self.hotkey.key_only());
        }
    }

    /// Set the solo-modifier policy using builder pattern.
    pub fn with_allow_solo_modifiers(mut self, allow: bool) -> Self {
        self.set_allow_solo_modifiers(allow);
        self
    }

    /// Check whether toggle keys are kept as key codes.
    pub fn allow_toggle_keys(&self) -> bool {
        self.allow_toggle_keys
    }

    /// Set whether toggle keys are kept as key codes.
    ///
    /// The current value is re-normalized under the new policy. Suppression
    /// is one-way and lossy: re-enabling the policy does not restore a key
    /// code a previous normalization stripped.
    pub fn set_allow_toggle_keys(&mut self, allow: bool) {
        self.allow_toggle_keys = allow;
        self.set_hotkey(self.hotkey);
    }

    /// Set the toggle-key policy using builder pattern.
    pub fn with_allow_toggle_keys(mut self, allow: bool) -> Self {
        self.set_allow_toggle_keys(allow);
        self
    }

    // =========================================================================
    // Host Integration
    // =========================================================================

    /// Check if the widget accepts input events.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set whether the widget accepts input events.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.update();
        }
    }

    /// Check if the widget currently has keyboard focus.
    pub fn has_focus(&self) -> bool {
        self.focused
    }

    /// Get the native handle used for the caret call.
    pub fn native_handle(&self) -> Option<NativeHandle> {
        self.native_handle
    }

    /// Set the native handle of the hosting window/control.
    ///
    /// When set, the system text caret of that window is hidden each time
    /// the widget gains focus.
    pub fn set_native_handle(&mut self, handle: Option<NativeHandle>) {
        self.native_handle = handle;
    }

    /// Set the native handle using builder pattern.
    pub fn with_native_handle(mut self, handle: NativeHandle) -> Self {
        self.native_handle = Some(handle);
        self
    }

    /// Check if the widget needs to be repainted.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Clear the repaint flag after the host has repainted the widget.
    pub fn mark_repainted(&mut self) {
        self.needs_repaint = false;
    }

    /// Request a repaint.
    fn update(&mut self) {
        self.needs_repaint = true;
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle a widget event.
    ///
    /// Returns `true` if the event was handled; handled events are accepted,
    /// which stops the host's default behavior for them (text insertion,
    /// focus navigation on Tab, menu activation on Alt, text deletion on
    /// Delete). A disabled widget handles nothing.
    pub fn event(&mut self, event: &mut WidgetEvent) -> bool {
        if !self.enabled {
            return false;
        }

        match event {
            // Typed characters are never inserted; the text is a pure view
            // of the hotkey value.
            WidgetEvent::TextCommit(_) => {
                event.accept();
                true
            }
            WidgetEvent::KeyPress(e) => {
                let (key, modifiers) = (e.key, e.modifiers);
                if self.handle_key_press(key, modifiers) {
                    event.accept();
                    return true;
                }
                false
            }
            WidgetEvent::KeyRelease(e) => {
                // Print Screen arrives only at the release message on common
                // platforms; force it onto the key component from here.
                if e.key == Key::PrintScreen {
                    self.set_key(Some(Key::PrintScreen));
                    event.accept();
                    return true;
                }
                false
            }
            WidgetEvent::FocusIn(_) => {
                self.handle_focus_in();
                false
            }
            WidgetEvent::FocusOut(_) => {
                self.focused = false;
                self.update();
                false
            }
        }
    }

    fn handle_key_press(&mut self, key: Key, modifiers: KeyboardModifiers) -> bool {
        // Backspace is the dedicated clear action and is never captured,
        // regardless of held modifiers.
        if key == Key::Backspace {
            self.clear();
            return true;
        }

        // A modifier press carries no key code yet; capture the modifier set
        // as a partial value. Accepting also covers Alt alone, which would
        // otherwise activate a host menu.
        if key.is_modifier() {
            self.set_hotkey(Hotkey::from_modifiers(modifiers));
            return true;
        }

        // Everything else is captured with its full key data. Tab lands here
        // so it becomes part of a hotkey instead of moving focus; Delete
        // lands here so it becomes part of a hotkey instead of editing text.
        self.set_hotkey(Hotkey::new(modifiers, Some(key)));
        true
    }

    fn handle_focus_in(&mut self) {
        self.focused = true;
        // The widget displays text but never supports cursor editing, so the
        // host's system caret is hidden on every focus gain.
        if let Some(handle) = self.native_handle {
            caret::hide_caret(handle);
        }
        self.update();
    }
}

impl Default for HotkeyTextBox {
    fn default() -> Self {
        Self::new()
    }
}

// Thread safety assertion
static_assertions::assert_impl_all!(HotkeyTextBox: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_new_has_no_hotkey() {
        let edit = HotkeyTextBox::new();
        assert_eq!(edit.hotkey(), Hotkey::NONE);
        assert_eq!(edit.text(), "None");
        assert!(!edit.allow_solo_modifiers());
        assert!(!edit.allow_toggle_keys());
        assert!(edit.is_enabled());
        assert!(!edit.has_focus());
    }

    #[test]
    fn test_set_hotkey_renders_text() {
        let mut edit = HotkeyTextBox::new();
        edit.set_hotkey(Hotkey::ctrl_shift(Key::A));
        assert_eq!(edit.hotkey(), Hotkey::ctrl_shift(Key::A));
        assert_eq!(edit.text(), "Ctrl+Shift+A");
    }

    #[test]
    fn test_set_hotkey_is_idempotent() {
        for (solo, toggle) in [(false, false), (false, true), (true, false), (true, true)] {
            for value in [
                Hotkey::NONE,
                Hotkey::from_modifiers(KeyboardModifiers::CTRL_SHIFT),
                Hotkey::ctrl(Key::CapsLock),
                Hotkey::from_key(Key::NumLock),
                Hotkey::ctrl_shift(Key::A),
            ] {
                let mut edit = HotkeyTextBox::new()
                    .with_allow_solo_modifiers(solo)
                    .with_allow_toggle_keys(toggle);

                edit.set_hotkey(value);
                let first = edit.hotkey();
                edit.set_hotkey(first);
                assert_eq!(edit.hotkey(), first, "value {value:?} under ({solo}, {toggle})");
            }
        }
    }

    #[test]
    fn test_solo_modifiers_collapse_to_none() {
        let mut edit = HotkeyTextBox::new();
        edit.set_hotkey(Hotkey::from_modifiers(KeyboardModifiers::CTRL_SHIFT));
        assert_eq!(edit.hotkey(), Hotkey::NONE);
        assert_eq!(edit.text(), "None");
    }

    #[test]
    fn test_solo_modifiers_kept_when_allowed() {
        let mut edit = HotkeyTextBox::new().with_allow_solo_modifiers(true);
        edit.set_hotkey(Hotkey::from_modifiers(KeyboardModifiers::CTRL_SHIFT));
        assert_eq!(
            edit.hotkey(),
            Hotkey::from_modifiers(KeyboardModifiers::CTRL_SHIFT)
        );
        assert_eq!(edit.text(), "Ctrl+Shift");
    }

    #[test]
    fn test_toggle_key_stripped_to_modifiers() {
        let mut edit = HotkeyTextBox::new().with_allow_solo_modifiers(true);
        edit.set_hotkey(Hotkey::ctrl(Key::CapsLock));
        assert_eq!(edit.hotkey(), Hotkey::from_modifiers(KeyboardModifiers::CTRL));
    }

    #[test]
    fn test_toggle_key_strip_respects_solo_policy() {
        // Both policies disabled: the strip result may not stay modifiers-only
        let mut edit = HotkeyTextBox::new();
        edit.set_hotkey(Hotkey::ctrl(Key::CapsLock));
        assert_eq!(edit.hotkey(), Hotkey::NONE);
    }

    #[test]
    fn test_toggle_key_kept_when_allowed() {
        let mut edit = HotkeyTextBox::new().with_allow_toggle_keys(true);
        edit.set_hotkey(Hotkey::ctrl(Key::CapsLock));
        assert_eq!(edit.hotkey(), Hotkey::ctrl(Key::CapsLock));
    }

    #[test]
    fn test_toggle_key_alone_collapses_to_none() {
        let mut edit = HotkeyTextBox::new();
        edit.set_hotkey(Hotkey::from_key(Key::CapsLock));
        assert_eq!(edit.hotkey(), Hotkey::NONE);
        assert_eq!(edit.text(), "None");
    }

    #[test]
    fn test_set_key_keeps_modifiers() {
        let mut edit = HotkeyTextBox::new();
        edit.set_hotkey(Hotkey::ctrl(Key::A));
        edit.set_key(Some(Key::B));
        assert_eq!(edit.hotkey(), Hotkey::ctrl(Key::B));

        // Removing the key routes through normalization
        edit.set_key(None);
        assert_eq!(edit.hotkey(), Hotkey::NONE);
    }

    #[test]
    fn test_set_modifiers_keeps_key() {
        let mut edit = HotkeyTextBox::new();
        edit.set_hotkey(Hotkey::ctrl(Key::A));
        edit.set_modifiers(KeyboardModifiers::ALT);
        assert_eq!(edit.hotkey(), Hotkey::alt(Key::A));
    }

    #[test]
    fn test_no_key_text_updates_placeholder_immediately() {
        let mut edit = HotkeyTextBox::new();
        assert_eq!(edit.text(), "None");

        edit.set_no_key_text("Press a key");
        assert_eq!(edit.text(), "Press a key");
    }

    #[test]
    fn test_no_key_text_does_not_touch_rendered_hotkey() {
        let mut edit = HotkeyTextBox::new();
        edit.set_hotkey(Hotkey::ctrl(Key::S));
        edit.set_no_key_text("Press a key");
        assert_eq!(edit.text(), "Ctrl+S");

        // The new placeholder appears once the value is cleared
        edit.clear();
        assert_eq!(edit.text(), "Press a key");
    }

    #[test]
    fn test_disabling_solo_modifiers_collapses_current_value() {
        let mut edit = HotkeyTextBox::new().with_allow_solo_modifiers(true);
        edit.set_hotkey(Hotkey::from_modifiers(KeyboardModifiers::CTRL_SHIFT));

        edit.set_allow_solo_modifiers(false);
        assert_eq!(edit.hotkey(), Hotkey::NONE);
        assert_eq!(edit.text(), "None");
    }

    #[test]
    fn test_disabling_solo_modifiers_keeps_full_chord() {
        let mut edit = HotkeyTextBox::new().with_allow_solo_modifiers(true);
        edit.set_hotkey(Hotkey::ctrl_shift(Key::A));

        edit.set_allow_solo_modifiers(false);
        assert_eq!(edit.hotkey(), Hotkey::ctrl_shift(Key::A));
    }

    #[test]
    fn test_disabling_toggle_keys_renormalizes_current_value() {
        let mut edit = HotkeyTextBox::new()
            .with_allow_solo_modifiers(true)
            .with_allow_toggle_keys(true);
        edit.set_hotkey(Hotkey::ctrl(Key::ScrollLock));

        edit.set_allow_toggle_keys(false);
        assert_eq!(edit.hotkey(), Hotkey::from_modifiers(KeyboardModifiers::CTRL));
    }

    #[test]
    fn test_reenabling_toggle_keys_is_lossy() {
        let mut edit = HotkeyTextBox::new().with_allow_solo_modifiers(true);
        edit.set_hotkey(Hotkey::ctrl(Key::CapsLock));
        assert_eq!(edit.hotkey(), Hotkey::from_modifiers(KeyboardModifiers::CTRL));

        // The stripped key code is gone; re-enabling restores nothing
        edit.set_allow_toggle_keys(true);
        assert_eq!(edit.hotkey(), Hotkey::from_modifiers(KeyboardModifiers::CTRL));
    }

    #[test]
    fn test_hotkey_changed_emitted_once_per_change() {
        let mut edit = HotkeyTextBox::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = Arc::clone(&count);
        edit.hotkey_changed.connect(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        edit.set_hotkey(Hotkey::ctrl(Key::A));
        edit.set_hotkey(Hotkey::ctrl(Key::A));
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // A value normalized to the current value is not a change
        edit.set_hotkey(Hotkey::ctrl(Key::A));
        edit.clear();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_text_changed_emitted_on_rerender() {
        let mut edit = HotkeyTextBox::new();
        let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let seen_clone = Arc::clone(&seen);
        edit.text_changed.connect(move |text: &String| {
            seen_clone.lock().push(text.clone());
        });

        edit.set_hotkey(Hotkey::alt(Key::F4));
        edit.clear();
        assert_eq!(*seen.lock(), vec!["Alt+F4".to_string(), "None".to_string()]);
    }

    #[test]
    fn test_repaint_flag() {
        let mut edit = HotkeyTextBox::new();
        edit.mark_repainted();
        assert!(!edit.needs_repaint());

        edit.set_hotkey(Hotkey::ctrl(Key::A));
        assert!(edit.needs_repaint());
    }
}
