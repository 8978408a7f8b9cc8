//! Event interception scenarios for the hotkey text box.
//!
//! These tests drive the widget through its `event` entry point the way a
//! host toolkit would, simulating the key traffic of real capture sessions.

use super::events::{
    FocusInEvent, FocusOutEvent, FocusReason, Key, KeyPressEvent, KeyReleaseEvent,
    KeyboardModifiers, TextCommitEvent, WidgetEvent,
};
use super::hotkey::Hotkey;
use super::widgets::HotkeyTextBox;

/// Enable log output for test debugging (`RUST_LOG=debug cargo test`).
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn press(key: Key, modifiers: KeyboardModifiers) -> WidgetEvent {
    WidgetEvent::KeyPress(KeyPressEvent::new(key, modifiers, "", false))
}

fn press_with_text(key: Key, modifiers: KeyboardModifiers, text: &str) -> WidgetEvent {
    WidgetEvent::KeyPress(KeyPressEvent::new(key, modifiers, text, false))
}

fn release(key: Key, modifiers: KeyboardModifiers) -> WidgetEvent {
    WidgetEvent::KeyRelease(KeyReleaseEvent::new(key, modifiers))
}

#[test]
fn typed_characters_are_swallowed() {
    let mut edit = HotkeyTextBox::new();

    let mut event = WidgetEvent::TextCommit(TextCommitEvent::new("a"));
    assert!(edit.event(&mut event));
    assert!(event.is_accepted());
    assert!(!event.should_propagate());

    // The view never picked up the character
    assert_eq!(edit.text(), "None");
    assert_eq!(edit.hotkey(), Hotkey::NONE);
}

#[test]
fn printable_key_press_captures_instead_of_typing() {
    let mut edit = HotkeyTextBox::new();

    let mut event = press_with_text(Key::A, KeyboardModifiers::CTRL, "a");
    assert!(edit.event(&mut event));
    assert!(event.is_accepted());

    assert_eq!(edit.hotkey(), Hotkey::ctrl(Key::A));
    assert_eq!(edit.text(), "Ctrl+A");
}

#[test]
fn tab_is_captured_not_navigated() {
    let mut edit = HotkeyTextBox::new();

    let mut event = press(Key::Tab, KeyboardModifiers::NONE);
    assert!(edit.event(&mut event));
    // Accepted, so the host must not move focus
    assert!(event.is_accepted());
    assert!(!event.should_propagate());

    assert_eq!(edit.hotkey(), Hotkey::from_key(Key::Tab));
    assert_eq!(edit.text(), "Tab");
}

#[test]
fn alt_alone_is_marked_handled() {
    let mut edit = HotkeyTextBox::new();

    let mut event = press(Key::AltLeft, KeyboardModifiers::ALT);
    assert!(edit.event(&mut event));
    // Accepted, so the host window never treats Alt as a menu accelerator
    assert!(event.is_accepted());

    // Solo modifiers are disallowed by default, so nothing was kept
    assert_eq!(edit.hotkey(), Hotkey::NONE);
}

#[test]
fn backspace_clears_at_any_time() {
    let mut edit = HotkeyTextBox::new();
    edit.set_hotkey(Hotkey::ctrl_shift(Key::A));

    let mut event = press(Key::Backspace, KeyboardModifiers::CTRL);
    assert!(edit.event(&mut event));
    assert!(event.is_accepted());

    assert_eq!(edit.hotkey(), Hotkey::NONE);
    assert_eq!(edit.text(), "None");
}

#[test]
fn delete_is_captured_like_any_key() {
    let mut edit = HotkeyTextBox::new();
    edit.set_hotkey(Hotkey::ctrl(Key::A));

    let mut event = press(Key::Delete, KeyboardModifiers::CTRL);
    assert!(edit.event(&mut event));
    // Accepted, so no display text was deleted; the key itself was captured
    assert!(event.is_accepted());

    assert_eq!(edit.hotkey(), Hotkey::ctrl(Key::Delete));
    assert_eq!(edit.text(), "Ctrl+Delete");
}

#[test]
fn modifier_chord_capture_session() {
    init_logging();
    let mut edit = HotkeyTextBox::new();

    // Holding Ctrl then Shift: no key code yet, so nothing sticks
    assert!(edit.event(&mut press(Key::ControlLeft, KeyboardModifiers::CTRL)));
    assert_eq!(edit.hotkey(), Hotkey::NONE);

    assert!(edit.event(&mut press(Key::ShiftLeft, KeyboardModifiers::CTRL_SHIFT)));
    assert_eq!(edit.hotkey(), Hotkey::NONE);
    assert_eq!(edit.text(), "None");

    // Completing the chord captures the full combination
    assert!(edit.event(&mut press(Key::A, KeyboardModifiers::CTRL_SHIFT)));
    assert_eq!(edit.hotkey(), Hotkey::ctrl_shift(Key::A));
    assert_eq!(edit.text(), "Ctrl+Shift+A");
}

#[test]
fn modifier_press_is_kept_when_solo_modifiers_allowed() {
    let mut edit = HotkeyTextBox::new().with_allow_solo_modifiers(true);

    assert!(edit.event(&mut press(Key::ControlLeft, KeyboardModifiers::CTRL)));
    assert_eq!(edit.hotkey(), Hotkey::from_modifiers(KeyboardModifiers::CTRL));
    assert_eq!(edit.text(), "Ctrl");
}

#[test]
fn caps_lock_alone_collapses_to_none() {
    let mut edit = HotkeyTextBox::new();

    assert!(edit.event(&mut press(Key::CapsLock, KeyboardModifiers::NONE)));
    assert_eq!(edit.hotkey(), Hotkey::NONE);
    assert_eq!(edit.text(), "None");
}

#[test]
fn print_screen_is_captured_from_the_release() {
    let mut edit = HotkeyTextBox::new();

    // No press is ever delivered for Print Screen on common platforms
    let mut event = release(Key::PrintScreen, KeyboardModifiers::NONE);
    assert!(edit.event(&mut event));
    assert!(event.is_accepted());

    assert_eq!(edit.key(), Some(Key::PrintScreen));
    assert_eq!(edit.text(), "PrintScreen");
}

#[test]
fn other_releases_are_ignored() {
    let mut edit = HotkeyTextBox::new();
    edit.set_hotkey(Hotkey::ctrl(Key::A));

    let mut event = release(Key::A, KeyboardModifiers::CTRL);
    assert!(!edit.event(&mut event));
    assert!(!event.is_accepted());
    assert!(event.should_propagate());
    assert_eq!(edit.hotkey(), Hotkey::ctrl(Key::A));
}

#[test]
fn focus_events_track_focus_state() {
    let mut edit = HotkeyTextBox::new();
    assert!(!edit.has_focus());

    // No native handle attached: the caret call is simply skipped
    edit.event(&mut WidgetEvent::FocusIn(FocusInEvent::new(FocusReason::Tab)));
    assert!(edit.has_focus());

    edit.event(&mut WidgetEvent::FocusOut(FocusOutEvent::new(
        FocusReason::Mouse,
    )));
    assert!(!edit.has_focus());
}

#[test]
fn disabled_widget_ignores_all_events() {
    let mut edit = HotkeyTextBox::new();
    edit.set_hotkey(Hotkey::ctrl(Key::A));
    edit.set_enabled(false);

    let mut key_event = press(Key::B, KeyboardModifiers::NONE);
    assert!(!edit.event(&mut key_event));
    assert!(!key_event.is_accepted());
    assert!(key_event.should_propagate());

    let mut text_event = WidgetEvent::TextCommit(TextCommitEvent::new("b"));
    assert!(!edit.event(&mut text_event));

    assert_eq!(edit.hotkey(), Hotkey::ctrl(Key::A));
}

#[test]
fn policy_change_alone_can_clear_the_value() {
    // No key event involved: flipping the flag collapses the held value
    let mut edit = HotkeyTextBox::new().with_allow_solo_modifiers(true);
    assert!(edit.event(&mut press(Key::ShiftLeft, KeyboardModifiers::SHIFT)));
    assert_eq!(edit.hotkey(), Hotkey::from_modifiers(KeyboardModifiers::SHIFT));

    edit.set_allow_solo_modifiers(false);
    assert_eq!(edit.hotkey(), Hotkey::NONE);
    assert_eq!(edit.text(), "None");
}

#[test]
fn recapture_after_clear() {
    let mut edit = HotkeyTextBox::new();

    assert!(edit.event(&mut press(Key::F5, KeyboardModifiers::ALT)));
    assert_eq!(edit.text(), "Alt+F5");

    assert!(edit.event(&mut press(Key::Backspace, KeyboardModifiers::NONE)));
    assert_eq!(edit.text(), "None");

    assert!(edit.event(&mut press(Key::Numpad5, KeyboardModifiers::CTRL)));
    assert_eq!(edit.hotkey(), Hotkey::ctrl(Key::Numpad5));
    assert_eq!(edit.text(), "Ctrl+Num 5");
}
