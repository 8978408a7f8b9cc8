//! Keyboard input handling and conversion from platform events.
//!
//! This module provides conversion functions for translating platform-level
//! keyboard events (from winit) into the widget events consumed by
//! [`HotkeyTextBox`](crate::widget::widgets::HotkeyTextBox).
//!
//! # Usage
//!
//! The main entry point is [`KeyboardInputHandler`], which manages modifier
//! state and converts raw keyboard events into widget events.
//!
//! ```ignore
//! use hotkey_edit::widget::keyboard::KeyboardInputHandler;
//!
//! let mut handler = KeyboardInputHandler::new();
//!
//! // When receiving a winit keyboard event:
//! let widget_event = handler
//!     .process_keyboard_event(&logical_key, &physical_key, state, text, repeat)
//!     .into_widget_event();
//! // Dispatch widget_event to the focused hotkey text box
//! ```
//!
//! # Print Screen
//!
//! On several platforms (Windows in particular) Print Screen never produces a
//! press message at the raw key-message layer; only the release arrives. The
//! conversion here is deliberately faithful to what the platform delivers —
//! the release comes through as a [`KeyReleaseEvent`] — and the hotkey text
//! box captures Print Screen from that release event.

use winit::event::{ElementState, Modifiers};
use winit::keyboard::{Key as WinitKey, KeyCode, NamedKey, PhysicalKey};

use super::events::{Key, KeyPressEvent, KeyReleaseEvent, KeyboardModifiers, WidgetEvent};

/// Converts a winit logical key to a [`Key`].
///
/// This handles both named keys (like Enter, Backspace) and character keys.
pub fn from_winit_key(key: &WinitKey) -> Key {
    match key {
        WinitKey::Named(named) => from_winit_named_key(named),
        WinitKey::Character(c) => from_character(c),
        WinitKey::Unidentified(_) => Key::Unknown(0),
        WinitKey::Dead(_) => Key::Unknown(0),
    }
}

/// Converts a winit named key to a [`Key`].
fn from_winit_named_key(key: &NamedKey) -> Key {
    match key {
        // Navigation
        NamedKey::ArrowUp => Key::ArrowUp,
        NamedKey::ArrowDown => Key::ArrowDown,
        NamedKey::ArrowLeft => Key::ArrowLeft,
        NamedKey::ArrowRight => Key::ArrowRight,
        NamedKey::Home => Key::Home,
        NamedKey::End => Key::End,
        NamedKey::PageUp => Key::PageUp,
        NamedKey::PageDown => Key::PageDown,

        // Editing
        NamedKey::Backspace => Key::Backspace,
        NamedKey::Delete => Key::Delete,
        NamedKey::Insert => Key::Insert,
        NamedKey::Enter => Key::Enter,
        NamedKey::Tab => Key::Tab,
        NamedKey::Space => Key::Space,
        NamedKey::Escape => Key::Escape,

        // Modifiers
        NamedKey::Shift => Key::ShiftLeft, // Generic shift
        NamedKey::Control => Key::ControlLeft,
        NamedKey::Alt => Key::AltLeft,
        NamedKey::Super => Key::MetaLeft, // Super/Meta/Windows/Command

        // Lock keys
        NamedKey::CapsLock => Key::CapsLock,
        NamedKey::NumLock => Key::NumLock,
        NamedKey::ScrollLock => Key::ScrollLock,

        // Function keys
        NamedKey::F1 => Key::F1,
        NamedKey::F2 => Key::F2,
        NamedKey::F3 => Key::F3,
        NamedKey::F4 => Key::F4,
        NamedKey::F5 => Key::F5,
        NamedKey::F6 => Key::F6,
        NamedKey::F7 => Key::F7,
        NamedKey::F8 => Key::F8,
        NamedKey::F9 => Key::F9,
        NamedKey::F10 => Key::F10,
        NamedKey::F11 => Key::F11,
        NamedKey::F12 => Key::F12,

        // System keys
        NamedKey::PrintScreen => Key::PrintScreen,
        NamedKey::Pause => Key::Pause,

        // Other named keys map to Unknown
        _ => Key::Unknown(0),
    }
}

/// Converts a character string to a [`Key`].
///
/// This handles single character keys like letters, digits, and punctuation.
fn from_character(c: &str) -> Key {
    let chars: Vec<char> = c.chars().collect();
    if chars.len() != 1 {
        return Key::Unknown(0);
    }

    match chars[0].to_ascii_lowercase() {
        'a' => Key::A,
        'b' => Key::B,
        'c' => Key::C,
        'd' => Key::D,
        'e' => Key::E,
        'f' => Key::F,
        'g' => Key::G,
        'h' => Key::H,
        'i' => Key::I,
        'j' => Key::J,
        'k' => Key::K,
        'l' => Key::L,
        'm' => Key::M,
        'n' => Key::N,
        'o' => Key::O,
        'p' => Key::P,
        'q' => Key::Q,
        'r' => Key::R,
        's' => Key::S,
        't' => Key::T,
        'u' => Key::U,
        'v' => Key::V,
        'w' => Key::W,
        'x' => Key::X,
        'y' => Key::Y,
        'z' => Key::Z,
        '0' => Key::Digit0,
        '1' => Key::Digit1,
        '2' => Key::Digit2,
        '3' => Key::Digit3,
        '4' => Key::Digit4,
        '5' => Key::Digit5,
        '6' => Key::Digit6,
        '7' => Key::Digit7,
        '8' => Key::Digit8,
        '9' => Key::Digit9,
        '-' => Key::Minus,
        '=' => Key::Equal,
        '[' => Key::BracketLeft,
        ']' => Key::BracketRight,
        '\\' => Key::Backslash,
        ';' => Key::Semicolon,
        '\'' => Key::Quote,
        ',' => Key::Comma,
        '.' => Key::Period,
        '/' => Key::Slash,
        '`' => Key::Grave,
        ' ' => Key::Space,
        _ => Key::Unknown(chars[0] as u16),
    }
}

/// Converts a winit physical key (key code) to a [`Key`].
///
/// Physical keys represent the physical position on the keyboard,
/// independent of the keyboard layout.
pub fn from_winit_physical_key(physical: &PhysicalKey) -> Key {
    match physical {
        PhysicalKey::Code(code) => from_winit_key_code(code),
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}

/// Converts a winit key code to a [`Key`].
fn from_winit_key_code(code: &KeyCode) -> Key {
    match code {
        // Letters
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        // Digits
        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,

        // Function keys
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,

        // Navigation
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,

        // Editing
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Insert => Key::Insert,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Space => Key::Space,
        KeyCode::Escape => Key::Escape,

        // Modifiers - with left/right distinction
        KeyCode::ShiftLeft => Key::ShiftLeft,
        KeyCode::ShiftRight => Key::ShiftRight,
        KeyCode::ControlLeft => Key::ControlLeft,
        KeyCode::ControlRight => Key::ControlRight,
        KeyCode::AltLeft => Key::AltLeft,
        KeyCode::AltRight => Key::AltRight,
        KeyCode::SuperLeft => Key::MetaLeft,
        KeyCode::SuperRight => Key::MetaRight,

        // Lock keys
        KeyCode::CapsLock => Key::CapsLock,
        KeyCode::NumLock => Key::NumLock,
        KeyCode::ScrollLock => Key::ScrollLock,

        // Punctuation
        KeyCode::Minus => Key::Minus,
        KeyCode::Equal => Key::Equal,
        KeyCode::BracketLeft => Key::BracketLeft,
        KeyCode::BracketRight => Key::BracketRight,
        KeyCode::Backslash => Key::Backslash,
        KeyCode::Semicolon => Key::Semicolon,
        KeyCode::Quote => Key::Quote,
        KeyCode::Comma => Key::Comma,
        KeyCode::Period => Key::Period,
        KeyCode::Slash => Key::Slash,
        KeyCode::Backquote => Key::Grave,

        // System
        KeyCode::PrintScreen => Key::PrintScreen,
        KeyCode::Pause => Key::Pause,

        // Numpad
        KeyCode::Numpad0 => Key::Numpad0,
        KeyCode::Numpad1 => Key::Numpad1,
        KeyCode::Numpad2 => Key::Numpad2,
        KeyCode::Numpad3 => Key::Numpad3,
        KeyCode::Numpad4 => Key::Numpad4,
        KeyCode::Numpad5 => Key::Numpad5,
        KeyCode::Numpad6 => Key::Numpad6,
        KeyCode::Numpad7 => Key::Numpad7,
        KeyCode::Numpad8 => Key::Numpad8,
        KeyCode::Numpad9 => Key::Numpad9,
        KeyCode::NumpadAdd => Key::NumpadAdd,
        KeyCode::NumpadSubtract => Key::NumpadSubtract,
        KeyCode::NumpadMultiply => Key::NumpadMultiply,
        KeyCode::NumpadDivide => Key::NumpadDivide,
        KeyCode::NumpadDecimal => Key::NumpadDecimal,
        KeyCode::NumpadEnter => Key::NumpadEnter,

        _ => Key::Unknown(0),
    }
}

/// Converts winit modifiers to [`KeyboardModifiers`].
pub fn from_winit_modifiers(modifiers: &Modifiers) -> KeyboardModifiers {
    let state = modifiers.state();
    KeyboardModifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

/// Handler for keyboard input that maintains modifier state.
///
/// This struct provides a stateful interface for converting winit keyboard
/// events into widget events, tracking modifier key state across events.
#[derive(Debug, Default)]
pub struct KeyboardInputHandler {
    /// Current modifier key state.
    modifiers: KeyboardModifiers,
}

impl KeyboardInputHandler {
    /// Creates a new keyboard input handler with no modifiers pressed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current modifier key state.
    pub fn modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    /// Updates the modifier state from a winit Modifiers event.
    pub fn update_modifiers(&mut self, modifiers: &Modifiers) {
        self.modifiers = from_winit_modifiers(modifiers);
    }

    /// Creates a KeyPressEvent from winit keyboard event data.
    ///
    /// # Arguments
    ///
    /// * `logical_key` - The logical key that was pressed
    /// * `physical_key` - The physical key location
    /// * `text` - The text generated by this key press (if any)
    /// * `is_repeat` - Whether this is an auto-repeat event
    pub fn create_key_press_event(
        &self,
        logical_key: &WinitKey,
        physical_key: &PhysicalKey,
        text: Option<&str>,
        is_repeat: bool,
    ) -> KeyPressEvent {
        KeyPressEvent::new(
            self.resolve_key(logical_key, physical_key),
            self.modifiers,
            text.unwrap_or(""),
            is_repeat,
        )
    }

    /// Creates a KeyReleaseEvent from winit keyboard event data.
    pub fn create_key_release_event(
        &self,
        logical_key: &WinitKey,
        physical_key: &PhysicalKey,
    ) -> KeyReleaseEvent {
        KeyReleaseEvent::new(self.resolve_key(logical_key, physical_key), self.modifiers)
    }

    /// Processes a winit keyboard event and returns the appropriate widget
    /// event.
    pub fn process_keyboard_event(
        &self,
        logical_key: &WinitKey,
        physical_key: &PhysicalKey,
        state: ElementState,
        text: Option<&str>,
        is_repeat: bool,
    ) -> KeyboardEvent {
        match state {
            ElementState::Pressed => KeyboardEvent::Press(self.create_key_press_event(
                logical_key,
                physical_key,
                text,
                is_repeat,
            )),
            ElementState::Released => {
                KeyboardEvent::Release(self.create_key_release_event(logical_key, physical_key))
            }
        }
    }

    /// Prefer the physical key for consistent key identification, falling
    /// back to the logical key for keys winit reports only logically.
    fn resolve_key(&self, logical_key: &WinitKey, physical_key: &PhysicalKey) -> Key {
        let key = from_winit_physical_key(physical_key);
        if matches!(key, Key::Unknown(_)) {
            from_winit_key(logical_key)
        } else {
            key
        }
    }
}

/// A keyboard event that can be either a press or release.
#[derive(Debug, Clone)]
pub enum KeyboardEvent {
    /// A key was pressed.
    Press(KeyPressEvent),
    /// A key was released.
    Release(KeyReleaseEvent),
}

impl KeyboardEvent {
    /// Converts this keyboard event into a WidgetEvent.
    pub fn into_widget_event(self) -> WidgetEvent {
        match self {
            KeyboardEvent::Press(e) => WidgetEvent::KeyPress(e),
            KeyboardEvent::Release(e) => WidgetEvent::KeyRelease(e),
        }
    }
}
