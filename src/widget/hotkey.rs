//! Hotkey value type.
//!
//! A [`Hotkey`] combines a set of modifier flags with at most one
//! non-modifier key code. It is the structured value the
//! [`HotkeyTextBox`](crate::widget::widgets::HotkeyTextBox) captures and
//! exposes, and it carries the display formatting used to render a captured
//! combination as text like `Ctrl+Shift+A`.
//!
//! Parsing the display format back into a value is supported through
//! [`FromStr`], so hotkeys round-trip through configuration files:
//!
//! ```
//! use hotkey_edit::widget::{Hotkey, Key, KeyboardModifiers};
//!
//! let hotkey: Hotkey = "Ctrl+Shift+A".parse().unwrap();
//! assert_eq!(hotkey.key(), Some(Key::A));
//! assert_eq!(hotkey.modifiers(), KeyboardModifiers::CTRL_SHIFT);
//! assert_eq!(hotkey.to_string(), "Ctrl+Shift+A");
//! ```

use std::fmt;
use std::str::FromStr;

use super::events::{Key, KeyboardModifiers};

/// A hotkey combination: zero or more modifier flags plus an optional key.
///
/// Unlike a complete shortcut, a `Hotkey` is allowed to be partial: it may
/// consist of modifiers alone (no key code yet) or be entirely empty (the
/// "none" value). Whether partial values are acceptable is a policy of the
/// widget capturing them, not of the value type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hotkey {
    /// The modifier keys of the combination.
    modifiers: KeyboardModifiers,
    /// The non-modifier key of the combination, if any.
    key: Option<Key>,
}

impl Hotkey {
    /// The empty hotkey: no modifiers, no key.
    pub const NONE: Self = Self {
        modifiers: KeyboardModifiers::NONE,
        key: None,
    };

    /// Create a hotkey from modifiers and an optional key.
    pub fn new(modifiers: KeyboardModifiers, key: Option<Key>) -> Self {
        Self { modifiers, key }
    }

    /// Create a hotkey consisting of modifiers only.
    pub fn from_modifiers(modifiers: KeyboardModifiers) -> Self {
        Self {
            modifiers,
            key: None,
        }
    }

    /// Create a hotkey consisting of a key with no modifiers.
    pub fn from_key(key: Key) -> Self {
        Self {
            modifiers: KeyboardModifiers::NONE,
            key: Some(key),
        }
    }

    /// Create a Ctrl+key hotkey.
    pub fn ctrl(key: Key) -> Self {
        Self::new(KeyboardModifiers::CTRL, Some(key))
    }

    /// Create an Alt+key hotkey.
    pub fn alt(key: Key) -> Self {
        Self::new(KeyboardModifiers::ALT, Some(key))
    }

    /// Create a Shift+key hotkey.
    pub fn shift(key: Key) -> Self {
        Self::new(KeyboardModifiers::SHIFT, Some(key))
    }

    /// Create a Ctrl+Shift+key hotkey.
    pub fn ctrl_shift(key: Key) -> Self {
        Self::new(KeyboardModifiers::CTRL_SHIFT, Some(key))
    }

    /// Get the modifier component.
    pub fn modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    /// Get the key component.
    pub fn key(&self) -> Option<Key> {
        self.key
    }

    /// Check if this is the empty hotkey.
    pub fn is_none(&self) -> bool {
        self.key.is_none() && self.modifiers.none()
    }

    /// Check if this hotkey consists of modifier flags only.
    pub fn is_solo_modifiers(&self) -> bool {
        self.key.is_none() && self.modifiers.any()
    }

    /// Check if this hotkey's key component is a toggle key
    /// (Caps Lock, Num Lock, Scroll Lock).
    pub fn has_toggle_key(&self) -> bool {
        self.key.is_some_and(|key| key.is_toggle())
    }

    /// The modifiers-only subset of this hotkey.
    pub fn modifiers_only(&self) -> Self {
        Self {
            modifiers: self.modifiers,
            key: None,
        }
    }

    /// The key-only subset of this hotkey.
    pub fn key_only(&self) -> Self {
        Self {
            modifiers: KeyboardModifiers::NONE,
            key: self.key,
        }
    }

    /// This hotkey with the key component replaced.
    pub fn with_key(self, key: Option<Key>) -> Self {
        Self { key, ..self }
    }

    /// This hotkey with the modifier component replaced.
    pub fn with_modifiers(self, modifiers: KeyboardModifiers) -> Self {
        Self { modifiers, ..self }
    }
}

impl fmt::Display for Hotkey {
    /// Format the hotkey as display text, e.g. `Ctrl+Shift+A`.
    ///
    /// Modifiers render in Ctrl, Alt, Shift, Meta order. A modifiers-only
    /// value renders the modifiers alone (`Ctrl+Shift`); the empty hotkey
    /// renders as the empty string. Substituting placeholder text for the
    /// empty value is the caller's responsibility.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.control {
            parts.push("Ctrl");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }
        if self.modifiers.meta {
            parts.push("Meta");
        }

        if let Some(key) = self.key {
            parts.push(key.name());
        }

        write!(f, "{}", parts.join("+"))
    }
}

/// Error type for parsing hotkeys from display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HotkeyParseError {
    /// The string is empty.
    Empty,
    /// Unknown key name.
    UnknownKey(String),
}

impl fmt::Display for HotkeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty hotkey"),
            Self::UnknownKey(s) => write!(f, "unknown key: {}", s),
        }
    }
}

impl std::error::Error for HotkeyParseError {}

impl FromStr for Hotkey {
    type Err = HotkeyParseError;

    /// Parse a hotkey from display text like `"Ctrl+Shift+A"`.
    ///
    /// # Format
    ///
    /// - Modifiers: `Ctrl`, `Alt`, `Shift`, `Meta` (aliases: `Control`,
    ///   `Option`, `Cmd`, `Command`, `Win`, `Super`), case-insensitive
    /// - Keys: letters, digits, function keys (F1-F12), and named keys
    /// - Parts are separated by `+`
    ///
    /// A string of modifiers alone parses to a modifiers-only value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(HotkeyParseError::Empty);
        }

        let mut modifiers = KeyboardModifiers::NONE;
        let mut key: Option<Key> = None;

        for part in s.split('+') {
            let part = part.trim();
            let part_lower = part.to_lowercase();

            match part_lower.as_str() {
                "ctrl" | "control" => modifiers.control = true,
                "alt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                "meta" | "cmd" | "command" | "win" | "windows" | "super" => modifiers.meta = true,
                _ => {
                    // This should be the key
                    key = Some(parse_key(part)?);
                }
            }
        }

        Ok(Hotkey::new(modifiers, key))
    }
}

/// Parse a key name to a Key enum value.
fn parse_key(s: &str) -> Result<Key, HotkeyParseError> {
    // Single character keys
    if s.len() == 1 {
        let ch = s.chars().next().unwrap().to_ascii_uppercase();
        return match ch {
            'A' => Ok(Key::A),
            'B' => Ok(Key::B),
            'C' => Ok(Key::C),
            'D' => Ok(Key::D),
            'E' => Ok(Key::E),
            'F' => Ok(Key::F),
            'G' => Ok(Key::G),
            'H' => Ok(Key::H),
            'I' => Ok(Key::I),
            'J' => Ok(Key::J),
            'K' => Ok(Key::K),
            'L' => Ok(Key::L),
            'M' => Ok(Key::M),
            'N' => Ok(Key::N),
            'O' => Ok(Key::O),
            'P' => Ok(Key::P),
            'Q' => Ok(Key::Q),
            'R' => Ok(Key::R),
            'S' => Ok(Key::S),
            'T' => Ok(Key::T),
            'U' => Ok(Key::U),
            'V' => Ok(Key::V),
            'W' => Ok(Key::W),
            'X' => Ok(Key::X),
            'Y' => Ok(Key::Y),
            'Z' => Ok(Key::Z),
            '0' => Ok(Key::Digit0),
            '1' => Ok(Key::Digit1),
            '2' => Ok(Key::Digit2),
            '3' => Ok(Key::Digit3),
            '4' => Ok(Key::Digit4),
            '5' => Ok(Key::Digit5),
            '6' => Ok(Key::Digit6),
            '7' => Ok(Key::Digit7),
            '8' => Ok(Key::Digit8),
            '9' => Ok(Key::Digit9),
            '-' => Ok(Key::Minus),
            '=' => Ok(Key::Equal),
            '[' => Ok(Key::BracketLeft),
            ']' => Ok(Key::BracketRight),
            '\\' => Ok(Key::Backslash),
            ';' => Ok(Key::Semicolon),
            '\'' => Ok(Key::Quote),
            ',' => Ok(Key::Comma),
            '.' => Ok(Key::Period),
            '/' => Ok(Key::Slash),
            '`' => Ok(Key::Grave),
            _ => Err(HotkeyParseError::UnknownKey(s.to_string())),
        };
    }

    // Named keys
    match s.to_lowercase().as_str() {
        // Function keys
        "f1" => Ok(Key::F1),
        "f2" => Ok(Key::F2),
        "f3" => Ok(Key::F3),
        "f4" => Ok(Key::F4),
        "f5" => Ok(Key::F5),
        "f6" => Ok(Key::F6),
        "f7" => Ok(Key::F7),
        "f8" => Ok(Key::F8),
        "f9" => Ok(Key::F9),
        "f10" => Ok(Key::F10),
        "f11" => Ok(Key::F11),
        "f12" => Ok(Key::F12),

        // Navigation
        "up" | "arrowup" => Ok(Key::ArrowUp),
        "down" | "arrowdown" => Ok(Key::ArrowDown),
        "left" | "arrowleft" => Ok(Key::ArrowLeft),
        "right" | "arrowright" => Ok(Key::ArrowRight),
        "home" => Ok(Key::Home),
        "end" => Ok(Key::End),
        "pageup" | "pgup" => Ok(Key::PageUp),
        "pagedown" | "pgdn" => Ok(Key::PageDown),

        // Editing
        "backspace" | "back" => Ok(Key::Backspace),
        "delete" | "del" => Ok(Key::Delete),
        "insert" | "ins" => Ok(Key::Insert),
        "enter" | "return" => Ok(Key::Enter),
        "tab" => Ok(Key::Tab),
        "space" | "spacebar" => Ok(Key::Space),
        "escape" | "esc" => Ok(Key::Escape),

        // Lock and system keys
        "capslock" => Ok(Key::CapsLock),
        "numlock" => Ok(Key::NumLock),
        "scrolllock" => Ok(Key::ScrollLock),
        "printscreen" | "prtsc" => Ok(Key::PrintScreen),
        "pause" => Ok(Key::Pause),

        _ => Err(HotkeyParseError::UnknownKey(s.to_string())),
    }
}
