use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Upper-case ASCII letter.
    Letter(char),
    Digit(u8),
    /// Function key F1 to F12.
    F(u8),
    Escape,
    Enter,
    Space,
    Tab,
    Delete,
    Backspace,
    Left,
    Right,
    Up,
    Down,
    OpenBracket,
    CloseBracket,
    Minus,
    Plus,
    Equals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Hotkey {
    pub const fn plain(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    pub const fn ctrl(key: KeyCode) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
            alt: false,
        }
    }

    /// Whether a key press with the given modifiers triggers this hotkey.
    /// Modifiers must match exactly.
    pub fn matches(&self, key: KeyCode, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key == key && self.ctrl == ctrl && self.shift == shift && self.alt == alt
    }
}

/// Parse a hotkey string like "Ctrl+Shift+Z" or "[" into a [`Hotkey`].
pub fn parse_hotkey(s: &str) -> Option<Hotkey> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut key: Option<KeyCode> = None;

    for part in s.split('+') {
        let upper = part.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "SHIFT" => shift = true,
            "ALT" => alt = true,
            "" => {}
            _ => {
                // Only one non-modifier key per hotkey.
                if key.is_some() {
                    return None;
                }
                key = Some(parse_key(&upper)?);
            }
        }
    }

    key.map(|key| Hotkey {
        key,
        ctrl,
        shift,
        alt,
    })
}

/// Parse a single key name, case-insensitively.
pub fn parse_key_name(name: &str) -> Option<KeyCode> {
    parse_key(&name.trim().to_ascii_uppercase())
}

fn parse_key(upper: &str) -> Option<KeyCode> {
    match upper {
        "ESC" | "ESCAPE" => Some(KeyCode::Escape),
        "ENTER" | "RETURN" => Some(KeyCode::Enter),
        "SPACE" => Some(KeyCode::Space),
        "TAB" => Some(KeyCode::Tab),
        "DEL" | "DELETE" => Some(KeyCode::Delete),
        "BACKSPACE" => Some(KeyCode::Backspace),
        "LEFT" | "ARROWLEFT" => Some(KeyCode::Left),
        "RIGHT" | "ARROWRIGHT" => Some(KeyCode::Right),
        "UP" | "ARROWUP" => Some(KeyCode::Up),
        "DOWN" | "ARROWDOWN" => Some(KeyCode::Down),
        "[" | "OPENBRACKET" | "BRACKETLEFT" => Some(KeyCode::OpenBracket),
        "]" | "CLOSEBRACKET" | "BRACKETRIGHT" => Some(KeyCode::CloseBracket),
        "-" | "MINUS" => Some(KeyCode::Minus),
        "PLUS" => Some(KeyCode::Plus),
        "=" | "EQUALS" | "EQUAL" => Some(KeyCode::Equals),
        _ if upper.len() > 1 && upper.starts_with('F') => match upper[1..].parse::<u8>() {
            Ok(n @ 1..=12) => Some(KeyCode::F(n)),
            _ => None,
        },
        _ if upper.starts_with("NUM") && upper.len() == 4 => parse_key(&upper[3..]),
        _ => {
            let mut chars = upper.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            if c.is_ascii_digit() {
                Some(KeyCode::Digit(c as u8 - b'0'))
            } else if c.is_ascii_alphabetic() {
                Some(KeyCode::Letter(c))
            } else {
                None
            }
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Letter(c) => write!(f, "{c}"),
            KeyCode::Digit(d) => write!(f, "{d}"),
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Escape => f.write_str("Escape"),
            KeyCode::Enter => f.write_str("Enter"),
            KeyCode::Space => f.write_str("Space"),
            KeyCode::Tab => f.write_str("Tab"),
            KeyCode::Delete => f.write_str("Delete"),
            KeyCode::Backspace => f.write_str("Backspace"),
            KeyCode::Left => f.write_str("Left"),
            KeyCode::Right => f.write_str("Right"),
            KeyCode::Up => f.write_str("Up"),
            KeyCode::Down => f.write_str("Down"),
            KeyCode::OpenBracket => f.write_str("["),
            KeyCode::CloseBracket => f.write_str("]"),
            KeyCode::Minus => f.write_str("-"),
            KeyCode::Plus => f.write_str("Plus"),
            KeyCode::Equals => f.write_str("="),
        }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        write!(f, "{}", self.key)
    }
}

impl Serialize for Hotkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_hotkey(&raw).ok_or_else(|| de::Error::custom(format!("invalid hotkey \"{raw}\"")))
    }
}
