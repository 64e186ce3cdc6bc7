use std::fmt;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::hotkey::{Hotkey, KeyCode};

pub const MIN_ICON_SIZE: u32 = 8;
pub const MAX_ICON_SIZE: u32 = 128;
pub const MAX_PEN_SIZE: u32 = 200;

/// Screen edge a toolbar docks to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarArea {
    #[serde(alias = "topToolBarArea")]
    Top,
    #[serde(alias = "bottomToolBarArea")]
    Bottom,
    #[serde(alias = "leftToolBarArea")]
    Left,
    #[serde(alias = "rightToolBarArea")]
    Right,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
    pub penbar_area: ToolbarArea,
    pub boardbar_area: ToolbarArea,
    pub actionbar_area: ToolbarArea,
    pub hidden_menus: bool,
    pub icon_size: u32,
    pub drawing_history: usize,
    pub default_pen_size: u32,
    pub undo_key: Hotkey,
    pub redo_key: Hotkey,
    pub toggle_menus_key: Hotkey,
    pub exit_shortcut_key: Hotkey,
    pub save_key: Hotkey,
    pub clear_key: Hotkey,
    pub decrease_width: Hotkey,
    pub increase_width: Hotkey,
    pub highlight_key: Hotkey,
    pub exit_mouse: MouseButton,
    pub toggle_menus_mouse: MouseButton,
    pub drawing_mouse: MouseButton,
    pub debug_logging: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_penbar_area() -> ToolbarArea {
    ToolbarArea::Top
}

fn default_boardbar_area() -> ToolbarArea {
    ToolbarArea::Top
}

fn default_actionbar_area() -> ToolbarArea {
    ToolbarArea::Left
}

fn default_icon_size() -> u32 {
    25
}

fn default_drawing_history() -> usize {
    50
}

fn default_pen_size() -> u32 {
    3
}

fn letter(c: char) -> KeyCode {
    KeyCode::Letter(c)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            penbar_area: default_penbar_area(),
            boardbar_area: default_boardbar_area(),
            actionbar_area: default_actionbar_area(),
            hidden_menus: false,
            icon_size: default_icon_size(),
            drawing_history: default_drawing_history(),
            default_pen_size: default_pen_size(),
            undo_key: Hotkey::ctrl(letter('Z')),
            redo_key: Hotkey::ctrl(letter('Y')),
            toggle_menus_key: Hotkey::ctrl(letter('M')),
            exit_shortcut_key: Hotkey::plain(KeyCode::Escape),
            save_key: Hotkey::ctrl(letter('S')),
            clear_key: Hotkey::ctrl(letter('X')),
            decrease_width: Hotkey::plain(KeyCode::OpenBracket),
            increase_width: Hotkey::plain(KeyCode::CloseBracket),
            highlight_key: Hotkey::ctrl(letter('H')),
            exit_mouse: MouseButton::Right,
            toggle_menus_mouse: MouseButton::Middle,
            drawing_mouse: MouseButton::Left,
            debug_logging: false,
            log_file: None,
        }
    }
}

/// A configuration value that was ignored in favour of its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub key: String,
    pub problem: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.problem)
    }
}

const KNOWN_KEYS: &[&str] = &[
    "penbar_area",
    "boardbar_area",
    "actionbar_area",
    "hidden_menus",
    "icon_size",
    "drawing_history",
    "default_pen_size",
    "undo_key",
    "redo_key",
    "toggle_menus_key",
    "exit_shortcut_key",
    "save_key",
    "clear_key",
    "decrease_width",
    "increase_width",
    "highlight_key",
    "exit_mouse",
    "toggle_menus_mouse",
    "drawing_mouse",
    "debug_logging",
    "log_file",
];

struct Reader<'a> {
    map: &'a Map<String, Value>,
    issues: Vec<ConfigIssue>,
}

impl Reader<'_> {
    fn issue(&mut self, key: &str, problem: impl Into<String>) {
        self.issues.push(ConfigIssue {
            key: key.to_string(),
            problem: problem.into(),
        });
    }

    fn get<T: DeserializeOwned>(&mut self, key: &str, default: T) -> T {
        let Some(raw) = self.map.get(key) else {
            return default;
        };
        match serde_json::from_value(raw.clone()) {
            Ok(value) => value,
            Err(err) => {
                self.issue(key, format!("{err}; using the default"));
                default
            }
        }
    }

    fn get_checked<T>(&mut self, key: &str, default: T, valid: impl Fn(&T) -> bool, rule: &str) -> T
    where
        T: DeserializeOwned + Copy,
    {
        let value = self.get(key, default);
        if valid(&value) {
            value
        } else {
            self.issue(key, format!("must be {rule}; using the default"));
            default
        }
    }
}

impl Settings {
    /// Builds settings key by key. A missing key takes its default; a
    /// malformed or out-of-range value takes its default and is reported.
    pub fn from_json(value: &Value) -> (Self, Vec<ConfigIssue>) {
        let defaults = Self::default();
        let Some(map) = value.as_object() else {
            let issue = ConfigIssue {
                key: "<root>".into(),
                problem: "expected a JSON object; using all defaults".into(),
            };
            return (defaults, vec![issue]);
        };

        let mut r = Reader {
            map,
            issues: Vec::new(),
        };
        for key in map.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                r.issue(key, "unknown key ignored");
            }
        }

        let settings = Self {
            penbar_area: r.get("penbar_area", defaults.penbar_area),
            boardbar_area: r.get("boardbar_area", defaults.boardbar_area),
            actionbar_area: r.get("actionbar_area", defaults.actionbar_area),
            hidden_menus: r.get("hidden_menus", defaults.hidden_menus),
            icon_size: r.get_checked(
                "icon_size",
                defaults.icon_size,
                |v| (MIN_ICON_SIZE..=MAX_ICON_SIZE).contains(v),
                "between 8 and 128",
            ),
            drawing_history: r.get_checked(
                "drawing_history",
                defaults.drawing_history,
                |v| *v >= 1,
                "at least 1",
            ),
            default_pen_size: r.get_checked(
                "default_pen_size",
                defaults.default_pen_size,
                |v| (1..=MAX_PEN_SIZE).contains(v),
                "between 1 and 200",
            ),
            undo_key: r.get("undo_key", defaults.undo_key),
            redo_key: r.get("redo_key", defaults.redo_key),
            toggle_menus_key: r.get("toggle_menus_key", defaults.toggle_menus_key),
            exit_shortcut_key: r.get("exit_shortcut_key", defaults.exit_shortcut_key),
            save_key: r.get("save_key", defaults.save_key),
            clear_key: r.get("clear_key", defaults.clear_key),
            decrease_width: r.get("decrease_width", defaults.decrease_width),
            increase_width: r.get("increase_width", defaults.increase_width),
            highlight_key: r.get("highlight_key", defaults.highlight_key),
            exit_mouse: r.get("exit_mouse", defaults.exit_mouse),
            toggle_menus_mouse: r.get("toggle_menus_mouse", defaults.toggle_menus_mouse),
            drawing_mouse: r.get("drawing_mouse", defaults.drawing_mouse),
            debug_logging: r.get("debug_logging", defaults.debug_logging),
            log_file: r.get("log_file", defaults.log_file.clone()),
        };
        (settings, r.issues)
    }
}
