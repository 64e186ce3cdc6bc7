use crate::draw::model::{DashStyle, Rgba, Tool};
use crate::hotkey::{Hotkey, KeyCode};
use crate::settings::{MouseButton, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundChoice {
    Whiteboard,
    Blackboard,
    /// Transparent, or the captured screen when the window is opaque.
    Default,
}

/// Every action the toolbars, shortcuts and mouse bindings can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectTool(Tool),
    SelectEraser,
    SetColor(Rgba),
    SetWidth(u32),
    IncreaseWidth,
    DecreaseWidth,
    SetDash(DashStyle),
    ToggleHighlight,
    SetBackground(BackgroundChoice),
    ClearDrawing,
    Undo,
    Redo,
    Save,
    ToggleMenus,
    Quit,
}

/// What the window still has to do after the canvas handled a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Done,
    Save,
    ToggleMenus,
    Quit,
}

/// What a mouse button does on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Draw,
    Command(Command),
    Ignore,
}

pub fn pointer_action(settings: &Settings, button: MouseButton) -> PointerAction {
    if button == settings.drawing_mouse {
        PointerAction::Draw
    } else if button == settings.exit_mouse {
        PointerAction::Command(Command::Quit)
    } else if button == settings.toggle_menus_mouse {
        PointerAction::Command(Command::ToggleMenus)
    } else {
        PointerAction::Ignore
    }
}

/// Keyboard shortcuts in lookup order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: Vec<(Hotkey, Command)>,
}

impl KeyBindings {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            bindings: vec![
                (settings.undo_key, Command::Undo),
                (settings.redo_key, Command::Redo),
                (settings.toggle_menus_key, Command::ToggleMenus),
                (settings.exit_shortcut_key, Command::Quit),
                (settings.save_key, Command::Save),
                (settings.clear_key, Command::ClearDrawing),
                (settings.decrease_width, Command::DecreaseWidth),
                (settings.increase_width, Command::IncreaseWidth),
                (settings.highlight_key, Command::ToggleHighlight),
            ],
        }
    }

    pub fn lookup(&self, key: KeyCode, ctrl: bool, shift: bool, alt: bool) -> Option<Command> {
        self.bindings
            .iter()
            .find(|(hotkey, _)| hotkey.matches(key, ctrl, shift, alt))
            .map(|(_, command)| *command)
    }
}
