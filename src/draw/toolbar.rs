use crate::draw::command::{BackgroundChoice, Command};
use crate::draw::model::{
    BackgroundMode, DashStyle, Rgba, Tool, MEDIUM_WIDTH, THICK_WIDTH, THIN_WIDTH,
};
use crate::settings::{Settings, ToolbarArea};

pub const PALETTE: [(&str, Rgba); 15] = [
    ("red", Rgba::rgb(255, 0, 0)),
    ("green", Rgba::rgb(0, 255, 0)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("cyan", Rgba::rgb(0, 255, 255)),
    ("magenta", Rgba::rgb(255, 0, 255)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("black", Rgba::rgb(0, 0, 0)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("dark red", Rgba::rgb(128, 0, 0)),
    ("dark green", Rgba::rgb(0, 128, 0)),
    ("dark blue", Rgba::rgb(0, 0, 128)),
    ("dark cyan", Rgba::rgb(0, 128, 128)),
    ("dark magenta", Rgba::rgb(128, 0, 128)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("gray", Rgba::rgb(128, 128, 128)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarKind {
    Pen,
    Board,
    Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarItem {
    Button {
        label: &'static str,
        tooltip: &'static str,
        command: Command,
    },
    Swatch {
        name: &'static str,
        color: Rgba,
    },
    ColorPicker,
    Menu {
        label: &'static str,
        entries: Vec<(&'static str, Command)>,
    },
}

impl ToolbarItem {
    /// Command fired by a plain click, if the item has one.
    pub fn command(&self) -> Option<Command> {
        match self {
            ToolbarItem::Button { command, .. } => Some(*command),
            ToolbarItem::Swatch { color, .. } => Some(Command::SetColor(*color)),
            ToolbarItem::ColorPicker | ToolbarItem::Menu { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    pub kind: ToolbarKind,
    pub area: ToolbarArea,
    pub items: Vec<ToolbarItem>,
}

fn button(label: &'static str, tooltip: &'static str, command: Command) -> ToolbarItem {
    ToolbarItem::Button {
        label,
        tooltip,
        command,
    }
}

pub fn pen_bar() -> Vec<ToolbarItem> {
    let mut items: Vec<ToolbarItem> = PALETTE
        .iter()
        .map(|&(name, color)| ToolbarItem::Swatch { name, color })
        .collect();
    items.push(ToolbarItem::ColorPicker);
    items.push(button("Eraser", "Erase strokes", Command::SelectEraser));
    items
}

pub fn action_bar() -> Vec<ToolbarItem> {
    vec![
        button("Path", "Freehand", Command::SelectTool(Tool::Path)),
        button("Highlight", "Toggle highlighter", Command::ToggleHighlight),
        button("Rect", "Rectangle", Command::SelectTool(Tool::Rect)),
        button("Line", "Straight line", Command::SelectTool(Tool::Line)),
        button("Point", "Dot", Command::SelectTool(Tool::Dot)),
        ToolbarItem::Menu {
            label: "Line type",
            entries: vec![
                ("Solid", Command::SetDash(DashStyle::Solid)),
                ("Dashed", Command::SetDash(DashStyle::Dash)),
            ],
        },
        ToolbarItem::Menu {
            label: "Line width",
            entries: vec![
                ("Thin", Command::SetWidth(THIN_WIDTH)),
                ("Medium", Command::SetWidth(MEDIUM_WIDTH)),
                ("Thick", Command::SetWidth(THICK_WIDTH)),
            ],
        },
        button("Undo", "Undo last stroke", Command::Undo),
        button("Redo", "Redo", Command::Redo),
        button("Save", "Save image to the working directory", Command::Save),
    ]
}

pub fn board_bar(default_background: BackgroundMode) -> Vec<ToolbarItem> {
    let default_label = match default_background {
        BackgroundMode::Snapshot => "Screen",
        BackgroundMode::Transparent | BackgroundMode::Solid(_) => "Transparent",
    };
    vec![
        button(
            "Whiteboard",
            "White background",
            Command::SetBackground(BackgroundChoice::Whiteboard),
        ),
        button(
            "Blackboard",
            "Black background",
            Command::SetBackground(BackgroundChoice::Blackboard),
        ),
        button(
            default_label,
            "Restore the starting background",
            Command::SetBackground(BackgroundChoice::Default),
        ),
        button("Remove drawings", "Clear all strokes", Command::ClearDrawing),
    ]
}

/// The three bars with their configured docking edges.
pub fn toolbars(settings: &Settings, default_background: BackgroundMode) -> Vec<Toolbar> {
    vec![
        Toolbar {
            kind: ToolbarKind::Pen,
            area: settings.penbar_area,
            items: pen_bar(),
        },
        Toolbar {
            kind: ToolbarKind::Board,
            area: settings.boardbar_area,
            items: board_bar(default_background),
        },
        Toolbar {
            kind: ToolbarKind::Action,
            area: settings.actionbar_area,
            items: action_bar(),
        },
    ]
}
