use anyhow::Result;
use tiny_skia::Pixmap;
use tracing::debug;

use crate::draw::command::{BackgroundChoice, Command, Dispatch};
use crate::draw::composite::{compose, compose_export};
use crate::draw::history::HistoryStack;
use crate::draw::layers::{LayerId, LayerStore};
use crate::draw::model::{scale, BackgroundMode, CanvasSize, PenStyle, Rgba, Tool, WindowSize};
use crate::draw::stroke::{StrokeMachine, StrokePhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasOptions {
    pub history_capacity: usize,
    pub pen_width: u32,
}

impl Default for CanvasOptions {
    fn default() -> Self {
        Self {
            history_capacity: 50,
            pen_width: 3,
        }
    }
}

/// One annotation session over a captured screen.
pub struct Canvas {
    layers: LayerStore,
    snapshot: Pixmap,
    stroke: StrokeMachine,
    history: HistoryStack<Pixmap>,
    tool: Tool,
    pen: PenStyle,
    background: BackgroundMode,
    default_background: BackgroundMode,
    window: WindowSize,
    revision: u64,
}

impl Canvas {
    /// Sizes the layers to `snapshot` and seeds history with the empty
    /// committed layer so the first stroke can be undone.
    pub fn new(snapshot: Pixmap, background: BackgroundMode, options: CanvasOptions) -> Result<Self> {
        let size = CanvasSize::new(snapshot.width(), snapshot.height());
        let layers = LayerStore::new(size)?;
        let mut history = HistoryStack::new(options.history_capacity.max(1));
        history.append(layers.committed().clone());

        let mut canvas = Self {
            layers,
            snapshot,
            stroke: StrokeMachine::default(),
            history,
            tool: Tool::Path,
            pen: PenStyle::with_width(options.pen_width),
            background,
            default_background: background,
            window: WindowSize::new(size.width as f32, size.height as f32),
            revision: 0,
        };
        canvas.set_background(background);
        Ok(canvas)
    }

    pub fn size(&self) -> CanvasSize {
        self.layers.size()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn pen(&self) -> &PenStyle {
        &self.pen
    }

    pub fn background(&self) -> BackgroundMode {
        self.background
    }

    pub fn default_background(&self) -> BackgroundMode {
        self.default_background
    }

    pub fn phase(&self) -> StrokePhase {
        self.stroke.phase()
    }

    pub fn history(&self) -> &HistoryStack<Pixmap> {
        &self.history
    }

    pub fn layers(&self) -> &LayerStore {
        &self.layers
    }

    pub fn stroke(&self) -> &StrokeMachine {
        &self.stroke
    }

    /// Bumped whenever the displayed pixels may have changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_window_size(&mut self, window: WindowSize) {
        self.window = window;
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let point = scale(x, y, self.size(), self.window);
        if self.stroke.pointer_down(self.tool, self.pen, point, &mut self.layers) {
            debug!(tool = ?self.tool, x = point.x, y = point.y, "stroke started");
        }
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        let point = scale(x, y, self.size(), self.window);
        self.stroke.pointer_move(point)
    }

    /// Finalizes the active stroke and records it in history.
    pub fn pointer_up(&mut self, x: f32, y: f32) {
        let point = scale(x, y, self.size(), self.window);
        if let Some(finished) = self.stroke.pointer_up(point, &mut self.layers) {
            self.history.append(self.layers.committed().clone());
            self.revision += 1;
            debug!(
                tool = ?finished.tool(),
                entries = self.history.len(),
                "stroke committed"
            );
        }
    }

    /// Applies pending stroke samples to the committed layer.
    pub fn paint_stroke(&mut self) {
        if self.stroke.paint(&mut self.layers) {
            self.revision += 1;
        }
    }

    /// Draws pending samples and returns the composited frame.
    pub fn render(&mut self) -> Pixmap {
        self.paint_stroke();
        compose(self.layers.background(), self.layers.committed())
    }

    /// The image a save writes: screen, background, then strokes.
    pub fn export_frame(&self) -> Pixmap {
        compose_export(&self.snapshot, self.layers.background(), self.layers.committed())
    }

    pub fn undo(&mut self) {
        if let Some(entry) = self.history.undo() {
            self.layers.restore(entry);
            self.revision += 1;
        }
    }

    pub fn redo(&mut self) {
        if let Some(entry) = self.history.redo() {
            self.layers.restore(entry);
            self.revision += 1;
        }
    }

    /// Wipes every stroke. History is left alone, so undo brings them back.
    pub fn clear_drawing(&mut self) {
        self.layers.fill(LayerId::Committed, Rgba::TRANSPARENT);
        self.layers.fill(LayerId::Draft, Rgba::TRANSPARENT);
        self.revision += 1;
    }

    pub fn set_background(&mut self, mode: BackgroundMode) {
        match mode {
            BackgroundMode::Transparent => self.layers.fill(LayerId::Background, Rgba::TRANSPARENT),
            BackgroundMode::Snapshot => self.layers.load(LayerId::Background, &self.snapshot),
            BackgroundMode::Solid(color) => self.layers.fill(LayerId::Background, color),
        }
        self.background = mode;
        self.revision += 1;
    }

    pub fn apply(&mut self, command: Command) -> Dispatch {
        match command {
            Command::SelectTool(tool) => self.tool = tool,
            Command::SelectEraser => self.tool = Tool::Eraser,
            Command::SetColor(color) => self.pen.color = color,
            Command::SetWidth(width) => self.pen.width = width.max(1),
            Command::IncreaseWidth => self.pen.grow(),
            Command::DecreaseWidth => self.pen.shrink(),
            Command::SetDash(dash) => self.pen.dash = dash,
            Command::ToggleHighlight => {
                self.pen.highlight = !self.pen.highlight;
                self.tool = Tool::Path;
            }
            Command::SetBackground(choice) => {
                let mode = match choice {
                    BackgroundChoice::Whiteboard => BackgroundMode::Solid(Rgba::WHITE),
                    BackgroundChoice::Blackboard => BackgroundMode::Solid(Rgba::BLACK),
                    BackgroundChoice::Default => self.default_background,
                };
                self.set_background(mode);
            }
            Command::ClearDrawing => self.clear_drawing(),
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::Save => return Dispatch::Save,
            Command::ToggleMenus => return Dispatch::ToggleMenus,
            Command::Quit => return Dispatch::Quit,
        }
        Dispatch::Done
    }
}
