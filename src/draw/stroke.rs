use crate::draw::layers::{LayerId, LayerStore};
use crate::draw::model::{PenStyle, Point, StrokeKind, Tool};
use crate::draw::raster;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokePhase {
    Idle,
    Previewing,
    PathDrawing,
}

/// The stroke between pointer-down and pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveStroke {
    tool: Tool,
    pen: PenStyle,
    begin: Point,
    last: Point,
    end: Point,
    path: Vec<Point>,
    pending: Vec<Point>,
    /// A shape preview whose `end` moved since it was last drawn.
    stale: bool,
}

impl ActiveStroke {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn pen(&self) -> &PenStyle {
        &self.pen
    }

    pub fn begin(&self) -> Point {
        self.begin
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Points already laid down by a path tool, starting at `begin`.
    pub fn path(&self) -> &[Point] {
        &self.path
    }
}

/// Drives one stroke at a time from pointer samples already in canvas space.
///
/// Pointer handlers only record state; pixels change in [`StrokeMachine::paint`].
#[derive(Debug, Clone, Default)]
pub struct StrokeMachine {
    active: Option<ActiveStroke>,
}

impl StrokeMachine {
    pub fn phase(&self) -> StrokePhase {
        match self.active.as_ref().map(|stroke| stroke.tool.kind()) {
            None => StrokePhase::Idle,
            Some(StrokeKind::Preview) => StrokePhase::Previewing,
            Some(StrokeKind::Path) => StrokePhase::PathDrawing,
        }
    }

    pub fn active(&self) -> Option<&ActiveStroke> {
        self.active.as_ref()
    }

    /// Starts a stroke. Returns `false` and changes nothing while another
    /// stroke is in progress.
    pub fn pointer_down(
        &mut self,
        tool: Tool,
        pen: PenStyle,
        point: Point,
        layers: &mut LayerStore,
    ) -> bool {
        if self.active.is_some() {
            return false;
        }
        let pen = if tool == Tool::Eraser {
            PenStyle::eraser()
        } else {
            pen
        };
        if tool.kind() == StrokeKind::Preview {
            layers.copy(LayerId::Committed, LayerId::Draft);
        }
        self.active = Some(ActiveStroke {
            tool,
            pen,
            begin: point,
            last: point,
            end: point,
            path: vec![point],
            pending: Vec::new(),
            stale: false,
        });
        true
    }

    /// Records a sample. Returns whether a repaint is needed.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let Some(stroke) = self.active.as_mut() else {
            return false;
        };
        stroke.end = point;
        match stroke.tool.kind() {
            StrokeKind::Path => stroke.pending.push(point),
            StrokeKind::Preview => stroke.stale = true,
        }
        true
    }

    /// Applies the current stroke state to the committed layer. Returns
    /// whether any pixel was written; without new samples nothing is.
    pub fn paint(&mut self, layers: &mut LayerStore) -> bool {
        let Some(stroke) = self.active.as_mut() else {
            return false;
        };
        if stroke.tool.kind() == StrokeKind::Preview {
            if !stroke.stale {
                return false;
            }
            stroke.stale = false;
        }
        match stroke.tool {
            Tool::Rect => {
                layers.copy(LayerId::Draft, LayerId::Committed);
                raster::draw_rect_outline(layers.committed_mut(), &stroke.pen, stroke.begin, stroke.end);
                true
            }
            Tool::Line => {
                layers.copy(LayerId::Draft, LayerId::Committed);
                raster::draw_line(layers.committed_mut(), &stroke.pen, stroke.begin, stroke.end);
                true
            }
            Tool::Dot => {
                layers.copy(LayerId::Draft, LayerId::Committed);
                raster::draw_dot(layers.committed_mut(), &stroke.pen, stroke.end);
                true
            }
            Tool::Path | Tool::Eraser => {
                let mut changed = false;
                for point in stroke.pending.drain(..) {
                    if point == stroke.last {
                        continue;
                    }
                    raster::draw_path_segment(layers.committed_mut(), &stroke.pen, stroke.last, point);
                    stroke.path.push(point);
                    stroke.last = point;
                    changed = true;
                }
                changed
            }
        }
    }

    /// Finishes the stroke at `point`. Returns the finished stroke, or `None`
    /// when no stroke was active.
    pub fn pointer_up(&mut self, point: Point, layers: &mut LayerStore) -> Option<ActiveStroke> {
        self.pointer_move(point);
        self.paint(layers);
        self.active.take()
    }
}
