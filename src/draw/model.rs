pub const HIGHLIGHT_ALPHA: u8 = 128;
pub const ERASER_WIDTH: u32 = 30;
pub const DOT_RADIUS: f32 = 10.0;
pub const WIDTH_STEP: u32 = 2;

/// Line width presets offered by the toolbar.
pub const THIN_WIDTH: u32 = 3;
pub const MEDIUM_WIDTH: u32 = 15;
pub const THICK_WIDTH: u32 = 25;

/// Integer canvas coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Logical size of the overlay window, in the units pointer samples use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSize {
    pub width: f32,
    pub height: f32,
}

impl WindowSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Maps a window-space sample to canvas pixels, truncating toward zero.
pub fn scale(x: f32, y: f32, canvas: CanvasSize, window: WindowSize) -> Point {
    Point {
        x: scale_axis(x, canvas.width, window.width),
        y: scale_axis(y, canvas.height, window.height),
    }
}

fn scale_axis(value: f32, canvas: u32, window: f32) -> i32 {
    // A collapsed window keeps the sample unscaled.
    if window <= 0.0 || !window.is_finite() {
        return value as i32;
    }
    (value * canvas as f32 / window) as i32
}

/// Straight (non-premultiplied) 8-bit colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Path,
    Eraser,
    Rect,
    Line,
    Dot,
}

/// How a tool draws while the pointer is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeKind {
    /// Re-rendered from the draft snapshot on every update.
    Preview,
    /// Extended incrementally into the committed layer.
    Path,
}

impl Tool {
    pub fn kind(self) -> StrokeKind {
        match self {
            Tool::Path | Tool::Eraser => StrokeKind::Path,
            Tool::Rect | Tool::Line | Tool::Dot => StrokeKind::Preview,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Path => "Path",
            Tool::Eraser => "Eraser",
            Tool::Rect => "Rect",
            Tool::Line => "Line",
            Tool::Dot => "Point",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
}

impl DashStyle {
    /// On/off pattern in multiples of the pen width.
    pub fn pattern(self) -> &'static [f32] {
        match self {
            DashStyle::Solid => &[],
            DashStyle::Dash => &[4.0, 2.0],
            DashStyle::Dot => &[1.0, 2.0],
            DashStyle::DashDot => &[4.0, 2.0, 1.0, 2.0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapStyle {
    #[default]
    Round,
    Square,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinStyle {
    #[default]
    Round,
    Bevel,
    Miter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PenStyle {
    pub color: Rgba,
    pub width: u32,
    pub dash: DashStyle,
    pub cap: CapStyle,
    pub join: JoinStyle,
    pub highlight: bool,
}

impl Default for PenStyle {
    fn default() -> Self {
        Self {
            color: Rgba::RED,
            width: THIN_WIDTH,
            dash: DashStyle::Solid,
            cap: CapStyle::Round,
            join: JoinStyle::Round,
            highlight: false,
        }
    }
}

impl PenStyle {
    pub fn with_width(width: u32) -> Self {
        Self {
            width: width.max(1),
            ..Self::default()
        }
    }

    /// Transparent wide pen used to cut holes in the committed layer.
    pub fn eraser() -> Self {
        Self {
            color: Rgba::TRANSPARENT,
            width: ERASER_WIDTH,
            dash: DashStyle::Solid,
            cap: CapStyle::Round,
            join: JoinStyle::Round,
            highlight: false,
        }
    }

    /// Colour actually laid down, with the highlighter alpha applied.
    pub fn effective_color(&self) -> Rgba {
        if self.highlight {
            self.color.with_alpha(HIGHLIGHT_ALPHA)
        } else {
            self.color
        }
    }

    pub fn grow(&mut self) {
        self.width = self.width.saturating_add(WIDTH_STEP);
    }

    pub fn shrink(&mut self) {
        self.width = self.width.saturating_sub(WIDTH_STEP).max(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundMode {
    Transparent,
    /// The screen image captured at startup.
    Snapshot,
    Solid(Rgba),
}
