//! Drawings and the geometry that turns their points into fillable paths.

mod circle;
mod line;
mod rectangle;

pub use circle::circle_path;
pub use line::{StrokePiece, line_path, stroke_pieces};
pub use rectangle::{rect_path, rounded_rect_path};

use crate::tools::ToolSettings;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use peniko::Color;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flattening tolerance used when converting curves to path elements.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn gray() -> Self {
        Self::new(128, 128, 128, 255)
    }
}

impl Default for SerializableColor {
    fn default() -> Self {
        Self::black()
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// The kind of shape a drawing produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Round-capped polyline through every captured point.
    #[default]
    Line,
    /// Circle around the first point, through the second.
    Circle,
    /// Axis-aligned rectangle spanned by two corners.
    Rectangle,
    /// Rectangle with rounded corners.
    RoundedRectangle,
}

impl ShapeKind {
    /// Every shape kind, in picker order.
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Line,
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::RoundedRectangle,
    ];

    /// Display name for pickers.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::RoundedRectangle => "Rounded Rectangle",
        }
    }

    /// Cycle to the next shape kind.
    pub fn next(self) -> Self {
        match self {
            ShapeKind::Line => ShapeKind::Circle,
            ShapeKind::Circle => ShapeKind::Rectangle,
            ShapeKind::Rectangle => ShapeKind::RoundedRectangle,
            ShapeKind::RoundedRectangle => ShapeKind::Line,
        }
    }

    /// Maximum number of points a drawing of this kind holds, if bounded.
    ///
    /// Bounded kinds keep an anchor and a live extent; further points
    /// replace the extent.
    pub fn max_points(self) -> Option<usize> {
        match self {
            ShapeKind::Line => None,
            ShapeKind::Circle | ShapeKind::Rectangle | ShapeKind::RoundedRectangle => Some(2),
        }
    }
}

/// Unique identifier for drawings.
pub type DrawingId = Uuid;

/// One shape instance: a run of captured points sharing one style and kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    pub(crate) id: DrawingId,
    /// Captured points, in capture order.
    pub points: Vec<Point>,
    /// Stroke width. Zero until the style is stamped at first contact.
    pub stroke_width: f64,
    /// Corner radius (rounded rectangles only).
    pub corner_radius: f64,
    /// Fill color.
    pub color: SerializableColor,
    /// Shape kind.
    pub shape: ShapeKind,
}

impl Drawing {
    pub const DEFAULT_CORNER_RADIUS: f64 = 5.0;

    /// Create a new empty, unstamped drawing.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            points: Vec::new(),
            stroke_width: 0.0,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            color: SerializableColor::black(),
            shape: ShapeKind::default(),
        }
    }

    /// Create a stamped drawing from existing points.
    pub fn from_points(points: Vec<Point>, settings: &ToolSettings) -> Self {
        let mut drawing = Self::new();
        drawing.stamp(settings);
        for point in points {
            drawing.add_point(point);
        }
        drawing
    }

    pub fn id(&self) -> DrawingId {
        self.id
    }

    /// Whether the style has been stamped yet.
    pub fn is_stamped(&self) -> bool {
        self.stroke_width != 0.0
    }

    /// Lock in the style from `settings` for the rest of the stroke.
    pub fn stamp(&mut self, settings: &ToolSettings) {
        self.color = settings.color;
        self.shape = settings.shape;
        self.stroke_width = settings.stroke_width;
        self.corner_radius = settings.corner_radius;
    }

    /// Record a point following the kind's point-count rule.
    pub fn add_point(&mut self, point: Point) {
        match self.shape.max_points() {
            Some(max) if self.points.len() >= max => {
                self.points[max - 1] = point;
            }
            _ => self.points.push(point),
        }
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if no point has been captured.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether enough points exist to produce geometry.
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }

    /// Get the fill path for rendering. Empty until two points exist.
    pub fn to_path(&self) -> BezPath {
        if !self.is_drawable() {
            return BezPath::new();
        }
        let first = self.points[0];
        let second = self.points[1];
        match self.shape {
            ShapeKind::Line => line_path(&self.points, self.stroke_width),
            ShapeKind::Circle => circle_path(first, second),
            ShapeKind::Rectangle => rect_path(first, second),
            ShapeKind::RoundedRectangle => rounded_rect_path(first, second, self.corner_radius),
        }
    }

    /// Bounding box of the rendered geometry.
    pub fn bounds(&self) -> Rect {
        if !self.is_drawable() {
            return Rect::ZERO;
        }
        self.to_path().bounding_box()
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}
