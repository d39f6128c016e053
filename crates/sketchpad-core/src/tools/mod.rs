//! Tool settings: the style snapshot applied to new drawings, and the palette.

use crate::shapes::{SerializableColor, ShapeKind};
use crate::snap::{DEFAULT_GRID_SPACING, SnapMode};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Invalid tool or canvas configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid grid spacing: {0} (must be finite and positive)")]
    InvalidGridSpacing(f64),
    #[error("Invalid stroke width: {0} (must be finite and positive)")]
    InvalidStrokeWidth(f64),
    #[error("Invalid corner radius: {0} (must be finite and non-negative)")]
    InvalidCornerRadius(f64),
}

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum ColorChoice {
    #[default]
    Black,
    Blue,
    Gray,
    Green,
    Orange,
    Pink,
    Purple,
    Red,
    White,
    Yellow,
}

impl ColorChoice {
    /// Every palette entry, in picker order.
    pub const ALL: [ColorChoice; 10] = [
        ColorChoice::Black,
        ColorChoice::Blue,
        ColorChoice::Gray,
        ColorChoice::Green,
        ColorChoice::Orange,
        ColorChoice::Pink,
        ColorChoice::Purple,
        ColorChoice::Red,
        ColorChoice::White,
        ColorChoice::Yellow,
    ];

    /// Display name for pickers.
    pub fn name(self) -> &'static str {
        match self {
            ColorChoice::Black => "Black",
            ColorChoice::Blue => "Blue",
            ColorChoice::Gray => "Gray",
            ColorChoice::Green => "Green",
            ColorChoice::Orange => "Orange",
            ColorChoice::Pink => "Pink",
            ColorChoice::Purple => "Purple",
            ColorChoice::Red => "Red",
            ColorChoice::White => "White",
            ColorChoice::Yellow => "Yellow",
        }
    }

    /// RGBA value of this entry.
    pub fn color(self) -> SerializableColor {
        match self {
            ColorChoice::Black => SerializableColor::black(),
            ColorChoice::Blue => SerializableColor::new(0, 122, 255, 255),
            ColorChoice::Gray => SerializableColor::new(142, 142, 147, 255),
            ColorChoice::Green => SerializableColor::new(52, 199, 89, 255),
            ColorChoice::Orange => SerializableColor::new(255, 149, 0, 255),
            ColorChoice::Pink => SerializableColor::new(255, 45, 85, 255),
            ColorChoice::Purple => SerializableColor::new(175, 82, 222, 255),
            ColorChoice::Red => SerializableColor::new(255, 59, 48, 255),
            ColorChoice::White => SerializableColor::white(),
            ColorChoice::Yellow => SerializableColor::new(255, 204, 0, 255),
        }
    }

    /// Cycle to the next palette entry.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl From<ColorChoice> for SerializableColor {
    fn from(choice: ColorChoice) -> Self {
        choice.color()
    }
}

/// Current style and snapping settings, read when a stroke starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    /// Fill color for new drawings.
    pub color: SerializableColor,
    /// Shape kind for new drawings.
    pub shape: ShapeKind,
    /// Stroke width (line thickness) for new drawings.
    pub stroke_width: f64,
    /// Corner radius for new rounded rectangles.
    pub corner_radius: f64,
    /// Whether captured points snap to the grid.
    pub snap_mode: SnapMode,
    /// Distance between grid lines.
    pub grid_spacing: f64,
}

impl ToolSettings {
    /// Stroke width slider range offered by the UI.
    pub const STROKE_WIDTH_RANGE: RangeInclusive<f64> = 1.0..=100.0;
    /// Corner radius slider range offered by the UI.
    pub const CORNER_RADIUS_RANGE: RangeInclusive<f64> = 5.0..=100.0;
    /// Grid spacing slider range offered by the UI.
    pub const GRID_SPACING_RANGE: RangeInclusive<f64> = 5.0..=100.0;

    pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;
    pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;

    /// Create settings with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<SerializableColor>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_shape(mut self, shape: ShapeKind) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_snapping(mut self, enabled: bool) -> Self {
        self.snap_mode = SnapMode::from(enabled);
        self
    }

    pub fn with_grid_spacing(mut self, grid_spacing: f64) -> Self {
        self.grid_spacing = grid_spacing;
        self
    }

    /// Check that every field is usable by the geometry code.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(ConfigError::InvalidStrokeWidth(self.stroke_width));
        }
        if !(self.corner_radius.is_finite() && self.corner_radius >= 0.0) {
            return Err(ConfigError::InvalidCornerRadius(self.corner_radius));
        }
        crate::geometry::check_spacing(self.grid_spacing)
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            color: ColorChoice::default().color(),
            shape: ShapeKind::default(),
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            snap_mode: SnapMode::default(),
            grid_spacing: DEFAULT_GRID_SPACING,
        }
    }
}
