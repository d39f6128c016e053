//! Snap functionality for aligning captured points to the grid.

use crate::geometry::snap_to_grid;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default grid spacing (matches the visual grid).
pub const DEFAULT_GRID_SPACING: f64 = 10.0;

/// Snap mode applied to captured points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnapMode {
    /// No snapping.
    #[default]
    None,
    /// Snap to grid intersections.
    Grid,
}

impl SnapMode {
    /// Cycle to the next snap mode.
    pub fn next(self) -> Self {
        match self {
            SnapMode::None => SnapMode::Grid,
            SnapMode::Grid => SnapMode::None,
        }
    }

    /// Check if any snapping is enabled.
    pub fn is_enabled(self) -> bool {
        self != SnapMode::None
    }
}

impl From<bool> for SnapMode {
    fn from(enabled: bool) -> Self {
        if enabled { SnapMode::Grid } else { SnapMode::None }
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// The (possibly) snapped point.
    pub point: Point,
    /// Whether snapping was applied.
    pub snapped: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self { point, snapped: false }
    }
}

/// Snap a point based on the current snap mode.
///
/// `grid_spacing` must be positive when `mode` is [`SnapMode::Grid`].
pub fn snap_point(point: Point, mode: SnapMode, grid_spacing: f64) -> SnapResult {
    match mode {
        SnapMode::None => SnapResult::none(point),
        SnapMode::Grid => SnapResult {
            point: snap_to_grid(point, grid_spacing),
            snapped: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_mode_cycle() {
        assert_eq!(SnapMode::None.next(), SnapMode::Grid);
        assert_eq!(SnapMode::Grid.next(), SnapMode::None);
        assert!(SnapMode::Grid.is_enabled());
        assert!(!SnapMode::None.is_enabled());
    }

    #[test]
    fn test_snap_point_none() {
        let p = Point::new(13.0, 7.0);
        let result = snap_point(p, SnapMode::None, 10.0);
        assert!(!result.snapped);
        assert_eq!(result.point, p);
    }

    #[test]
    fn test_snap_point_grid() {
        let result = snap_point(Point::new(16.0, 8.0), SnapMode::Grid, 10.0);
        assert!(result.snapped);
        assert!((result.point.x - 20.0).abs() < 1e-9);
        assert!((result.point.y - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(SnapMode::from(true), SnapMode::Grid);
        assert_eq!(SnapMode::from(false), SnapMode::None);
    }
}
