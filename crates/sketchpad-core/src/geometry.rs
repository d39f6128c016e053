//! Point geometry helpers shared by the shape renderer and the controller.

use crate::tools::ConfigError;
use kurbo::Point;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Angle of the vector from `a` to `b` in radians, in `(-π, π]`.
///
/// A segment drawn to the right is `0`. Since canvas y grows downwards, a
/// segment drawn straight down is `π/2`.
pub fn angle(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Snap a point to the nearest grid intersection.
///
/// Each axis is rounded to the nearest multiple of `spacing`. Exact halves
/// round towards the lower multiple. `spacing` must be positive; use
/// [`try_snap_to_grid`] when it comes from untrusted input.
pub fn snap_to_grid(point: Point, spacing: f64) -> Point {
    debug_assert!(spacing > 0.0, "grid spacing must be positive");
    Point::new(snap_axis(point.x, spacing), snap_axis(point.y, spacing))
}

/// Checked variant of [`snap_to_grid`].
pub fn try_snap_to_grid(point: Point, spacing: f64) -> Result<Point, ConfigError> {
    check_spacing(spacing)?;
    Ok(snap_to_grid(point, spacing))
}

/// Reject spacings that would divide by zero or produce endless grids.
pub(crate) fn check_spacing(spacing: f64) -> Result<(), ConfigError> {
    if spacing.is_finite() && spacing > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidGridSpacing(spacing))
    }
}

fn snap_axis(value: f64, spacing: f64) -> f64 {
    // `%` on f64 truncates toward zero, so negative values keep their sign.
    let mut remainder = value % spacing;
    if remainder > spacing / 2.0 {
        remainder -= spacing;
    }
    value - remainder
}
