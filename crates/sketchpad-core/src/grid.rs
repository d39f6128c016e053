//! Grid overlay geometry.

use crate::geometry::check_spacing;
use crate::tools::ConfigError;
use kurbo::{BezPath, Line, Point, Size};

/// Upper bound on the number of lines in one grid.
pub const MAX_GRID_LINES: usize = 100_000;

/// Guide lines for a canvas of `size`, spaced `spacing` apart.
///
/// Horizontal lines come first, from `y = 0` down to the last multiple of
/// `spacing` that fits, each spanning the full width. Vertical lines follow,
/// from `x = 0` rightwards, each spanning the full height.
///
/// A spacing so small that the grid would exceed [`MAX_GRID_LINES`] is
/// rejected with [`ConfigError::InvalidGridSpacing`].
pub fn grid_lines(size: Size, spacing: f64) -> Result<Vec<Line>, ConfigError> {
    check_spacing(spacing)?;

    let (rows, cols) = line_count(size.height, spacing)
        .zip(line_count(size.width, spacing))
        .filter(|(rows, cols)| rows + cols <= MAX_GRID_LINES)
        .ok_or(ConfigError::InvalidGridSpacing(spacing))?;
    let mut lines = Vec::with_capacity(rows + cols);

    for k in 0..rows {
        let y = k as f64 * spacing;
        lines.push(Line::new(Point::new(0.0, y), Point::new(size.width, y)));
    }
    for k in 0..cols {
        let x = k as f64 * spacing;
        lines.push(Line::new(Point::new(x, 0.0), Point::new(x, size.height)));
    }

    Ok(lines)
}

/// All grid lines batched into a single path (one stroke call).
pub fn grid_path(size: Size, spacing: f64) -> Result<BezPath, ConfigError> {
    let mut path = BezPath::new();
    for line in grid_lines(size, spacing)? {
        path.move_to(line.p0);
        path.line_to(line.p1);
    }
    Ok(path)
}

/// Number of lines for one axis: `k` runs over `0..=floor(extent / spacing)`.
/// `None` when the count would not fit under [`MAX_GRID_LINES`].
fn line_count(extent: f64, spacing: f64) -> Option<usize> {
    if extent < 0.0 || !extent.is_finite() {
        return Some(0);
    }
    let steps = (extent / spacing).floor();
    if steps < MAX_GRID_LINES as f64 {
        Some(steps as usize + 1)
    } else {
        None
    }
}
