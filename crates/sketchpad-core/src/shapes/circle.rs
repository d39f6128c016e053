//! Circle geometry.

use super::PATH_TOLERANCE;
use crate::geometry::distance;
use kurbo::{BezPath, Circle, Point, Shape as KurboShape};

/// Circle centered on `center` passing through `rim`.
pub fn circle_path(center: Point, rim: Point) -> BezPath {
    Circle::new(center, distance(center, rim)).to_path(PATH_TOLERANCE)
}
