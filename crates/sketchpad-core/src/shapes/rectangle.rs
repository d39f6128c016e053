//! Rectangle and rounded rectangle geometry.

use super::PATH_TOLERANCE;
use kurbo::{BezPath, Point, Rect, RoundedRect, Shape as KurboShape};

/// Rectangle spanned by two opposite corners, given in any order.
pub fn rect_path(first: Point, second: Point) -> BezPath {
    Rect::from_points(first, second).to_path(PATH_TOLERANCE)
}

/// Rounded rectangle spanned by two opposite corners.
///
/// The radius applies to both axes of every corner and is clamped to half
/// of the shorter side.
pub fn rounded_rect_path(first: Point, second: Point, corner_radius: f64) -> BezPath {
    let rect = Rect::from_points(first, second);
    if corner_radius > 0.0 {
        RoundedRect::from_rect(rect, corner_radius).to_path(PATH_TOLERANCE)
    } else {
        rect.to_path(PATH_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rect(rect: Rect, x0: f64, y0: f64, x1: f64, y1: f64) {
        assert!((rect.x0 - x0).abs() < 1e-6);
        assert!((rect.y0 - y0).abs() < 1e-6);
        assert!((rect.x1 - x1).abs() < 1e-6);
        assert!((rect.y1 - y1).abs() < 1e-6);
    }

    #[test]
    fn test_corner_order_does_not_matter() {
        let forward = rect_path(Point::new(10.0, 20.0), Point::new(60.0, 80.0));
        let backward = rect_path(Point::new(60.0, 80.0), Point::new(10.0, 20.0));
        assert_rect(forward.bounding_box(), 10.0, 20.0, 60.0, 80.0);
        assert_rect(backward.bounding_box(), 10.0, 20.0, 60.0, 80.0);
        assert!((forward.area().abs() - 3000.0).abs() < 1e-6);
    }

    #[test]
    fn test_mixed_sign_extent() {
        let path = rect_path(Point::new(50.0, 10.0), Point::new(20.0, 40.0));
        assert_rect(path.bounding_box(), 20.0, 10.0, 50.0, 40.0);
    }

    #[test]
    fn test_rounded_corners_remove_area() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 50.0);
        let sharp = rect_path(a, b).area().abs();
        let rounded = rounded_rect_path(a, b, 10.0).area().abs();
        // Each corner loses r^2 - pi*r^2/4
        let expected = sharp - 4.0 * (100.0 - std::f64::consts::PI * 25.0);
        assert!((rounded - expected).abs() < 1.0);
        assert!(!rounded_rect_path(a, b, 10.0).contains(Point::new(0.5, 0.5)));
    }

    #[test]
    fn test_zero_radius_is_sharp() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(30.0, 30.0);
        assert!((rounded_rect_path(a, b, 0.0).area().abs() - 900.0).abs() < 1e-6);
    }
}
