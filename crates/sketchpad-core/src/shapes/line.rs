//! Thick polyline geometry for Line drawings.
//!
//! A stroke is built from filled pieces rather than a stroked centerline:
//! a round cap at every captured point, joined by rectangles rotated onto
//! each segment. All pieces share one path and one winding direction, so a
//! non-zero fill shows no seams where they overlap.

use super::PATH_TOLERANCE;
use crate::geometry::{angle, distance};
use kurbo::{Affine, BezPath, Circle, Point, Rect, Shape as KurboShape};

/// One filled piece of a thick polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokePiece {
    /// Round joint centered on a captured point, diameter = stroke width.
    Cap(Circle),
    /// Rectangle covering one segment.
    Segment {
        /// Segment start; the rectangle is rotated about this point.
        origin: Point,
        /// Distance from the segment start to its end.
        length: f64,
        /// Stroke width (rectangle height).
        width: f64,
        /// Rotation of the segment in radians.
        angle: f64,
    },
}

impl StrokePiece {
    /// Path for this piece in canvas coordinates.
    pub fn to_path(&self) -> BezPath {
        match *self {
            StrokePiece::Cap(circle) => circle.to_path(PATH_TOLERANCE),
            StrokePiece::Segment {
                origin,
                length,
                width,
                angle,
            } => {
                // Unrotated rectangle sits on the x axis, centered vertically.
                let rect = Rect::new(0.0, -width / 2.0, length, width / 2.0);
                let transform = Affine::translate(origin.to_vec2()) * Affine::rotate(angle);
                transform * rect.to_path(PATH_TOLERANCE)
            }
        }
    }
}

/// Break a polyline into caps and segment rectangles.
///
/// Caps come first (one per point), then one segment per consecutive pair.
/// Fewer than two points yield no pieces.
pub fn stroke_pieces(points: &[Point], width: f64) -> Vec<StrokePiece> {
    if points.len() < 2 {
        return Vec::new();
    }

    let radius = width / 2.0;
    let mut pieces: Vec<StrokePiece> = points
        .iter()
        .map(|&p| StrokePiece::Cap(Circle::new(p, radius)))
        .collect();

    pieces.extend(points.windows(2).map(|w| StrokePiece::Segment {
        origin: w[0],
        length: distance(w[0], w[1]),
        width,
        angle: angle(w[0], w[1]),
    }));

    pieces
}

/// Combined fill path for a round-capped thick polyline.
pub fn line_path(points: &[Point], width: f64) -> BezPath {
    let mut path = BezPath::new();
    for piece in stroke_pieces(points, width) {
        path.extend(piece.to_path().elements().iter().copied());
    }
    path
}
