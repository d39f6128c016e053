//! Pointer events forwarded by the host UI.

use crate::canvas::{Canvas, PointerOutcome};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in canvas-local coordinates.
///
/// Touch and mouse input both map onto these three phases.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "lowercase")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn down(x: f64, y: f64) -> Self {
        PointerEvent::Down { position: Point::new(x, y) }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        PointerEvent::Move { position: Point::new(x, y) }
    }

    pub fn up(x: f64, y: f64) -> Self {
        PointerEvent::Up { position: Point::new(x, y) }
    }

    /// Position carried by the event.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => position,
        }
    }
}

impl Canvas {
    /// Dispatch a pointer event to the matching gesture handler.
    ///
    /// Returns the capture outcome for down and move events, `None` for up.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<PointerOutcome> {
        match event {
            PointerEvent::Down { position } => Some(self.pointer_down(position)),
            PointerEvent::Move { position } => Some(self.pointer_move(position)),
            PointerEvent::Up { position } => {
                self.pointer_up(position);
                None
            }
        }
    }
}
