//! Canvas controller: gesture state, drawing history and undo/redo.

use crate::shapes::Drawing;
use crate::snap::snap_point;
use crate::tools::{ConfigError, ToolSettings};
use kurbo::{BezPath, Point, Size};

/// Viewport used until the host reports its real size.
pub const DEFAULT_VIEWPORT: Size = Size::new(800.0, 600.0);

/// Gesture state of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No pointer is down; the active drawing is empty.
    #[default]
    Idle,
    /// A gesture is mutating the active drawing.
    Active,
}

/// What happened to a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerOutcome {
    /// The point (after snapping) was recorded in the active drawing.
    Recorded(Point),
    /// The point fell outside the drawable band and was dropped.
    Rejected,
}

/// The drawing canvas.
///
/// Finished drawings live in `completed`; the drawing under the pointer is
/// kept apart in `active`, so undo and redo never touch an in-progress
/// stroke. Seen from outside, the history is `completed` followed by
/// `active`.
#[derive(Debug, Clone)]
pub struct Canvas {
    completed: Vec<Drawing>,
    active: Drawing,
    redo_stack: Vec<Drawing>,
    settings: ToolSettings,
    state: GestureState,
    /// Canvas size in canvas units.
    pub viewport_size: Size,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    /// Create an empty canvas with default settings.
    pub fn new() -> Self {
        Self {
            completed: Vec::new(),
            active: Drawing::new(),
            redo_stack: Vec::new(),
            settings: ToolSettings::default(),
            state: GestureState::Idle,
            viewport_size: DEFAULT_VIEWPORT,
        }
    }

    /// Create an empty canvas of the given size.
    pub fn with_size(width: f64, height: f64) -> Self {
        let mut canvas = Self::new();
        canvas.set_viewport_size(width, height);
        canvas
    }

    /// Update the canvas size.
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.viewport_size = Size::new(width, height);
    }

    /// Current tool settings.
    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    /// Replace the tool settings.
    ///
    /// Style changes only affect drawings started afterwards. Snapping and
    /// grid spacing apply from the next pointer sample on.
    pub fn set_settings(&mut self, settings: ToolSettings) -> Result<(), ConfigError> {
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    /// Current gesture state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Start a gesture at `point`.
    pub fn pointer_down(&mut self, point: Point) -> PointerOutcome {
        if self.state == GestureState::Active {
            log::debug!("pointer down during active gesture, continuing stroke");
        }
        self.state = GestureState::Active;
        self.capture(point)
    }

    /// Continue the gesture with `point`.
    ///
    /// A move without a preceding down starts the gesture implicitly.
    pub fn pointer_move(&mut self, point: Point) -> PointerOutcome {
        self.state = GestureState::Active;
        self.capture(point)
    }

    /// Finish the gesture.
    ///
    /// The active drawing is committed (even with a single point) and a
    /// fresh empty drawing takes its place. Any redo history is discarded.
    /// The release position itself is not recorded; the last move already
    /// carries it.
    pub fn pointer_up(&mut self, _point: Point) {
        if self.state == GestureState::Idle {
            log::debug!("pointer up without an active gesture, ignoring");
            return;
        }
        self.state = GestureState::Idle;

        let finished = std::mem::take(&mut self.active);
        if finished.is_empty() {
            log::debug!("gesture ended without captured points");
        } else {
            log::debug!(
                "committed {:?} drawing with {} point(s)",
                finished.shape,
                finished.len()
            );
            self.completed.push(finished);
        }
        self.redo_stack.clear();
    }

    fn capture(&mut self, point: Point) -> PointerOutcome {
        if !self.active.is_stamped() {
            self.active.stamp(&self.settings);
        }

        let max_y = self.viewport_size.height - self.settings.stroke_width;
        if !(point.y >= 0.0 && point.y < max_y) {
            return PointerOutcome::Rejected;
        }

        let snap = snap_point(point, self.settings.snap_mode, self.settings.grid_spacing);
        let point = snap.point;
        // Samples between grid intersections snap onto the same point.
        let repeated = snap.snapped
            && self.active.shape.max_points().is_none()
            && self.active.points.last() == Some(&point);
        if !repeated {
            self.active.add_point(point);
        }
        PointerOutcome::Recorded(point)
    }

    /// Undo the most recent committed drawing.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.completed.pop() {
            Some(drawing) => {
                self.redo_stack.push(drawing);
                true
            }
            None => {
                log::debug!("undo requested with empty history");
                false
            }
        }
    }

    /// Redo the last undone drawing.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(drawing) => {
                self.completed.push(drawing);
                true
            }
            None => {
                log::debug!("redo requested with empty redo stack");
                false
            }
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.completed.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Remove every drawing and the redo history.
    pub fn clear(&mut self) {
        self.completed.clear();
        self.redo_stack.clear();
        self.active = Drawing::new();
        self.state = GestureState::Idle;
    }

    /// Committed drawings, oldest first.
    pub fn completed(&self) -> &[Drawing] {
        &self.completed
    }

    /// The drawing being captured (empty while idle).
    pub fn active(&self) -> &Drawing {
        &self.active
    }

    /// Undone drawings; the last element is redone first.
    pub fn redo_stack(&self) -> &[Drawing] {
        &self.redo_stack
    }

    /// Full history in paint order: committed drawings, then the active one.
    pub fn history(&self) -> impl Iterator<Item = &Drawing> {
        self.completed.iter().chain(std::iter::once(&self.active))
    }

    /// Number of entries in [`Canvas::history`].
    pub fn history_len(&self) -> usize {
        self.completed.len() + 1
    }

    /// Drawable entries of the history with their fill paths, in paint order.
    pub fn paths(&self) -> impl Iterator<Item = (&Drawing, BezPath)> {
        self.history()
            .filter(|d| d.is_drawable())
            .map(|d| (d, d.to_path()))
    }

    /// Check if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.completed.is_empty() && self.active.is_empty()
    }
}
