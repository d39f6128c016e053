//! Sketchpad Core Library
//!
//! Platform-agnostic drawing core: turns pointer samples into shape
//! geometry and keeps the undo/redo history of a single canvas.

pub mod canvas;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod shapes;
pub mod snap;
pub mod tools;

pub use canvas::{Canvas, GestureState, PointerOutcome};
pub use geometry::{angle, distance, snap_to_grid, try_snap_to_grid};
pub use grid::{MAX_GRID_LINES, grid_lines, grid_path};
pub use input::PointerEvent;
pub use shapes::{Drawing, DrawingId, SerializableColor, ShapeKind, StrokePiece};
pub use snap::{SnapMode, SnapResult, snap_point};
pub use tools::{ColorChoice, ConfigError, ToolSettings};
