//! Sketchpad Application
//!
//! Headless shell around the drawing core: replays a recorded pointer
//! session through the canvas and writes the shared PNG.

mod app;
mod session;

pub use app::{AppConfig, AppError, run};
pub use session::{ReplayStats, Session, Step};
