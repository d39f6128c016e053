//! Recorded pointer sessions.

use serde::{Deserialize, Serialize};
use sketchpad_core::{Canvas, ConfigError, PointerEvent, PointerOutcome, ToolSettings};

/// One recorded user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// A pointer sample.
    Pointer(PointerEvent),
    /// New picker/slider values.
    Settings(ToolSettings),
    Undo,
    Redo,
    Clear,
}

/// A canvas size plus the actions performed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub width: f64,
    pub height: f64,
    /// Settings in effect before the first step.
    #[serde(default)]
    pub settings: ToolSettings,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// Counters gathered while replaying.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub recorded: usize,
    pub rejected: usize,
    pub undone: usize,
    pub redone: usize,
}

impl Session {
    /// Parse a session from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replay every step on a fresh canvas.
    pub fn replay(&self) -> Result<(Canvas, ReplayStats), ConfigError> {
        let mut canvas = Canvas::with_size(self.width, self.height);
        canvas.set_settings(self.settings.clone())?;

        let mut stats = ReplayStats::default();
        for step in &self.steps {
            match step {
                Step::Pointer(event) => match canvas.handle_pointer(*event) {
                    Some(PointerOutcome::Recorded(_)) => stats.recorded += 1,
                    Some(PointerOutcome::Rejected) => stats.rejected += 1,
                    None => {}
                },
                Step::Settings(settings) => canvas.set_settings(settings.clone())?,
                Step::Undo => stats.undone += usize::from(canvas.undo()),
                Step::Redo => stats.redone += usize::from(canvas.redo()),
                Step::Clear => canvas.clear(),
            }
        }
        Ok((canvas, stats))
    }
}
