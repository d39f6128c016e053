//! Command-line configuration and the replay-and-share pipeline.

use crate::session::Session;
use clap::Parser;
use sketchpad_core::ConfigError;
use sketchpad_render::{RendererError, encode_png, snapshot};
use std::path::PathBuf;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid session file: {0}")]
    Session(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Render error: {0}")]
    Render(#[from] RendererError),
}

/// Replay a recorded drawing session and export the shared image.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "sketchpad")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay a recorded drawing session and export it as PNG", long_about = None)]
pub struct AppConfig {
    /// Recorded session to replay (JSON)
    pub session_path: PathBuf,

    /// Output PNG [default: session path with a .png extension]
    pub output: Option<PathBuf>,

    /// Device pixel ratio of the exported image
    #[arg(long = "scale", default_value_t = 1.0, value_parser = parse_scale_factor)]
    pub scale_factor: f64,
}

impl AppConfig {
    /// Create a configuration writing next to the session file.
    pub fn new(session_path: impl Into<PathBuf>) -> Self {
        Self {
            session_path: session_path.into(),
            output: None,
            scale_factor: 1.0,
        }
    }

    /// Where the shared PNG is written.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.session_path.with_extension("png"))
    }
}

fn parse_scale_factor(value: &str) -> Result<f64, String> {
    let scale: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err("scale factor must be positive".to_string())
    }
}

/// Replay the session and write the shared image.
pub fn run(config: &AppConfig) -> Result<(), AppError> {
    let json = std::fs::read_to_string(&config.session_path)?;
    let session = Session::from_json(&json)?;
    log::info!(
        "Loaded session from {:?} ({} steps)",
        config.session_path,
        session.steps.len()
    );

    let (canvas, stats) = session.replay()?;
    log::info!(
        "Replayed session: {} drawings, {} points recorded, {} rejected, {} undone, {} redone",
        canvas.completed().len(),
        stats.recorded,
        stats.rejected,
        stats.undone,
        stats.redone
    );

    let image = snapshot(&canvas, config.scale_factor)?;
    let png_data = encode_png(&image)?;
    let output_path = config.output_path();
    std::fs::write(&output_path, &png_data)?;
    log::info!(
        "Exported PNG to: {:?} ({}x{})",
        output_path,
        image.width,
        image.height
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let config = AppConfig::try_parse_from(["sketchpad", "drawing.json"]).unwrap();
        assert_eq!(config, AppConfig::new("drawing.json"));
        assert_eq!(config.output_path(), PathBuf::from("drawing.png"));
        assert!((config.scale_factor - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_args_full() {
        let config =
            AppConfig::try_parse_from(["sketchpad", "--scale", "2", "in.json", "out/share.png"])
                .unwrap();
        assert_eq!(config.output_path(), PathBuf::from("out/share.png"));
        assert!((config.scale_factor - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_args_errors() {
        assert!(AppConfig::try_parse_from(["sketchpad"]).is_err());
        assert!(AppConfig::try_parse_from(["sketchpad", "a.json", "--scale"]).is_err());
        assert!(AppConfig::try_parse_from(["sketchpad", "a.json", "--scale", "0"]).is_err());
        assert!(AppConfig::try_parse_from(["sketchpad", "a.json", "--scale", "x"]).is_err());
        assert!(AppConfig::try_parse_from(["sketchpad", "a.json", "--verbose"]).is_err());
        assert!(AppConfig::try_parse_from(["sketchpad", "a.json", "b.png", "c"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        AppConfig::command().debug_assert();
    }

    #[test]
    fn test_run_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");
        std::fs::write(
            &session_path,
            r#"{
                "width": 64,
                "height": 48,
                "steps": [
                    { "pointer": { "phase": "down", "position": { "x": 4, "y": 4 } } },
                    { "pointer": { "phase": "move", "position": { "x": 40, "y": 30 } } },
                    { "pointer": { "phase": "up", "position": { "x": 40, "y": 30 } } }
                ]
            }"#,
        )
        .unwrap();

        let config = AppConfig::new(&session_path);
        run(&config).unwrap();

        let png = std::fs::read(dir.path().join("session.png")).unwrap();
        assert_eq!(&png[1..4], b"PNG");
    }

    #[test]
    fn test_run_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("broken.json");
        std::fs::write(&session_path, "{ not json").unwrap();
        assert!(matches!(
            run(&AppConfig::new(&session_path)),
            Err(AppError::Session(_))
        ));
    }

    #[test]
    fn test_run_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::new(dir.path().join("missing.json"));
        assert!(matches!(run(&config), Err(AppError::Io(_))));
    }
}
