//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use sketchpad_core::canvas::Canvas;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid render size: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Grid display style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridStyle {
    /// No grid (plain background).
    #[default]
    None,
    /// Full grid lines.
    Lines,
}

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a Canvas,
    /// Area to paint, in canvas units.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Background color.
    pub background_color: Color,
    /// Grid display style.
    pub grid_style: GridStyle,
    /// Grid line color.
    pub grid_color: Color,
    /// Grid line width in canvas units.
    pub grid_line_width: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a Canvas, viewport_size: Size) -> Self {
        Self {
            canvas,
            viewport_size,
            scale_factor: 1.0,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            grid_style: GridStyle::None,
            grid_color: Color::from_rgba8(128, 128, 128, 255),
            grid_line_width: 1.0,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the grid style.
    pub fn with_grid(mut self, style: GridStyle) -> Self {
        self.grid_style = style;
        self
    }

    /// Size of the output in physical pixels.
    pub fn pixel_size(&self) -> RenderResult<(u32, u32)> {
        let width = (self.viewport_size.width * self.scale_factor).ceil();
        let height = (self.viewport_size.height * self.scale_factor).ceil();
        let valid = |v: f64| v.is_finite() && v >= 1.0 && v <= u32::MAX as f64;
        if !(valid(width) && valid(height)) {
            return Err(RendererError::InvalidSize { width, height });
        }
        Ok((width as u32, height as u32))
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Paint one frame: background, every drawing in history order, then
    /// the grid overlay if enabled.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_size_scales() {
        let canvas = Canvas::new();
        let ctx = RenderContext::new(&canvas, Size::new(100.5, 40.0)).with_scale_factor(2.0);
        assert_eq!(ctx.pixel_size().unwrap(), (201, 80));
    }

    #[test]
    fn test_pixel_size_rejects_empty() {
        let canvas = Canvas::new();
        let ctx = RenderContext::new(&canvas, Size::new(0.0, 40.0));
        assert!(matches!(ctx.pixel_size(), Err(RendererError::InvalidSize { .. })));
    }
}
