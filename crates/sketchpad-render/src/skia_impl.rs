//! tiny-skia based renderer producing the shareable canvas image.

use crate::renderer::{GridStyle, RenderContext, RenderResult, Renderer, RendererError};
use kurbo::{BezPath, PathEl};
use peniko::Color;
use sketchpad_core::canvas::Canvas;
use sketchpad_core::grid::grid_path;
use sketchpad_core::shapes::SerializableColor;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// Rendered image data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    /// RGBA pixel data (4 bytes per pixel, straight alpha).
    pub rgba_data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl RenderedImage {
    /// RGBA value at pixel `(x, y)`, if inside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        let px = self.rgba_data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// CPU renderer backed by a tiny-skia pixmap.
pub struct SkiaRenderer {
    pixmap: Pixmap,
}

impl SkiaRenderer {
    /// Create a renderer with an output of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(RendererError::InvalidSize {
            width: width as f64,
            height: height as f64,
        })?;
        Ok(Self { pixmap })
    }

    /// Create a renderer sized for `ctx`.
    pub fn for_context(ctx: &RenderContext) -> RenderResult<Self> {
        let (width, height) = ctx.pixel_size()?;
        Self::new(width, height)
    }

    /// Copy out the current frame.
    pub fn image(&self) -> RenderedImage {
        let rgba_data = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RenderedImage {
            rgba_data,
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        }
    }

    fn render_drawings(&mut self, canvas: &Canvas, transform: Transform) {
        for (drawing, path) in canvas.paths() {
            let Some(path) = to_skia_path(&path) else {
                continue;
            };
            let paint = solid_paint(drawing.color);
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
    }

    fn render_grid(&mut self, ctx: &RenderContext, transform: Transform) {
        let spacing = ctx.canvas.settings().grid_spacing;
        let grid = match grid_path(ctx.viewport_size, spacing) {
            Ok(grid) => grid,
            Err(e) => {
                log::warn!("Skipping grid overlay: {}", e);
                return;
            }
        };
        let Some(path) = to_skia_path(&grid) else {
            return;
        };
        let paint = solid_paint(ctx.grid_color.into());
        let stroke = Stroke {
            width: ctx.grid_line_width as f32,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }
}

impl Renderer for SkiaRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        let background = SerializableColor::from(self.background_color(ctx));
        self.pixmap.fill(tiny_skia::Color::from_rgba8(
            background.r,
            background.g,
            background.b,
            background.a,
        ));

        let scale = ctx.scale_factor as f32;
        let transform = Transform::from_scale(scale, scale);

        self.render_drawings(ctx.canvas, transform);
        if ctx.grid_style == GridStyle::Lines {
            self.render_grid(ctx, transform);
        }
    }
}

fn solid_paint(color: SerializableColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Convert a kurbo path into a tiny-skia path. `None` for empty paths.
fn to_skia_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

/// Render the canvas for sharing.
///
/// The grid overlay is always hidden in the shared image.
pub fn snapshot(canvas: &Canvas, scale_factor: f64) -> RenderResult<RenderedImage> {
    let ctx = RenderContext::new(canvas, canvas.viewport_size)
        .with_scale_factor(scale_factor)
        .with_background(Color::from_rgba8(255, 255, 255, 255))
        .with_grid(GridStyle::None);
    let mut renderer = SkiaRenderer::for_context(&ctx)?;
    renderer.build_scene(&ctx);
    let image = renderer.image();
    log::debug!(
        "Rendered snapshot {}x{} ({} drawings)",
        image.width,
        image.height,
        canvas.completed().len()
    );
    Ok(image)
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RenderedImage) -> RenderResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder
            .write_header()
            .map_err(|e| RendererError::Encode(e.to_string()))?;
        writer
            .write_image_data(&image.rgba_data)
            .map_err(|e| RendererError::Encode(e.to_string()))?;
    }
    Ok(png_data)
}
