//! Rasterization of whole canvases.

use kurbo::Size;
use sketchpad_core::{Canvas, ColorChoice, PointerEvent, ShapeKind, ToolSettings};
use sketchpad_render::{GridStyle, RenderContext, Renderer, SkiaRenderer, snapshot};

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn draw(canvas: &mut Canvas, settings: ToolSettings, points: &[(f64, f64)]) {
    canvas.set_settings(settings).unwrap();
    let (first, rest) = points.split_first().unwrap();
    canvas.handle_pointer(PointerEvent::down(first.0, first.1));
    for &(x, y) in rest {
        canvas.handle_pointer(PointerEvent::moved(x, y));
    }
    canvas.handle_pointer(PointerEvent::up(0.0, 0.0));
}

#[test]
fn test_rectangle_is_filled_with_its_color() {
    let mut canvas = Canvas::with_size(100.0, 100.0);
    draw(
        &mut canvas,
        ToolSettings::new()
            .with_shape(ShapeKind::Rectangle)
            .with_color(ColorChoice::Red),
        &[(60.0, 60.0), (20.0, 20.0)],
    );

    let image = snapshot(&canvas, 1.0).unwrap();
    let red = ColorChoice::Red.color();
    assert_eq!(image.pixel(40, 40), Some([red.r, red.g, red.b, 255]));
    assert_eq!(image.pixel(10, 10), Some(WHITE));
    assert_eq!(image.pixel(70, 40), Some(WHITE));
}

#[test]
fn test_line_is_thick_and_round_capped() {
    let mut canvas = Canvas::with_size(100.0, 100.0);
    draw(
        &mut canvas,
        ToolSettings::new().with_stroke_width(10.0),
        &[(20.0, 50.0), (80.0, 50.0)],
    );

    let image = snapshot(&canvas, 1.0).unwrap();
    assert_eq!(image.pixel(50, 52), Some([0, 0, 0, 255]));
    assert_eq!(image.pixel(16, 50), Some([0, 0, 0, 255]));
    assert_eq!(image.pixel(50, 60), Some(WHITE));
    // Corners of the bounding square lie outside the round cap.
    assert_eq!(image.pixel(15, 45), Some(WHITE));
}

#[test]
fn test_later_drawings_paint_over_earlier_ones() {
    let mut canvas = Canvas::with_size(100.0, 100.0);
    draw(
        &mut canvas,
        ToolSettings::new()
            .with_shape(ShapeKind::Rectangle)
            .with_color(ColorChoice::Blue),
        &[(10.0, 10.0), (90.0, 90.0)],
    );
    draw(
        &mut canvas,
        ToolSettings::new()
            .with_shape(ShapeKind::Circle)
            .with_color(ColorChoice::Yellow),
        &[(50.0, 50.0), (60.0, 50.0)],
    );

    let image = snapshot(&canvas, 1.0).unwrap();
    let yellow = ColorChoice::Yellow.color();
    let blue = ColorChoice::Blue.color();
    assert_eq!(image.pixel(50, 50), Some([yellow.r, yellow.g, yellow.b, 255]));
    assert_eq!(image.pixel(20, 20), Some([blue.r, blue.g, blue.b, 255]));
}

#[test]
fn test_undone_drawing_is_not_rendered() {
    let mut canvas = Canvas::with_size(50.0, 50.0);
    draw(
        &mut canvas,
        ToolSettings::new().with_shape(ShapeKind::Rectangle),
        &[(0.0, 0.0), (40.0, 40.0)],
    );
    canvas.undo();
    let image = snapshot(&canvas, 1.0).unwrap();
    assert!(image.rgba_data.iter().all(|&b| b == 255));
}

#[test]
fn test_grid_only_when_enabled() {
    let canvas = Canvas::with_size(40.0, 40.0);

    let ctx = RenderContext::new(&canvas, Size::new(40.0, 40.0)).with_grid(GridStyle::Lines);
    let mut renderer = SkiaRenderer::for_context(&ctx).unwrap();
    renderer.build_scene(&ctx);
    let with_grid = renderer.image();
    // Grid lines at x = 10 cover the pixel columns next to it.
    assert_ne!(with_grid.pixel(9, 5), Some(WHITE));
    assert_eq!(with_grid.pixel(5, 5), Some(WHITE));

    // Snapshots always hide the grid.
    let shared = snapshot(&canvas, 1.0).unwrap();
    assert_eq!(shared.pixel(9, 5), Some(WHITE));
}

#[test]
fn test_snapshot_scale_factor() {
    let canvas = Canvas::with_size(30.0, 20.0);
    let image = snapshot(&canvas, 2.0).unwrap();
    assert_eq!((image.width, image.height), (60, 40));
}

#[test]
fn test_grid_with_tiny_spacing_is_skipped() {
    let mut canvas = Canvas::with_size(40.0, 40.0);
    canvas
        .set_settings(ToolSettings::new().with_grid_spacing(1e-300))
        .unwrap();

    let ctx = RenderContext::new(&canvas, Size::new(40.0, 40.0)).with_grid(GridStyle::Lines);
    let mut renderer = SkiaRenderer::for_context(&ctx).unwrap();
    renderer.build_scene(&ctx);
    assert!(renderer.image().rgba_data.iter().all(|&b| b == 255));
}
