//! Sketchpad Render Library
//!
//! Renderer abstraction and implementations for Sketchpad.
//! The default implementation rasterizes on the CPU with tiny-skia.

mod renderer;
mod skia_impl;

pub use renderer::{GridStyle, RenderContext, RenderResult, Renderer, RendererError};
pub use skia_impl::{RenderedImage, SkiaRenderer, encode_png, snapshot};
