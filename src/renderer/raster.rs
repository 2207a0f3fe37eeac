//! CPU rasterization of SVG output through resvg.

use std::path::Path;

use image::{Rgba, RgbaImage};
use thiserror::Error;

use super::{to_svg, PaintContext};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to parse SVG: {0}")]
    Svg(#[from] resvg::usvg::Error),
    #[error("Cannot allocate a {width}x{height} pixmap")]
    InvalidSize { width: u32, height: u32 },
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Rasterize an SVG document at `scale` physical pixels per logical pixel.
///
/// The result is straight (non-premultiplied) RGBA on a transparent background.
pub fn rasterize(svg: &str, scale: f32) -> Result<RgbaImage, RenderError> {
    let tree = resvg::usvg::Tree::from_str(svg, &resvg::usvg::Options::default())?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or(RenderError::InvalidSize { width, height })?;

    let transform = resvg::tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let mut image = RgbaImage::new(width, height);
    for (src, dst) in pixmap.pixels().iter().zip(image.pixels_mut()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    log::debug!("Rasterized {}x{} SVG at scale {}", width, height, scale);
    Ok(image)
}

/// Serialize and rasterize a painted frame in one step
pub fn render_to_image(
    ctx: &PaintContext,
    width: f32,
    height: f32,
    scale: f32,
) -> Result<RgbaImage, RenderError> {
    rasterize(&to_svg(ctx, width, height), scale)
}

/// Render a painted frame and write it as PNG
pub fn save_png(
    ctx: &PaintContext,
    width: f32,
    height: f32,
    scale: f32,
    path: &Path,
) -> Result<(), RenderError> {
    render_to_image(ctx, width, height, scale)?.save(path)?;
    Ok(())
}
