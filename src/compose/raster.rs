use std::io::Cursor;

use anyhow::Context;

use crate::foundation::error::{AquariumError, AquariumResult};

/// Largest raster edge accepted by [`rasterize_png`].
pub const MAX_RASTER_DIM: u32 = 8_192;

/// Parse fish markup into a `usvg` tree.
pub fn parse_svg(svg: &str) -> AquariumResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse svg tree")?;
    Ok(tree)
}

/// Rasterize `svg` at `scale` times its intrinsic size and encode it as PNG.
pub fn rasterize_png(svg: &str, scale: f32) -> AquariumResult<Vec<u8>> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(AquariumError::validation(format!(
            "raster scale must be positive, got {scale}"
        )));
    }
    let tree = parse_svg(svg)?;
    let size = tree.size();
    let width = (size.width() * scale).ceil().max(1.0) as u32;
    let height = (size.height() * scale).ceil().max(1.0) as u32;
    if width > MAX_RASTER_DIM || height > MAX_RASTER_DIM {
        return Err(AquariumError::validation(format!(
            "raster size too large: {width}x{height} (max {MAX_RASTER_DIM}x{MAX_RASTER_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| AquariumError::generation("failed to allocate pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(
        width as f32 / size.width(),
        height as f32 / size.height(),
    );
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let rgba = demultiply(pixmap.data());
    let mut png = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut png),
        &rgba,
        width,
        height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    tracing::debug!(width, height, bytes = png.len(), "rasterized fish");
    Ok(png)
}

// tiny-skia stores premultiplied alpha; PNG expects straight alpha.
fn demultiply(premul: &[u8]) -> Vec<u8> {
    let mut out = premul.to_vec();
    for px in out.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    out
}
