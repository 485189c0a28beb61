//! Large color regions: split bodies, caps, masks, saddles and girdles.

use super::{PatternOptions, PatternResult};
use crate::color::hex::Rgb;
use crate::color::scheme::ColorScheme;
use crate::foundation::core::PatternArea;
use crate::foundation::error::AquariumResult;
use crate::foundation::math::Num;

const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// Body-sized ellipse clipped by `clip_id`.
fn clipped_body(area: PatternArea, color: Rgb, opacity: f64, clip_id: &str) -> String {
    format!(
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{color}" opacity="{}" clip-path="url(#{clip_id})"/>"#,
        Num(area.cx),
        Num(area.cy),
        Num(area.rx - 1.0),
        Num(area.ry - 1.0),
        Num(opacity)
    )
}

fn clip_rect(id: &str, x: f64, y: f64, width: f64, height: f64) -> String {
    format!(
        r#"<clipPath id="{id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
        Num(x),
        Num(y),
        Num(width),
        Num(height)
    )
}

fn split(
    area: PatternArea,
    opts: &PatternOptions,
    prefix: &str,
    position: f64,
    color: Rgb,
    opacity: f64,
) -> PatternResult {
    let PatternArea { cx, cy, rx, ry } = area;
    let id = format!("{}-clip", opts.resolve_id(prefix));
    let split_x = cx - rx + rx * 2.0 * position;
    PatternResult::WithDefs {
        defs: clip_rect(&id, split_x, cy - ry, rx * 2.0, ry * 2.0),
        elements: clipped_body(area, color, opacity, &id),
    }
}

/// Rear part of the body in a second color.
pub(super) fn bicolor(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let position = opts.f64_or("splitPosition", 0.5)?;
    let color = opts.color_or("splitColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.9)?;
    Ok(split(area, opts, "bicolor", position, color, opacity))
}

/// Rear half in a darkened primary.
pub(super) fn half_dark(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let primary = colors.primary_or(Rgb::new(0x33, 0x33, 0x33))?;
    let position = opts.f64_or("splitPosition", 0.5)?;
    let color = opts.color_or("splitColor", primary.darken(30.0))?;
    let opacity = opts.f64_or("opacity", 0.9)?;
    Ok(split(area, opts, "half-dark", position, color, opacity))
}

pub(super) fn capped(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let accent = colors.accent_or(BLACK)?;
    let color = opts.color_or("capColor", accent)?;
    let height = opts.f64_or("capHeight", 0.35)?;
    let opacity = opts.f64_or("opacity", 0.85)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let id = format!("{}-clip", opts.resolve_id("capped"));
    Ok(PatternResult::WithDefs {
        defs: clip_rect(&id, cx - rx, cy - ry, rx * 2.0, ry * height * 2.0),
        elements: clipped_body(area, color, opacity, &id),
    })
}

pub(super) fn masked(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let accent = colors.accent_or(BLACK)?;
    let color = opts.color_or("maskColor", accent)?;
    let width = opts.f64_or("maskWidth", 0.4)?;
    let height = opts.f64_or("maskHeight", 0.5)?;
    let opacity = opts.f64_or("opacity", 0.85)?;

    let PatternArea { cx, cy, rx, ry } = area;
    Ok(PatternResult::Bare(format!(
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{color}" opacity="{}"/>"#,
        Num(cx + rx * 0.4),
        Num(cy),
        Num(rx * width),
        Num(ry * height),
        Num(opacity)
    )))
}

pub(super) fn saddled(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let accent = colors.accent_or(BLACK)?;
    let color = opts.color_or("saddleColor", accent)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let half = rx * 0.3;
    let (sx, ex) = (cx - half, cx + half);
    let top = cy - ry * 0.8;
    let back = cy - ry + 2.0;
    let d = format!(
        "M{} {} Q{} {} {} {} L{} {} Q{} {} {} {} Z",
        Num(sx),
        Num(top),
        Num(cx),
        Num(cy - ry * 0.2),
        Num(ex),
        Num(top),
        Num(ex),
        Num(back),
        Num(cx),
        Num(cy - ry + 5.0),
        Num(sx),
        Num(back),
    );
    Ok(PatternResult::Bare(format!(
        r#"<path d="{d}" fill="{color}" opacity="{}"/>"#,
        Num(opacity)
    )))
}

/// Vertical belt across the middle of the body, outlined on both sides.
pub(super) fn girdled(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(BLACK)?;
    let color = opts.color_or("girdleColor", secondary)?;
    let width = opts.f64_or("girdleWidth", 0.3)?;
    let border_color = opts.color_or("borderColor", accent)?;
    let border = opts.f64_or("borderWidth", 1.5)?;
    let opacity = opts.f64_or("opacity", 0.9)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let half = rx * width;
    let (y, h) = (cy - ry + 3.0, ry * 2.0 - 6.0);
    Ok(PatternResult::Bare(format!(
        concat!(
            r#"<rect x="{bx}" y="{y}" width="{bw}" height="{h}" fill="{border_color}" opacity="{o}" rx="2"/>"#,
            r#"<rect x="{ix}" y="{y}" width="{iw}" height="{h}" fill="{color}" opacity="{o}" rx="1"/>"#,
        ),
        bx = Num(cx - half - border),
        bw = Num(half * 2.0 + border * 2.0),
        ix = Num(cx - half),
        iw = Num(half * 2.0),
        y = Num(y),
        h = Num(h),
        o = Num(opacity),
        border_color = border_color,
        color = color,
    )))
}

/// Round spot with a tapering slot below it.
pub(super) fn keyhole(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let accent = colors.accent_or(BLACK)?;
    let color = opts.color_or("keyholeColor", accent)?;
    let opacity = opts.f64_or("opacity", 0.85)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let (kx, ky) = (cx - rx * 0.1, cy - ry * 0.2);
    let r = ry * 0.25;
    let d = format!(
        "M{} {} L{} {} L{} {} L{} {} Z",
        Num(kx - r * 0.4),
        Num(ky + r * 0.5),
        Num(kx - r * 0.25),
        Num(ky + r * 2.0),
        Num(kx + r * 0.25),
        Num(ky + r * 2.0),
        Num(kx + r * 0.4),
        Num(ky + r * 0.5),
    );
    Ok(PatternResult::Bare(format!(
        concat!(
            r#"<circle cx="{x}" cy="{y}" r="{r}" fill="{color}" opacity="{o}"/>"#,
            r#"<path d="{d}" fill="{color}" opacity="{o}"/>"#,
        ),
        x = Num(kx),
        y = Num(ky),
        r = Num(r),
        d = d,
        color = color,
        o = Num(opacity),
    )))
}
