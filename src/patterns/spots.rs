//! Scattered point features: spots, scales, rosettes, flakes and eyespots.
//!
//! Scattered features use [`scatter`] with literal constants per pattern. Changing any constant
//! changes every fish that uses the pattern.

use std::f64::consts::{FRAC_PI_4, TAU};

use super::{PatternOptions, PatternResult};
use crate::color::hex::Rgb;
use crate::color::scheme::ColorScheme;
use crate::foundation::core::{PatternArea, Point};
use crate::foundation::error::AquariumResult;
use crate::foundation::math::{Fixed1, Num, scatter};

const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

pub(super) fn spotted(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let count = opts.count_or("spotCount", 8)?;
    let color = opts.color_or("spotColor", secondary)?;
    let min = opts.f64_or("minSize", 1.5)?;
    let max = opts.f64_or("maxSize", 3.0)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 0.7, 0.3, 2.3, 0.5);
        let p = area.polar(angle, factor);
        let size = min + ((i as f64 * 1.7) % 1.0) * (max - min);
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{color}" opacity="{}"/>"#,
            Fixed1(p.x),
            Fixed1(p.y),
            Num(size),
            Num(opacity)
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn mottled(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(Rgb::new(0xf9, 0x73, 0x16))?;
    let count = opts.count_or("patchCount", 5)?;
    let color = opts.color_or("patchColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 1.1, 0.2, 3.7, 0.5);
        let p = area.polar(angle, factor);
        let rx = 4.0 + (i % 3) as f64 * 2.0;
        let ry = 3.0 + ((i + 1) % 3) as f64 * 1.5;
        out.push_str(&rotated_ellipse(p, rx, ry, i as f64 * 37.0, color, opacity));
    }
    Ok(PatternResult::Bare(out))
}

/// Filled ellipse rotated about its own center, positioned to one decimal.
pub(super) fn rotated_ellipse(
    p: Point,
    rx: f64,
    ry: f64,
    degrees: f64,
    color: Rgb,
    opacity: f64,
) -> String {
    let (x, y) = (Fixed1(p.x), Fixed1(p.y));
    format!(
        r#"<ellipse cx="{x}" cy="{y}" rx="{}" ry="{}" fill="{color}" opacity="{}" transform="rotate({} {x} {y})"/>"#,
        Num(rx),
        Num(ry),
        Num(opacity),
        Num(degrees)
    )
}

pub(super) fn scaled(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let primary = colors.primary_or(Rgb::new(0xff, 0x6b, 0x35))?;
    let rows = opts.count_or("rows", 4)?;
    let per_row = opts.count_or("scalesPerRow", 6)?;
    let color = opts.color_or("scaleColor", primary.lighten(15.0))?;
    let opacity = opts.f64_or("opacity", 0.5)?;
    if rows == 0 || per_row == 0 {
        return Ok(PatternResult::Bare(String::new()));
    }

    let PatternArea { cx, cy, rx, ry } = area;
    let row_height = ry * 1.6 / rows as f64;
    let scale_width = rx * 1.6 / per_row as f64;
    let r = scale_width.min(row_height) * 0.6;

    let mut out = String::new();
    for row in 0..rows {
        let y = cy - ry * 0.8 + row as f64 * row_height;
        let offset = if row % 2 == 0 { 0.0 } else { scale_width / 2.0 };
        for col in 0..per_row {
            let x = cx - rx * 0.8 + col as f64 * scale_width + offset;
            let (nx, ny) = ((x - cx) / rx, (y - cy) / ry);
            if nx * nx + ny * ny >= 0.85 {
                continue;
            }
            out.push_str(&format!(
                r#"<path d="M{} {y} A{} {} 0 0 1 {} {y}" stroke="{color}" stroke-width="1" fill="none" opacity="{}"/>"#,
                Num(x - r),
                Num(r),
                Num(r * 0.8),
                Num(x + r),
                Num(opacity),
                y = Num(y),
            ));
        }
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn pearlscale(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let count = opts.count_or("pearlCount", 12)?;
    let opacity = opts.f64_or("opacity", 0.6)?;
    let id = format!("{}-pearl", opts.resolve_id("pearlscale"));

    let defs = format!(
        concat!(
            r#"<radialGradient id="{id}">"#,
            r##"<stop offset="0%" style="stop-color:#ffffff;stop-opacity:0.9"/>"##,
            r#"<stop offset="50%" style="stop-color:{secondary};stop-opacity:0.6"/>"#,
            r#"<stop offset="100%" style="stop-color:{secondary};stop-opacity:0.2"/>"#,
            "</radialGradient>",
        ),
        id = id,
        secondary = secondary,
    );

    let mut elements = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 0.5, 0.25, 2.1, 0.45);
        let p = area.polar(angle, factor);
        elements.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="url(#{id})" opacity="{}"/>"#,
            Fixed1(p.x),
            Fixed1(p.y),
            2 + i % 3,
            Num(opacity)
        ));
    }
    Ok(PatternResult::WithDefs { defs, elements })
}

pub(super) fn teardrop(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let count = opts.count_or("dropCount", 6)?;
    let color = opts.color_or("dropColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 0.8, 0.3, 2.7, 0.4);
        let Point { x, y } = area.polar(angle, factor);
        let s = 2.0 + (i % 2) as f64;
        let rotation = angle.to_degrees() + 90.0;
        let d = format!(
            "M{} {} Q{} {} {} {} Q{} {} {} {} Q{} {} {} {} Z",
            Num(x),
            Num(y - s * 1.5),
            Num(x + s),
            Num(y - s * 0.5),
            Num(x + s * 0.7),
            Num(y + s * 0.5),
            Num(x),
            Num(y + s),
            Num(x - s * 0.7),
            Num(y + s * 0.5),
            Num(x - s),
            Num(y - s * 0.5),
            Num(x),
            Num(y - s * 1.5),
        );
        out.push_str(&format!(
            r#"<path d="{d}" fill="{color}" opacity="{}" transform="rotate({} {} {})"/>"#,
            Num(opacity),
            Num(rotation),
            Num(x),
            Num(y)
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn leopard(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(Rgb::new(0x8b, 0x45, 0x13))?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("spotCount", 7)?;
    let color = opts.color_or("spotColor", secondary)?;
    let border_color = opts.color_or("borderColor", accent)?;
    let border_width = opts.f64_or("borderWidth", 1.5)?;
    let opacity = opts.f64_or("opacity", 0.85)?;

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 1.3, 0.2, 2.9, 0.5);
        let center = area.polar(angle, factor);
        let size = 4.0 + (i % 3) as f64 * 2.0;
        let wobble = size * 0.3;
        let n = 5 + i % 3;

        // Irregular rosette outline around the center.
        let points: Vec<Point> = (0..n)
            .map(|j| {
                let a = j as f64 / n as f64 * TAU;
                let r = size + (j as f64 * 2.3 + i as f64).sin() * wobble;
                Point::new(center.x + a.cos() * r, center.y + a.sin() * r * 0.8)
            })
            .collect();

        let mut d = format!("M{} {}", Fixed1(points[0].x), Fixed1(points[0].y));
        for (j, pair) in points.windows(2).enumerate() {
            let (prev, curr) = (pair[0], pair[1]);
            let k = (j + 1) as f64 * 1.7;
            let ctrl_x = (prev.x + curr.x) / 2.0 + k.sin() * wobble / 2.0;
            let ctrl_y = (prev.y + curr.y) / 2.0 + k.cos() * wobble / 2.0;
            d.push_str(&format!(
                " Q{} {} {} {}",
                Fixed1(ctrl_x),
                Fixed1(ctrl_y),
                Fixed1(curr.x),
                Fixed1(curr.y)
            ));
        }
        d.push_str(" Z");

        out.push_str(&format!(
            r#"<path d="{d}" fill="none" stroke="{border_color}" stroke-width="{}" opacity="{}"/>"#,
            Num(border_width),
            Num(opacity)
        ));
        out.push_str(&format!(
            r#"<path d="{d}" fill="{color}" opacity="{}"/>"#,
            Num(opacity * 0.7)
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn snowflake(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let count = opts.count_or("flakeCount", 8)?;
    let color = opts.color_or("flakeColor", secondary)?;
    let flake_size = opts.f64_or("flakeSize", 3.0)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 0.9, 0.2, 3.1, 0.5);
        let c = area.polar(angle, factor);
        let size = flake_size + (i % 2) as f64;
        let branch = size * 0.4;

        let mut d = String::new();
        for arm in 0..6 {
            let a = arm as f64 / 6.0 * TAU;
            let end = Point::new(c.x + a.cos() * size, c.y + a.sin() * size);
            let mid = Point::new(c.x + a.cos() * size * 0.6, c.y + a.sin() * size * 0.6);
            let mut segment = |from: Point, to: Point| {
                d.push_str(&format!(
                    "M{} {} L{} {} ",
                    Num(from.x),
                    Num(from.y),
                    Num(to.x),
                    Num(to.y)
                ));
            };
            segment(c, end);
            for b in [a + FRAC_PI_4, a - FRAC_PI_4] {
                segment(
                    mid,
                    Point::new(mid.x + b.cos() * branch, mid.y + b.sin() * branch),
                );
            }
        }

        out.push_str(&format!(
            r#"<path d="{}" stroke="{color}" stroke-width="0.8" fill="none" opacity="{}"/>"#,
            d.trim_end(),
            Num(opacity)
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn cosmic(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(Rgb::new(0xff, 0xd7, 0x00))?;
    let count = opts.count_or("starCount", 15)?;
    let opacity = opts.f64_or("opacity", 0.9)?;

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 1.7, 0.15, 2.3, 0.6);
        let Point { x, y } = area.polar(angle, factor);
        let s = 0.8 + (i % 3) as f64 * 0.5;
        let color = if i % 3 == 0 { accent } else { secondary };
        // Two overlapping diamonds make a four-pointed star.
        let d = format!(
            "M{} {} L{} {} L{} {} L{} {} Z M{} {} L{} {} L{} {} L{} {} Z",
            Num(x),
            Num(y - s),
            Num(x + s * 0.3),
            Num(y),
            Num(x),
            Num(y + s),
            Num(x - s * 0.3),
            Num(y),
            Num(x - s),
            Num(y),
            Num(x),
            Num(y + s * 0.3),
            Num(x + s),
            Num(y),
            Num(x),
            Num(y - s * 0.3),
        );
        out.push_str(&format!(
            r#"<path d="{d}" fill="{color}" opacity="{}"/>"#,
            Num(opacity)
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn eyespot(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let x = opts.f64_or("spotX", area.cx + area.rx * 0.2)?;
    let y = opts.f64_or("spotY", area.cy - area.ry * 0.1)?;
    eyespot_at(colors, area, opts, Point::new(x, y))
}

/// Eyespot moved towards the tail to pass for a second head.
pub(super) fn mimic(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    eyespot_at(
        colors,
        area,
        opts,
        Point::new(area.cx - area.rx * 0.3, area.cy),
    )
}

fn eyespot_at(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
    at: Point,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(BLACK)?;
    let size = opts.f64_or("spotSize", area.min_radius() * 0.35)?;
    let ring = opts.color_or("ringColor", accent)?;
    let inner = opts.color_or("innerColor", secondary)?;
    let pupil = opts.color_or("pupilColor", BLACK)?;
    let opacity = opts.f64_or("opacity", 0.95)?;
    let id = format!("{}-iris", opts.resolve_id("eyespot"));

    let defs = format!(
        concat!(
            r#"<radialGradient id="{id}">"#,
            r#"<stop offset="0%" style="stop-color:{inner};stop-opacity:1"/>"#,
            r#"<stop offset="70%" style="stop-color:{inner};stop-opacity:0.9"/>"#,
            r#"<stop offset="100%" style="stop-color:{ring};stop-opacity:0.8"/>"#,
            "</radialGradient>",
        ),
        id = id,
        inner = inner,
        ring = ring,
    );

    let (x, y) = (Num(at.x), Num(at.y));
    let o = Num(opacity);
    let elements = format!(
        concat!(
            r#"<circle cx="{x}" cy="{y}" r="{outer}" fill="{ring}" opacity="{o}"/>"#,
            r#"<circle cx="{x}" cy="{y}" r="{iris}" fill="url(#{id})" opacity="{o}"/>"#,
            r#"<circle cx="{x}" cy="{y}" r="{pupil_r}" fill="{pupil}" opacity="{o}"/>"#,
            r##"<circle cx="{hx}" cy="{hy}" r="{glint}" fill="#ffffff" opacity="0.8"/>"##,
        ),
        x = x,
        y = y,
        o = o,
        outer = Num(size),
        ring = ring,
        iris = Num(size * 0.75),
        id = id,
        pupil_r = Num(size * 0.3),
        pupil = pupil,
        hx = Num(at.x - size * 0.15),
        hy = Num(at.y - size * 0.15),
        glint = Num(size * 0.12),
    );
    Ok(PatternResult::WithDefs { defs, elements })
}

pub(super) fn target(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(BLACK)?;
    let x = opts.f64_or("targetX", area.cx)?;
    let y = opts.f64_or("targetY", area.cy)?;
    let rings = opts.count_or("rings", 3)?;
    let max = opts.f64_or("maxSize", area.min_radius() * 0.4)?;
    let opacity = opts.f64_or("opacity", 0.85)?;

    let mut out = String::new();
    for i in 0..rings {
        let r = max * (1.0 - i as f64 / rings as f64);
        let color = if i % 2 == 0 { accent } else { secondary };
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{color}" opacity="{}"/>"#,
            Num(x),
            Num(y),
            Num(r),
            Num(opacity)
        ));
    }
    Ok(PatternResult::Bare(out))
}
