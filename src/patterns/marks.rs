//! Free-form markings: swirls, marbling, flames, crowns and other hand-drawn strokes.

use std::f64::consts::{FRAC_PI_4, PI};

use kurbo::Vec2;

use super::spots::rotated_ellipse;
use super::{PatternOptions, PatternResult};
use crate::color::hex::Rgb;
use crate::color::scheme::ColorScheme;
use crate::foundation::core::{PatternArea, Point};
use crate::foundation::error::AquariumResult;
use crate::foundation::math::{Fixed1, Num, scatter};

const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
const GOLD: Rgb = Rgb::new(0xff, 0xd7, 0x00);
const ROYAL_BLUE: Rgb = Rgb::new(0x41, 0x69, 0xe1);

/// Round-capped unfilled stroke.
fn curve(d: &str, color: Rgb, width: f64, opacity: f64) -> String {
    format!(
        r#"<path d="{d}" stroke="{color}" stroke-width="{}" fill="none" opacity="{}" stroke-linecap="round"/>"#,
        Num(width),
        Num(opacity)
    )
}

fn cubic(start: Point, c1: Point, c2: Point, end: Point) -> String {
    format!(
        "M{} {} C{} {} {} {} {} {}",
        Num(start.x),
        Num(start.y),
        Num(c1.x),
        Num(c1.y),
        Num(c2.x),
        Num(c2.y),
        Num(end.x),
        Num(end.y)
    )
}

/// Closed triangle with its apex at `(x, tip)` and base centered on `(x, base)`.
fn spike(x: f64, base: f64, tip: f64, half_width: f64) -> String {
    format!(
        "M{} {} L{} {} L{} {} Z",
        Num(x - half_width),
        Num(base),
        Num(x),
        Num(tip),
        Num(x + half_width),
        Num(base)
    )
}

pub(super) fn swirled(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(Rgb::new(0x3b, 0x82, 0xf6))?;
    let accent = colors.accent_or(Rgb::new(0x22, 0xc5, 0x5e))?;
    let count = opts.count_or("swirlCount", 4)?;
    let width = opts.f64_or("strokeWidth", 2.0)?;
    let opacity = opts.f64_or("opacity", 0.7)?;
    let palette = [secondary, accent, secondary.lighten(20.0)];

    let PatternArea { cx, cy, rx, ry } = area;
    let mut out = String::new();
    for i in 0..count {
        let color = palette[i % palette.len()];
        let start = Point::new(cx - rx * 0.8 + i as f64 * rx * 0.4, cy - ry * 0.6);
        let end = Point::new(start.x + rx * 0.3, cy + ry * 0.6);
        let c1 = Point::new(start.x + rx * 0.4, start.y + ry * 0.3);
        let c2 = Point::new(start.x - rx * 0.2, end.y - ry * 0.3);
        out.push_str(&curve(&cubic(start, c1, c2, end), color, width, opacity));

        // Thinner echo alongside every swirl but the last.
        if i + 1 < count {
            let echo = cubic(
                start + Vec2::new(5.0, 3.0),
                c1 + Vec2::new(3.0, 5.0),
                c2 + Vec2::new(5.0, -3.0),
                end + Vec2::new(3.0, -5.0),
            );
            out.push_str(&curve(
                &echo,
                color.lighten(15.0),
                width * 0.7,
                opacity * 0.6,
            ));
        }
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn marbled(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let primary = colors.primary_or(Rgb::new(0x33, 0x33, 0x33))?;
    let secondary = colors.secondary_or(WHITE)?;
    let count = opts.count_or("swirls", 4)?;
    let opacity = opts.f64_or("opacity", 0.6)?;
    let palette = [secondary, primary.lighten(30.0), secondary];

    let PatternArea { cx, cy, rx, ry } = area;
    let mut out = String::new();
    for i in 0..count {
        let fi = i as f64;
        let start = Point::new(
            cx - rx * 0.6 + fi * rx * 0.35,
            cy - ry * 0.5 + fi.sin() * ry * 0.3,
        );
        let end = Point::new(
            start.x + rx * 0.4 + (fi * 2.0).cos() * rx * 0.2,
            cy + ry * 0.4 + (fi * 1.5).sin() * ry * 0.2,
        );
        let c1 = Point::new(
            start.x + rx * 0.5 + (fi * 3.0).sin() * rx * 0.2,
            start.y + ry * 0.4,
        );
        let c2 = Point::new(
            end.x - rx * 0.3 + (fi * 2.0).cos() * rx * 0.15,
            end.y - ry * 0.3,
        );
        out.push_str(&curve(
            &cubic(start, c1, c2, end),
            palette[i % palette.len()],
            2.0 + (i % 2) as f64,
            opacity,
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn stormy(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let primary = colors.primary_or(Rgb::new(0x33, 0x33, 0x33))?;
    let count = opts.count_or("patchCount", 6)?;
    let opacity = opts.f64_or("opacity", 0.5)?;
    let color = primary.darken(20.0);

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 1.4, 0.2, 2.7, 0.5);
        let rx = 5.0 + (i % 3) as f64 * 3.0;
        let ry = 4.0 + ((i + 1) % 3) as f64 * 2.0;
        out.push_str(&rotated_ellipse(
            area.polar(angle, factor),
            rx,
            ry,
            i as f64 * 41.0,
            color,
            opacity,
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn flurry(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let count = opts.count_or("flakeCount", 20)?;
    let opacity = opts.f64_or("opacity", 0.7)?;

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 2.3, 0.1, 1.9, 0.7);
        let p = area.polar(angle, factor);
        out.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{secondary}" opacity="{}"/>"#,
            Fixed1(p.x),
            Fixed1(p.y),
            Num(1.0 + (i % 3) as f64 * 0.5),
            Num(opacity)
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn scribbled(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(ROYAL_BLUE)?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("lineCount", 5)?;
    let opacity = opts.f64_or("opacity", 0.6)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let mut out = String::new();
    for i in 0..count {
        let fi = i as f64;
        let x = cx - rx * 0.7 + fi * rx * 0.3;
        let y = cy - ry * 0.5 + (fi * 2.0).sin() * ry * 0.3;
        // Every segment is measured from the stroke's start point.
        let mut d = format!("M{} {}", Num(x), Num(y));
        for j in 0..3 + i % 2 {
            let fj = j as f64;
            let nx = x + (fj + 1.0) * rx * 0.2 + (fj * 3.0 + fi).sin() * rx * 0.1;
            let ny = y + (fj * 2.0 + fi).sin() * ry * 0.4;
            let ctrl_x = (x + nx) / 2.0 + (fj * 4.0 + fi).cos() * rx * 0.15;
            let ctrl_y = (y + ny) / 2.0 + (fj * 3.0 + fi).sin() * ry * 0.2;
            d.push_str(&format!(
                " Q{} {} {} {}",
                Fixed1(ctrl_x),
                Fixed1(ctrl_y),
                Fixed1(nx),
                Fixed1(ny)
            ));
        }
        let color = if i % 2 == 0 { secondary } else { accent };
        out.push_str(&curve(&d, color, 1.5, opacity));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn flame(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let primary = colors.primary_or(Rgb::new(0xff, 0x45, 0x00))?;
    let secondary = colors.secondary_or(GOLD)?;
    let accent = colors.accent_or(Rgb::new(0xff, 0x6b, 0x35))?;
    let count = opts.count_or("flameCount", 4)?;
    let opacity = opts.f64_or("opacity", 0.8)?;
    let id = format!("{}-flame", opts.resolve_id("flame"));

    let defs = format!(
        concat!(
            r#"<linearGradient id="{id}" x1="0%" y1="100%" x2="0%" y2="0%">"#,
            r#"<stop offset="0%" style="stop-color:{primary};stop-opacity:{o0}"/>"#,
            r#"<stop offset="50%" style="stop-color:{accent};stop-opacity:{o1}"/>"#,
            r#"<stop offset="100%" style="stop-color:{secondary};stop-opacity:{o2}"/>"#,
            "</linearGradient>",
        ),
        id = id,
        primary = primary,
        accent = accent,
        secondary = secondary,
        o0 = Num(opacity),
        o1 = Num(opacity * 0.8),
        o2 = Num(opacity * 0.6),
    );

    let PatternArea { cx, cy, rx, ry } = area;
    let mut elements = String::new();
    for i in 0..count {
        let odd = (i % 2) as f64;
        let x = cx - rx * 0.5 + i as f64 * rx * 0.35;
        let base = cy + ry * 0.3;
        let tip = cy - ry * 0.4 - odd * ry * 0.2;
        let w = rx * 0.15 + odd * rx * 0.05;
        let d = format!(
            "M{} {} Q{} {} {} {} Q{} {} {} {} Q{} {} {} {} Z",
            Num(x - w),
            Num(base),
            Num(x - w * 0.5),
            Num(cy),
            Num(x),
            Num(tip),
            Num(x + w * 0.5),
            Num(cy),
            Num(x + w),
            Num(base),
            Num(x),
            Num(base + ry * 0.1),
            Num(x - w),
            Num(base),
        );
        elements.push_str(&format!(
            r#"<path d="{d}" fill="url(#{id})" opacity="{}"/>"#,
            Num(opacity)
        ));
    }
    Ok(PatternResult::WithDefs { defs, elements })
}

pub(super) fn ringed(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(ROYAL_BLUE)?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("ringCount", 3)?;
    let color = opts.color_or("ringColor", secondary)?;
    let width = opts.f64_or("ringWidth", 2.0)?;
    let border = opts.bool_or("withBorder", true)?;
    let border_color = opts.color_or("borderColor", accent)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 0.8, 0.25, 2.5, 0.4);
        let p = area.polar(angle, factor);
        let r = 4 + (i % 2) * 2;
        let mut ring = |stroke: Rgb, w: f64| {
            out.push_str(&format!(
                r#"<circle cx="{}" cy="{}" r="{r}" fill="none" stroke="{stroke}" stroke-width="{}" opacity="{}"/>"#,
                Fixed1(p.x),
                Fixed1(p.y),
                Num(w),
                Num(opacity)
            ));
        };
        if border {
            ring(border_color, width + 1.0);
        }
        ring(color, width);
    }
    Ok(PatternResult::Bare(out))
}

/// Thin trailing filaments fanning out over the lower body.
pub(super) fn filaments(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(GOLD)?;
    let count = opts.count_or("filamentCount", 6)?;
    let opacity = opts.f64_or("opacity", 0.7)?;

    let PatternArea { ry, .. } = area;
    let mut out = String::new();
    for i in 0..count {
        let angle = i as f64 / count as f64 * PI + FRAC_PI_4;
        let start = area.polar(angle, 0.6);
        let length = ry * 0.4 + (i % 3) as f64 * ry * 0.15;
        let end = Point::new(
            start.x + angle.cos() * length * 0.3,
            start.y + angle.sin() * length,
        );
        let d = format!(
            "M{} {} Q{} {} {} {}",
            Num(start.x),
            Num(start.y),
            Num((start.x + end.x) / 2.0 + 3.0),
            Num((start.y + end.y) / 2.0),
            Num(end.x),
            Num(end.y)
        );
        let color = if i % 2 == 0 { secondary } else { accent };
        out.push_str(&curve(&d, color, 1.5, opacity));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn crowned(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(GOLD)?;
    let accent = colors.accent_or(ROYAL_BLUE)?;
    let color = opts.color_or("crownColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.85)?;
    let id = format!("{}-crown", opts.resolve_id("crowned"));

    let o = Num(opacity);
    let defs = format!(
        concat!(
            r#"<linearGradient id="{id}" x1="0%" y1="100%" x2="0%" y2="0%">"#,
            r#"<stop offset="0%" style="stop-color:{accent};stop-opacity:{o}"/>"#,
            r#"<stop offset="100%" style="stop-color:{color};stop-opacity:{o}"/>"#,
            "</linearGradient>",
        ),
        id = id,
        accent = accent,
        color = color,
        o = o,
    );

    let PatternArea { cx, cy, rx, ry } = area;
    let base = cy - ry * 0.5;
    let top = cy - ry * 0.9;
    let half = rx * 0.6;
    const POINTS: usize = 5;

    let mut d = format!("M{} {}", Num(cx - half), Num(base));
    for i in 0..=POINTS {
        let x = cx - half + (i as f64 / POINTS as f64) * half * 2.0;
        let y = if i % 2 == 0 { base } else { top };
        d.push_str(&format!(" L{} {}", Num(x), Num(y)));
    }
    d.push_str(&format!(" L{} {} Z", Num(cx + half), Num(base)));

    Ok(PatternResult::WithDefs {
        defs,
        elements: format!(r#"<path d="{d}" fill="url(#{id})" opacity="{o}"/>"#),
    })
}

pub(super) fn fanged(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let accent = colors.accent_or(WHITE)?;
    let count = opts.count_or("fangCount", 4)?;
    let color = opts.color_or("fangColor", accent)?;
    let opacity = opts.f64_or("opacity", 0.85)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let mut out = String::new();
    for i in 0..count {
        let x = cx - rx * 0.4 + i as f64 * rx * 0.25;
        let tip = cy + ry * 0.2 + (i % 2) as f64 * ry * 0.1;
        out.push_str(&format!(
            r#"<path d="{}" fill="{color}" opacity="{}"/>"#,
            spike(x, cy - ry * 0.3, tip, rx * 0.08),
            Num(opacity)
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn angular(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("shapeCount", 3)?;
    let color = opts.color_or("shapeColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let PatternArea { cx, cy, rx, .. } = area;
    let mut out = String::new();
    for i in 0..count {
        let x = cx - rx * 0.4 + i as f64 * rx * 0.35;
        let s = rx * 0.2 + (i % 2) as f64 * rx * 0.1;
        let d = format!(
            "M{} {} L{} {} L{} {} L{} {} Z",
            Num(x),
            Num(cy - s),
            Num(x + s * 0.7),
            Num(cy),
            Num(x),
            Num(cy + s),
            Num(x - s * 0.7),
            Num(cy)
        );
        out.push_str(&format!(
            r#"<path d="{d}" fill="{color}" stroke="{accent}" stroke-width="1" opacity="{}"/>"#,
            Num(opacity)
        ));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn sail(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(ROYAL_BLUE)?;
    let accent = colors.accent_or(BLACK)?;
    let color = opts.color_or("sailColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let base = cy - ry * 0.3;
    let d = format!(
        "M{} {} L{} {} L{} {} Z",
        Num(cx - rx * 0.3),
        Num(base),
        Num(cx + rx * 0.2),
        Num(base),
        Num(cx),
        Num(cy - ry * 0.9)
    );
    Ok(PatternResult::Bare(format!(
        r#"<path d="{d}" fill="{color}" stroke="{accent}" stroke-width="1" opacity="{}"/>"#,
        Num(opacity)
    )))
}

pub(super) fn pyramid(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(GOLD)?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("pyramidCount", 3)?;
    let color = opts.color_or("pyramidColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let mut out = String::new();
    for i in 0..count {
        let x = cx - rx * 0.5 + i as f64 * rx * 0.4;
        let tip = cy - ry * 0.3 - (i % 2) as f64 * ry * 0.1;
        out.push_str(&format!(
            r#"<path d="{}" fill="{color}" stroke="{accent}" stroke-width="0.5" opacity="{}"/>"#,
            spike(x, cy + ry * 0.2, tip, rx * 0.15),
            Num(opacity)
        ));
    }
    Ok(PatternResult::Bare(out))
}

/// Short rotated dashes.
pub(super) fn marked(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(BLACK)?;
    let count = opts.count_or("markCount", 8)?;
    let color = opts.color_or("markColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.6)?;

    let mut out = String::new();
    for i in 0..count {
        let (angle, factor) = scatter(i, count, 0.7, 0.25, 2.1, 0.45);
        let p = area.polar(angle, factor);
        let s = (2 + i % 3) as f64;
        let (x, y) = (Num(p.x), Num(p.y));
        out.push_str(&format!(
            r#"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="{color}" stroke-width="1.5" opacity="{}" transform="rotate({} {x} {y})"/>"#,
            Num(p.x - s),
            Num(p.x + s),
            Num(opacity),
            i * 37
        ));
    }
    Ok(PatternResult::Bare(out))
}
