//! Evenly spaced line work: stripes, bands, bars, lines and chevrons.

use super::{PatternOptions, PatternResult};
use crate::color::hex::Rgb;
use crate::color::scheme::ColorScheme;
use crate::foundation::core::PatternArea;
use crate::foundation::error::AquariumResult;
use crate::foundation::math::Num;

const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
const ROYAL_BLUE: Rgb = Rgb::new(0x41, 0x69, 0xe1);

/// Stroked, unfilled path.
fn stroke(d: &str, color: Rgb, width: f64, opacity: f64) -> String {
    format!(
        r#"<path d="{d}" stroke="{color}" stroke-width="{}" fill="none" opacity="{}"/>"#,
        Num(width),
        Num(opacity)
    )
}

/// Vertical curve through `x` bowing right by `bow`, inset `inset` from the area's top and bottom.
fn vertical(area: PatternArea, x: f64, inset: f64, bow: f64) -> String {
    format!(
        "M{} {} Q{} {} {} {}",
        Num(x),
        Num(area.cy - area.ry + inset),
        Num(x + bow),
        Num(area.cy),
        Num(x),
        Num(area.cy + area.ry - inset),
    )
}

/// Horizontal curve through `y` sagging by `sag`, inset from the area's left and right.
fn horizontal(area: PatternArea, y: f64, inset: f64, sag: f64) -> String {
    format!(
        "M{} {} Q{} {} {} {}",
        Num(area.cx - area.rx + inset),
        Num(y),
        Num(area.cx),
        Num(y + sag),
        Num(area.cx + area.rx - inset),
        Num(y),
    )
}

/// `count` evenly spaced positions strictly inside `[center - radius, center + radius]`.
fn spaced(center: f64, radius: f64, count: usize) -> impl Iterator<Item = f64> {
    let spacing = radius * 2.0 / (count + 1) as f64;
    (1..=count).map(move |i| center - radius + spacing * i as f64)
}

pub(super) fn striped(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("stripeCount", 3)?;
    let width = opts.f64_or("stripeWidth", 2.0)?;
    let color = opts.color_or("stripeColor", secondary)?;
    let border = opts.bool_or("withBorder", true)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let mut out = String::new();
    for x in spaced(area.cx, area.rx, count) {
        let d = vertical(area, x, 5.0, 3.0);
        if border {
            out.push_str(&stroke(&d, accent, width + 1.5, opacity));
        }
        out.push_str(&stroke(&d, color, width, opacity));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn banded(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("bandCount", 2)?;
    let width = opts.f64_or("bandWidth", 4.0)?;
    let color = opts.color_or("bandColor", secondary)?;
    let border_color = opts.color_or("borderColor", accent)?;
    let border_width = opts.f64_or("borderWidth", 2.0)?;
    let opacity = opts.f64_or("opacity", 1.0)?;

    let mut out = String::new();
    for x in spaced(area.cx, area.rx, count) {
        let d = vertical(area, x, 3.0, 2.0);
        out.push_str(&stroke(&d, border_color, width + border_width, opacity));
        out.push_str(&stroke(&d, color, width, opacity));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn barred(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("barCount", 4)?;
    let width = opts.f64_or("barWidth", 2.0)?;
    let color = opts.color_or("barColor", secondary)?;
    let border = opts.bool_or("withBorder", true)?;
    let border_color = opts.color_or("borderColor", accent)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let mut out = String::new();
    for y in spaced(area.cy, area.ry, count) {
        let d = horizontal(area, y, 5.0, 2.0);
        if border {
            out.push_str(&stroke(&d, border_color, width + 1.5, opacity));
        }
        out.push_str(&stroke(&d, color, width, opacity));
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn lined(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(ROYAL_BLUE)?;
    let count = opts.count_or("lineCount", 8)?;
    let width = opts.f64_or("lineWidth", 1.0)?;
    let color = opts.color_or("lineColor", secondary)?;
    let across = opts.bool_or("horizontal", false)?;
    let opacity = opts.f64_or("opacity", 0.7)?;

    let paths: Vec<String> = if across {
        spaced(area.cy, area.ry, count)
            .map(|y| horizontal(area, y, 3.0, 1.0))
            .collect()
    } else {
        spaced(area.cx, area.rx, count)
            .map(|x| vertical(area, x, 3.0, 1.0))
            .collect()
    };
    Ok(PatternResult::Bare(
        paths
            .iter()
            .map(|d| stroke(d, color, width, opacity))
            .collect(),
    ))
}

pub(super) fn chevron(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("chevronCount", 3)?;
    let width = opts.f64_or("chevronWidth", 2.5)?;
    let color = opts.color_or("chevronColor", secondary)?;
    let border = opts.bool_or("withBorder", true)?;
    let border_color = opts.color_or("borderColor", accent)?;
    let points_left = opts.bool_or("pointsLeft", true)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let spacing = rx * 1.5 / (count + 1) as f64;
    let direction = if points_left { 1.0 } else { -1.0 };
    let (top, bottom) = (cy - ry * 0.7, cy + ry * 0.7);

    let mut out = String::new();
    for i in 1..=count {
        let base = cx - rx * 0.5 + spacing * i as f64;
        let tip = base - direction * rx * 0.15;
        let d = format!(
            "M{} {} L{} {} L{} {}",
            Num(base),
            Num(top),
            Num(tip),
            Num(cy),
            Num(base),
            Num(bottom)
        );
        let mut draw = |c: Rgb, w: f64| {
            out.push_str(&format!(
                r#"<path d="{d}" stroke="{c}" stroke-width="{}" fill="none" stroke-linejoin="round" opacity="{}"/>"#,
                Num(w),
                Num(opacity)
            ));
        };
        if border {
            draw(border_color, width + 1.5);
        }
        draw(color, width);
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn crosshatch(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(BLACK)?;
    let count = opts.count_or("lineCount", 4)?;
    let color = opts.color_or("lineColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.4)?;

    let PatternArea { cx, cy, rx, ry } = area;
    let spacing = if count == 0 {
        0.0
    } else {
        rx * 1.4 / count as f64
    };
    let (top, bottom) = (cy - ry * 0.7, cy + ry * 0.7);

    let mut out = String::new();
    // One diagonal family falling to the right, then one rising.
    for (y1, y2) in [(top, bottom), (bottom, top)] {
        for i in 0..count {
            let x1 = cx - rx * 0.7 + i as f64 * spacing;
            out.push_str(&format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1" opacity="{}"/>"#,
                Num(x1),
                Num(y1),
                Num(x1 + rx * 0.5),
                Num(y2),
                Num(opacity)
            ));
        }
    }
    Ok(PatternResult::Bare(out))
}

pub(super) fn incomplete_bands(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let accent = colors.accent_or(BLACK)?;
    let count = opts.count_or("bandCount", 2)?;
    let color = opts.color_or("bandColor", secondary)?;
    let opacity = opts.f64_or("opacity", 0.8)?;

    let PatternArea { cy, ry, .. } = area;
    let gap_start = cy - ry * 0.2;
    let gap_end = cy + ry * 0.2;

    let mut out = String::new();
    for x in spaced(area.cx, area.rx, count) {
        for (y0, y1) in [(cy - ry + 3.0, gap_start), (gap_end, cy + ry - 3.0)] {
            let d = format!("M{} {} L{} {}", Num(x), Num(y0), Num(x), Num(y1));
            out.push_str(&stroke(&d, accent, 5.0, opacity));
            out.push_str(&stroke(&d, color, 3.0, opacity));
        }
    }
    Ok(PatternResult::Bare(out))
}
