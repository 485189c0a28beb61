//! Whole-body tonal washes: solid and its gradient variations.

use super::{PatternOptions, PatternResult};
use crate::color::hex::Rgb;
use crate::color::scheme::ColorScheme;
use crate::foundation::core::PatternArea;
use crate::foundation::error::AquariumResult;
use crate::foundation::math::Num;

const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

/// Inset ellipse filled with the gradient `fill_id`.
fn wash(area: PatternArea, fill_id: &str) -> String {
    format!(
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="url(#{fill_id})"/>"#,
        Num(area.cx),
        Num(area.cy),
        Num(area.rx - 2.0),
        Num(area.ry - 2.0),
    )
}

fn stop(offset: &str, color: Rgb, opacity: f64) -> String {
    format!(
        r#"<stop offset="{offset}" style="stop-color:{color};stop-opacity:{}"/>"#,
        Num(opacity)
    )
}

pub(super) fn solid(
    _colors: &ColorScheme,
    _area: PatternArea,
    _opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    Ok(PatternResult::Bare(String::new()))
}

pub(super) fn gradient(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let secondary = colors.secondary_or(WHITE)?;
    let opacity = opts.f64_or("opacity", 0.3)?;
    let (x2, y2) = match opts.param("direction")?.and_then(|v| v.as_str()) {
        Some("horizontal") => ("100%", "0%"),
        _ => ("0%", "100%"),
    };
    let id = format!("{}-shimmer", opts.resolve_id("gradient-pattern"));

    let defs = format!(
        r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="{x2}" y2="{y2}">{}{}{}</linearGradient>"#,
        stop("0%", secondary, opacity),
        stop("50%", secondary, 0.0),
        stop("100%", secondary, opacity * 0.5),
    );
    Ok(PatternResult::WithDefs {
        defs,
        elements: wash(area, &id),
    })
}

pub(super) fn velvet(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let primary = colors.primary_or(Rgb::new(0x1f, 0x29, 0x37))?;
    let opacity = opts.f64_or("opacity", 0.25)?;
    let id = format!("{}-velvet", opts.resolve_id("velvet"));

    let defs = format!(
        r#"<radialGradient id="{id}" cx="30%" cy="30%">{}{}{}</radialGradient>"#,
        stop("0%", primary.lighten(10.0), opacity),
        stop("50%", primary, 0.0),
        stop("100%", primary.darken(10.0), opacity * 0.5),
    );
    Ok(PatternResult::WithDefs {
        defs,
        elements: wash(area, &id),
    })
}

pub(super) fn nearly_solid(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let primary = colors.primary_or(Rgb::new(0x33, 0x33, 0x33))?;
    let opacity = opts.f64_or("opacity", 0.15)?;
    let id = format!("{}-subtle", opts.resolve_id("nearly-solid"));

    let defs = format!(
        r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="100%">{}{}</linearGradient>"#,
        stop("0%", primary.lighten(5.0), opacity),
        stop("100%", primary, 0.0),
    );
    Ok(PatternResult::WithDefs {
        defs,
        elements: wash(area, &id),
    })
}

pub(super) fn mostly_white(
    _colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let opacity = opts.f64_or("opacity", 0.6)?;
    let id = format!("{}-white", opts.resolve_id("mostly-white"));

    let defs = format!(
        r#"<radialGradient id="{id}">{}{}{}</radialGradient>"#,
        stop("0%", WHITE, opacity),
        stop("70%", WHITE, opacity * 0.8),
        stop("100%", WHITE, opacity * 0.3),
    );
    Ok(PatternResult::WithDefs {
        defs,
        elements: wash(area, &id),
    })
}

pub(super) fn multicolor(
    colors: &ColorScheme,
    area: PatternArea,
    opts: &PatternOptions,
) -> AquariumResult<PatternResult> {
    let primary = colors.primary_or(Rgb::new(0xff, 0x6b, 0x35))?;
    let secondary = colors.secondary_or(Rgb::new(0x41, 0x69, 0xe1))?;
    let accent = colors.accent_or(Rgb::new(0x22, 0xc5, 0x5e))?;
    let opacity = opts.f64_or("opacity", 0.7)?;
    let id = format!("{}-multi", opts.resolve_id("multicolor"));

    let defs = format!(
        r#"<linearGradient id="{id}" x1="0%" y1="0%" x2="100%" y2="0%">{}{}{}{}{}</linearGradient>"#,
        stop("0%", primary, 0.0),
        stop("25%", secondary, opacity),
        stop("50%", accent, opacity),
        stop("75%", secondary, opacity),
        stop("100%", primary, 0.0),
    );
    Ok(PatternResult::WithDefs {
        defs,
        elements: wash(area, &id),
    })
}
