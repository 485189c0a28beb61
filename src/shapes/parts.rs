//! Small markup builders shared by the body-shape templates.
//!
//! Every function is pure: the same position, size class and colors always produce the same
//! fragment.

use crate::color::hex::Rgb;
use crate::foundation::math::Num;

/// Eye size class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EyeSize {
    /// Outer radius 4.
    Tiny,
    /// Outer radius 5.
    Small,
    /// Outer radius 7.
    #[default]
    Medium,
    /// Outer radius 10.
    Large,
}

impl EyeSize {
    /// `(outer, pupil, highlight)` radii.
    fn radii(self) -> (f64, f64, f64) {
        match self {
            Self::Tiny => (4.0, 2.5, 0.8),
            Self::Small => (5.0, 3.0, 1.0),
            Self::Medium => (7.0, 4.0, 1.5),
            Self::Large => (10.0, 6.0, 2.0),
        }
    }
}

/// Direction the pupil is shifted towards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    /// Pupil offset to the left.
    Left,
    /// Pupil offset to the right.
    #[default]
    Right,
}

/// White eyeball, pupil and highlight.
pub fn eye(cx: f64, cy: f64, size: EyeSize, color: Rgb, facing: Facing) -> String {
    let (outer, inner, highlight) = size.radii();
    let dx = match facing {
        Facing::Left => -2.0,
        Facing::Right => 2.0,
    };
    format!(
        concat!(
            r##"<circle cx="{cx}" cy="{cy}" r="{outer}" fill="#ffffff"/>"##,
            r#"<circle cx="{px}" cy="{cy}" r="{inner}" fill="{color}"/>"#,
            r##"<circle cx="{hx}" cy="{hy}" r="{highlight}" fill="#ffffff"/>"##,
        ),
        cx = Num(cx),
        cy = Num(cy),
        outer = Num(outer),
        px = Num(cx + dx),
        inner = Num(inner),
        color = color,
        hx = Num(cx + dx + 1.0),
        hy = Num(cy - 2.0),
        highlight = Num(highlight),
    )
}

/// Front-facing pair of eyes looking outwards.
pub fn eye_pair(left_x: f64, right_x: f64, y: f64, size: EyeSize, color: Rgb) -> String {
    let mut out = eye(left_x, y, size, color, Facing::Left);
    out.push_str(&eye(right_x, y, size, color, Facing::Right));
    out
}

/// Mouth drawing style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouthStyle {
    /// Side-on curved smile.
    #[default]
    Smile,
    /// Open round mouth.
    O,
    /// Puckered lips.
    Pouty,
    /// Straight line.
    Line,
    /// Wide filled grin.
    Wide,
}

impl MouthStyle {
    /// Resolve a style name; unknown names draw a smile.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "o" => Self::O,
            "pouty" => Self::Pouty,
            "line" => Self::Line,
            "wide" => Self::Wide,
            _ => Self::Smile,
        }
    }
}

/// Mouth size class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MouthSize {
    /// Width 3.
    Small,
    /// Width 4.
    #[default]
    Medium,
    /// Width 6.
    Large,
}

impl MouthSize {
    fn extent(self) -> (f64, f64) {
        match self {
            Self::Small => (3.0, 2.0),
            Self::Medium => (4.0, 3.0),
            Self::Large => (6.0, 4.0),
        }
    }
}

/// Mouth fragment anchored at `(x, y)`.
pub fn mouth(x: f64, y: f64, style: MouthStyle, size: MouthSize, color: Rgb) -> String {
    let (w, c) = size.extent();
    match style {
        MouthStyle::Smile => format!(
            r#"<path d="M{} {} Q{} {} {} {}" stroke="{color}" stroke-width="1.5" fill="none"/>"#,
            Num(x),
            Num(y),
            Num(x + w),
            Num(y + c),
            Num(x),
            Num(y + c * 2.0),
        ),
        MouthStyle::O => format!(
            r##"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="#1e293b" stroke="{color}" stroke-width="1"/>"##,
            Num(x),
            Num(y),
            Num(w),
            Num(c),
        ),
        MouthStyle::Pouty => format!(
            concat!(
                r##"<ellipse cx="{x}" cy="{y}" rx="{w}" ry="{ry}" fill="#fbbf24" stroke="{color}" stroke-width="1"/>"##,
                r#"<path d="M{x0} {y} L{x1} {y}" stroke="{color}" stroke-width="1"/>"#,
            ),
            x = Num(x),
            y = Num(y),
            w = Num(w),
            ry = Num(c - 1.0),
            x0 = Num(x - w + 1.0),
            x1 = Num(x + w - 1.0),
            color = color,
        ),
        MouthStyle::Line => format!(
            r#"<path d="M{} {} L{} {}" stroke="{color}" stroke-width="1.5"/>"#,
            Num(x - w),
            Num(y),
            Num(x + w),
            Num(y),
        ),
        MouthStyle::Wide => format!(
            r##"<path d="M{} {} Q{} {} {} {}" fill="#1e293b"/>"##,
            Num(x - w),
            Num(y),
            Num(x),
            Num(y + c),
            Num(x + w),
            Num(y),
        ),
    }
}

/// Blush size class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlushSize {
    /// 3 x 1.5.
    Small,
    /// 4 x 2.
    #[default]
    Medium,
    /// 6 x 3.
    Large,
}

/// Soft cheek mark tinted from `base`.
pub fn blush(cx: f64, cy: f64, base: Rgb, size: BlushSize, opacity: f64) -> String {
    let (rx, ry) = match size {
        BlushSize::Small => (3.0, 1.5),
        BlushSize::Medium => (4.0, 2.0),
        BlushSize::Large => (6.0, 3.0),
    };
    format!(
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" opacity="{}"/>"#,
        Num(cx),
        Num(cy),
        Num(rx),
        Num(ry),
        base.lighten(40.0),
        Num(opacity),
    )
}

/// Blush on both cheeks.
pub fn blush_pair(
    left_x: f64,
    right_x: f64,
    y: f64,
    base: Rgb,
    size: BlushSize,
    opacity: f64,
) -> String {
    let mut out = blush(left_x, y, base, size, opacity);
    out.push_str(&blush(right_x, y, base, size, opacity));
    out
}

/// Fill and stroke shared by fin builders. `fill` may be a `url(#...)` reference.
#[derive(Clone, Copy, Debug)]
pub struct FinPaint<'a> {
    /// Fill paint.
    pub fill: &'a str,
    /// Stroke paint.
    pub stroke: &'a str,
}

/// Dorsal fin outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DorsalStyle {
    /// Single soft arc.
    #[default]
    Rounded,
    /// Tall arc.
    Pointed,
    /// Three spikes.
    Spiky,
    /// Two-lobed trailing fin.
    Flowing,
}

/// Dorsal (top) fin whose base runs from `(x, y)` to `(x + width, y)`.
pub fn dorsal_fin(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    style: DorsalStyle,
    paint: FinPaint<'_>,
) -> String {
    let FinPaint { fill, stroke } = paint;
    match style {
        DorsalStyle::Rounded | DorsalStyle::Pointed => {
            let lift = if style == DorsalStyle::Pointed {
                height * 1.5
            } else {
                height
            };
            format!(
                r#"<path d="M{} {} Q{} {} {} {}" fill="{fill}" stroke="{stroke}" stroke-width="1"/>"#,
                Num(x),
                Num(y),
                Num(x + width / 2.0),
                Num(y - lift),
                Num(x + width),
                Num(y),
            )
        }
        DorsalStyle::Spiky => {
            const SPIKES: usize = 3;
            let step = width / SPIKES as f64;
            let mut d = format!("M{} {}", Num(x), Num(y));
            for i in 0..SPIKES {
                let fi = i as f64;
                d.push_str(&format!(
                    " L{} {} L{} {}",
                    Num(x + step * (fi + 0.5)),
                    Num(y - height),
                    Num(x + step * (fi + 1.0)),
                    Num(y),
                ));
            }
            format!(r#"<path d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="0.5"/>"#)
        }
        DorsalStyle::Flowing => format!(
            r#"<path d="M{} {} Q{} {} {} {} Q{} {} {} {}" fill="{fill}" stroke="{stroke}" stroke-width="0.5"/>"#,
            Num(x),
            Num(y),
            Num(x + width * 0.3),
            Num(y - height),
            Num(x + width * 0.5),
            Num(y - height * 0.8),
            Num(x + width * 0.7),
            Num(y - height * 0.6),
            Num(x + width),
            Num(y),
        ),
    }
}

/// Pectoral (side) fin, optionally rotated by `angle` degrees about its center.
pub fn pectoral_fin(cx: f64, cy: f64, rx: f64, ry: f64, angle: f64, paint: FinPaint<'_>) -> String {
    let transform = if angle != 0.0 {
        format!(
            r#" transform="rotate({} {} {})""#,
            Num(angle),
            Num(cx),
            Num(cy)
        )
    } else {
        String::new()
    };
    format!(
        r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}" stroke="{}" stroke-width="1"{transform}/>"#,
        Num(cx),
        Num(cy),
        Num(rx),
        Num(ry),
        paint.fill,
        paint.stroke,
    )
}

/// Tail fin outline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TailStyle {
    /// Two-lobed fork.
    #[default]
    Forked,
    /// Single ellipse.
    Rounded,
    /// Triangular fan.
    Fan,
    /// Narrow moon shape.
    Crescent,
}

/// Tail fin attached at `(x, y)` and extending `size` units to the left.
pub fn tail_fin(x: f64, y: f64, size: f64, style: TailStyle, paint: FinPaint<'_>) -> String {
    let FinPaint { fill, stroke } = paint;
    let s = size;
    let d = match style {
        TailStyle::Rounded => {
            return format!(
                r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{fill}" stroke="{stroke}" stroke-width="0.5"/>"#,
                Num(x - s / 2.0),
                Num(y),
                Num(s / 2.0),
                Num(s),
            );
        }
        TailStyle::Forked => format!(
            "M{} {} Q{} {} {} {} Q{} {} {} {} Q{} {} {} {}",
            Num(x),
            Num(y),
            Num(x - s * 0.5),
            Num(y - s),
            Num(x - s),
            Num(y - s * 0.8),
            Num(x - s * 0.3),
            Num(y),
            Num(x - s),
            Num(y + s * 0.8),
            Num(x - s * 0.5),
            Num(y + s),
            Num(x),
            Num(y),
        ),
        TailStyle::Fan => format!(
            "M{} {} L{} {} Q{} {} {} {} Z",
            Num(x),
            Num(y),
            Num(x - s),
            Num(y - s),
            Num(x - s * 1.2),
            Num(y),
            Num(x - s),
            Num(y + s),
        ),
        TailStyle::Crescent => format!(
            "M{} {} Q{} {} {} {} Q{} {} {} {} Q{} {} {} {}",
            Num(x),
            Num(y),
            Num(x - s * 0.8),
            Num(y - s * 0.5),
            Num(x - s),
            Num(y - s * 0.3),
            Num(x - s * 0.5),
            Num(y),
            Num(x - s),
            Num(y + s * 0.3),
            Num(x - s * 0.8),
            Num(y + s * 0.5),
            Num(x),
            Num(y),
        ),
    };
    format!(r#"<path d="{d}" fill="{fill}" stroke="{stroke}" stroke-width="0.5"/>"#)
}

/// Anal (bottom) fin hanging below the base from `(x, y)` to `(x + width, y)`.
pub fn anal_fin(x: f64, y: f64, width: f64, height: f64, paint: FinPaint<'_>) -> String {
    format!(
        r#"<path d="M{} {} Q{} {} {} {}" fill="{}" stroke="{}" stroke-width="0.5"/>"#,
        Num(x),
        Num(y),
        Num(x + width / 2.0),
        Num(y + height),
        Num(x + width),
        Num(y),
        paint.fill,
        paint.stroke,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/parts.rs"]
mod tests;
