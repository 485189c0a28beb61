//! Upright seahorse body.

use super::ShapeDescriptor;
use super::parts::{self, BlushSize, EyeSize, Facing};
use crate::color::hex::Rgb;
use crate::color::scheme::Palette;
use crate::foundation::core::{PatternArea, ViewBox};

pub(super) const UNUSUAL_PALETTE: Palette = Palette::new(
    Rgb::new(0xfb, 0xbf, 0x24),
    Rgb::new(0xfd, 0xe6, 0x8a),
    Rgb::new(0x1e, 0x29, 0x3b),
);

// Segment ridges down the trunk: (x0, x1, y).
const RIDGES: [(u8, u8, u8); 6] = [
    (24, 36, 72),
    (23, 37, 65),
    (24, 36, 58),
    (25, 35, 51),
    (26, 34, 44),
    (27, 35, 37),
];

pub(super) fn unusual(p: Palette, id: &str) -> ShapeDescriptor {
    let Palette {
        primary,
        secondary,
        accent,
    } = p;
    let light = primary.lighten(15.0);
    let dark = primary.darken(20.0);

    let defs = format!(
        concat!(
            r#"<linearGradient id="{id}-body" x1="0%" y1="0%" x2="100%" y2="0%">"#,
            r#"<stop offset="0%" style="stop-color:{primary}"/>"#,
            r#"<stop offset="100%" style="stop-color:{light}"/>"#,
            "</linearGradient>",
        ),
        id = id,
        primary = primary,
        light = light,
    );

    let tail = format!(
        r#"<path d="M25 85 Q15 90 18 95 Q25 98 28 92 Q30 88 28 85" fill="none" stroke="url(#{id}-body)" stroke-width="5" stroke-linecap="round"/>"#
    );

    let mut body = format!(
        concat!(
            r#"<path d="M30 75 Q35 65 32 55 Q28 45 32 35 Q38 25 35 18" fill="none" stroke="url(#{id}-body)" stroke-width="12" stroke-linecap="round"/>"#,
            r#"<path d="M32 70 Q38 60 35 50 Q32 42 35 35" fill="none" stroke="{secondary}" stroke-width="6" stroke-linecap="round"/>"#,
        ),
        id = id,
        secondary = secondary,
    );
    for (x0, x1, y) in RIDGES {
        body.push_str(&format!(
            r#"<path d="M{x0} {y} L{x1} {y}" stroke="{dark}" stroke-width="1" opacity="0.5"/>"#
        ));
    }
    body.push_str(&format!(
        concat!(
            r#"<ellipse cx="35" cy="15" rx="10" ry="12" fill="url(#{id}-body)"/>"#,
            r#"<path d="M42 18 Q55 20 50 22 Q45 23 42 22" fill="url(#{id}-body)"/>"#,
            r#"<path d="M30 5 Q35 2 38 5 Q40 8 35 10 Q30 8 30 5" fill="{light}"/>"#,
        ),
        id = id,
        light = light,
    ));

    let fins = format!(
        r#"<path d="M22 55 Q15 50 18 45 Q22 48 24 52" fill="{primary}" stroke="{dark}" stroke-width="0.5"/>"#
    );

    let mut face = parts::eye(38.0, 12.0, EyeSize::Small, accent, Facing::Right);
    face.push_str(&parts::blush(40.0, 18.0, primary, BlushSize::Small, 0.5));

    ShapeDescriptor {
        view_box: ViewBox::sized(60.0, 100.0),
        width: 60.0,
        height: 100.0,
        defs,
        tail: Some(tail),
        body,
        fins: Some(fins),
        face: Some(face),
        pattern_area: PatternArea::new(32.0, 50.0, 8.0, 30.0),
    }
}
