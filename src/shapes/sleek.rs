//! Long and low body plans: streamlined, flat and elongated.

use super::ShapeDescriptor;
use super::parts::{self, EyeSize, Facing, MouthSize, MouthStyle};
use crate::color::hex::Rgb;
use crate::color::scheme::Palette;
use crate::foundation::core::{PatternArea, ViewBox};

pub(super) const STREAMLINED_PALETTE: Palette = Palette::new(
    Rgb::new(0x47, 0x55, 0x69),
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0x1e, 0x29, 0x3b),
);

pub(super) const FLAT_PALETTE: Palette = Palette::new(
    Rgb::new(0x64, 0x74, 0x8b),
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0x1e, 0x29, 0x3b),
);

pub(super) const ELONGATED_PALETTE: Palette = Palette::new(
    Rgb::new(0xf9, 0x73, 0x16),
    Rgb::new(0xfb, 0xbf, 0x24),
    Rgb::new(0x1e, 0x29, 0x3b),
);

// Spot pattern along a whale shark's back: (cx, cy, r).
const SHARK_SPOTS: [(u8, u8, &str); 15] = [
    (25, 25, "2"),
    (35, 22, "1.5"),
    (32, 30, "2"),
    (45, 20, "1.5"),
    (42, 28, "2"),
    (55, 24, "1.5"),
    (55, 32, "2"),
    (65, 22, "1.5"),
    (65, 28, "2"),
    (75, 20, "1.5"),
    (75, 30, "2"),
    (85, 24, "1.5"),
    (88, 28, "2"),
    (95, 26, "1.5"),
    (102, 28, "1.5"),
];

pub(super) fn streamlined(p: Palette, id: &str) -> ShapeDescriptor {
    let Palette {
        primary,
        secondary,
        accent,
    } = p;
    let dark = primary.darken(15.0);

    let defs = format!(
        concat!(
            r#"<linearGradient id="{id}-body" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            r#"<stop offset="0%" style="stop-color:{light}"/>"#,
            r#"<stop offset="100%" style="stop-color:{primary}"/>"#,
            "</linearGradient>",
        ),
        id = id,
        light = primary.lighten(10.0),
        primary = primary,
    );

    let tail = format!(
        r#"<path d="M5 30 Q0 15 8 10 Q10 22 12 30 Q10 38 8 50 Q0 45 5 30" fill="url(#{id}-body)"/>"#
    );

    let mut body = format!(
        concat!(
            r#"<path d="M35 22 Q40 18 45 22" fill="url(#{id}-body)"/>"#,
            r#"<path d="M65 18 Q75 5 85 18 Q78 20 70 20 Z" fill="url(#{id}-body)"/>"#,
            r#"<path d="M80 35 Q60 50 55 55 Q70 48 80 40" fill="url(#{id}-body)"/>"#,
            r#"<path d="M80 35 Q95 55 100 52 Q90 42 80 38" fill="url(#{id}-body)" opacity="0.7"/>"#,
            r#"<path d="M12 30 Q20 18 60 15 Q100 12 130 25 Q135 30 130 35 Q100 48 60 45 Q20 42 12 30" fill="url(#{id}-body)"/>"#,
            r#"<path d="M20 35 Q60 42 120 35 Q100 45 60 43 Q30 42 20 35" fill="{secondary}" opacity="0.5"/>"#,
            r#"<path d="M20 28 Q70 25 115 28" stroke="{dark}" stroke-width="0.5" fill="none"/>"#,
            r#"<path d="M25 33 Q70 31 110 33" stroke="{dark}" stroke-width="0.5" fill="none"/>"#,
        ),
        id = id,
        secondary = secondary,
        dark = dark,
    );
    for (cx, cy, r) in SHARK_SPOTS {
        body.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{secondary}" opacity="0.8"/>"#
        ));
    }

    let mut face = format!(
        concat!(
            r#"<path d="M125 28 Q135 25 135 30 Q135 35 125 32" fill="{accent}"/>"#,
            r#"<line x1="115" y1="26" x2="115" y2="34" stroke="{accent}" stroke-width="1"/>"#,
            r#"<line x1="118" y1="25" x2="118" y2="35" stroke="{accent}" stroke-width="1"/>"#,
            r#"<line x1="121" y1="26" x2="121" y2="34" stroke="{accent}" stroke-width="1"/>"#,
        ),
        accent = accent,
    );
    face.push_str(&parts::eye(
        122.0,
        28.0,
        EyeSize::Small,
        accent,
        Facing::Right,
    ));

    ShapeDescriptor {
        view_box: ViewBox::sized(140.0, 60.0),
        width: 140.0,
        height: 60.0,
        defs,
        tail: Some(tail),
        body,
        fins: None,
        face: Some(face),
        pattern_area: PatternArea::new(70.0, 30.0, 55.0, 18.0),
    }
}

pub(super) fn flat(p: Palette, id: &str) -> ShapeDescriptor {
    let Palette {
        primary,
        secondary,
        accent,
    } = p;
    let dark = primary.darken(20.0);

    let defs = format!(
        concat!(
            r#"<radialGradient id="{id}-body" cx="50%" cy="40%" r="60%">"#,
            r#"<stop offset="0%" style="stop-color:{light}"/>"#,
            r#"<stop offset="70%" style="stop-color:{primary}"/>"#,
            r#"<stop offset="100%" style="stop-color:{dark}"/>"#,
            "</radialGradient>",
            r#"<linearGradient id="{id}-belly" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            r#"<stop offset="0%" style="stop-color:{secondary}"/>"#,
            r#"<stop offset="100%" style="stop-color:{belly}"/>"#,
            "</linearGradient>",
        ),
        id = id,
        light = primary.lighten(15.0),
        primary = primary,
        dark = dark,
        secondary = secondary,
        belly = secondary.lighten(5.0),
    );

    let tail = format!(
        concat!(
            r#"<path d="M10 35 Q0 35 -5 38 Q0 40 10 35" fill="url(#{id}-body)" stroke="{dark}" stroke-width="0.5"/>"#,
            r#"<ellipse cx="15" cy="35" rx="8" ry="6" fill="url(#{id}-body)"/>"#,
        ),
        id = id,
        dark = dark,
    );

    let mut body = format!(
        concat!(
            r#"<path d="M25 35 Q40 10 60 8 Q80 10 95 35 Q80 60 60 62 Q40 60 25 35" fill="url(#{id}-body)"/>"#,
            r#"<path d="M45 25 Q30 15 20 20 Q25 30 45 35" fill="url(#{id}-body)" stroke="{dark}" stroke-width="0.5"/>"#,
            r#"<path d="M45 45 Q30 55 20 50 Q25 40 45 35" fill="url(#{id}-body)" stroke="{dark}" stroke-width="0.5"/>"#,
            r#"<ellipse cx="60" cy="40" rx="25" ry="15" fill="url(#{id}-belly)" opacity="0.3"/>"#,
            r#"<path d="M35 30 Q50 28 70 30" stroke="{dark}" stroke-width="0.5" fill="none" opacity="0.4"/>"#,
            r#"<path d="M35 40 Q50 42 70 40" stroke="{dark}" stroke-width="0.5" fill="none" opacity="0.4"/>"#,
        ),
        id = id,
        dark = dark,
    );
    for (cx, cy, r) in [(50, 30, "2"), (65, 28, "1.5"), (55, 38, "2"), (70, 35, "1.5")] {
        body.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{dark}" opacity="0.3"/>"#
        ));
    }

    let fins = format!(
        r#"<path d="M55 15 Q60 12 65 15" fill="url(#{id}-body)" stroke="{dark}" stroke-width="0.5"/>"#
    );

    let mut face = parts::eye(85.0, 32.0, EyeSize::Small, accent, Facing::Right);
    face.push_str(&parts::mouth(
        100.0,
        38.0,
        MouthStyle::Smile,
        MouthSize::Medium,
        dark,
    ));

    ShapeDescriptor {
        view_box: ViewBox::sized(120.0, 70.0),
        width: 120.0,
        height: 70.0,
        defs,
        tail: Some(tail),
        body,
        fins: Some(fins),
        face: Some(face),
        pattern_area: PatternArea::new(60.0, 35.0, 35.0, 25.0),
    }
}

pub(super) fn elongated(p: Palette, id: &str) -> ShapeDescriptor {
    let Palette {
        primary,
        secondary,
        accent,
    } = p;
    let dark = primary.darken(20.0);

    let defs = format!(
        concat!(
            r#"<linearGradient id="{id}-body" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            r#"<stop offset="0%" style="stop-color:{light}"/>"#,
            r#"<stop offset="50%" style="stop-color:{primary}"/>"#,
            r#"<stop offset="100%" style="stop-color:{dark}"/>"#,
            "</linearGradient>",
            r#"<linearGradient id="{id}-belly" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            r#"<stop offset="0%" style="stop-color:{secondary}"/>"#,
            r#"<stop offset="100%" style="stop-color:{belly}"/>"#,
            "</linearGradient>",
        ),
        id = id,
        light = primary.lighten(15.0),
        primary = primary,
        dark = dark,
        secondary = secondary,
        belly = secondary.lighten(10.0),
    );

    let tail = format!(
        r#"<path d="M8 22 Q2 15 5 10 Q8 18 10 22 Q8 26 5 35 Q2 30 8 22" fill="url(#{id}-body)" stroke="{dark}" stroke-width="0.5"/>"#
    );

    let mut body = format!(
        concat!(
            r#"<path d="M10 22 Q30 18 50 20 Q70 22 90 20 Q110 18 130 22 Q145 24 150 22 "#,
            r#"Q145 28 130 26 Q110 30 90 28 Q70 26 50 28 Q30 30 10 26 Z" fill="url(#{id}-body)"/>"#,
            r#"<path d="M15 25 Q50 28 90 27 Q130 26 145 25 Q130 28 90 29 Q50 30 15 27 Z" fill="url(#{id}-belly)" opacity="0.4"/>"#,
            r#"<path d="M20 18 Q40 14 60 16 Q80 14 100 16 Q120 14 140 18" fill="none" stroke="url(#{id}-body)" stroke-width="3" stroke-linecap="round"/>"#,
        ),
        id = id,
    );
    // Eel-like segment lines, alternating long and short.
    for x in (25..=130).step_by(15) {
        let (y0, y1) = match x {
            130 => (20, 28),
            _ if (x - 25) % 30 == 0 => (19, 29),
            _ => (18, 30),
        };
        body.push_str(&format!(
            r#"<path d="M{x} {y0} L{x} {y1}" stroke="{dark}" stroke-width="0.5" opacity="0.3"/>"#
        ));
    }
    body.push_str(&format!(
        r#"<path d="M20 23 Q70 22 120 23 Q140 24 148 23" stroke="{dark}" stroke-width="0.5" fill="none" opacity="0.4"/>"#
    ));

    let fins = format!(
        r#"<ellipse cx="135" cy="26" rx="6" ry="4" fill="url(#{id}-body)" stroke="{dark}" stroke-width="0.5" opacity="0.8"/>"#
    );

    let mut face = parts::eye(145.0, 20.0, EyeSize::Small, accent, Facing::Right);
    face.push_str(&parts::mouth(
        155.0,
        24.0,
        MouthStyle::Smile,
        MouthSize::Medium,
        dark,
    ));
    // Barbels.
    face.push_str(&format!(
        concat!(
            r#"<path d="M152 22 Q158 20 160 18" stroke="{dark}" stroke-width="0.5" fill="none"/>"#,
            r#"<path d="M152 24 Q158 24 162 22" stroke="{dark}" stroke-width="0.5" fill="none"/>"#,
        ),
        dark = dark,
    ));

    ShapeDescriptor {
        view_box: ViewBox::sized(160.0, 45.0),
        width: 160.0,
        height: 45.0,
        defs,
        tail: Some(tail),
        body,
        fins: Some(fins),
        face: Some(face),
        pattern_area: PatternArea::new(80.0, 23.0, 70.0, 8.0),
    }
}
