//! Compact body plans: oval, disc and round.

use super::ShapeDescriptor;
use super::parts::{
    self, BlushSize, DorsalStyle, EyeSize, Facing, FinPaint, MouthSize, MouthStyle, TailStyle,
};
use crate::color::hex::Rgb;
use crate::color::scheme::Palette;
use crate::foundation::core::{PatternArea, ViewBox};

pub(super) const OVAL_PALETTE: Palette = Palette::new(
    Rgb::new(0xff, 0x6b, 0x35),
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0x00, 0x00, 0x00),
);

pub(super) const DISC_PALETTE: Palette = Palette::new(
    Rgb::new(0xec, 0x48, 0x99),
    Rgb::new(0x06, 0xb6, 0xd4),
    Rgb::new(0x00, 0x00, 0x00),
);

pub(super) const ROUND_PALETTE: Palette = Palette::new(
    Rgb::new(0xfc, 0xd3, 0x4d),
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0x4a, 0x4a, 0x4a),
);

pub(super) fn oval(p: Palette, id: &str) -> ShapeDescriptor {
    let Palette {
        primary,
        secondary,
        accent,
    } = p;
    let dark = primary.darken(15.0);
    let body_fill = format!("url(#{id}-body)");
    let dark_hex = dark.to_string();
    let paint = FinPaint {
        fill: &body_fill,
        stroke: &dark_hex,
    };

    let defs = format!(
        concat!(
            r#"<linearGradient id="{id}-body" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            r#"<stop offset="0%" style="stop-color:{light}"/>"#,
            r#"<stop offset="100%" style="stop-color:{primary}"/>"#,
            "</linearGradient>",
            r#"<linearGradient id="{id}-belly" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            r#"<stop offset="0%" style="stop-color:{secondary}"/>"#,
            r#"<stop offset="100%" style="stop-color:{belly}"/>"#,
            "</linearGradient>",
        ),
        id = id,
        light = primary.lighten(15.0),
        primary = primary,
        secondary = secondary,
        belly = secondary.lighten(10.0),
    );

    let body = format!(
        concat!(
            r#"<ellipse cx="50" cy="30" rx="35" ry="22" fill="url(#{id}-body)"/>"#,
            r#"<ellipse cx="55" cy="38" rx="20" ry="10" fill="url(#{id}-belly)" opacity="0.4"/>"#,
        ),
        id = id,
    );

    let mut fins = parts::dorsal_fin(35.0, 10.0, 20.0, 8.0, DorsalStyle::Rounded, paint);
    fins.push_str(&parts::pectoral_fin(60.0, 38.0, 10.0, 5.0, 0.0, paint));

    let mut face = parts::eye(70.0, 27.0, EyeSize::Medium, accent, Facing::Right);
    face.push_str(&parts::mouth(
        82.0,
        32.0,
        MouthStyle::Smile,
        MouthSize::Medium,
        dark,
    ));
    face.push_str(&parts::blush(72.0, 40.0, primary, BlushSize::Medium, 0.5));

    ShapeDescriptor {
        view_box: ViewBox::sized(100.0, 60.0),
        width: 100.0,
        height: 60.0,
        defs,
        tail: Some(parts::tail_fin(18.0, 30.0, 12.0, TailStyle::Forked, paint)),
        body,
        fins: Some(fins),
        face: Some(face),
        pattern_area: PatternArea::new(50.0, 30.0, 35.0, 22.0),
    }
}

pub(super) fn disc(p: Palette, id: &str) -> ShapeDescriptor {
    let Palette {
        primary,
        secondary,
        accent,
    } = p;
    let dark = primary.darken(20.0);

    let defs = format!(
        concat!(
            r#"<radialGradient id="{id}-body" cx="60%" cy="40%" r="60%">"#,
            r#"<stop offset="0%" style="stop-color:{light}"/>"#,
            r#"<stop offset="50%" style="stop-color:{primary}"/>"#,
            r#"<stop offset="100%" style="stop-color:{dark}"/>"#,
            "</radialGradient>",
            r#"<linearGradient id="{id}-stripe" x1="0%" y1="0%" x2="100%" y2="0%">"#,
            r#"<stop offset="0%" style="stop-color:{secondary}"/>"#,
            r#"<stop offset="100%" style="stop-color:{stripe}"/>"#,
            "</linearGradient>",
        ),
        id = id,
        light = primary.lighten(15.0),
        primary = primary,
        dark = dark,
        secondary = secondary,
        stripe = secondary.lighten(10.0),
    );

    let tail = format!(
        r#"<path d="M15 45 Q5 35 8 30 Q12 40 15 45 Q12 50 8 60 Q5 55 15 45" fill="url(#{id}-body)"/>"#
    );

    let body = format!(
        concat!(
            r#"<path d="M30 20 Q45 5 65 15 Q60 22 50 25 Q40 24 30 20" fill="url(#{id}-body)" stroke="{dark}" stroke-width="0.5"/>"#,
            r#"<path d="M30 70 Q45 85 65 75 Q60 68 50 65 Q40 66 30 70" fill="url(#{id}-body)" stroke="{dark}" stroke-width="0.5"/>"#,
            r#"<circle cx="45" cy="45" r="30" fill="url(#{id}-body)"/>"#,
            r#"<ellipse cx="50" cy="55" rx="18" ry="12" fill="{secondary}" opacity="0.15"/>"#,
        ),
        id = id,
        dark = dark,
        secondary = secondary,
    );

    let fins =
        format!(r#"<ellipse cx="58" cy="52" rx="9" ry="5" fill="url(#{id}-body)" opacity="0.8"/>"#);

    let mut face = parts::eye(62.0, 40.0, EyeSize::Medium, accent, Facing::Right);
    face.push_str(&format!(
        r#"<circle cx="62" cy="40" r="7" fill="none" stroke="{}" stroke-width="1.5"/>"#,
        primary.darken(30.0)
    ));
    face.push_str(&parts::mouth(
        72.0,
        48.0,
        MouthStyle::Smile,
        MouthSize::Medium,
        dark,
    ));
    face.push_str(&parts::blush(65.0, 52.0, primary, BlushSize::Medium, 0.5));

    ShapeDescriptor {
        view_box: ViewBox::sized(90.0, 90.0),
        width: 90.0,
        height: 90.0,
        defs,
        tail: Some(tail),
        body,
        fins: Some(fins),
        face: Some(face),
        pattern_area: PatternArea::new(45.0, 45.0, 30.0, 30.0),
    }
}

pub(super) fn round(p: Palette, id: &str) -> ShapeDescriptor {
    let Palette {
        primary,
        secondary,
        accent,
    } = p;
    let light = primary.lighten(15.0);
    let dark = primary.darken(15.0);

    let defs = format!(
        concat!(
            r#"<linearGradient id="{id}-body" x1="0%" y1="0%" x2="0%" y2="100%">"#,
            r#"<stop offset="0%" style="stop-color:{light}"/>"#,
            r#"<stop offset="100%" style="stop-color:{primary}"/>"#,
            "</linearGradient>",
            r#"<radialGradient id="{id}-belly" cx="50%" cy="70%" r="50%">"#,
            r#"<stop offset="0%" style="stop-color:{secondary}"/>"#,
            r#"<stop offset="100%" style="stop-color:{light}"/>"#,
            "</radialGradient>",
        ),
        id = id,
        light = light,
        primary = primary,
        secondary = secondary,
    );

    let tail = format!(r#"<ellipse cx="12" cy="40" rx="8" ry="10" fill="{primary}"/>"#);

    let mut body = format!(
        concat!(
            r#"<circle cx="45" cy="40" r="32" fill="url(#{id}-body)"/>"#,
            r#"<ellipse cx="50" cy="50" rx="20" ry="15" fill="url(#{id}-belly)"/>"#,
        ),
        id = id,
    );
    for (cx, cy, r) in [
        (30, 30, "3"),
        (40, 22, "2.5"),
        (55, 25, "3"),
        (25, 45, "2"),
        (65, 35, "2.5"),
    ] {
        body.push_str(&format!(
            r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{dark}" opacity="0.3"/>"#
        ));
    }

    let fins = format!(
        concat!(
            r#"<path d="M45 10 Q50 5 55 10" fill="{primary}" stroke="{dark}" stroke-width="1"/>"#,
            r#"<ellipse cx="75" cy="40" rx="8" ry="5" fill="{primary}" stroke="{dark}" stroke-width="1"/>"#,
        ),
        primary = primary,
        dark = dark,
    );

    let mut face = parts::eye_pair(35.0, 55.0, 32.0, EyeSize::Large, accent);
    face.push_str(&parts::mouth(
        70.0,
        45.0,
        MouthStyle::Pouty,
        MouthSize::Medium,
        dark,
    ));
    face.push_str(&parts::blush_pair(
        40.0,
        60.0,
        50.0,
        primary,
        BlushSize::Medium,
        0.5,
    ));

    ShapeDescriptor {
        view_box: ViewBox::sized(90.0, 80.0),
        width: 90.0,
        height: 80.0,
        defs,
        tail: Some(tail),
        body,
        fins: Some(fins),
        face: Some(face),
        pattern_area: PatternArea::new(45.0, 40.0, 32.0, 32.0),
    }
}
