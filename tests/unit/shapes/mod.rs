use super::*;
use crate::foundation::error::AquariumError;
use crate::foundation::math::Num;

fn opts() -> ShapeOptions {
    ShapeOptions::with_id("t")
}

#[test]
fn every_builtin_is_registered_in_order() {
    let reg = ShapeRegistry::new();
    assert_eq!(
        reg.available(),
        vec![
            "oval",
            "disc",
            "round",
            "streamlined",
            "unusual",
            "flat",
            "elongated"
        ]
    );
    for kind in ShapeKind::ALL {
        assert!(reg.contains(kind.name()));
        assert_eq!(ShapeKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ShapeKind::from_name(" Disc "), Some(ShapeKind::Disc));
    assert_eq!(ShapeKind::from_name("triangle"), None);
}

#[test]
fn unknown_shape_falls_back_to_oval() {
    let reg = ShapeRegistry::new();
    let colors = ColorScheme::default();
    let fallback = reg.get("triangle").generate(&colors, &opts()).unwrap();
    let oval = ShapeKind::Oval.generate(&colors, &opts()).unwrap();
    assert_eq!(fallback, oval);

    assert!(matches!(
        reg.try_get("triangle"),
        Err(AquariumError::UnknownTemplate(_))
    ));
}

#[test]
fn pattern_areas_stay_inside_view_boxes() {
    let colors = ColorScheme::default();
    for kind in ShapeKind::ALL {
        let shape = kind.generate(&colors, &opts()).unwrap();
        assert!(
            shape
                .view_box
                .contains_rect(shape.pattern_area.bounding_box()),
            "{kind} pattern area escapes its view box"
        );
        assert_eq!(shape.view_box.width, shape.width);
        assert_eq!(shape.view_box.height, shape.height);
    }
}

#[test]
fn fragments_reference_namespaced_gradients() {
    let colors = ColorScheme::default();
    for kind in ShapeKind::ALL {
        let shape = kind.generate(&colors, &opts()).unwrap();
        assert!(shape.defs.contains(r#"id="t-body""#), "{kind}");
        assert!(shape.body.contains("url(#t-body)"), "{kind}");
        assert!(!shape.body.is_empty());
        assert!(shape.face.is_some(), "{kind} has no face");
    }
    let shark = ShapeKind::Streamlined.generate(&colors, &opts()).unwrap();
    assert_eq!(shark.fins, None);
}

#[test]
fn default_palettes_apply_per_shape() {
    let colors = ColorScheme::default();
    let disc = ShapeKind::Disc.generate(&colors, &opts()).unwrap();
    assert!(disc.defs.contains("stop-color:#ec4899"));
    assert!(disc.defs.contains("stop-color:#06b6d4"));

    let round = ShapeKind::Round.generate(&colors, &opts()).unwrap();
    assert!(round.face.unwrap().contains("fill=\"#4a4a4a\""));

    let custom = ColorScheme::new("#0EA5E9", "#FFFFFF", "#111111");
    let oval = ShapeKind::Oval.generate(&custom, &opts()).unwrap();
    assert!(oval.defs.contains("stop-color:#0ea5e9"));
    assert!(!oval.defs.contains("#ff6b35"));
}

#[test]
fn invalid_colors_are_reported() {
    let bad = ColorScheme::new("orange", "#FFFFFF", "#000000");
    assert!(matches!(
        ShapeKind::Oval.generate(&bad, &opts()),
        Err(AquariumError::InvalidColorFormat(_))
    ));
}

#[test]
fn generated_ids_use_the_shape_name() {
    let shape = ShapeKind::Flat
        .generate(&ColorScheme::default(), &ShapeOptions::default())
        .unwrap();
    assert!(shape.defs.contains(r#"id="flat-"#));

    let hostile = ShapeKind::Oval
        .generate(&ColorScheme::default(), &ShapeOptions::with_id("a\"b"))
        .unwrap();
    assert!(hostile.defs.contains(r#"id="a-b-body""#));
}

fn square(colors: &ColorScheme, options: &ShapeOptions) -> AquariumResult<ShapeDescriptor> {
    let mut shape = ShapeKind::Oval.generate(colors, options)?;
    shape.body = r#"<rect x="20" y="10" width="60" height="40"/>"#.to_string();
    shape.pattern_area = PatternArea::new(50.0, 30.0, 30.0, 20.0);
    Ok(shape)
}

#[test]
fn custom_templates_can_be_registered_and_replaced() {
    let mut reg = ShapeRegistry::default();
    reg.register("square", square);
    assert!(reg.contains("square"));
    assert_eq!(reg.available().last(), Some(&"square"));

    let shape = reg
        .get("square")
        .generate(&ColorScheme::default(), &opts())
        .unwrap();
    assert!(shape.body.starts_with("<rect"));
    assert_eq!(Num(shape.pattern_area.rx).to_string(), "30");

    reg.register("oval", ShapeKind::Disc);
    assert_eq!(reg.available().len(), 8);
    let replaced = reg
        .get("oval")
        .generate(&ColorScheme::default(), &opts())
        .unwrap();
    assert_eq!(replaced.width, 90.0);
}

#[test]
fn shared_parts_cover_every_style() {
    use crate::color::hex::Rgb;
    use parts::*;

    let ink = Rgb::new(0x1e, 0x29, 0x3b);
    let paint = FinPaint {
        fill: "#ff6b35",
        stroke: "#000000",
    };

    assert!(eye(10.0, 10.0, EyeSize::Tiny, ink, Facing::Left).contains(r#"r="4""#));

    assert_eq!(MouthStyle::from_name(" Wide "), MouthStyle::Wide);
    assert_eq!(MouthStyle::from_name("o"), MouthStyle::O);
    assert_eq!(MouthStyle::from_name("line"), MouthStyle::Line);
    assert_eq!(MouthStyle::from_name("grin"), MouthStyle::Smile);
    let mouths: std::collections::HashSet<String> = ["smile", "o", "pouty", "line", "wide"]
        .iter()
        .map(|m| mouth(20.0, 20.0, MouthStyle::from_name(m), MouthSize::Small, ink))
        .collect();
    assert_eq!(mouths.len(), 5);
    assert_ne!(
        mouth(20.0, 20.0, MouthStyle::Line, MouthSize::Large, ink),
        mouth(20.0, 20.0, MouthStyle::Line, MouthSize::Small, ink)
    );

    assert!(blush(5.0, 5.0, ink, BlushSize::Large, 0.4).contains(r#"rx="6" ry="3""#));

    let dorsals: std::collections::HashSet<String> = [
        DorsalStyle::Rounded,
        DorsalStyle::Pointed,
        DorsalStyle::Spiky,
        DorsalStyle::Flowing,
    ]
    .into_iter()
    .map(|s| dorsal_fin(10.0, 10.0, 20.0, 8.0, s, paint))
    .collect();
    assert_eq!(dorsals.len(), 4);

    let tails: std::collections::HashSet<String> = [
        TailStyle::Forked,
        TailStyle::Rounded,
        TailStyle::Fan,
        TailStyle::Crescent,
    ]
    .into_iter()
    .map(|s| tail_fin(30.0, 20.0, 10.0, s, paint))
    .collect();
    assert_eq!(tails.len(), 4);
    assert!(tail_fin(30.0, 20.0, 10.0, TailStyle::Rounded, paint).starts_with("<ellipse"));

    assert_eq!(
        anal_fin(10.0, 20.0, 8.0, 4.0, paint),
        r##"<path d="M10 20 Q14 24 18 20" fill="#ff6b35" stroke="#000000" stroke-width="0.5"/>"##
    );
}
