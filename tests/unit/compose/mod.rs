use super::*;
use crate::catalog::FishRecord;
use crate::color::scheme::ColorScheme;
use crate::foundation::core::{PatternArea, ViewBox};
use crate::foundation::error::{AquariumError, AquariumResult};
use crate::patterns::{PatternOptions, PatternResult};
use crate::shapes::{ShapeDescriptor, ShapeOptions};

fn fish(id: &str, shape: &str, pattern: &str) -> FishRecord {
    let mut record = FishRecord::new(id);
    record.name = "Test Fish".to_string();
    record.appearance.body_shape = Some(shape.to_string());
    record.appearance.pattern = Some(pattern.to_string());
    record.colors = ColorScheme::new("#2563EB", "#FCD34D", "#111827");
    record
}

fn probe_renderer() -> FishRenderer {
    let mut renderer = FishRenderer::default();
    renderer.shapes_mut().register(
        "probe",
        |_: &ColorScheme, o: &ShapeOptions| -> AquariumResult<ShapeDescriptor> {
            let id = o.id.clone().unwrap_or_default();
            Ok(ShapeDescriptor {
                view_box: ViewBox::sized(40.0, 20.0),
                width: 40.0,
                height: 20.0,
                defs: format!(r#"<linearGradient id="{id}-shape"/>"#),
                tail: Some(r#"<g id="tail"/>"#.to_string()),
                body: r#"<g id="body"/>"#.to_string(),
                fins: Some(r#"<g id="fins"/>"#.to_string()),
                face: Some(r#"<g id="face"/>"#.to_string()),
                pattern_area: PatternArea::new(20.0, 10.0, 10.0, 5.0),
            })
        },
    );
    renderer.patterns_mut().register(
        "probe",
        |_: &ColorScheme, _: PatternArea, o: &PatternOptions| -> AquariumResult<PatternResult> {
            let id = o.id.clone().unwrap_or_default();
            Ok(PatternResult::WithDefs {
                defs: format!(r#"<clipPath id="{id}-pattern"/>"#),
                elements: r#"<g id="pattern"/>"#.to_string(),
            })
        },
    );
    renderer
}

#[test]
fn fragments_are_stacked_tail_body_pattern_fins_face() {
    let renderer = probe_renderer();
    let svg = renderer.render_with_id(&fish("p", "probe", "probe"), "p");
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 40 20" width="40" height="20">"#));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(
        r#"<defs><linearGradient id="p-shape"/><clipPath id="p-pattern"/></defs>"#
    ));
    assert!(svg.contains(
        r#"<g id="p-fish"><g id="tail"/><g id="body"/><g id="pattern"/><g id="fins"/><g id="face"/></g>"#
    ));
}

#[test]
fn missing_fragments_render_as_nothing() {
    let mut renderer = probe_renderer();
    renderer.shapes_mut().register(
        "bare",
        |_: &ColorScheme, _: &ShapeOptions| -> AquariumResult<ShapeDescriptor> {
            Ok(ShapeDescriptor {
                view_box: ViewBox::sized(10.0, 10.0),
                width: 10.0,
                height: 10.0,
                defs: String::new(),
                tail: None,
                body: "<circle r=\"4\"/>".to_string(),
                fins: None,
                face: None,
                pattern_area: PatternArea::new(5.0, 5.0, 3.0, 3.0),
            })
        },
    );
    let svg = renderer.render_with_id(&fish("b", "bare", "solid"), "b");
    assert!(svg.contains(r#"<g id="b-fish"><circle r="4"/>"#));
}

#[test]
fn rendering_with_an_id_is_deterministic() {
    let renderer = FishRenderer::default();
    let record = fish("clownfish", "oval", "spotted");
    let a = renderer.render_with_id(&record, "clownfish");
    assert_eq!(a, renderer.render_with_id(&record, "clownfish"));
    assert!(a.contains(r#"<g id="clownfish-fish">"#));
    assert_ne!(a, renderer.render_with_id(&record, "other"));
}

#[test]
fn random_ids_differ_between_renders() {
    let renderer = FishRenderer::default();
    let record = fish("clownfish", "oval", "striped");
    let a = renderer.render(&record);
    let b = renderer.render(&record);
    assert!(a.starts_with("<svg"));
    assert!(a.contains(r#"<g id="clownfish-"#));
    assert_ne!(a, b);
    assert!(generate_fish_svg(&record).starts_with("<svg"));
}

#[test]
fn missing_colors_use_the_default_scheme() {
    let renderer = FishRenderer::default();
    let mut bare = FishRecord::new("plain");
    bare.colors = ColorScheme::default();
    let mut explicit = FishRecord::new("plain");
    explicit.colors = ColorScheme::new("#FF6B35", "#FFFFFF", "#000000");
    assert_eq!(
        renderer.render_with_id(&bare, "x"),
        renderer.render_with_id(&explicit, "x")
    );
}

#[test]
fn unknown_names_fall_back_to_oval_and_solid() {
    let renderer = FishRenderer::default();
    assert_eq!(
        renderer.render_with_id(&fish("k", "kraken", "paisley"), "k"),
        renderer.render_with_id(&fish("k", "oval", "solid"), "k")
    );
    assert!(renderer.can_use_template(&fish("k", "disc", "solid")));
    assert!(renderer.can_use_template(&FishRecord::new("defaults")));
    assert!(!renderer.can_use_template(&fish("k", "kraken", "solid")));
}

#[test]
fn pattern_options_are_forwarded() {
    let renderer = FishRenderer::default();
    let plain = fish("s", "oval", "striped");
    let mut custom = plain.clone();
    custom.appearance.pattern_options = Some(serde_json::json!({ "stripeCount": 2 }));
    assert_ne!(
        renderer.render_with_id(&plain, "s"),
        renderer.render_with_id(&custom, "s")
    );

    custom.appearance.pattern_options = Some(serde_json::json!({ "stripeCount": "many" }));
    assert!(matches!(
        renderer.try_render(&custom, "s"),
        Err(AquariumError::Generation(_))
    ));
    assert!(renderer.render_with_id(&custom, "s").starts_with("<img "));
}

#[test]
fn generation_failures_fall_back_to_the_static_image() {
    let renderer = FishRenderer::default();
    let mut record = fish("bad", "oval", "solid");
    record.name = String::new();
    record.colors.primary = Some("#GGGGGG".to_string());

    assert!(matches!(
        renderer.try_render(&record, "bad"),
        Err(AquariumError::InvalidColorFormat(_))
    ));
    assert_eq!(
        renderer.render(&record),
        r#"<img src="assets/fish/bad.svg" alt="Fish" class="fish__sprite"/>"#
    );

    record.name = r#"Tom & "Jerry" <3"#.to_string();
    record.image = Some("img/a&b.png".to_string());
    assert_eq!(
        fallback_image(&record),
        r#"<img src="img/a&amp;b.png" alt="Tom &amp; &quot;Jerry&quot; &lt;3" class="fish__sprite"/>"#
    );
}

#[test]
fn rasterizes_to_png() {
    let svg = FishRenderer::default().render_with_id(&fish("r", "oval", "spotted"), "r");
    let tree = parse_svg(&svg).unwrap();
    assert_eq!(tree.size().width(), 100.0);

    let png = rasterize_png(&svg, 2.0).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (200, 120));
    let rgba = decoded.to_rgba8();
    assert!(rgba.pixels().any(|p| p.0[3] == 255), "nothing was drawn");

    assert!(matches!(
        rasterize_png(&svg, 0.0),
        Err(AquariumError::Validation(_))
    ));
    assert!(matches!(
        rasterize_png(&svg, 1000.0),
        Err(AquariumError::Validation(_))
    ));
    assert!(parse_svg("<svg").is_err());
}

#[test]
fn batch_rendering_keeps_order() {
    let renderer = FishRenderer::default();
    let records: Vec<FishRecord> = ["oval", "disc", "round", "flat", "elongated"]
        .iter()
        .enumerate()
        .map(|(i, shape)| fish(&format!("fish {i}"), shape, "banded"))
        .collect();

    let batch = render_batch(&renderer, &records);
    assert_eq!(batch.len(), records.len());
    for (out, record) in batch.iter().zip(&records) {
        assert_eq!(out.id, record.id);
        assert_eq!(out.markup, renderer.render_with_id(record, &record.id));
    }
    assert_eq!(
        render_batch_with_threads(&renderer, &records, 2).unwrap(),
        batch
    );
    assert!(render_batch_with_threads(&renderer, &records, 0).is_err());
}

#[test]
fn panicking_templates_fall_back_to_the_static_image() {
    let mut renderer = FishRenderer::default();
    renderer.shapes_mut().register(
        "broken",
        |_: &ColorScheme, _: &ShapeOptions| -> AquariumResult<ShapeDescriptor> {
            let parts: Vec<ShapeDescriptor> = Vec::new();
            Ok(parts[0].clone())
        },
    );
    let record = fish("glass", "broken", "solid");

    let err = renderer.try_render(&record, "glass").unwrap_err();
    assert!(matches!(err, AquariumError::Generation(_)));
    assert_eq!(
        renderer.render(&record),
        r#"<img src="assets/fish/glass.svg" alt="Test Fish" class="fish__sprite"/>"#
    );
}
