use super::*;
use serde_json::json;

const AREA: PatternArea = PatternArea::new(50.0, 30.0, 35.0, 22.0);

const WITH_DEFS: [&str; 13] = [
    "gradient",
    "bicolor",
    "half-dark",
    "capped",
    "pearlscale",
    "eyespot",
    "mimic",
    "velvet",
    "nearly-solid",
    "mostly-white",
    "multicolor",
    "flame",
    "crowned",
];

fn run(name: &str, opts: &PatternOptions) -> AquariumResult<PatternResult> {
    PatternRegistry::new()
        .get(name)
        .generate(&ColorScheme::default(), AREA, opts)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn registry_holds_every_builtin_once() {
    let reg = PatternRegistry::new();
    let names = reg.available();
    assert_eq!(names.len(), 45);
    assert_eq!(&names[..3], &["solid", "striped", "gradient"]);
    assert_eq!(names.last(), Some(&"marked"));

    let mut unique = names.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), names.len());

    assert_eq!(builtin_patterns().collect::<Vec<_>>(), names);
}

#[test]
fn unknown_pattern_falls_back_to_solid() {
    let out = run("paisley", &PatternOptions::with_id("t")).unwrap();
    assert_eq!(out, PatternResult::Bare(String::new()));

    let err = PatternRegistry::new().try_get("paisley").err().unwrap();
    assert!(matches!(err, AquariumError::UnknownTemplate(_)));
}

#[test]
fn every_builtin_is_deterministic_for_a_fixed_id() {
    let opts = PatternOptions::with_id("t");
    for name in builtin_patterns() {
        let first = run(name, &opts).unwrap();
        let second = run(name, &opts).unwrap();
        assert_eq!(first, second, "{name}");
        if name != "solid" {
            assert!(!first.elements().is_empty(), "{name} drew nothing");
        }
        assert!(!first.elements().contains("NaN"), "{name}");
    }
}

#[test]
fn definitions_are_namespaced_by_the_id() {
    let opts = PatternOptions::with_id("reef");
    for name in builtin_patterns() {
        let out = run(name, &opts).unwrap();
        let has_defs = WITH_DEFS.contains(&name);
        assert_eq!(matches!(out, PatternResult::WithDefs { .. }), has_defs, "{name}");
        if has_defs {
            assert!(out.defs().contains(r#"id="reef-"#), "{name}: {}", out.defs());
            assert!(out.elements().contains("url(#reef-"), "{name}");
        } else {
            assert_eq!(out.defs(), "");
        }
    }
}

#[test]
fn generated_ids_differ_between_calls() {
    let a = run("flame", &PatternOptions::default()).unwrap();
    let b = run("flame", &PatternOptions::default()).unwrap();
    assert!(a.defs().contains(r#"id="flame-"#));
    assert_ne!(a.defs(), b.defs());
}

#[test]
fn striped_defaults_and_overrides() {
    let plain = run("striped", &PatternOptions::with_id("t")).unwrap();
    // Three stripes, each drawn over a border stroke.
    assert_eq!(count(plain.elements(), "<path"), 6);
    assert!(plain.elements().contains(r##"stroke="#ffffff""##));
    assert!(plain.elements().contains(r##"stroke="#000000""##));

    let opts = PatternOptions::with_id("t").params(json!({
        "stripeCount": 5,
        "withBorder": false,
        "stripeColor": "#123456",
    }));
    let custom = run("striped", &opts).unwrap();
    assert_eq!(count(custom.elements(), "<path"), 5);
    assert_eq!(count(custom.elements(), r##"stroke="#123456""##), 5);
}

#[test]
fn feature_counts_are_clamped() {
    let opts = PatternOptions::with_id("t").params(json!({ "spotCount": 100_000 }));
    let out = run("spotted", &opts).unwrap();
    assert_eq!(count(out.elements(), "<circle"), MAX_FEATURES);

    let none = PatternOptions::with_id("t").params(json!({ "spotCount": 0 }));
    assert_eq!(run("spotted", &none).unwrap().elements(), "");
}

#[test]
fn null_params_mean_defaults() {
    let explicit = PatternOptions::with_id("t").params(json!({ "spotCount": null }));
    assert_eq!(
        run("spotted", &explicit).unwrap(),
        run("spotted", &PatternOptions::with_id("t")).unwrap()
    );
}

#[test]
fn malformed_params_are_rejected() {
    let not_object = PatternOptions::with_id("t").params(json!([1, 2, 3]));
    assert!(matches!(
        run("striped", &not_object),
        Err(AquariumError::Generation(_))
    ));

    let bad_count = PatternOptions::with_id("t").params(json!({ "stripeCount": "three" }));
    assert!(matches!(
        run("striped", &bad_count),
        Err(AquariumError::Generation(_))
    ));

    let negative = PatternOptions::with_id("t").params(json!({ "spotCount": -2 }));
    assert!(matches!(
        run("spotted", &negative),
        Err(AquariumError::Generation(_))
    ));

    let bad_color = PatternOptions::with_id("t").params(json!({ "stripeColor": "teal" }));
    assert!(matches!(
        run("striped", &bad_color),
        Err(AquariumError::InvalidColorFormat(_))
    ));
}

#[test]
fn invalid_scheme_colors_propagate() {
    let colors = ColorScheme::new("#FF6B35", "not-a-color", "#000000");
    let err = PatternRegistry::new()
        .get("spotted")
        .generate(&colors, AREA, &PatternOptions::with_id("t"))
        .unwrap_err();
    assert!(matches!(err, AquariumError::InvalidColorFormat(_)));
}

#[test]
fn bicolor_splits_at_the_requested_position() {
    let out = run("bicolor", &PatternOptions::with_id("t")).unwrap();
    assert!(out.defs().contains(r#"<clipPath id="t-clip"><rect x="50" y="8""#));

    let opts = PatternOptions::with_id("t").params(json!({ "splitPosition": 0.25 }));
    let out = run("bicolor", &opts).unwrap();
    assert!(out.defs().contains(r#"x="32.5""#), "{}", out.defs());
}

#[test]
fn gradient_direction_switches_the_axis() {
    let vertical = run("gradient", &PatternOptions::with_id("t")).unwrap();
    assert!(vertical.defs().contains(r#"x2="0%" y2="100%""#));

    let opts = PatternOptions::with_id("t").params(json!({ "direction": "horizontal" }));
    let horizontal = run("gradient", &opts).unwrap();
    assert!(horizontal.defs().contains(r#"x2="100%" y2="0%""#));
}

#[test]
fn target_draws_shrinking_rings() {
    let out = run("target", &PatternOptions::with_id("t")).unwrap();
    let e = out.elements();
    assert_eq!(count(e, "<circle"), 3);
    // min(35, 22) * 0.4 = 8.8, then two thirds and one third of it.
    assert!(e.contains(r#"r="8.8""#));
    assert!(e.contains(r#"r="5.867""#));
    assert!(e.contains(r#"r="2.933""#));
}

#[test]
fn scaled_handles_empty_grids() {
    let opts = PatternOptions::with_id("t").params(json!({ "rows": 0 }));
    assert_eq!(run("scaled", &opts).unwrap().elements(), "");
}

#[test]
fn custom_patterns_can_be_registered() {
    let mut reg = PatternRegistry::new();
    reg.register(
        "dot",
        |_: &ColorScheme, area: PatternArea, _: &PatternOptions| -> AquariumResult<PatternResult> {
            Ok(PatternResult::Bare(format!(r#"<circle cx="{}"/>"#, area.cx)))
        },
    );
    assert!(reg.contains("dot"));
    assert_eq!(reg.available().len(), 46);
    let out = reg
        .get("dot")
        .generate(&ColorScheme::default(), AREA, &PatternOptions::default())
        .unwrap();
    assert_eq!(out.into_parts(), (String::new(), r#"<circle cx="50"/>"#.to_owned()));
}
