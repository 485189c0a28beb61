use super::*;

#[test]
fn parse_accepts_common_spellings() {
    let expected = Rgb::new(0xff, 0x6b, 0x35);
    assert_eq!(Rgb::parse("#FF6B35").unwrap(), expected);
    assert_eq!(Rgb::parse("ff6b35").unwrap(), expected);
    assert_eq!(Rgb::parse("  #ff6B35 ").unwrap(), expected);
    assert_eq!("#FF6B35".parse::<Rgb>().unwrap(), expected);
}

#[test]
fn parse_rejects_malformed_input() {
    for bad in ["", "#", "#FFF", "#FF6B3", "#FF6B355", "#GG0000", "red", "#FF 6B3"] {
        let err = Rgb::parse(bad).unwrap_err();
        assert!(
            matches!(err, AquariumError::InvalidColorFormat(_)),
            "{bad:?} -> {err}"
        );
    }
}

#[test]
fn display_is_lowercase_six_digit_hex() {
    assert_eq!(Rgb::new(0, 10, 255).to_string(), "#000aff");
}

#[test]
fn lighten_and_darken_shift_by_rounded_percent() {
    // round(2.55 * 15) = 38
    assert_eq!(lighten("#FF6B35", 15.0).unwrap(), "#ff915b");
    assert_eq!(darken("#FF6B35", 15.0).unwrap(), "#d9450f");
    // round(2.55 * 10) = 26 (25.5 rounds half away from zero)
    assert_eq!(lighten("#000000", 10.0).unwrap(), "#1a1a1a");
}

#[test]
fn channel_arithmetic_clamps() {
    assert_eq!(lighten("#F0F0F0", 50.0).unwrap(), "#ffffff");
    assert_eq!(darken("#101010", 50.0).unwrap(), "#000000");
    assert_eq!(lighten("#808080", 1000.0).unwrap(), "#ffffff");
    assert_eq!(darken("#808080", f64::INFINITY).unwrap(), "#808080");
}

#[test]
fn lighten_darken_is_lossy_near_the_edges() {
    let c = "#F0F0F0";
    let back = lighten(&darken(c, 10.0).unwrap(), 10.0).unwrap();
    assert_eq!(back, "#f0f0f0");

    let clipped = darken(&lighten(c, 10.0).unwrap(), 10.0).unwrap();
    assert_ne!(clipped, "#f0f0f0");
}

#[test]
fn outputs_stay_valid_across_percent_range() {
    for hex in ["#000000", "#FFFFFF", "#FF6B35", "#1E293B", "#7F7F7F"] {
        for p in 0..=100 {
            for out in [
                lighten(hex, f64::from(p)).unwrap(),
                darken(hex, f64::from(p)).unwrap(),
            ] {
                assert_eq!(out.len(), 7);
                assert!(Rgb::parse(&out).is_ok(), "{out}");
            }
        }
    }
}

#[test]
fn with_alpha_formats_rgba() {
    assert_eq!(with_alpha("#FF6B35", 0.5).unwrap(), "rgba(255, 107, 53, 0.5)");
    assert_eq!(with_alpha("#000000", 1.0).unwrap(), "rgba(0, 0, 0, 1)");
    assert!(with_alpha("nope", 0.5).is_err());
}
