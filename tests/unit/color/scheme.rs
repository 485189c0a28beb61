use super::*;
use crate::foundation::error::AquariumError;

const DEFAULTS: Palette = Palette::new(
    Rgb::new(0xff, 0x6b, 0x35),
    Rgb::new(0xff, 0xff, 0xff),
    Rgb::new(0x00, 0x00, 0x00),
);

#[test]
fn missing_channels_take_defaults() {
    let scheme = ColorScheme {
        primary: Some("#0EA5E9".to_string()),
        ..ColorScheme::default()
    };
    let p = scheme.resolve(DEFAULTS).unwrap();
    assert_eq!(p.primary.to_string(), "#0ea5e9");
    assert_eq!(p.secondary, DEFAULTS.secondary);
    assert_eq!(p.accent, DEFAULTS.accent);
}

#[test]
fn malformed_channel_is_an_invalid_color_error() {
    let scheme = ColorScheme {
        accent: Some("black".to_string()),
        ..ColorScheme::default()
    };
    assert!(matches!(
        scheme.resolve(DEFAULTS),
        Err(AquariumError::InvalidColorFormat(_))
    ));
}

#[test]
fn json_omits_unset_channels() {
    let scheme: ColorScheme = serde_json::from_str(r##"{"primary":"#111111"}"##).unwrap();
    assert_eq!(scheme.secondary, None);
    let out = serde_json::to_string(&scheme).unwrap();
    assert_eq!(out, r##"{"primary":"#111111"}"##);

    let full: ColorScheme = DEFAULTS.into();
    assert_eq!(full.primary.as_deref(), Some("#ff6b35"));
}
