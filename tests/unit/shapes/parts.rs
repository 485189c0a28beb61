use super::*;

const BLACK: Rgb = Rgb::new(0, 0, 0);
const PAINT: FinPaint<'static> = FinPaint {
    fill: "url(#f-body)",
    stroke: "#222222",
};

#[test]
fn eye_offsets_pupil_towards_facing() {
    let right = eye(70.0, 27.0, EyeSize::Medium, BLACK, Facing::Right);
    assert!(right.starts_with(r##"<circle cx="70" cy="27" r="7" fill="#ffffff"/>"##));
    assert!(right.contains(r##"<circle cx="72" cy="27" r="4" fill="#000000"/>"##));
    assert!(right.contains(r#"cx="73" cy="25" r="1.5""#));

    let left = eye(70.0, 27.0, EyeSize::Medium, BLACK, Facing::Left);
    assert!(left.contains(r#"<circle cx="68" cy="27" r="4""#));
}

#[test]
fn eye_pair_draws_six_circles() {
    let pair = eye_pair(35.0, 55.0, 32.0, EyeSize::Large, BLACK);
    assert_eq!(pair.matches("<circle").count(), 6);
    assert!(pair.contains(r#"cx="33" cy="32" r="6""#));
    assert!(pair.contains(r#"cx="57" cy="32" r="6""#));
}

#[test]
fn unknown_mouth_names_fall_back_to_smile() {
    assert_eq!(MouthStyle::from_name("small"), MouthStyle::Smile);
    assert_eq!(MouthStyle::from_name(" Pouty "), MouthStyle::Pouty);
    assert_eq!(MouthStyle::from_name("o"), MouthStyle::O);

    let smile = mouth(82.0, 32.0, MouthStyle::Smile, MouthSize::Medium, BLACK);
    assert!(smile.contains(r#"d="M82 32 Q86 35 82 38""#));
    assert!(smile.contains(r#"fill="none""#));
}

#[test]
fn pouty_mouth_has_lips_and_seam() {
    let m = mouth(70.0, 45.0, MouthStyle::Pouty, MouthSize::Medium, BLACK);
    assert!(m.contains(r#"rx="4" ry="2""#));
    assert!(m.contains(r#"d="M67 45 L73 45""#));
}

#[test]
fn blush_is_lightened_from_base() {
    let b = blush(72.0, 40.0, Rgb::new(0xff, 0x6b, 0x35), BlushSize::Medium, 0.5);
    // 0x6b + 102 = 0xd1, 0x35 + 102 = 0x9b
    assert!(b.contains(r##"fill="#ffd19b""##));
    assert!(b.contains(r#"opacity="0.5""#));
    assert_eq!(
        blush_pair(1.0, 2.0, 3.0, BLACK, BlushSize::Small, 0.4)
            .matches("<ellipse")
            .count(),
        2
    );
}

#[test]
fn dorsal_styles_share_the_base_line() {
    let rounded = dorsal_fin(35.0, 10.0, 20.0, 8.0, DorsalStyle::Rounded, PAINT);
    assert!(rounded.contains(r#"d="M35 10 Q45 2 55 10""#));
    let pointed = dorsal_fin(35.0, 10.0, 20.0, 8.0, DorsalStyle::Pointed, PAINT);
    assert!(pointed.contains(r#"d="M35 10 Q45 -2 55 10""#));

    let spiky = dorsal_fin(0.0, 10.0, 30.0, 6.0, DorsalStyle::Spiky, PAINT);
    assert!(spiky.contains(r#"d="M0 10 L5 4 L10 10 L15 4 L20 10 L25 4 L30 10""#));

    let flowing = dorsal_fin(0.0, 10.0, 10.0, 10.0, DorsalStyle::Flowing, PAINT);
    assert!(flowing.contains(r#"d="M0 10 Q3 0 5 2 Q7 4 10 10""#));
}

#[test]
fn pectoral_rotation_is_optional() {
    let flat = pectoral_fin(60.0, 38.0, 10.0, 5.0, 0.0, PAINT);
    assert!(!flat.contains("transform"));
    let tilted = pectoral_fin(60.0, 38.0, 10.0, 5.0, -20.0, PAINT);
    assert!(tilted.contains(r#"transform="rotate(-20 60 38)""#));
}

#[test]
fn tail_styles_extend_left_of_anchor() {
    let forked = tail_fin(18.0, 30.0, 12.0, TailStyle::Forked, PAINT);
    assert!(forked.contains(r#"d="M18 30 Q12 18 6 20.4 Q14.4 30 6 39.6 Q12 42 18 30""#));

    let rounded = tail_fin(18.0, 30.0, 12.0, TailStyle::Rounded, PAINT);
    assert!(rounded.starts_with(r#"<ellipse cx="12" cy="30" rx="6" ry="12""#));

    let fan = tail_fin(20.0, 30.0, 10.0, TailStyle::Fan, PAINT);
    assert!(fan.contains(r#"d="M20 30 L10 20 Q8 30 10 40 Z""#));

    let crescent = tail_fin(20.0, 30.0, 10.0, TailStyle::Crescent, PAINT);
    assert!(crescent.contains("M20 30 Q12 25 10 27"));
}

#[test]
fn anal_fin_hangs_below_base() {
    let fin = anal_fin(40.0, 50.0, 15.0, 8.0, PAINT);
    assert!(fin.contains(r#"d="M40 50 Q47.5 58 55 50""#));
    assert!(fin.contains(r##"stroke="#222222""##));
}
