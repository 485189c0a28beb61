use super::*;
use crate::catalog::{FishSummary, WaterType};
use crate::foundation::core::Point;
use crate::foundation::error::AquariumError;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::rngs::mock::StepRng;
use std::collections::HashSet;

const TANK: TankBounds = TankBounds::new(800.0, 600.0);

fn reef(n: usize) -> Vec<FishSummary> {
    let shapes = ["oval", "disc", "round", "streamlined", "unusual", "flat", "elongated"];
    (0..n)
        .map(|i| FishSummary {
            id: format!("fish-{i}"),
            body_shape: shapes[i % shapes.len()].to_string(),
            primary_color: format!("#{:06X}", i * 0x1F3D),
            water_type: WaterType::Saltwater,
            habitat: "reef".to_string(),
        })
        .collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

// Always yields the maximum value: coin flips come up false and ranges draw near their top.
fn high_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

#[test]
fn config_defaults_and_camel_case_parsing() {
    let c = AquariumConfig::default();
    assert_eq!(c.display_mode, DisplayMode::Daily);
    assert_eq!(c.max_fish, 8);
    assert_eq!(c.rotate_interval, 30_000);
    assert!(c.shuffle_on_load && c.enable_diverse_selection);

    let parsed =
        AquariumConfig::from_reader(r#"{"displayMode":"rotate","maxFish":3}"#.as_bytes()).unwrap();
    assert_eq!(parsed.display_mode, DisplayMode::Rotate);
    assert_eq!(parsed.max_fish, 3);
    assert_eq!(parsed.rotate_interval, 30_000);

    let json = serde_json::to_string(&parsed).unwrap();
    assert!(json.contains(r#""enableDiverseSelection":true"#));
    assert_eq!(DisplayMode::Limited.to_string(), "limited");
}

#[test]
fn config_rejects_unusable_values() {
    for bad in [
        r#"{"maxFish":0}"#,
        r#"{"rotateInterval":0}"#,
        r#"{"displayMode":"sometimes"}"#,
        "not json",
    ] {
        let err = AquariumConfig::from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, AquariumError::Validation(_)), "{bad}: {err}");
    }
    let missing = AquariumConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(matches!(missing, AquariumError::Validation(_)));
}

#[test]
fn swimmers_spawn_inside_the_open_water() {
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..200 {
        let s = Swimmer::spawn(TANK, &mut rng);
        assert!((100.0..=700.0).contains(&s.position.x));
        assert!((80.0..=480.0).contains(&s.position.y));
        assert!((0.3..=0.8).contains(&s.vx.abs()));
        assert!((0.1..=0.3).contains(&s.vy.abs()));
        assert_eq!(s.flipped, s.vx < 0.0);
    }

    let tiny = TankBounds::new(50.0, 40.0);
    let s = Swimmer::spawn(tiny, &mut rng);
    assert!(tiny.contains(s.position));
}

#[test]
fn swimmers_never_leave_the_tank() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut s = Swimmer::spawn(TANK, &mut rng);
    for _ in 0..20_000 {
        s.step(TANK, &mut rng);
        assert!(TANK.contains(s.position), "{:?}", s.position);
        assert!(s.vx.abs() <= 1.0);
        assert!(s.vy.abs() <= 0.5);
    }
}

#[test]
fn side_walls_reverse_and_flip() {
    let mut s = Swimmer {
        position: Point::new(760.0, 300.0),
        vx: 0.5,
        vy: 0.2,
        flipped: false,
    };
    s.step(TANK, &mut high_rng());
    assert_eq!(s.vx, -0.5);
    assert!(s.flipped);
    assert!(s.vy > 0.2 && s.vy <= 0.3);

    s.position = Point::new(40.0, 300.0);
    s.step(TANK, &mut high_rng());
    assert_eq!(s.vx, 0.5);
    assert!(!s.flipped);
}

#[test]
fn surface_and_floor_reverse_vertical_speed() {
    let mut s = Swimmer {
        position: Point::new(400.0, 60.1),
        vx: 0.5,
        vy: -0.2,
        flipped: false,
    };
    s.step(TANK, &mut high_rng());
    assert_eq!(s.vy, 0.2);
    assert!(s.vx > 0.5 && s.vx <= 0.6);

    s.position = Point::new(400.0, 530.0);
    s.step(TANK, &mut high_rng());
    assert_eq!(s.vy, -0.2);
}

#[test]
fn roster_spawns_per_config() {
    let index = reef(12);
    let mut rng = StdRng::seed_from_u64(1);

    let mut daily = Roster::new(AquariumConfig::default(), TANK);
    daily.spawn(&index, today(), &mut rng);
    let expected: Vec<String> = crate::selection::select_daily_fish_on(&index, 8, today())
        .into_iter()
        .map(|f| f.id)
        .collect();
    assert_eq!(daily.ids(), expected);
    assert!(daily.residents().iter().all(|r| TANK.contains(r.swimmer.position)));

    let all = AquariumConfig {
        display_mode: DisplayMode::All,
        ..AquariumConfig::default()
    };
    let mut roster = Roster::new(all, TANK);
    roster.spawn(&index, today(), &mut rng);
    assert_eq!(roster.len(), 12);
}

#[test]
fn swap_all_replaces_the_whole_tank() {
    let index = reef(12);
    let mut rng = StdRng::seed_from_u64(2);
    let config = AquariumConfig {
        display_mode: DisplayMode::Limited,
        max_fish: 4,
        ..AquariumConfig::default()
    };
    let mut roster = Roster::new(config, TANK);
    roster.spawn(&index, today(), &mut rng);
    let before: HashSet<String> = roster.ids().into_iter().collect();
    assert_eq!(before.len(), 4);

    roster.swap_all(&index, &mut rng);
    assert_eq!(roster.len(), 4);
    assert!(roster.ids().iter().all(|id| !before.contains(id)));

    let plain = AquariumConfig {
        enable_diverse_selection: false,
        max_fish: 5,
        ..AquariumConfig::default()
    };
    let mut roster = Roster::new(plain, TANK);
    roster.swap_all(&index, &mut rng);
    assert_eq!(roster.len(), 5);
}

#[test]
fn rotate_one_swaps_a_single_fish() {
    let index = reef(10);
    let mut rng = StdRng::seed_from_u64(3);
    let config = AquariumConfig {
        display_mode: DisplayMode::Rotate,
        max_fish: 4,
        ..AquariumConfig::default()
    };
    let mut roster = Roster::new(config, TANK);
    assert_eq!(roster.rotate_one(&index, &mut rng), None);

    roster.spawn(&index, today(), &mut rng);
    for _ in 0..30 {
        let before = roster.ids();
        let Rotation { removed, added } = roster.rotate_one(&index, &mut rng).unwrap();
        assert!(before.contains(&removed));
        assert!(!before.contains(&added));
        assert!(roster.contains(&added));
        assert!(!roster.contains(&removed));
        assert_eq!(roster.len(), 4);
        let unique: HashSet<String> = roster.ids().into_iter().collect();
        assert_eq!(unique.len(), 4);
    }
}

#[test]
fn rotate_one_is_a_no_op_for_small_catalogs() {
    let index = reef(4);
    let mut rng = StdRng::seed_from_u64(4);
    let config = AquariumConfig {
        display_mode: DisplayMode::Rotate,
        max_fish: 4,
        ..AquariumConfig::default()
    };
    let mut roster = Roster::new(config, TANK);
    roster.spawn(&index, today(), &mut rng);
    let before = roster.ids();
    assert_eq!(roster.rotate_one(&index, &mut rng), None);
    assert_eq!(roster.ids(), before);
}

#[test]
fn stepping_and_resizing_keep_fish_inside() {
    let index = reef(6);
    let mut rng = StdRng::seed_from_u64(5);
    let mut roster = Roster::new(AquariumConfig::default(), TANK);
    roster.spawn(&index, today(), &mut rng);
    let small = TankBounds::new(300.0, 200.0);
    roster.resize(small);
    roster.step(&mut rng);
    assert!(roster.residents().iter().all(|r| small.contains(r.swimmer.position)));
}
