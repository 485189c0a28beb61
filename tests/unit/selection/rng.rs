use super::*;

#[test]
fn hash_matches_reference_values() {
    assert_eq!(hash_string(""), 0);
    assert_eq!(hash_string("hello"), 99_162_322);
    assert_eq!(hash_string("2024-01-01"), 613_341_632);
    assert_eq!(hash_string("2025-06-15"), 274_311_039);
    // Overflows several times before the sign is dropped.
    assert_eq!(hash_string(&"a".repeat(20)), 1_542_361_408);
}

#[test]
fn hash_uses_utf16_code_units() {
    assert_eq!(hash_string("é"), 233);
}

#[test]
fn mulberry_stream_is_reproducible() {
    let mut rng = Mulberry32::new(0);
    assert_eq!(rng.next_u32(), 1_144_304_738);
    assert_eq!(rng.next_u32(), 1_416_247);
    assert_eq!(rng.next_u32(), 958_946_056);

    let mut rng = Mulberry32::new(42);
    assert_eq!(rng.next_u32(), 2_581_720_956);
    assert_eq!(rng.next_u32(), 1_925_393_290);
}

#[test]
fn seeded_random_is_the_first_draw() {
    assert_eq!(seeded_random(0), 1_144_304_738.0 / 4_294_967_296.0);
    for seed in [0, 1, 613_341_632, u32::MAX] {
        let v = seeded_random(seed);
        assert!((0.0..1.0).contains(&v));
        assert_eq!(v, Mulberry32::new(seed).next_f64());
    }
}

#[test]
fn shuffle_matches_reference_permutations() {
    let seed = hash_string("2024-01-01");
    assert_eq!(seeded_shuffle(&[1, 2, 3, 4, 5], seed), vec![4, 1, 5, 2, 3]);
    assert_eq!(
        seeded_shuffle(&[1, 2, 3, 4, 5], hash_string("2024-01-02")),
        vec![3, 1, 5, 4, 2]
    );
}

#[test]
fn shuffle_is_a_permutation() {
    let items: Vec<u32> = (0..50).collect();
    let mut shuffled = seeded_shuffle(&items, 12_345);
    assert_eq!(shuffled, seeded_shuffle(&items, 12_345));
    assert_ne!(shuffled, items);
    shuffled.sort_unstable();
    assert_eq!(shuffled, items);
}

#[test]
fn shuffle_handles_tiny_inputs() {
    assert!(seeded_shuffle::<u8>(&[], 1).is_empty());
    assert_eq!(seeded_shuffle(&["only"], 1), vec!["only"]);
    // `seed + i` must not wrap at 32 bits.
    let mut two = seeded_shuffle(&[1, 2], u32::MAX);
    two.sort_unstable();
    assert_eq!(two, vec![1, 2]);
}
