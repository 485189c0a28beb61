use std::collections::HashSet;

use rand::{SeedableRng, rngs::StdRng};

use super::*;

#[test]
fn id_has_prefix_and_base36_suffix() {
    let id = generate_id("clownfish");
    let (prefix, suffix) = id.rsplit_once('-').unwrap();
    assert_eq!(prefix, "clownfish");
    assert_eq!(suffix.len(), SUFFIX_LEN);
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );
}

#[test]
fn ids_do_not_collide_across_a_page_of_fish() {
    let mut rng = StdRng::seed_from_u64(7);
    let ids: HashSet<String> = (0..200)
        .map(|_| generate_id_with("fish", &mut rng))
        .collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn sanitize_keeps_xml_id_tokens_valid() {
    assert_eq!(sanitize_id("blue-tang"), "blue-tang");
    assert_eq!(sanitize_id("angel fish\"><script>"), "angel-fish---script-");
    assert_eq!(sanitize_id(""), "fish");
    assert_eq!(sanitize_id("   "), "fish");
    assert_eq!(sanitize_id("42"), "f42");
    assert_eq!(sanitize_id("-x"), "f-x");
    assert_eq!(sanitize_id("_x"), "_x");
}
