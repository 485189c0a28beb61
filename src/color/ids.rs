use rand::Rng;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 7;

/// Build a unique-enough id (`prefix-xxxxxxx`) for namespacing SVG definitions.
///
/// Uniqueness only needs to hold across the few dozen fish drawn on one page.
pub fn generate_id(prefix: &str) -> String {
    generate_id_with(prefix, &mut rand::thread_rng())
}

/// [`generate_id`] with a caller-supplied RNG.
pub fn generate_id_with<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| char::from(BASE36[rng.gen_range(0..BASE36.len())]))
        .collect();
    format!("{}-{suffix}", sanitize_id(prefix))
}

/// Reduce `raw` to characters that are safe inside an XML `id` attribute.
pub fn sanitize_id(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();

    match cleaned.chars().next() {
        None => "fish".to_owned(),
        // XML names cannot start with a digit or hyphen.
        Some(c) if !c.is_ascii_alphabetic() && c != '_' => format!("f{cleaned}"),
        Some(_) => cleaned,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/ids.rs"]
mod tests;
