//! Bit-reproducible hashing and pseudo-random numbers.
//!
//! Everything here uses fixed-width 32-bit wrapping arithmetic so that a date string hashes to
//! the same seed, and a seed shuffles to the same permutation, on every platform.

/// Polynomial rolling hash (`h * 31 + unit`) over UTF-16 code units, in signed 32-bit wrapping
/// arithmetic, returning the absolute value.
pub fn hash_string(s: &str) -> u32 {
    let hash = s.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// Mulberry32 generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// Generator seeded with `seed`.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next output scaled into `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// First draw of a [`Mulberry32`] seeded with `seed`.
pub fn seeded_random(seed: u32) -> f64 {
    Mulberry32::new(seed).next_f64()
}

/// Fisher-Yates shuffle driven by `seed`.
///
/// Step `i` (from the last index down to 1) draws its swap index from a fresh seed,
/// `hash_string(decimal(seed + i))`, rather than from a running stream.
pub fn seeded_shuffle<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let step_seed = hash_string(&(u64::from(seed) + i as u64).to_string());
        let j = (seeded_random(step_seed) * (i + 1) as f64).floor() as usize;
        out.swap(i, j.min(i));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/selection/rng.rs"]
mod tests;
