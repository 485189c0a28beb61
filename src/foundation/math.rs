use std::fmt;

/// Coordinate formatter for SVG attributes.
///
/// Values are rounded to three decimals so output stays byte-stable across platforms whose
/// `sin`/`cos` differ in the last ulp. Integral values print without a fraction and negative zero
/// prints as `0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = round_to(self.0, 1000.0);
        write!(f, "{v}")
    }
}

/// One-decimal fixed formatter (`12.3`, `-4.0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fixed1(pub f64);

impl fmt::Display for Fixed1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = round_to(self.0, 10.0);
        write!(f, "{v:.1}")
    }
}

fn round_to(v: f64, scale: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let r = (v * scale).round() / scale;
    // Collapse -0.0.
    if r == 0.0 { 0.0 } else { r }
}

/// Deterministic pseudo-random-looking placement on an ellipse.
///
/// Feature `i` of `count` sits at angle `i/count * TAU + i * spin` and at a radius factor of
/// `base + (sin(i * k) * 0.5 + 0.5) * spread`. No RNG is involved.
pub(crate) fn scatter(
    i: usize,
    count: usize,
    spin: f64,
    base: f64,
    k: f64,
    spread: f64,
) -> (f64, f64) {
    let fi = i as f64;
    let angle = (fi / count.max(1) as f64) * std::f64::consts::TAU + fi * spin;
    let radius = base + ((fi * k).sin() * 0.5 + 0.5) * spread;
    (angle, radius)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
