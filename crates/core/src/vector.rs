//! Dense vector arithmetic on `[f64; N]`.

/// Inner product `a · b`.
#[must_use]
pub fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(ai, bi)| ai * bi).sum()
}

/// Euclidean norm `‖v‖₂`.
///
/// Accumulated with `hypot`, so it stays finite whenever the result is
/// representable even if `v · v` would overflow.
#[must_use]
pub fn norm<const N: usize>(v: &[f64; N]) -> f64 {
    v.iter().fold(0.0, |acc: f64, vi| acc.hypot(*vi))
}

/// Returns `x + t · direction` without touching either input.
#[must_use]
pub fn step<const N: usize>(x: &[f64; N], t: f64, direction: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| x[i] + t * direction[i])
}

/// Returns `-v`.
#[must_use]
pub fn negated<const N: usize>(v: &[f64; N]) -> [f64; N] {
    v.map(|vi| -vi)
}

/// Returns `true` if every component is finite.
#[must_use]
pub fn is_finite<const N: usize>(v: &[f64; N]) -> bool {
    v.iter().all(|vi| vi.is_finite())
}
