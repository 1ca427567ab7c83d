//! Normal distribution helpers.
//!
//! The density model is a Gaussian truncated to the domain variable's range:
//!
//! `f(x | μ, σ) = φ((x - μ)/σ) / σ / (Φ((b - μ)/σ) - Φ((a - μ)/σ))`
//!
//! so the drawn curve integrates to one over `[a, b]`, the same convention
//! the plots were originally produced with.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc;

/// Standard normal density `φ(z)`.
pub fn standard_normal_pdf(z: f64) -> f64 {
    (-0.5 * z * z).exp() / (2.0 * PI).sqrt()
}

/// Standard normal CDF `Φ(z)`.
///
/// `erfc` keeps precision in the lower tail where `1 + erf` cancels.
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// Probability mass of `N(μ, σ)` inside `[a, b]`.
pub fn normal_mass_in(mu: f64, sigma: f64, a: f64, b: f64) -> f64 {
    standard_normal_cdf((b - mu) / sigma) - standard_normal_cdf((a - mu) / sigma)
}

/// Density of `N(μ, σ)` truncated to `[a, b]` at `x`.
///
/// Returns `0` outside the support. When the support carries no mass at
/// double precision the normalization is floored to `f64::MIN_POSITIVE` so
/// the result stays finite.
pub fn truncated_normal_pdf(x: f64, mu: f64, sigma: f64, a: f64, b: f64) -> f64 {
    if x < a || x > b {
        return 0.0;
    }
    let mut z = normal_mass_in(mu, sigma, a, b);
    if !z.is_finite() || z <= 0.0 {
        z = f64::MIN_POSITIVE;
    }
    standard_normal_pdf((x - mu) / sigma) / sigma / z
}

/// `n` evenly spaced values from `a` to `b` inclusive (`n >= 2`).
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    let n = n.max(2);
    let step = (b - a) / (n as f64 - 1.0);
    (0..n)
        .map(|i| if i == n - 1 { b } else { a + i as f64 * step })
        .collect()
}

/// Trapezoid-rule integral of a sampled curve (x ascending).
pub fn trapezoid(points: &[(f64, f64)]) -> f64 {
    points
        .windows(2)
        .map(|w| 0.5 * (w[1].0 - w[0].0) * (w[0].1 + w[1].1))
        .sum()
}
