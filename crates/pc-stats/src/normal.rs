//! Primitives de la loi normale standard, sans dépendance externe.

/// √(2π), dénominateur de la densité normale.
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Approximation polynomiale de la fonction d'erreur
/// (Abramowitz & Stegun 7.1.26), erreur absolue < 1.5e-7.
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + 0.327_591_1 * x);
    let poly = t
        * (0.254_829_592
            + t * (-0.284_496_736 + t * (1.421_413_741 + t * (-1.453_152_027 + t * 1.061_405_429))));
    sign * (1.0 - poly * (-x * x).exp())
}

/// Densité de la loi normale standard au point `x`.
///
/// # Example
/// ```
/// use pc_stats::normal::pdf;
/// assert!((pdf(0.0) - 0.398_942_280_401_432_7).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / SQRT_2PI
}

/// Probabilité cumulée Φ(x) de la loi normale standard.
///
/// # Example
/// ```
/// use pc_stats::normal::cdf;
/// assert!((cdf(0.0) - 0.5).abs() < 1e-7);
/// ```
#[inline]
#[must_use]
pub fn cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / std::f64::consts::SQRT_2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_at_known_points() {
        assert!((cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((cdf(1.0) - 0.841_344_7).abs() < 1e-6);
        assert!((cdf(1.96) - 0.975_002_1).abs() < 1e-6);
        assert!((cdf(-1.96) - 0.024_997_9).abs() < 1e-6);
    }

    #[test]
    fn cdf_is_symmetric() {
        for i in 0..50 {
            let x = f64::from(i) * 0.1;
            assert!((cdf(-x) - (1.0 - cdf(x))).abs() < 1e-12);
        }
    }

    #[test]
    fn cdf_saturates_in_the_tails() {
        assert!(cdf(-10.0) < 1e-7);
        assert!(cdf(10.0) > 1.0 - 1e-7);
    }

    #[test]
    fn pdf_is_symmetric_and_peaks_at_zero() {
        assert!((pdf(1.3) - pdf(-1.3)).abs() < 1e-15);
        assert!(pdf(0.0) > pdf(0.1));
    }
}
