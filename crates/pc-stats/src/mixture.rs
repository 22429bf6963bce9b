use pc_core::error::CoreError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::normal;

/// Plancher de variance : empêche l'effondrement d'une composante sur un
/// point unique et la division par zéro qui s'ensuivrait.
const MIN_VARIANCE: f64 = 1e-6;

/// Une composante gaussienne pondérée du mélange.
#[derive(Clone, Copy, Debug)]
pub struct Component {
    /// Poids, ≥ 0 ; la somme sur le mélange vaut 1.
    pub weight: f64,
    /// Moyenne.
    pub mean: f64,
    /// Variance, ≥ plancher.
    pub variance: f64,
}

/// Réglages de l'ajustement par espérance-maximisation.
///
/// # Example
/// ```
/// use pc_stats::mixture::EmOptions;
/// let opts = EmOptions::default();
/// assert_eq!(opts.n_components, 1);
/// assert_eq!(opts.seed, 42);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EmOptions {
    /// Nombre de composantes gaussiennes.
    pub n_components: usize,
    /// Graine d'initialisation. Même entrée + même graine ⇒ même ajustement.
    pub seed: u64,
    /// Plafond d'itérations avant `FitDivergence`.
    pub max_iterations: usize,
    /// Seuil de convergence sur le delta de log-vraisemblance.
    pub tolerance: f64,
}

impl Default for EmOptions {
    fn default() -> Self {
        Self {
            n_components: 1,
            seed: 42,
            max_iterations: 200,
            tolerance: 1e-6,
        }
    }
}

/// Mélange gaussien 1D ajusté par EM.
///
/// Initialisation déterministe pour une graine donnée : moyennes ancrées
/// sur les quantiles des échantillons avec un léger bruit tiré de la
/// graine, poids uniformes, variance commune (variance globale, planchée).
///
/// # Example
/// ```
/// use pc_stats::mixture::{EmOptions, MixtureModel};
/// let samples = [1.0, 1.1, 0.9, 1.05, 0.95];
/// let model = MixtureModel::fit(&samples, &EmOptions::default()).unwrap();
/// let total: f64 = model.components().iter().map(|c| c.weight).sum();
/// assert!((total - 1.0).abs() < 1e-6);
/// ```
#[derive(Debug)]
pub struct MixtureModel {
    components: Vec<Component>,
}

impl MixtureModel {
    /// Ajuste le mélange sur les échantillons fournis.
    ///
    /// # Errors
    /// `InsufficientData` si la séquence est vide, `FitDivergence` si la
    /// log-vraisemblance ne se stabilise pas sous le plafond d'itérations.
    pub fn fit(samples: &[f64], opts: &EmOptions) -> Result<Self, CoreError> {
        if samples.is_empty() {
            return Err(CoreError::InsufficientData);
        }

        let n = samples.len();
        let k = opts.n_components.max(1);
        let mut components = initial_components(samples, k, opts.seed);

        // Responsabilités γ[i*k + j] : P(composante j | échantillon i).
        let mut resp = vec![0.0f64; n * k];
        let mut prev_ll = f64::NEG_INFINITY;

        for iteration in 1..=opts.max_iterations {
            // E-step : responsabilités et log-vraisemblance courante.
            let mut ll = 0.0;
            for (i, &x) in samples.iter().enumerate() {
                let mut total = 0.0;
                for (j, c) in components.iter().enumerate() {
                    let d = c.weight * component_pdf(x, c);
                    resp[i * k + j] = d;
                    total += d;
                }
                if total <= f64::MIN_POSITIVE {
                    // Point hors de portée de toutes les composantes :
                    // responsabilités uniformes.
                    for j in 0..k {
                        resp[i * k + j] = 1.0 / k as f64;
                    }
                    ll += f64::MIN_POSITIVE.ln();
                } else {
                    for j in 0..k {
                        resp[i * k + j] /= total;
                    }
                    ll += total.ln();
                }
            }

            // M-step : poids, moyennes, variances planchées.
            for j in 0..k {
                let nj: f64 = (0..n).map(|i| resp[i * k + j]).sum();
                if nj <= f64::MIN_POSITIVE {
                    components[j].weight = 0.0;
                    continue;
                }
                let mean = (0..n).map(|i| resp[i * k + j] * samples[i]).sum::<f64>() / nj;
                let variance = (0..n)
                    .map(|i| resp[i * k + j] * (samples[i] - mean).powi(2))
                    .sum::<f64>()
                    / nj;
                components[j] = Component {
                    weight: nj / n as f64,
                    mean,
                    variance: variance.max(MIN_VARIANCE),
                };
            }
            normalize_weights(&mut components);

            if (ll - prev_ll).abs() < opts.tolerance {
                log::debug!(
                    "EM convergé : {k} composante(s), {iteration} itération(s), log-vraisemblance {ll:.4}"
                );
                return Ok(Self { components });
            }
            prev_ll = ll;
        }

        Err(CoreError::FitDivergence {
            components: k,
            iterations: opts.max_iterations,
        })
    }

    /// Composantes ajustées.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Probabilité cumulée exacte du mélange :
    /// Σ sur les composantes de `poids · Φ((v − moyenne) / écart-type)`.
    #[must_use]
    pub fn cdf(&self, v: f64) -> f64 {
        self.components
            .iter()
            .map(|c| c.weight * normal::cdf((v - c.mean) / c.variance.sqrt()))
            .sum()
    }

    /// Densité du mélange au point `v`.
    #[must_use]
    pub fn pdf(&self, v: f64) -> f64 {
        self.components
            .iter()
            .map(|c| c.weight * component_pdf(v, c))
            .sum()
    }
}

/// Densité d'une composante au point `x`.
#[inline]
fn component_pdf(x: f64, c: &Component) -> f64 {
    let sd = c.variance.sqrt();
    normal::pdf((x - c.mean) / sd) / sd
}

/// Moyennes ancrées sur les quantiles, bruitées par la graine ; poids
/// uniformes ; variance commune.
fn initial_components(samples: &[f64], k: usize, seed: u64) -> Vec<Component> {
    let n = samples.len();
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let global_mean = samples.iter().sum::<f64>() / n as f64;
    let pooled = (samples
        .iter()
        .map(|x| (x - global_mean).powi(2))
        .sum::<f64>()
        / n as f64)
        .max(MIN_VARIANCE);
    let jitter_scale = pooled.sqrt() * 1e-3;

    let mut rng = StdRng::seed_from_u64(seed);
    (0..k)
        .map(|j| {
            let q = ((j as f64 + 0.5) / k as f64 * n as f64) as usize;
            let anchor = sorted[q.min(n - 1)];
            Component {
                weight: 1.0 / k as f64,
                mean: anchor + jitter_scale * rng.gen_range(-0.5..0.5),
                variance: pooled,
            }
        })
        .collect()
}

/// Renormalise les poids pour une somme exactement égale à 1.
fn normalize_weights(components: &mut [Component]) {
    let total: f64 = components.iter().map(|c| c.weight).sum();
    if total > 0.0 {
        for c in components {
            c.weight /= total;
        }
    }
}
