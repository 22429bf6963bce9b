use pc_core::error::CoreError;

use crate::normal;

/// Plancher de largeur de bande : garde un noyau valide sur des
/// échantillons constants.
const MIN_BANDWIDTH: f64 = 1e-9;

/// Estimation de densité par noyaux gaussiens.
///
/// Largeur de bande par la règle de Scott : `h = σ̂ · n^(−1/5)`, avec σ̂
/// l'écart-type échantillonnal. Non paramétrique : le modèle retient les
/// échantillons eux-mêmes.
///
/// # Example
/// ```
/// use pc_stats::kde::KdeModel;
/// let model = KdeModel::fit(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert!(model.cdf(0.0) < model.cdf(5.0));
/// ```
#[derive(Debug)]
pub struct KdeModel {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl KdeModel {
    /// Ajuste le modèle sur les échantillons fournis.
    ///
    /// # Errors
    /// `InsufficientData` si la séquence est vide.
    pub fn fit(samples: &[f64]) -> Result<Self, CoreError> {
        if samples.is_empty() {
            return Err(CoreError::InsufficientData);
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let variance = if samples.len() > 1 {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        let bandwidth = (variance.sqrt() * n.powf(-0.2)).max(MIN_BANDWIDTH);

        log::debug!(
            "KDE ajustée : {} échantillons, largeur de bande {bandwidth:.6}",
            samples.len()
        );
        Ok(Self {
            samples: samples.to_vec(),
            bandwidth,
        })
    }

    /// Probabilité cumulée P(X ≤ v) : moyenne des CDF des noyaux,
    /// l'intégrale exacte de la densité estimée de −∞ à `v`.
    #[must_use]
    pub fn cdf(&self, v: f64) -> f64 {
        let n = self.samples.len() as f64;
        self.samples
            .iter()
            .map(|&x| normal::cdf((v - x) / self.bandwidth))
            .sum::<f64>()
            / n
    }

    /// Densité estimée au point `v`.
    #[must_use]
    pub fn pdf(&self, v: f64) -> f64 {
        let n = self.samples.len() as f64;
        self.samples
            .iter()
            .map(|&x| normal::pdf((v - x) / self.bandwidth))
            .sum::<f64>()
            / (n * self.bandwidth)
    }

    /// Largeur de bande retenue.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_samples_are_insufficient() {
        assert!(matches!(
            KdeModel::fit(&[]),
            Err(CoreError::InsufficientData)
        ));
    }

    #[test]
    fn cdf_is_monotone_and_saturates() {
        let samples: Vec<f64> = (0..100).map(f64::from).collect();
        let model = KdeModel::fit(&samples).unwrap();

        assert!(model.cdf(-1000.0) < 1e-6);
        assert!(model.cdf(1000.0) > 1.0 - 1e-6);

        let mut prev = f64::NEG_INFINITY;
        for i in -10..=110 {
            let c = model.cdf(f64::from(i));
            assert!(c >= prev, "CDF non monotone en {i}");
            prev = c;
        }
    }

    #[test]
    fn constant_samples_keep_a_valid_kernel() {
        let model = KdeModel::fit(&[42.0; 50]).unwrap();
        assert!(model.bandwidth() > 0.0);
        assert!((model.cdf(42.0) - 0.5).abs() < 1e-9);
        assert!(model.cdf(41.0) < 1e-9);
        assert!(model.cdf(43.0) > 1.0 - 1e-9);
    }

    #[test]
    fn single_sample_is_fittable() {
        let model = KdeModel::fit(&[7.0]).unwrap();
        assert!((model.cdf(7.0) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn median_of_symmetric_samples_is_half() {
        let samples: Vec<f64> = (0..=200).map(f64::from).collect();
        let model = KdeModel::fit(&samples).unwrap();
        assert!((model.cdf(100.0) - 0.5).abs() < 1e-3);
    }
}
