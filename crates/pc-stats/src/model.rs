use pc_core::config::{FitMode, RenderConfig};
use pc_core::error::CoreError;

use crate::kde::KdeModel;
use crate::mixture::{EmOptions, MixtureModel};

/// Modèle de distribution ajusté, une fois par image puis en lecture seule.
#[derive(Debug)]
pub enum DistributionModel {
    /// Estimation non paramétrique par noyaux.
    Kde(KdeModel),
    /// Mélange gaussien paramétrique.
    Mixture(MixtureModel),
}

impl DistributionModel {
    /// Probabilité cumulée P(X ≤ v) sous le modèle ajusté.
    #[must_use]
    pub fn cdf(&self, v: f64) -> f64 {
        match self {
            Self::Kde(m) => m.cdf(v),
            Self::Mixture(m) => m.cdf(v),
        }
    }

    /// Densité au point `v`.
    #[must_use]
    pub fn pdf(&self, v: f64) -> f64 {
        match self {
            Self::Kde(m) => m.pdf(v),
            Self::Mixture(m) => m.pdf(v),
        }
    }
}

/// Ajuste le modèle demandé par la configuration.
///
/// En mode Mixture, une divergence déclenche l'échelle de repli : nouvel
/// essai à k−1, …, 1 composante(s), puis KDE. Chaque marche est signalée
/// par un `log::warn!` ; seule l'épuisement de l'échelle est fatal.
///
/// # Errors
/// `InsufficientData` si `samples` est vide ; `FitDivergence` n'est
/// retournée que si le repli KDE échoue lui-même.
pub fn fit_model(samples: &[f64], config: &RenderConfig) -> Result<DistributionModel, CoreError> {
    match config.mode {
        FitMode::Kde => Ok(DistributionModel::Kde(KdeModel::fit(samples)?)),
        FitMode::Mixture => {
            let mut k = config.n_components.max(1);
            loop {
                let opts = EmOptions {
                    n_components: k,
                    seed: config.seed,
                    max_iterations: config.max_iterations,
                    tolerance: config.tolerance,
                };
                match MixtureModel::fit(samples, &opts) {
                    Ok(m) => return Ok(DistributionModel::Mixture(m)),
                    Err(CoreError::FitDivergence { .. }) if k > 1 => {
                        log::warn!(
                            "Mélange à {k} composantes divergent, nouvel essai à {}",
                            k - 1
                        );
                        k -= 1;
                    }
                    Err(CoreError::FitDivergence { iterations, .. }) => {
                        log::warn!(
                            "Mélange à 1 composante divergent après {iterations} itérations, repli sur KDE"
                        );
                        return Ok(DistributionModel::Kde(KdeModel::fit(samples)?));
                    }
                    Err(other) => return Err(other),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kde_mode_fits_a_kde() {
        let config = RenderConfig::default();
        let samples: Vec<f64> = (0..50).map(f64::from).collect();
        let model = fit_model(&samples, &config).unwrap();
        assert!(matches!(model, DistributionModel::Kde(_)));
    }

    #[test]
    fn mixture_mode_fits_a_mixture() {
        let config = RenderConfig {
            mode: FitMode::Mixture,
            n_components: 2,
            ..RenderConfig::default()
        };
        let samples: Vec<f64> = (0..50).map(f64::from).collect();
        let model = fit_model(&samples, &config).unwrap();
        assert!(matches!(model, DistributionModel::Mixture(_)));
    }

    #[test]
    fn divergence_falls_back_to_kde() {
        // Tolérance nulle : aucune marche du mélange ne peut converger.
        let config = RenderConfig {
            mode: FitMode::Mixture,
            n_components: 3,
            max_iterations: 10,
            tolerance: 0.0,
            ..RenderConfig::default()
        };
        let samples: Vec<f64> = (0..50).map(f64::from).collect();
        let model = fit_model(&samples, &config).unwrap();
        assert!(matches!(model, DistributionModel::Kde(_)));
    }

    #[test]
    fn empty_samples_surface_immediately() {
        let config = RenderConfig::default();
        assert!(matches!(
            fit_model(&[], &config),
            Err(CoreError::InsufficientData)
        ));
    }
}
