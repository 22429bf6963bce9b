use std::path::Path;

use anyhow::{Result, anyhow};
use pc_stats::model::DistributionModel;
use plotters::prelude::*;

/// Nombre de classes de l'histogramme.
const BIN_COUNT: usize = 64;

/// Points d'échantillonnage des courbes de densité.
const CURVE_POINTS: usize = 256;

/// Écrit l'artefact diagnostic : histogramme des luminosités normalisé en
/// densité, avec la courbe du modèle ajusté superposée (et, en mode
/// mélange, la courbe pondérée de chaque composante).
///
/// Purement observationnel : n'altère jamais la sortie glyphe. Rendu sans
/// texte pour rester indépendant des polices système.
///
/// # Errors
/// Returns an error if the samples are empty or the PNG cannot be written.
///
/// # Example
/// ```no_run
/// use pc_core::config::RenderConfig;
/// use pc_export::histogram::write_histogram;
/// use pc_stats::fit_model;
/// use std::path::Path;
/// let samples: Vec<f64> = (0..100).map(f64::from).collect();
/// let model = fit_model(&samples, &RenderConfig::default()).unwrap();
/// write_histogram(&samples, &model, Path::new("diagnostic.png")).unwrap();
/// ```
pub fn write_histogram(samples: &[f64], model: &DistributionModel, path: &Path) -> Result<()> {
    if samples.is_empty() {
        return Err(anyhow!("Histogramme impossible : aucun échantillon"));
    }

    let (min, max) = sample_range(samples);
    let bin_width = (max - min) / BIN_COUNT as f64;
    let densities = bin_densities(samples, min, bin_width);

    let curve: Vec<(f64, f64)> = (0..=CURVE_POINTS)
        .map(|i| {
            let x = min + (max - min) * i as f64 / CURVE_POINTS as f64;
            (x, model.pdf(x))
        })
        .collect();

    let y_max = densities
        .iter()
        .copied()
        .chain(curve.iter().map(|&(_, y)| y))
        .fold(0.0f64, f64::max)
        .max(f64::MIN_POSITIVE)
        * 1.1;

    let root = BitMapBackend::new(path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| anyhow!("Tracé impossible : {e}"))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(min..max, 0.0..y_max)
        .map_err(|e| anyhow!("Tracé impossible : {e}"))?;

    for (i, &density) in densities.iter().enumerate() {
        let x0 = min + i as f64 * bin_width;
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x0, 0.0), (x0 + bin_width, density)],
                BLUE.mix(0.5).filled(),
            )))
            .map_err(|e| anyhow!("Tracé impossible : {e}"))?;
    }

    if let DistributionModel::Mixture(mixture) = model {
        for component in mixture.components() {
            let series: Vec<(f64, f64)> = curve
                .iter()
                .map(|&(x, _)| {
                    let sd = component.variance.sqrt();
                    let d = pc_stats::normal::pdf((x - component.mean) / sd) / sd;
                    (x, component.weight * d)
                })
                .collect();
            chart
                .draw_series(LineSeries::new(series, &GREEN))
                .map_err(|e| anyhow!("Tracé impossible : {e}"))?;
        }
    }

    chart
        .draw_series(LineSeries::new(curve, &RED))
        .map_err(|e| anyhow!("Tracé impossible : {e}"))?;

    root.present()
        .map_err(|e| anyhow!("Écriture impossible : {e}"))?;
    log::info!("Artefact diagnostic écrit : {}", path.display());
    Ok(())
}

/// Bornes de l'histogramme, élargies quand tous les échantillons sont égaux.
fn sample_range(samples: &[f64]) -> (f64, f64) {
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    }
}

/// Densité par classe : effectif / (n · largeur de classe).
fn bin_densities(samples: &[f64], min: f64, bin_width: f64) -> Vec<f64> {
    let mut counts = vec![0usize; BIN_COUNT];
    for &x in samples {
        let idx = (((x - min) / bin_width) as usize).min(BIN_COUNT - 1);
        counts[idx] += 1;
    }
    let norm = samples.len() as f64 * bin_width;
    counts.into_iter().map(|c| c as f64 / norm).collect()
}

#[cfg(test)]
mod tests {
    use pc_core::config::{FitMode, RenderConfig};
    use pc_stats::fit_model;

    use super::*;

    fn samples() -> Vec<f64> {
        (0..200).map(|i| f64::from(i % 100)).collect()
    }

    #[test]
    fn kde_artifact_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diag_kde.png");
        let model = fit_model(&samples(), &RenderConfig::default()).unwrap();

        write_histogram(&samples(), &model, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn mixture_artifact_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diag_mixture.png");
        let config = RenderConfig {
            mode: FitMode::Mixture,
            n_components: 2,
            ..RenderConfig::default()
        };
        let model = fit_model(&samples(), &config).unwrap();

        write_histogram(&samples(), &model, &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn empty_samples_are_rejected() {
        let model = fit_model(&samples(), &RenderConfig::default()).unwrap();
        assert!(write_histogram(&[], &model, Path::new("/tmp/never.png")).is_err());
    }

    #[test]
    fn bin_densities_integrate_to_one() {
        let s = samples();
        let (min, max) = sample_range(&s);
        let bin_width = (max - min) / BIN_COUNT as f64;
        let total: f64 = bin_densities(&s, min, bin_width)
            .iter()
            .map(|d| d * bin_width)
            .sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}
