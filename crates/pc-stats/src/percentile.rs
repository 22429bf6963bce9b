use pc_core::grid::ScalarGrid;

use crate::model::DistributionModel;

/// Convertit chaque luminosité en sa probabilité cumulée sous le modèle.
///
/// La grille de sortie a la même forme que l'entrée. Aucun clamp ici :
/// l'évaluation flottante peut légèrement déborder de [0, 1] et c'est au
/// quantizer de borner.
///
/// # Example
/// ```
/// use pc_core::config::RenderConfig;
/// use pc_core::grid::ScalarGrid;
/// use pc_stats::{fit_model, percentile_grid};
/// let mut grid = ScalarGrid::new(2, 1);
/// grid.set(0, 0, 10.0);
/// grid.set(1, 0, 20.0);
/// let model = fit_model(grid.values(), &RenderConfig::default()).unwrap();
/// let percentiles = percentile_grid(&grid, &model);
/// assert!(percentiles.at(0, 0) < percentiles.at(1, 0));
/// ```
#[must_use]
pub fn percentile_grid(brightness: &ScalarGrid, model: &DistributionModel) -> ScalarGrid {
    let mut out = ScalarGrid::new(brightness.width, brightness.height);
    for y in 0..brightness.height {
        for x in 0..brightness.width {
            out.set(x, y, model.cdf(brightness.at(x, y)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pc_core::config::RenderConfig;

    use super::*;
    use crate::model::fit_model;

    fn ramp_grid(width: u32, height: u32) -> ScalarGrid {
        let mut grid = ScalarGrid::new(width, height);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, f64::from(y * width + x));
            }
        }
        grid
    }

    #[test]
    fn output_shape_matches_input() {
        let grid = ramp_grid(8, 5);
        let model = fit_model(grid.values(), &RenderConfig::default()).unwrap();
        let percentiles = percentile_grid(&grid, &model);
        assert_eq!((percentiles.width, percentiles.height), (8, 5));
    }

    #[test]
    fn percentiles_follow_brightness_order() {
        let grid = ramp_grid(10, 10);
        let model = fit_model(grid.values(), &RenderConfig::default()).unwrap();
        let percentiles = percentile_grid(&grid, &model);

        let v = percentiles.values();
        for w in v.windows(2) {
            assert!(w[1] >= w[0]);
        }
    }

    #[test]
    fn constant_grid_maps_to_half_everywhere() {
        let mut grid = ScalarGrid::new(6, 6);
        for y in 0..6 {
            for x in 0..6 {
                grid.set(x, y, 300.0);
            }
        }
        let model = fit_model(grid.values(), &RenderConfig::default()).unwrap();
        let percentiles = percentile_grid(&grid, &model);
        for &p in percentiles.values() {
            assert!((p - 0.5).abs() < 1e-9);
        }
    }
}
