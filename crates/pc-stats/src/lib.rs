/// Distribution estimation for percii.
///
/// Fits a 1D probability model over brightness samples (Gaussian KDE or a
/// Gaussian mixture trained by expectation-maximization) and maps brightness
/// values to cumulative probabilities under the fitted model.

pub mod kde;
pub mod mixture;
pub mod model;
pub mod normal;
pub mod percentile;

pub use kde::KdeModel;
pub use mixture::{Component, EmOptions, MixtureModel};
pub use model::{DistributionModel, fit_model};
pub use percentile::percentile_grid;
