use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Configuration complète du pipeline.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use pc_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.scale, 0.05);
/// assert_eq!(config.n_components, 1);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    // === Image ===
    /// Dossier préfixé aux noms d'image nus.
    pub image_folder: PathBuf,
    /// Facteur de réduction appliqué aux deux dimensions. Doit être > 0.
    pub scale: f64,

    // === Ajustement ===
    /// Estimateur de distribution : Kde ou Mixture.
    pub mode: FitMode,
    /// Nombre de composantes gaussiennes (mode Mixture). Ignoré en Kde.
    pub n_components: usize,
    /// Graine d'initialisation EM, pour des ajustements reproductibles.
    pub seed: u64,
    /// Plafond d'itérations EM.
    pub max_iterations: usize,
    /// Tolérance de convergence sur le delta de log-vraisemblance.
    pub tolerance: f64,
}

/// Distribution estimator selection.
///
/// # Example
/// ```
/// use pc_core::config::FitMode;
/// let mode = FitMode::default();
/// assert!(matches!(mode, FitMode::Kde));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum FitMode {
    /// Estimation non paramétrique par noyaux gaussiens.
    #[default]
    Kde,
    /// Mélange gaussien ajusté par espérance-maximisation.
    Mixture,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image_folder: PathBuf::from("img/"),
            scale: 0.05,
            mode: FitMode::Kde,
            n_components: 1,
            seed: 42,
            max_iterations: 200,
            tolerance: 1e-6,
        }
    }
}

impl RenderConfig {
    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    ///
    /// Une échelle non positive n'est PAS réparée ici : elle doit remonter
    /// en `InvalidScale` au moment du calcul des dimensions.
    pub fn clamp_all(&mut self) {
        if self.scale > 8.0 {
            self.scale = 8.0;
        }
        self.n_components = self.n_components.clamp(1, 32);
        self.max_iterations = self.max_iterations.clamp(10, 10_000);
        self.tolerance = self.tolerance.clamp(1e-12, 1e-2);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    image: Option<ImageSection>,
    fit: Option<FitSection>,
}

/// Image section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct ImageSection {
    folder: Option<PathBuf>,
    scale: Option<f64>,
}

/// Fit section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct FitSection {
    mode: Option<FitMode>,
    n_components: Option<usize>,
    seed: Option<u64>,
    max_iterations: Option<usize>,
    tolerance: Option<f64>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use pc_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;

    let mut config = RenderConfig::default();

    if let Some(i) = file.image {
        if let Some(v) = i.folder {
            config.image_folder = v;
        }
        if let Some(v) = i.scale {
            config.scale = v;
        }
    }

    if let Some(f) = file.fit {
        if let Some(v) = f.mode {
            config.mode = v;
        }
        if let Some(v) = f.n_components {
            config.n_components = v;
        }
        if let Some(v) = f.seed {
            config.seed = v;
        }
        if let Some(v) = f.max_iterations {
            config.max_iterations = v;
        }
        if let Some(v) = f.tolerance {
            config.tolerance = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = RenderConfig::default();
        assert_eq!(config.image_folder, PathBuf::from("img/"));
        assert_eq!(config.scale, 0.05);
        assert_eq!(config.mode, FitMode::Kde);
        assert_eq!(config.n_components, 1);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn partial_toml_merges_over_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[fit]\nmode = \"Mixture\"\nn_components = 3\n"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.mode, FitMode::Mixture);
        assert_eq!(config.n_components, 3);
        // Untouched sections keep their defaults.
        assert_eq!(config.scale, 0.05);
        assert_eq!(config.image_folder, PathBuf::from("img/"));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[image]\nscale = 100.0\n\n[fit]\nn_components = 0\nmax_iterations = 1\ntolerance = 1.0\n"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.scale, 8.0);
        assert_eq!(config.n_components, 1);
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.tolerance, 1e-2);
    }

    #[test]
    fn non_positive_scale_survives_clamping() {
        // InvalidScale doit remonter plus tard, pas être réparé ici.
        let mut config = RenderConfig {
            scale: -0.5,
            ..RenderConfig::default()
        };
        config.clamp_all();
        assert_eq!(config.scale, -0.5);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/percii.toml")).is_err());
    }
}
