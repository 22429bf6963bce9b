use std::path::PathBuf;

use clap::Parser;
use pc_core::config::{FitMode, RenderConfig};

/// percii — Brightness-percentile ASCII art renderer.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Nom du fichier image, résolu dans le dossier configuré sauf chemin
    /// explicite (absolu ou contenant des répertoires).
    pub image: String,

    /// Dossier des images. Prime sur la configuration.
    #[arg(long)]
    pub folder: Option<PathBuf>,

    /// Facteur de réduction des dimensions (> 0).
    #[arg(long)]
    pub scale: Option<f64>,

    /// Estimateur de distribution : kde ou mixture.
    #[arg(long)]
    pub mode: Option<String>,

    /// Nombre de composantes gaussiennes (mode mixture).
    #[arg(long)]
    pub components: Option<usize>,

    /// Graine d'initialisation EM.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Écrire l'artefact diagnostic (histogramme + densités) à ce chemin.
    #[arg(long)]
    pub histogram: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Applique les overrides CLI sur la configuration résolue, puis
    /// re-clampe les champs numériques.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(ref folder) = self.folder {
            config.image_folder = folder.clone();
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(ref mode) = self.mode {
            config.mode = match mode.as_str() {
                "kde" => FitMode::Kde,
                "mixture" => FitMode::Mixture,
                _ => {
                    log::warn!("Mode inconnu '{mode}', utilisation du défaut.");
                    config.mode
                }
            };
        }
        if let Some(k) = self.components {
            config.n_components = k;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.clamp_all();
    }
}
