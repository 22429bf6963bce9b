use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),

    /// Source image does not exist at the resolved path.
    #[error("Image introuvable : {}", path.display())]
    ImageNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Source image exists but the decoder rejected it.
    #[error("Image illisible : {} ({reason})", path.display())]
    ImageDecode {
        /// Path of the rejected file.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// Scale factor produced a zero-sized grid.
    #[error("Échelle invalide : {scale} → {width}×{height}")]
    InvalidScale {
        /// Requested scale factor.
        scale: f64,
        /// Resulting width after flooring.
        width: u32,
        /// Resulting height after flooring.
        height: u32,
    },

    /// Empty sample set: nothing to fit a distribution on.
    #[error("Échantillon vide : aucune valeur de luminosité")]
    InsufficientData,

    /// Mixture fit hit the iteration cap without converging.
    #[error("Ajustement divergent : {components} composante(s) après {iterations} itérations")]
    FitDivergence {
        /// Component count of the failed fit.
        components: usize,
        /// Iterations consumed before giving up.
        iterations: usize,
    },
}
