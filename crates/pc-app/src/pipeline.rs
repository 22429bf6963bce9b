use anyhow::Result;
use pc_core::config::RenderConfig;
use pc_core::grid::FrameBuffer;
use pc_core::palette::GlyphRamp;
use pc_render::{quantize_grid, render_text};
use pc_source::{brightness_grid, downsample, scaled_dims};
use pc_stats::{DistributionModel, fit_model, percentile_grid};

/// Résultat du pipeline : le texte final, plus le matériel nécessaire à
/// l'artefact diagnostic optionnel.
#[derive(Debug)]
pub struct Rendering {
    /// Texte rendu, une ligne par rangée, chacune terminée par '\n'.
    pub text: String,
    /// Luminosités aplaties, row-major.
    pub samples: Vec<f64>,
    /// Modèle de distribution ajusté.
    pub model: DistributionModel,
}

/// Déroule le pipeline séquentiel sur une frame décodée :
/// rééchantillonnage → luminosités → ajustement → percentiles →
/// quantification → assemblage. Chaque étape consomme la précédente,
/// aucun état partagé.
///
/// # Errors
/// `InvalidScale` avant tout ajustement si l'échelle ne produit pas de
/// grille valide ; les erreurs d'ajustement suivent l'échelle de repli de
/// `fit_model`.
pub fn render_frame(frame: &FrameBuffer, config: &RenderConfig) -> Result<Rendering> {
    let (width, height) = scaled_dims(frame.width, frame.height, config.scale)?;
    let resized = downsample(frame, width, height)?;
    let brightness = brightness_grid(&resized);

    let model = fit_model(brightness.values(), config)?;
    let percentiles = percentile_grid(&brightness, &model);
    let glyphs = quantize_grid(&percentiles, &GlyphRamp::new());
    let text = render_text(&glyphs);

    log::info!(
        "Rendu {width}×{height}, {} cellules",
        width as usize * height as usize
    );
    Ok(Rendering {
        text,
        samples: brightness.data,
        model,
    })
}
