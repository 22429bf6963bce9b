use anyhow::Result;
use clap::Parser;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Résoudre la configuration (défauts ← TOML ← overrides CLI)
    let mut config = resolve_config(&cli)?;
    cli.apply_overrides(&mut config);

    // 4. Charger l'image
    let path = pc_source::resolve_image_path(&config.image_folder, &cli.image);
    let frame = pc_source::load_image(&path)?;

    // 5. Dérouler le pipeline
    let rendering = pipeline::render_frame(&frame, &config)?;

    // 6. Artefact diagnostic optionnel, jamais implicite
    if let Some(ref out) = cli.histogram {
        pc_export::write_histogram(&rendering.samples, &rendering.model, out)?;
    }

    // 7. Sortie texte
    print!("{}", rendering.text);
    Ok(())
}

/// Resolve config: --config if the file exists, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<pc_core::config::RenderConfig> {
    if cli.config.exists() {
        pc_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(pc_core::config::RenderConfig::default())
    }
}
