use std::path::{Path, PathBuf};

use pc_core::error::CoreError;
use pc_core::grid::FrameBuffer;

/// Résout un nom d'image par rapport au dossier configuré.
///
/// Un nom nu est préfixé par le dossier ; un chemin absolu ou comportant
/// déjà des répertoires est utilisé tel quel.
///
/// # Example
/// ```
/// use pc_source::image::resolve_image_path;
/// use std::path::{Path, PathBuf};
/// let p = resolve_image_path(Path::new("img/"), "mona_lisa.jpg");
/// assert_eq!(p, PathBuf::from("img/mona_lisa.jpg"));
/// let p = resolve_image_path(Path::new("img/"), "archive/scan.png");
/// assert_eq!(p, PathBuf::from("archive/scan.png"));
/// ```
#[must_use]
pub fn resolve_image_path(folder: &Path, name: &str) -> PathBuf {
    let candidate = Path::new(name);
    if candidate.is_absolute() || candidate.components().count() > 1 {
        candidate.to_path_buf()
    } else {
        folder.join(candidate)
    }
}

/// Charge une image depuis le disque en buffer RGBA.
///
/// Formats supportés : PNG, JPEG, BMP, GIF.
///
/// # Errors
/// `ImageNotFound` si le chemin n'existe pas, `ImageDecode` si le décodeur
/// rejette le fichier.
///
/// # Example
/// ```no_run
/// use pc_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("img/mona_lisa.jpg")).unwrap();
/// assert!(frame.width > 0);
/// ```
pub fn load_image(path: &Path) -> Result<FrameBuffer, CoreError> {
    if !path.exists() {
        return Err(CoreError::ImageNotFound {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| CoreError::ImageDecode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Image chargée : {} ({width}×{height})", path.display());
    Ok(FrameBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}
