use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer};
use pc_core::error::CoreError;
use pc_core::grid::FrameBuffer;

/// Dimensions réduites : `floor(dim * scale)` sur chaque axe.
///
/// # Errors
/// `InvalidScale` si l'échelle n'est pas finie et strictement positive, ou
/// si l'une des dimensions résultantes tombe à zéro. Vérifié avant tout
/// travail d'ajustement.
///
/// # Example
/// ```
/// use pc_source::resize::scaled_dims;
/// assert_eq!(scaled_dims(100, 80, 0.05).unwrap(), (5, 4));
/// assert!(scaled_dims(10, 10, 0.05).is_err());
/// ```
pub fn scaled_dims(width: u32, height: u32, scale: f64) -> Result<(u32, u32), CoreError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(CoreError::InvalidScale {
            scale,
            width: 0,
            height: 0,
        });
    }

    let new_width = (f64::from(width) * scale).floor() as u32;
    let new_height = (f64::from(height) * scale).floor() as u32;
    if new_width == 0 || new_height == 0 {
        return Err(CoreError::InvalidScale {
            scale,
            width: new_width,
            height: new_height,
        });
    }
    Ok((new_width, new_height))
}

/// Rééchantillonne `src` aux dimensions données (noyau Lanczos3, déterministe).
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use pc_core::grid::FrameBuffer;
/// use pc_source::resize::downsample;
/// let src = FrameBuffer::new(100, 100);
/// let dst = downsample(&src, 50, 50).unwrap();
/// assert_eq!((dst.width, dst.height), (50, 50));
/// ```
pub fn downsample(src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer> {
    if src.width == width && src.height == height {
        return Ok(FrameBuffer {
            data: src.data.clone(),
            width,
            height,
        });
    }

    // fast_image_resize exige un &mut sur la source : copie de travail.
    let mut src_buf = src.data.clone();
    let src_image = Image::from_slice_u8(src.width, src.height, &mut src_buf, PixelType::U8x4)
        .context("Invalid source dimensions")?;

    let mut dst = FrameBuffer::new(width, height);
    let mut dst_image = Image::from_slice_u8(width, height, &mut dst.data, PixelType::U8x4)
        .context("Invalid destination dimensions")?;

    Resizer::new()
        .resize(&src_image, &mut dst_image, Some(&ResizeOptions::new()))
        .context("Resize failed")?;

    Ok(dst)
}
