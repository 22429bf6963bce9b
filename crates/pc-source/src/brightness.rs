use pc_core::grid::{FrameBuffer, ScalarGrid};

/// Extrait la grille de luminosité d'une frame rééchantillonnée.
///
/// Chaque cellule reçoit la somme des canaux couleur du pixel correspondant
/// (R+G+B, alpha exclu), donc une valeur dans [0, 765].
///
/// # Example
/// ```
/// use pc_core::grid::FrameBuffer;
/// use pc_source::brightness::brightness_grid;
/// let frame = FrameBuffer::new(4, 3);
/// let grid = brightness_grid(&frame);
/// assert_eq!((grid.width, grid.height), (4, 3));
/// assert!(grid.values().iter().all(|&v| v == 0.0));
/// ```
#[must_use]
pub fn brightness_grid(frame: &FrameBuffer) -> ScalarGrid {
    let mut grid = ScalarGrid::new(frame.width, frame.height);
    for y in 0..frame.height {
        for x in 0..frame.width {
            grid.set(x, y, frame.channel_sum(x, y));
        }
    }
    grid
}
