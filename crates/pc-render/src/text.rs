use pc_core::grid::{GlyphGrid, ScalarGrid};
use pc_core::palette::GlyphRamp;

/// Quantifie une grille de percentiles en grille de glyphes, cellule par
/// cellule, même forme en sortie.
///
/// # Example
/// ```
/// use pc_core::grid::ScalarGrid;
/// use pc_core::palette::GlyphRamp;
/// use pc_render::text::quantize_grid;
/// let mut grid = ScalarGrid::new(2, 1);
/// grid.set(1, 0, 1.0);
/// let glyphs = quantize_grid(&grid, &GlyphRamp::new());
/// assert_eq!(glyphs.get(0, 0), ' ');
/// assert_eq!(glyphs.get(1, 0), '@');
/// ```
#[must_use]
pub fn quantize_grid(percentiles: &ScalarGrid, ramp: &GlyphRamp) -> GlyphGrid {
    let mut out = GlyphGrid::new(percentiles.width, percentiles.height);
    for y in 0..percentiles.height {
        for x in 0..percentiles.width {
            out.set(x, y, ramp.map(percentiles.at(x, y)));
        }
    }
    out
}

/// Assemble la grille de glyphes en texte : lignes de haut en bas, colonnes
/// de gauche à droite, aucun séparateur intra-ligne, un `\n` après chaque
/// ligne y compris la dernière.
///
/// # Example
/// ```
/// use pc_core::grid::GlyphGrid;
/// use pc_render::text::render_text;
/// let grid = GlyphGrid::new(3, 2);
/// assert_eq!(render_text(&grid), "   \n   \n");
/// ```
#[must_use]
pub fn render_text(glyphs: &GlyphGrid) -> String {
    let mut out = String::with_capacity((glyphs.width as usize + 1) * glyphs.height as usize);
    for y in 0..glyphs.height {
        for x in 0..glyphs.width {
            out.push(glyphs.get(x, y));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_renders_exactly() {
        let mut grid = GlyphGrid::new(2, 2);
        grid.set(0, 0, 'a');
        grid.set(1, 0, 'b');
        grid.set(0, 1, 'c');
        grid.set(1, 1, 'd');
        assert_eq!(render_text(&grid), "ab\ncd\n");
    }

    #[test]
    fn quantized_shape_matches_input() {
        let grid = ScalarGrid::new(7, 3);
        let glyphs = quantize_grid(&grid, &GlyphRamp::new());
        assert_eq!((glyphs.width, glyphs.height), (7, 3));
    }

    #[test]
    fn out_of_range_percentiles_are_tolerated() {
        let mut grid = ScalarGrid::new(2, 1);
        grid.set(0, 0, -0.001);
        grid.set(1, 0, 1.001);
        let glyphs = quantize_grid(&grid, &GlyphRamp::new());
        assert_eq!(glyphs.get(0, 0), ' ');
        assert_eq!(glyphs.get(1, 0), '@');
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let grid = GlyphGrid::new(0, 0);
        assert_eq!(render_text(&grid), "");
    }
}
