//! Pointer parallax model for the hero background grid.
//!
//! The browser side (see `ui::effects`) only reads the pointer position and
//! writes CSS transforms. Everything in between lives here so it can be
//! exercised without a DOM.

/// Largest shift, in pixels, applied to a cell of depth `1.0`.
pub const MAX_SHIFT_PX: f64 = 24.0;

/// Hero grid dimensions.
pub const GRID_ROWS: usize = 4;
pub const GRID_COLS: usize = 6;

/// Visible browser area used to normalize pointer coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Offset of a pointer position from the viewport center, scaled so that
    /// the edges map to `-1.0` and `1.0`.
    ///
    /// A zero-sized (or otherwise unusable) viewport yields a zero offset.
    pub fn normalized_offset(&self, x: f64, y: f64) -> Offset {
        Offset {
            x: normalize_axis(x, self.width),
            y: normalize_axis(y, self.height),
        }
    }
}

fn normalize_axis(position: f64, extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    let half = extent / 2.0;
    ((position - half) / half).clamp(-1.0, 1.0)
}

/// Normalized pointer offset, each axis in `[-1.0, 1.0]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

/// Pixel translation for one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub x: f64,
    pub y: f64,
}

impl Translation {
    /// CSS `transform` value for this translation.
    pub fn to_css(&self) -> String {
        format!("translate3d({:.2}px, {:.2}px, 0)", self.x, self.y)
    }
}

/// A decorative cell of the hero grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
    /// How strongly the cell follows the pointer, in `(0.0, 1.0]`.
    pub depth: f64,
}

impl GridCell {
    pub fn translation(&self, offset: Offset) -> Translation {
        Translation {
            x: offset.x * self.depth * MAX_SHIFT_PX,
            y: offset.y * self.depth * MAX_SHIFT_PX,
        }
    }
}

/// Build the hero grid. Depth cycles through five layers so neighbouring
/// cells drift at different speeds.
pub fn hero_grid() -> Vec<GridCell> {
    (0..GRID_ROWS)
        .flat_map(|row| {
            (0..GRID_COLS).map(move |col| GridCell {
                row,
                col,
                depth: 0.2 + ((row * GRID_COLS + col * 2) % 5) as f64 * 0.2,
            })
        })
        .collect()
}

/// Cells plus the attached/detached flag of the pointer listener.
///
/// Once detached the field never produces transforms again, even if a
/// pointer event that was already queued is delivered late.
#[derive(Clone, Debug)]
pub struct ParallaxField {
    cells: Vec<GridCell>,
    attached: bool,
}

impl ParallaxField {
    pub fn new(cells: Vec<GridCell>) -> Self {
        Self {
            cells,
            attached: true,
        }
    }

    /// Translations for every cell, in cell order, or `None` after detach.
    pub fn pointer_moved(&self, viewport: Viewport, x: f64, y: f64) -> Option<Vec<Translation>> {
        if !self.attached {
            return None;
        }
        let offset = viewport.normalized_offset(x, y);
        Some(self.cells.iter().map(|cell| cell.translation(offset)).collect())
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    #[test]
    fn test_center_is_zero_offset() {
        let offset = viewport().normalized_offset(500.0, 400.0);
        assert_eq!(offset, Offset { x: 0.0, y: 0.0 });
    }

    #[test]
    fn test_corners_map_to_unit_range() {
        let vp = viewport();
        assert_eq!(vp.normalized_offset(0.0, 0.0), Offset { x: -1.0, y: -1.0 });
        assert_eq!(
            vp.normalized_offset(1000.0, 800.0),
            Offset { x: 1.0, y: 1.0 }
        );
    }

    #[test]
    fn test_outside_viewport_is_clamped() {
        let offset = viewport().normalized_offset(-300.0, 5000.0);
        assert_eq!(offset, Offset { x: -1.0, y: 1.0 });
    }

    #[test]
    fn test_degenerate_viewport_yields_zero() {
        let offset = Viewport::new(0.0, f64::NAN).normalized_offset(10.0, 10.0);
        assert_eq!(offset, Offset::default());
    }

    #[test]
    fn test_deeper_cells_move_farther() {
        let offset = Offset { x: 0.5, y: -0.5 };
        let shallow = GridCell { row: 0, col: 0, depth: 0.2 }.translation(offset);
        let deep = GridCell { row: 0, col: 1, depth: 1.0 }.translation(offset);

        assert!(deep.x.abs() > shallow.x.abs());
        assert!(deep.y.abs() > shallow.y.abs());
        assert_eq!(deep.x, 0.5 * MAX_SHIFT_PX);
        assert_eq!(deep.y, -0.5 * MAX_SHIFT_PX);
    }

    #[test]
    fn test_translation_css() {
        let css = Translation { x: 3.0, y: -1.5 }.to_css();
        assert_eq!(css, "translate3d(3.00px, -1.50px, 0)");
    }

    #[test]
    fn test_hero_grid_shape_and_depths() {
        let cells = hero_grid();
        assert_eq!(cells.len(), GRID_ROWS * GRID_COLS);
        assert!(cells.iter().all(|c| c.depth > 0.0 && c.depth <= 1.0 + f64::EPSILON));
        // Row-major order
        assert_eq!((cells[0].row, cells[0].col), (0, 0));
        assert_eq!((cells[GRID_COLS].row, cells[GRID_COLS].col), (1, 0));
        // Adjacent cells never share a depth
        assert!(cells.windows(2).all(|w| w[0].depth != w[1].depth));
    }

    #[test]
    fn test_field_produces_one_translation_per_cell() {
        let field = ParallaxField::new(hero_grid());
        let translations = field.pointer_moved(viewport(), 750.0, 200.0).unwrap();
        assert_eq!(translations.len(), GRID_ROWS * GRID_COLS);
        assert!(translations.iter().all(|t| t.x > 0.0 && t.y < 0.0));
    }

    #[test]
    fn test_detached_field_ignores_pointer() {
        let mut field = ParallaxField::new(hero_grid());
        assert!(field.pointer_moved(viewport(), 10.0, 10.0).is_some());

        field.detach();

        assert!(field.pointer_moved(viewport(), 10.0, 10.0).is_none());
    }
}
