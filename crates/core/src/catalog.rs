//! Shape catalog - static definitions of the seven piece kinds.
//!
//! Each kind is a fixed n×n occupancy grid (n in 2..=4) plus a display
//! color tag. The grid size is preserved under rotation, so a shape can be
//! stored and rotated without knowing its kind.

use gridfall_types::{ColorTag, PieceKind};

use crate::rng::PieceRng;

/// Largest shape grid in the catalog (the I piece).
pub const MAX_SHAPE_SIZE: usize = 4;

/// A square boolean occupancy grid.
///
/// Storage is a fixed 4×4 array with `size` marking the live n×n region,
/// so shapes are small `Copy` values with no allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: usize,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from an n×n grid of 0/1 values.
    ///
    /// Panics if `N` is outside 2..=4; catalog data is compile-time
    /// constant, so this is a programmer error, not a runtime condition.
    pub fn from_grid<const N: usize>(grid: [[u8; N]; N]) -> Self {
        assert!(
            (2..=MAX_SHAPE_SIZE).contains(&N),
            "shape grid must be 2x2, 3x3 or 4x4"
        );
        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in grid.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                rows[y][x] = v != 0;
            }
        }
        Self { size: N, rows }
    }

    /// Crate-internal constructor for rotation results.
    pub(crate) fn from_parts(
        size: usize,
        rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    ) -> Self {
        Self { size, rows }
    }

    /// Side length n of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the grid cell at (x, y) is occupied. Out-of-grid is empty.
    pub fn cell(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.rows[y][x]
    }

    /// Iterate over occupied grid coordinates as (x, y).
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |y| {
            (0..self.size).filter_map(move |x| self.rows[y][x].then_some((x, y)))
        })
    }
}

/// Occupancy grid for a piece kind in its spawn orientation.
pub fn shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_grid([
            [0, 0, 0, 0],
            [1, 1, 1, 1],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]),
        PieceKind::O => Shape::from_grid([
            [1, 1], //
            [1, 1],
        ]),
        PieceKind::T => Shape::from_grid([
            [0, 1, 0], //
            [1, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::S => Shape::from_grid([
            [0, 1, 1], //
            [1, 1, 0],
            [0, 0, 0],
        ]),
        PieceKind::Z => Shape::from_grid([
            [1, 1, 0], //
            [0, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::J => Shape::from_grid([
            [1, 0, 0], //
            [1, 1, 1],
            [0, 0, 0],
        ]),
        PieceKind::L => Shape::from_grid([
            [0, 0, 1], //
            [1, 1, 1],
            [0, 0, 0],
        ]),
    }
}

/// Display color tag for a piece kind.
pub fn color_tag(kind: PieceKind) -> ColorTag {
    match kind {
        PieceKind::I => ColorTag::new("#00f0f0"),
        PieceKind::O => ColorTag::new("#f0f000"),
        PieceKind::T => ColorTag::new("#a000f0"),
        PieceKind::S => ColorTag::new("#00f000"),
        PieceKind::Z => ColorTag::new("#f00000"),
        PieceKind::J => ColorTag::new("#0000f0"),
        PieceKind::L => ColorTag::new("#f0a000"),
    }
}

/// Pick a kind uniformly from the catalog using the injected RNG.
pub fn random_kind<R: PieceRng>(rng: &mut R) -> PieceKind {
    let idx = rng.next_range(PieceKind::ALL.len() as u32) as usize;
    PieceKind::ALL[idx]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SimpleRng};

    #[test]
    fn every_kind_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(shape(kind).cells().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn shape_sizes_match_catalog() {
        assert_eq!(shape(PieceKind::I).size(), 4);
        assert_eq!(shape(PieceKind::O).size(), 2);
        for kind in [
            PieceKind::T,
            PieceKind::S,
            PieceKind::Z,
            PieceKind::J,
            PieceKind::L,
        ] {
            assert_eq!(shape(kind).size(), 3, "{:?}", kind);
        }
    }

    #[test]
    fn i_piece_occupies_second_row() {
        let s = shape(PieceKind::I);
        let cells: Vec<_> = s.cells().collect();
        assert_eq!(cells, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn cell_out_of_grid_is_empty() {
        let s = shape(PieceKind::O);
        assert!(s.cell(0, 0));
        assert!(!s.cell(2, 0));
        assert!(!s.cell(0, 2));
    }

    #[test]
    fn color_tags_are_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(color_tag(*a), color_tag(*b));
            }
        }
    }

    #[test]
    fn random_kind_follows_script() {
        let mut rng = ScriptedRng::new(vec![0, 1, 6]);
        assert_eq!(random_kind(&mut rng), PieceKind::I);
        assert_eq!(random_kind(&mut rng), PieceKind::O);
        assert_eq!(random_kind(&mut rng), PieceKind::L);
    }

    #[test]
    fn random_kind_covers_all_kinds() {
        let mut rng = SimpleRng::new(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(random_kind(&mut rng));
        }
        assert_eq!(seen.len(), 7);
    }
}
