//! Shape catalog and rotation properties.

use gridfall::core::{catalog, rotate_cw, SimpleRng};
use gridfall::types::PieceKind;

#[test]
fn four_rotations_return_the_original() {
    for kind in PieceKind::ALL {
        let original = catalog::shape(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = rotate_cw(&shape);
        }
        assert_eq!(shape, original, "{:?}", kind);
    }
}

#[test]
fn rotation_never_changes_grid_size() {
    for kind in PieceKind::ALL {
        let mut shape = catalog::shape(kind);
        let size = shape.size();
        for _ in 0..4 {
            shape = rotate_cw(&shape);
            assert_eq!(shape.size(), size, "{:?}", kind);
        }
    }
}

#[test]
fn catalog_sizes_are_two_to_four() {
    for kind in PieceKind::ALL {
        let n = catalog::shape(kind).size();
        assert!((2..=4).contains(&n), "{:?} has size {}", kind, n);
    }
}

#[test]
fn rotation_matches_transform_definition() {
    // rotated[i][j] == original[n-1-j][i]
    for kind in PieceKind::ALL {
        let original = catalog::shape(kind);
        let rotated = rotate_cw(&original);
        let n = original.size();
        for i in 0..n {
            for j in 0..n {
                assert_eq!(
                    rotated.cell(j, i),
                    original.cell(i, n - 1 - j),
                    "{:?} at ({}, {})",
                    kind,
                    j,
                    i
                );
            }
        }
    }
}

#[test]
fn random_selection_is_roughly_uniform() {
    let mut rng = SimpleRng::new(2024);
    let mut counts = [0u32; 7];
    let draws = 7_000;
    for _ in 0..draws {
        let kind = catalog::random_kind(&mut rng);
        let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
        counts[idx] += 1;
    }
    // Every kind appears, and none dominates wildly.
    for (idx, count) in counts.iter().enumerate() {
        assert!(
            (500..=1500).contains(count),
            "kind {:?} drawn {} times of {}",
            PieceKind::ALL[idx],
            count,
            draws
        );
    }
}
