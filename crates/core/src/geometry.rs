//! Piece geometry - rotation transform and collision testing.
//!
//! Rotation is a plain 90° turn inside the shape's bounding square, applied
//! identically to every kind. There is no per-kind rotation center; O and I
//! may visually shift within their box, which matches the intended model.

use gridfall_types::Position;

use crate::board::Board;
use crate::catalog::{Shape, MAX_SHAPE_SIZE};

/// Rotate a shape 90° clockwise: `rotated[i][j] = original[n-1-j][i]`.
///
/// The result has the same n×n size, so four applications return the
/// original shape.
pub fn rotate_cw(shape: &Shape) -> Shape {
    let n = shape.size();
    let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    for i in 0..n {
        for j in 0..n {
            rows[i][j] = shape.cell(i, n - 1 - j);
        }
    }
    Shape::from_parts(n, rows)
}

/// Whether the shape placed at `position` overlaps the walls, the floor,
/// or a locked cell.
///
/// Cells above row 0 never collide, so a piece may enter the board from
/// above with a negative y.
pub fn collides(board: &Board, shape: &Shape, position: Position) -> bool {
    for (sx, sy) in shape.cells() {
        let x = position.x + sx as i32;
        let y = position.y + sy as i32;

        if x < 0 || x >= board.width() as i32 || y >= board.height() as i32 {
            return true;
        }
        if y < 0 {
            continue;
        }
        if board.is_occupied(x, y) {
            return true;
        }
    }
    false
}
