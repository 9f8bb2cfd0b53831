//! The row-parity hexagonal offset rule.
//!
//! Odd rows are shifted half a cell to the right, so the four diagonal
//! neighbors of a cell depend on the parity of its row. The rule lives
//! here as a single pure function; callers never inline the arithmetic.

/// Neighbor coordinate deltas for a cell in row `y`.
///
/// With `offset = 0` for even rows and `1` for odd rows, the six
/// neighbors of `(x, y)` are, in order: up-left, up-right, left, right,
/// down-left, down-right.
pub fn neighbor_offsets(y: i32) -> [(i32, i32); 6] {
    // rem_euclid keeps the parity correct for negative rows too.
    let offset = y.rem_euclid(2);
    [
        (offset - 1, -1), // up-left
        (offset, -1),     // up-right
        (-1, 0),          // left
        (1, 0),           // right
        (offset - 1, 1),  // down-left
        (offset, 1),      // down-right
    ]
}
