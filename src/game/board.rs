use crate::{
    error::GameError,
    game::hex::neighbor_offsets,
    models::{Cell, Position},
    utils::letters::{random_letter, LetterStyle},
};

/// The hexagonal game board: a dense `width x height` grid of lettered
/// cells, stored row-major. Created once per session and never resized.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Allocate the board and assign every cell a random uppercase letter
    /// drawn according to `letters`.
    pub fn new(width: i32, height: i32, letters: LetterStyle) -> Result<Self, GameError> {
        if width <= 0 || height <= 0 {
            return Err(GameError::InvalidDimensions { width, height });
        }

        let mut rng = rand::rng();
        let mut cells = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(
                    Position::new(x, y),
                    random_letter(letters, &mut rng),
                ));
            }
        }

        tracing::info!("Generated {}x{} board", width, height);

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// The cell at `(x, y)`, or `None` outside the board.
    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `(x, y)`. Letter and owner are the
    /// only fields a caller should touch; coordinates are fixed for life.
    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// The in-bounds neighbors of `(x, y)` under the row-parity rule.
    /// Edge and corner cells simply yield fewer than six; this never
    /// fails.
    pub fn neighbors(&self, x: i32, y: i32) -> Vec<&Cell> {
        neighbor_offsets(y)
            .iter()
            .filter_map(|&(dx, dy)| self.cell(x + dx, y + dy))
            .collect()
    }

    /// Whether selecting `to` after `from` is legal. The first letter of
    /// a word may land on any cell; after that the target must be
    /// adjacent to the previous selection. Pure predicate, no side
    /// effects.
    pub fn is_legal_move(&self, from: Option<Position>, to: Position) -> bool {
        match from {
            None => true,
            Some(from) => self
                .neighbors(from.x, from.y)
                .iter()
                .any(|cell| cell.position == to),
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: i32, height: i32) -> Board {
        Board::new(width, height, LetterStyle::Uniform).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        assert_eq!(
            Board::new(0, 7, LetterStyle::Uniform).unwrap_err(),
            GameError::InvalidDimensions { width: 0, height: 7 }
        );
        assert!(Board::new(7, -1, LetterStyle::Uniform).is_err());
    }

    #[test]
    fn test_cells_know_their_own_coordinates() {
        let board = board(7, 7);
        for y in 0..7 {
            for x in 0..7 {
                let cell = board.cell(x, y).unwrap();
                assert_eq!(cell.position, Position::new(x, y));
                assert!(cell.letter.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn test_out_of_bounds_lookup_is_none() {
        let board = board(7, 7);
        assert!(board.cell(-1, 0).is_none());
        assert!(board.cell(0, -1).is_none());
        assert!(board.cell(7, 0).is_none());
        assert!(board.cell(0, 7).is_none());
    }

    #[test]
    fn test_interior_cell_has_six_neighbors() {
        let board = board(7, 7);
        assert_eq!(board.neighbors(3, 3).len(), 6);
        assert_eq!(board.neighbors(3, 4).len(), 6);
    }

    #[test]
    fn test_corners_lose_out_of_bounds_neighbors() {
        let board = board(7, 7);
        // (0,0): only right and down-right survive on an even row.
        assert_eq!(board.neighbors(0, 0).len(), 2);
        // (6,6): up-left, up-right and left survive.
        assert_eq!(board.neighbors(6, 6).len(), 3);
    }

    #[test]
    fn test_a_cell_is_not_its_own_neighbor() {
        let board = board(5, 5);
        for cell in board.cells() {
            let Position { x, y } = cell.position;
            assert!(board
                .neighbors(x, y)
                .iter()
                .all(|n| n.position != cell.position));
        }
    }

    #[test]
    fn test_neighbor_relation_is_symmetric() {
        // Exhaustive iff-sweep over every ordered pair, on an odd-even
        // mix of dimensions so edge parity gets exercised both ways.
        for (w, h) in [(7, 7), (5, 4)] {
            let board = board(w, h);
            for a in board.cells() {
                for b in board.cells() {
                    let forward = board
                        .neighbors(a.position.x, a.position.y)
                        .iter()
                        .any(|n| n.position == b.position);
                    let backward = board
                        .neighbors(b.position.x, b.position.y)
                        .iter()
                        .any(|n| n.position == a.position);
                    assert_eq!(
                        forward, backward,
                        "asymmetric adjacency between {:?} and {:?}",
                        a.position, b.position
                    );
                }
            }
        }
    }

    #[test]
    fn test_first_move_is_always_legal() {
        let board = board(7, 7);
        for cell in board.cells() {
            assert!(board.is_legal_move(None, cell.position));
        }
    }

    #[test]
    fn test_legal_move_matches_neighbor_set() {
        let board = board(7, 7);
        let from = Position::new(3, 3);
        for cell in board.cells() {
            let is_neighbor = board
                .neighbors(from.x, from.y)
                .iter()
                .any(|n| n.position == cell.position);
            assert_eq!(board.is_legal_move(Some(from), cell.position), is_neighbor);
        }
        // A cell is never adjacent to itself.
        assert!(!board.is_legal_move(Some(from), from));
    }

    #[test]
    fn test_letter_can_be_reassigned() {
        let mut board = board(3, 3);
        board.cell_mut(1, 1).unwrap().letter = 'Z';
        assert_eq!(board.cell(1, 1).unwrap().letter, 'Z');
    }
}
