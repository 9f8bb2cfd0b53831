use serde::{Deserialize, Serialize};

use super::PlayerId;

/// A board coordinate. This is the identity of a cell; the row parity
/// of `y` drives the hexagonal adjacency rule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single hexagonal cell on the board.
///
/// Cells are created once at board generation and keep their coordinate
/// for life. Only `letter` and `owner` are mutable: letter reassignment
/// is reserved for power-up mechanics, ownership for capture mechanics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub position: Position,
    pub letter: char,
    pub owner: Option<PlayerId>,
}

impl Cell {
    pub fn new(position: Position, letter: char) -> Self {
        Self {
            position,
            letter,
            owner: None,
        }
    }
}
