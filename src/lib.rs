//! Hexagonal word-game engine: board topology, the turn state machine,
//! word validation and scoring seams, and the session orchestrator that
//! ties them together.

pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod models;
pub mod store;
pub mod utils;

pub use config::Config;
pub use dictionary::{Dictionary, WordSource};
pub use error::GameError;
pub use game::{
    Board, GameSession, GameSnapshot, GameState, GameStatus, MoveRecord, SelectionOutcome,
    SubmitOutcome, WordValidator,
};
pub use models::{Cell, Player, PlayerId, Position};
pub use store::{DataStore, MemoryStore};
