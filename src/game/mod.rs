// Game engine modules

pub mod board;
pub mod hex;
pub mod scorer;
pub mod session;
pub mod state;
pub mod validator;

pub use board::Board;
pub use scorer::{LengthScorer, LetterValueScorer, ScorePolicy};
pub use session::{GameSession, GameSnapshot, MoveRecord, SelectionOutcome, SubmitOutcome};
pub use state::{GameState, GameStatus};
pub use validator::WordValidator;
