use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    dictionary::WordSource,
    error::GameError,
    game::{
        scorer::{LengthScorer, ScorePolicy},
        Board, GameState, GameStatus, WordValidator,
    },
    models::PlayerId,
    utils::letters::LetterStyle,
};

/// Result of feeding one cell-selected event into the session. Rejected
/// selections leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The cell was appended to the current word.
    Selected { letter: char },
    /// The target is not adjacent to the last selected cell.
    NotAdjacent,
    /// No cell exists at the given coordinates.
    OutOfBounds,
    /// The session is not in the playing state.
    NotPlaying,
}

/// Result of submitting the in-progress word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The word was valid; the current player was credited.
    Accepted { word: String, score: i32 },
    /// The word was not accepted by the source and has been discarded.
    Rejected { word: String },
    /// The session is not in the playing state.
    NotPlaying,
}

/// One accepted word, as kept in the session's move log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    pub player_id: PlayerId,
    pub word: String,
    pub score: i32,
}

/// Serializable summary of a session, for hosts that persist games
/// through a [`DataStore`](crate::store::DataStore).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub session_id: Uuid,
    pub status: GameStatus,
    /// Board letters, one string per row, top to bottom.
    pub rows: Vec<String>,
    pub scores: HashMap<PlayerId, i32>,
    pub current_player: PlayerId,
    pub word_history: Vec<String>,
}

/// A single game session: board, turn state, validator and scoring
/// policy composed into one explicitly constructed value. There is no
/// global instance; hosts own as many sessions as they need.
pub struct GameSession {
    session_id: Uuid,
    board: Board,
    state: GameState,
    validator: WordValidator,
    scorer: Box<dyn ScorePolicy>,
    moves: Vec<MoveRecord>,
}

impl GameSession {
    /// Create a session with uniformly drawn letters and the default
    /// length-based scoring.
    pub fn new(
        width: i32,
        height: i32,
        player_ids: &[PlayerId],
        source: Box<dyn WordSource>,
    ) -> Result<Self, GameError> {
        Self::with_letters(width, height, player_ids, source, LetterStyle::Uniform)
    }

    /// Create a session with an explicit letter-generation style.
    pub fn with_letters(
        width: i32,
        height: i32,
        player_ids: &[PlayerId],
        source: Box<dyn WordSource>,
        letters: LetterStyle,
    ) -> Result<Self, GameError> {
        let board = Board::new(width, height, letters)?;
        let state = GameState::new(player_ids)?;
        let session_id = Uuid::new_v4();

        tracing::info!(
            "Created session {} with {} players",
            session_id,
            player_ids.len()
        );

        Ok(Self {
            session_id,
            board,
            state,
            validator: WordValidator::new(source),
            scorer: Box::new(LengthScorer),
            moves: Vec::new(),
        })
    }

    /// Replace the scoring policy.
    pub fn with_scorer(mut self, scorer: Box<dyn ScorePolicy>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for power-up mechanics that reassign
    /// letters or owners.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access, for turn control from the host (advancing
    /// the turn, finishing the game).
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Accepted words in submission order.
    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    /// Handle a raw cell-selected event. The first selection of a word
    /// may land anywhere; every later one must be adjacent to the
    /// previous selection.
    pub fn process_selection(&mut self, x: i32, y: i32) -> SelectionOutcome {
        if self.state.status() != GameStatus::Playing {
            return SelectionOutcome::NotPlaying;
        }
        let Some(cell) = self.board.cell(x, y) else {
            return SelectionOutcome::OutOfBounds;
        };
        if !self.board.is_legal_move(self.state.last_selected(), cell.position) {
            tracing::debug!("Rejected non-adjacent selection at ({}, {})", x, y);
            return SelectionOutcome::NotAdjacent;
        }

        self.state.append_letter(cell);
        SelectionOutcome::Selected { letter: cell.letter }
    }

    /// Submit the in-progress word. A valid word is scored, credited to
    /// the current player and committed to the history; an invalid one
    /// is discarded with no penalty.
    pub fn submit_word(&mut self) -> SubmitOutcome {
        if self.state.status() != GameStatus::Playing {
            return SubmitOutcome::NotPlaying;
        }

        let word = self.state.current_word().to_string();
        if !self.validator.is_valid_word(&word) {
            tracing::debug!("Word {:?} rejected by the word source", word);
            self.state.clear_current_word();
            return SubmitOutcome::Rejected { word };
        }

        let score = self.scorer.score_word(&word);
        let player_id = self.state.current_player().to_string();
        self.state.update_player_score(&player_id, score);
        self.state.commit_current_word();
        self.moves.push(MoveRecord {
            player_id: player_id.clone(),
            word: word.clone(),
            score,
        });

        tracing::info!("Player {} scored {} with {:?}", player_id, score, word);
        SubmitOutcome::Accepted { word, score }
    }

    /// A serializable summary of the session's current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let width = self.board.width() as usize;
        let mut rows = Vec::with_capacity(self.board.height() as usize);
        let mut row = String::with_capacity(width);
        for cell in self.board.cells() {
            row.push(cell.letter);
            if row.len() == width {
                rows.push(std::mem::take(&mut row));
            }
        }

        GameSnapshot {
            session_id: self.session_id,
            status: self.state.status(),
            rows,
            scores: self
                .state
                .players()
                .map(|p| (p.id.clone(), p.score))
                .collect(),
            current_player: self.state.current_player().to_string(),
            word_history: self.state.word_history().to_vec(),
        }
    }
}
