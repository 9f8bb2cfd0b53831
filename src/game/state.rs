use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    error::GameError,
    models::{Cell, Player, PlayerId, Position},
};

/// Lifecycle of a session. Transitions run forward only; `Finished` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Waiting,
    Playing,
    Finished,
}

/// The authoritative turn state: roster, current player, the in-progress
/// word and the committed word history.
///
/// Adjacency is deliberately not checked here — the session enforces it
/// against the board before appending. `current_word` is derived state:
/// always the concatenation of the selected cells' letters, in order.
#[derive(Debug, Clone)]
pub struct GameState {
    status: GameStatus,
    players: HashMap<PlayerId, Player>,
    turn_order: Vec<PlayerId>,
    current_player: PlayerId,
    selection: Vec<Position>,
    current_word: String,
    word_history: Vec<String>,
}

impl GameState {
    /// Build the roster and start playing. The first id in the list
    /// takes the opening turn. An empty roster is a configuration error.
    pub fn new(player_ids: &[PlayerId]) -> Result<Self, GameError> {
        let Some(first) = player_ids.first() else {
            return Err(GameError::EmptyRoster);
        };

        let mut players = HashMap::new();
        let mut turn_order = Vec::new();
        for id in player_ids {
            if players.insert(id.clone(), Player::new(id.clone())).is_none() {
                turn_order.push(id.clone());
            }
        }

        Ok(Self {
            status: GameStatus::Playing,
            players,
            turn_order,
            current_player: first.clone(),
            selection: Vec::new(),
            current_word: String::new(),
            word_history: Vec::new(),
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Unconditional status set. Callers are responsible for sane
    /// ordering; there is no path back from `Finished` by convention.
    pub fn change_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    /// Append a selected cell to the in-progress word.
    pub fn append_letter(&mut self, cell: &Cell) {
        self.selection.push(cell.position);
        self.current_word.push(cell.letter);
    }

    /// Discard the in-progress word. History and scores are untouched.
    pub fn clear_current_word(&mut self) {
        self.selection.clear();
        self.current_word.clear();
    }

    /// Move the in-progress word into the history and reset the
    /// selection. Callers validate the word first.
    pub fn commit_current_word(&mut self) {
        let word = std::mem::take(&mut self.current_word);
        self.word_history.push(word);
        self.selection.clear();
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn selection(&self) -> &[Position] {
        &self.selection
    }

    /// The most recently selected cell, if a word is in progress.
    pub fn last_selected(&self) -> Option<Position> {
        self.selection.last().copied()
    }

    pub fn word_history(&self) -> &[String] {
        &self.word_history
    }

    /// Add `delta` to a player's score. An unknown id is ignored, with a
    /// warning so misrouted updates stay visible in the logs.
    pub fn update_player_score(&mut self, player_id: &str, delta: i32) {
        match self.players.get_mut(player_id) {
            Some(player) => player.add_score(delta),
            None => tracing::warn!("Score update for unknown player {} ignored", player_id),
        }
    }

    /// Hand the turn to `player_id`. An unknown id is ignored, with the
    /// same warning signal as score updates.
    pub fn set_current_player(&mut self, player_id: &str) {
        if self.players.contains_key(player_id) {
            self.current_player = player_id.to_string();
        } else {
            tracing::warn!("Cannot set unknown player {} as current", player_id);
        }
    }

    pub fn is_current_player(&self, player_id: &str) -> bool {
        self.current_player == player_id
    }

    pub fn current_player(&self) -> &str {
        &self.current_player
    }

    /// Rotate the turn to the next player in roster order, wrapping at
    /// the end.
    pub fn advance_turn(&mut self) {
        let Some(idx) = self
            .turn_order
            .iter()
            .position(|id| *id == self.current_player)
        else {
            return;
        };
        let next = (idx + 1) % self.turn_order.len();
        self.current_player = self.turn_order[next].clone();
    }

    /// Register a late joiner at the end of the turn order. Ids already
    /// in the roster are left as they are.
    pub fn add_player(&mut self, player_id: impl Into<PlayerId>) {
        let player_id = player_id.into();
        if self.players.contains_key(&player_id) {
            return;
        }
        self.players
            .insert(player_id.clone(), Player::new(player_id.clone()));
        self.turn_order.push(player_id);
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// All players, in turn order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.turn_order.iter().filter_map(|id| self.players.get(id))
    }
}
