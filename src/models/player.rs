use serde::{Deserialize, Serialize};

/// Unique player key within a session.
pub type PlayerId = String;

/// A participant in a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub score: i32,
    /// Power-ups in acquisition order; duplicates allowed.
    pub power_ups: Vec<String>,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            score: 0,
            power_ups: Vec::new(),
        }
    }

    /// Add `delta` to the score. Negative deltas are allowed (penalties),
    /// but the score never drops below zero.
    pub fn add_score(&mut self, delta: i32) {
        self.score = self.score.saturating_add(delta).max(0);
    }

    pub fn add_power_up(&mut self, power_up: impl Into<String>) {
        self.power_ups.push(power_up.into());
    }

    /// Remove the first matching power-up. Returns whether one was removed.
    pub fn remove_power_up(&mut self, power_up: &str) -> bool {
        match self.power_ups.iter().position(|p| p == power_up) {
            Some(idx) => {
                self.power_ups.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn has_power_up(&self, power_up: &str) -> bool {
        self.power_ups.iter().any(|p| p == power_up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_starts_empty() {
        let player = Player::new("p1");
        assert_eq!(player.score, 0);
        assert!(player.power_ups.is_empty());
    }

    #[test]
    fn test_score_floors_at_zero() {
        let mut player = Player::new("p1");
        player.add_score(5);
        player.add_score(-3);
        assert_eq!(player.score, 2);

        player.add_score(-100);
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_power_up_inventory_keeps_order_and_duplicates() {
        let mut player = Player::new("p1");
        player.add_power_up("swap");
        player.add_power_up("bomb");
        player.add_power_up("swap");
        assert_eq!(player.power_ups, vec!["swap", "bomb", "swap"]);
        assert!(player.has_power_up("bomb"));

        // Removal takes the first occurrence only.
        assert!(player.remove_power_up("swap"));
        assert_eq!(player.power_ups, vec!["bomb", "swap"]);
        assert!(player.has_power_up("swap"));

        assert!(!player.remove_power_up("shield"));
    }
}
