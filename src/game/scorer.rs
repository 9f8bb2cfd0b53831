use crate::utils::letters::get_letter_value;

/// Scoring policy for an accepted word.
pub trait ScorePolicy {
    fn score_word(&self, word: &str) -> i32;
}

/// One point per letter. The default session policy.
pub struct LengthScorer;

impl ScorePolicy for LengthScorer {
    fn score_word(&self, word: &str) -> i32 {
        word.chars().count() as i32
    }
}

/// Scrabble-style policy: the sum of per-letter values.
pub struct LetterValueScorer;

impl ScorePolicy for LetterValueScorer {
    fn score_word(&self, word: &str) -> i32 {
        word.chars().map(|ch| get_letter_value(ch) as i32).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_scoring() {
        assert_eq!(LengthScorer.score_word("CA"), 2);
        assert_eq!(LengthScorer.score_word("LETTERS"), 7);
        assert_eq!(LengthScorer.score_word(""), 0);
    }

    #[test]
    fn test_letter_value_scoring() {
        // C(3) + A(1) + B(3) = 7
        assert_eq!(LetterValueScorer.score_word("CAB"), 7);
        // Q(10) + I(1) + Z(10) = 21, lowercase input values the same
        assert_eq!(LetterValueScorer.score_word("qiz"), 21);
    }
}
