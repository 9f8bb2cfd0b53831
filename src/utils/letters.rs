use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Letter values similar to Scrabble scoring
pub static LETTER_VALUES: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // 1 point letters
    for ch in ['A', 'E', 'I', 'O', 'U', 'L', 'N', 'R', 'S', 'T'] {
        map.insert(ch, 1);
    }

    // 2 points
    for ch in ['D', 'G'] {
        map.insert(ch, 2);
    }

    // 3 points
    for ch in ['B', 'C', 'M', 'P'] {
        map.insert(ch, 3);
    }

    // 4 points
    for ch in ['F', 'H', 'V', 'W', 'Y'] {
        map.insert(ch, 4);
    }

    // 5 points
    map.insert('K', 5);

    // 8 points
    for ch in ['J', 'X'] {
        map.insert(ch, 8);
    }

    // 10 points
    for ch in ['Q', 'Z'] {
        map.insert(ch, 10);
    }

    map
});

/// Letter frequency distribution for English (approximate)
/// Used for weighted random generation
pub static LETTER_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    vec![
        ('E', 12.70),
        ('T', 9.05),
        ('A', 8.16),
        ('O', 7.50),
        ('I', 6.96),
        ('N', 6.74),
        ('S', 6.32),
        ('H', 6.09),
        ('R', 5.98),
        ('D', 4.25),
        ('L', 4.02),
        ('C', 2.78),
        ('U', 2.75),
        ('M', 2.40),
        ('W', 2.36),
        ('F', 2.22),
        ('G', 2.01),
        ('Y', 1.97),
        ('P', 1.92),
        ('B', 1.49),
        ('V', 0.97),
        ('K', 0.77),
        ('J', 0.15),
        ('X', 0.15),
        ('Q', 0.09),
        ('Z', 0.07),
    ]
});

static CUMULATIVE_DISTRIBUTION: Lazy<Vec<(char, f32)>> = Lazy::new(get_cumulative_distribution);

/// How initial board letters are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStyle {
    /// Uniform draw over A-Z. The default.
    Uniform,
    /// Draw weighted by English letter frequency.
    Weighted,
}

/// Get the point value for a letter
pub fn get_letter_value(letter: char) -> u8 {
    let upper = letter.to_ascii_uppercase();
    *LETTER_VALUES.get(&upper).unwrap_or(&1)
}

/// Calculate the cumulative distribution for weighted random selection
pub fn get_cumulative_distribution() -> Vec<(char, f32)> {
    let mut cumulative = 0.0;
    LETTER_DISTRIBUTION
        .iter()
        .map(|(ch, freq)| {
            cumulative += freq;
            (*ch, cumulative)
        })
        .collect()
}

/// Draw one random uppercase letter according to `style`.
pub fn random_letter(style: LetterStyle, rng: &mut impl Rng) -> char {
    match style {
        LetterStyle::Uniform => (b'A' + rng.random_range(0..26)) as char,
        LetterStyle::Weighted => weighted_letter(rng),
    }
}

fn weighted_letter(rng: &mut impl Rng) -> char {
    let total = CUMULATIVE_DISTRIBUTION.last().map(|(_, c)| *c).unwrap_or(0.0);
    let random_value = rng.random::<f32>() * total;

    for (letter, cumulative) in CUMULATIVE_DISTRIBUTION.iter() {
        if random_value <= *cumulative {
            return *letter;
        }
    }

    'E' // Fallback
}
