use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

use crate::utils::letters::LetterStyle;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub board: BoardConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    pub dictionary_path: String,
    pub players: Vec<String>,
    pub letter_style: LetterStyle,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let board = BoardConfig {
            width: env::var("BOARD_WIDTH")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .context("BOARD_WIDTH must be a number")?,
            height: env::var("BOARD_HEIGHT")
                .unwrap_or_else(|_| "7".to_string())
                .parse()
                .context("BOARD_HEIGHT must be a number")?,
        };

        let players = env::var("PLAYERS")
            .unwrap_or_else(|_| "p1,p2".to_string())
            .split(',')
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect();

        let letter_style = match env::var("LETTER_STYLE")
            .unwrap_or_else(|_| "uniform".to_string())
            .to_lowercase()
            .as_str()
        {
            "weighted" => LetterStyle::Weighted,
            _ => LetterStyle::Uniform,
        };

        let game = GameConfig {
            dictionary_path: env::var("DICTIONARY_PATH")
                .unwrap_or_else(|_| "./dictionary.txt".to_string()),
            players,
            letter_style,
        };

        Ok(Config { board, game })
    }
}
