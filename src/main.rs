use anyhow::Result;
use hexword::{
    game::{hex::neighbor_offsets, SelectionOutcome, SubmitOutcome},
    Config, Dictionary, GameSession,
};
use rand::Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexword=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting hexword demo session...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load dictionary
    let dictionary = match Dictionary::load(&config.game.dictionary_path) {
        Ok(dict) => {
            tracing::info!("Dictionary loaded successfully");
            dict
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load dictionary: {}. Using empty dictionary for now.",
                e
            );
            tracing::warn!(
                "Download a word list to {} for full functionality",
                config.game.dictionary_path
            );
            Dictionary::empty()
        }
    };

    let mut session = GameSession::with_letters(
        config.board.width,
        config.board.height,
        &config.game.players,
        Box::new(dictionary),
        config.game.letter_style,
    )?;

    // One scripted turn per player: walk a random adjacent path and
    // submit whatever came out.
    let mut rng = rand::rng();
    for _ in 0..config.game.players.len() {
        play_turn(&mut session, &mut rng);
        session.state_mut().advance_turn();
    }

    for player in session.state().players() {
        tracing::info!("Final score for {}: {}", player.id, player.score);
    }

    Ok(())
}

/// Select a short random path of adjacent cells, then submit it.
fn play_turn(session: &mut GameSession, rng: &mut impl Rng) {
    let mut x = rng.random_range(0..session.board().width());
    let mut y = rng.random_range(0..session.board().height());
    // The first selection of a word is always legal.
    session.process_selection(x, y);

    for _ in 0..3 {
        let offsets = neighbor_offsets(y);
        let (dx, dy) = offsets[rng.random_range(0..offsets.len())];
        if let SelectionOutcome::Selected { .. } = session.process_selection(x + dx, y + dy) {
            x += dx;
            y += dy;
        }
    }

    match session.submit_word() {
        SubmitOutcome::Accepted { word, score } => {
            tracing::info!("Accepted {:?} for {} points", word, score);
        }
        SubmitOutcome::Rejected { word } => {
            tracing::info!("Rejected {:?}", word);
        }
        SubmitOutcome::NotPlaying => {}
    }
}
