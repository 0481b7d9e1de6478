use std::io::{self, BufRead, Write};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::{
    Result,
    config::Config,
    data::SIZE,
    input::{COLUMN_PROMPT, Console, ROW_PROMPT},
    logic::Game,
    model::{Action, GameState, Pos},
    render::Renderer,
};

pub const BOMB_HIT: &str = "You hit a bomb! Now we are all dead!!";
pub const WIN: &str = "YOU WIN!!!";
pub const LOSE: &str = "YOU LOSE!!!";
pub const THANKS: &str = "Thanks for playing!";
pub const PRESS_ANY_KEY: &str = "Press any key to exit";

/// Runs turns until the game is won or lost, then shows the revealed board.
pub fn play<R: BufRead, W: Write>(
    game: &mut Game,
    console: &mut Console<R, W>,
    renderer: &Renderer,
) -> Result<GameState> {
    console.say(&format!("Welcome, {}!", game.player()))?;

    loop {
        renderer.render(game.display(), console.output())?;

        let action = console.read_action()?;
        let row = console.read_in_range(ROW_PROMPT, 1, SIZE)?;
        let col = console.read_in_range(COLUMN_PROMPT, 1, SIZE)?;
        let pos = Pos::from_one_based(row, col).ok_or("position off the board")?;

        let state = match action {
            Action::Flag => game.flag(pos),
            Action::Reveal => game.reveal(pos),
        };

        let message = match (action, state) {
            (_, GameState::Playing) => continue,
            (_, GameState::Won) => WIN,
            (Action::Reveal, GameState::Lost) => BOMB_HIT,
            (Action::Flag, GameState::Lost) => LOSE,
        };

        console.say(message)?;
        renderer.render(game.display(), console.output())?;
        break;
    }

    console.say(THANKS)?;
    console.say(PRESS_ANY_KEY)?;
    console.wait_for_key()?;

    Ok(game.state())
}

/// Plays one game on the process console.
pub fn run(config: &Config) -> Result<GameState> {
    let session = Uuid::new_v4();
    let span = info_span!("session", id = %session);
    let _guard = span.enter();

    info!(
        "Starting game for {} (color: {}, seed: {:?})",
        config.player, config.color, config.seed
    );

    let mut game = match config.seed {
        Some(seed) => Game::generate(config.player.clone(), &mut StdRng::seed_from_u64(seed)),
        None => Game::generate(config.player.clone(), &mut rand::rng()),
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let renderer = Renderer::new(config.color);

    let outcome = play(&mut game, &mut console, &renderer)?;

    match serde_json::to_string(&game.summary(session)) {
        Ok(summary) => info!(%summary, "Game finished"),
        Err(e) => warn!("Failed to serialize game summary: {}", e),
    }

    Ok(outcome)
}
