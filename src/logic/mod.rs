use rand::Rng;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    data::{BOMB, BOMB_CHANCE, DisplayBoard, EMPTY, FLAG, HIDDEN, ReferenceBoard, SIZE},
    model::{GameState, GameSummary, Pos},
};

/// Lays out bombs with an independent draw per cell, so the total is not fixed.
pub fn create_reference_board<R: Rng + ?Sized>(rng: &mut R) -> ReferenceBoard {
    let mut board = [[0; SIZE]; SIZE];

    for row in board.iter_mut() {
        for cell in row.iter_mut() {
            let draw: u32 = rng.random_range(1..=100);
            if draw <= BOMB_CHANCE {
                *cell = BOMB;
            }
        }
    }

    board
}

fn count_adjacent_bombs(board: &ReferenceBoard, pos: Pos) -> u8 {
    let mut count = 0;

    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let new_row = pos.row as i32 + dy;
            let new_col = pos.col as i32 + dx;

            if new_row >= 0
                && new_row < SIZE as i32
                && new_col >= 0
                && new_col < SIZE as i32
                && board[new_row as usize][new_col as usize] == BOMB
            {
                count += 1;
            }
        }
    }

    count
}

/// Replaces every non-bomb cell with its adjacent bomb count.
pub fn encode_numbers(board: &ReferenceBoard) -> ReferenceBoard {
    let mut encoded = *board;

    for (row, cells) in encoded.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            if *cell != BOMB {
                *cell = count_adjacent_bombs(board, Pos::new(row, col));
            }
        }
    }

    encoded
}

pub fn count_bombs(board: &ReferenceBoard) -> usize {
    board.iter().flatten().filter(|&&cell| cell == BOMB).count()
}

pub fn play_board() -> DisplayBoard {
    [[HIDDEN; SIZE]; SIZE]
}

/// Display symbol for an encoded reference value.
fn cell_symbol(value: u8) -> char {
    match value {
        BOMB => FLAG,
        0 => EMPTY,
        n => char::from(b'0' + n),
    }
}

#[derive(Debug)]
pub struct Game {
    player: String,
    reference: ReferenceBoard,
    display: DisplayBoard,
    bombs: usize,
    flagged: usize,
    state: GameState,
}

impl Game {
    /// Starts a game on the given bomb layout, encoding its numbers.
    #[instrument(level = "trace", skip(board))]
    pub fn new(player: String, board: ReferenceBoard) -> Self {
        let reference = encode_numbers(&board);
        let bombs = count_bombs(&reference);
        info!("Creating new {}x{} game with {} bombs", SIZE, SIZE, bombs);

        Self {
            player,
            reference,
            display: play_board(),
            bombs,
            flagged: 0,
            state: GameState::Playing,
        }
    }

    pub fn generate<R: Rng + ?Sized>(player: String, rng: &mut R) -> Self {
        Self::new(player, create_reference_board(rng))
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn reference(&self) -> &ReferenceBoard {
        &self.reference
    }

    pub fn display(&self) -> &DisplayBoard {
        &self.display
    }

    pub fn bombs(&self) -> usize {
        self.bombs
    }

    pub fn flagged(&self) -> usize {
        self.flagged
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    fn validate_pos(&self, pos: &Pos) -> bool {
        pos.row < SIZE && pos.col < SIZE
    }

    /// Tags a cell as a bomb. Once as many flags as bombs have been placed
    /// the game ends, won only if every flag sits on a bomb.
    ///
    /// Flags are counted per action, so tagging the same cell twice counts twice.
    #[instrument(level = "trace", skip(self), fields(row = pos.row, col = pos.col))]
    pub fn flag(&mut self, pos: Pos) -> GameState {
        if !self.validate_pos(&pos) {
            warn!("Invalid flag position: ({}, {})", pos.row, pos.col);
            return self.state;
        }

        if self.state.is_over() {
            debug!(
                "Ignoring flag action on finished game at ({}, {})",
                pos.row, pos.col
            );
            return self.state;
        }

        let cell = &mut self.display[pos.row][pos.col];
        if *cell == FLAG {
            warn!(
                "Cell ({}, {}) flagged again, counting it twice",
                pos.row, pos.col
            );
        }
        *cell = FLAG;
        self.flagged += 1;
        debug!(
            "Cell ({}, {}) flagged, {}/{} flags placed",
            pos.row, pos.col, self.flagged, self.bombs
        );

        if self.flagged == self.bombs {
            self.state = if self.check_winner() {
                info!("Game won! All bombs flagged.");
                GameState::Won
            } else {
                info!("Game lost, at least one flag is not on a bomb");
                GameState::Lost
            };
            self.reveal_all();
        }

        self.state
    }

    #[instrument(level = "trace", skip(self), fields(row = pos.row, col = pos.col))]
    pub fn reveal(&mut self, pos: Pos) -> GameState {
        if !self.validate_pos(&pos) {
            warn!("Invalid reveal position: ({}, {})", pos.row, pos.col);
            return self.state;
        }

        if self.state.is_over() {
            debug!(
                "Ignoring reveal action on finished game at ({}, {})",
                pos.row, pos.col
            );
            return self.state;
        }

        let value = self.reference[pos.row][pos.col];
        if value == BOMB {
            warn!("Player hit bomb at ({}, {}) - game over!", pos.row, pos.col);
            self.state = GameState::Lost;
            self.reveal_all();
            return self.state;
        }

        debug!(
            "Revealing cell ({}, {}) with {} adjacent bombs",
            pos.row, pos.col, value
        );
        self.display[pos.row][pos.col] = cell_symbol(value);

        self.state
    }

    fn check_winner(&self) -> bool {
        self.display
            .iter()
            .flatten()
            .zip(self.reference.iter().flatten())
            .all(|(&shown, &value)| shown != FLAG || value == BOMB)
    }

    /// Overwrites the whole display board with the ground truth.
    fn reveal_all(&mut self) {
        for (shown, values) in self.display.iter_mut().zip(self.reference.iter()) {
            for (cell, &value) in shown.iter_mut().zip(values.iter()) {
                *cell = cell_symbol(value);
            }
        }
    }

    pub fn summary(&self, session: Uuid) -> GameSummary {
        GameSummary {
            session,
            player: self.player.clone(),
            outcome: self.state,
            bombs: self.bombs,
            flagged: self.flagged,
            board: self
                .display
                .iter()
                .map(|row| row.iter().collect())
                .collect(),
        }
    }
}
