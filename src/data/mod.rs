pub const SIZE: usize = 10;

/// Reference board value marking a bomb.
pub const BOMB: u8 = 9;

/// Bomb threshold for the 1..=100 draw made for every cell.
pub const BOMB_CHANCE: u32 = 15;

pub const HIDDEN: char = '*';
pub const FLAG: char = 'B';
pub const EMPTY: char = ' ';

/// Ground truth: bombs and, once encoded, adjacent bomb counts.
pub type ReferenceBoard = [[u8; SIZE]; SIZE];

/// What the player sees.
pub type DisplayBoard = [[char; SIZE]; SIZE];
