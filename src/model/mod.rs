use serde::Serialize;
use uuid::Uuid;

use crate::data::SIZE;

/// Zero-indexed board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a 1-indexed prompt answer, rejecting anything off the board.
    pub fn from_one_based(row: usize, col: usize) -> Option<Self> {
        if (1..=SIZE).contains(&row) && (1..=SIZE).contains(&col) {
            Some(Self::new(row - 1, col - 1))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Flag,
    Reveal,
}

impl Action {
    /// `B`/`b` tags a bomb, any other key (or none) reveals.
    pub fn from_key(key: Option<char>) -> Self {
        match key {
            Some('B' | 'b') => Self::Flag,
            _ => Self::Reveal,
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        *self != Self::Playing
    }
}

/// End-of-game record, logged as JSON.
#[derive(Serialize, Debug)]
pub struct GameSummary {
    pub session: Uuid,
    pub player: String,
    pub outcome: GameState,
    pub bombs: usize,
    pub flagged: usize,
    pub board: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_one_based_bounds() {
        assert_eq!(Pos::from_one_based(1, 1), Some(Pos::new(0, 0)));
        assert_eq!(Pos::from_one_based(10, 10), Some(Pos::new(9, 9)));
        assert_eq!(Pos::from_one_based(0, 5), None);
        assert_eq!(Pos::from_one_based(5, 11), None);
    }

    #[test]
    fn test_action_from_key() {
        assert_eq!(Action::from_key(Some('B')), Action::Flag);
        assert_eq!(Action::from_key(Some('b')), Action::Flag);
        assert_eq!(Action::from_key(Some('x')), Action::Reveal);
        assert_eq!(Action::from_key(None), Action::Reveal);
    }

    #[test]
    fn test_game_state_serializes_lowercase() {
        let json = serde_json::to_string(&GameState::Won).unwrap();
        assert_eq!(json, "\"won\"");
        assert!(!GameState::Playing.is_over());
        assert!(GameState::Lost.is_over());
    }
}
