//! Console minesweeper on a fixed 10x10 board.
//!
//! Bombs are scattered with an independent 15% chance per cell, so the
//! number of bombs differs from game to game. The player either reveals a
//! cell or tags it with a flag; revealing a bomb loses, and once as many
//! flags as bombs are down the game is won only if every flag is on a bomb.
//!
//! ```rust,no_run
//! use minesweeper_console::{config::Config, session};
//!
//! fn main() -> minesweeper_console::Result<()> {
//!     let outcome = session::run(&Config::from_env())?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod input;
pub mod logic;
pub mod model;
pub mod render;
pub mod session;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;
