use std::io::{self, Write};

use colored::Color;

use crate::data::{DisplayBoard, FLAG};

/// Draws the display board. Coloring is per renderer, never global.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn render<W: Write>(&self, board: &DisplayBoard, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        for row in board {
            for &cell in row {
                match self.paint(cell) {
                    Some(color) => write!(out, "\x1b[{}m{}\x1b[0m ", color.to_fg_str(), cell)?,
                    None => write!(out, "{} ", cell)?,
                }
            }
            writeln!(out)?;
        }
        writeln!(out)?;
        out.flush()
    }

    /// Foreground color for a cell, `None` when coloring is off.
    fn paint(&self, cell: char) -> Option<Color> {
        if !self.color {
            return None;
        }

        Some(match cell {
            '0'..='9' => Color::Blue,
            FLAG => Color::Red,
            _ => Color::White,
        })
    }
}
