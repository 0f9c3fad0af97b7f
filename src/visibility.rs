//////////////////////////
// visibility.rs
//////////////////////////

use colored::Colorize;
use serde::{Serialize, Serializer};
use std::fmt;

use crate::board::BoardState;
use crate::types::*;

pub const CONCEALED_MARKER: char = '*';
pub const EMPTY_MARKER: char = ' ';

/// What a viewer sees in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Empty,
    Piece(Piece),
    Concealed,
}

impl Symbol {
    pub fn as_char(&self) -> char {
        match self {
            Symbol::Empty => EMPTY_MARKER,
            Symbol::Piece(piece) => piece.symbol(),
            Symbol::Concealed => CONCEALED_MARKER,
        }
    }
}

impl From<Option<Piece>> for Symbol {
    fn from(cell: Option<Piece>) -> Self {
        match cell {
            Some(piece) => Symbol::Piece(piece),
            None => Symbol::Empty,
        }
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut buf = [0u8; 4];
        serializer.serialize_str(self.as_char().encode_utf8(&mut buf))
    }
}

/// A board as one perspective is allowed to see it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderedBoard {
    cells: [[Symbol; BOARD_SIZE]; BOARD_SIZE],
}

impl RenderedBoard {
    pub fn symbol_at(&self, square: Square) -> Symbol {
        self.cells[square.row()][square.col()]
    }

    pub fn count(&self, wanted: Symbol) -> usize {
        self.cells.iter().flatten().filter(|s| **s == wanted).count()
    }

    /// Plain rendering without colour codes, one line per rank.
    pub fn to_plain_string(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            out.push_str(&format!("{} ", BOARD_SIZE - row));
            for symbol in cells {
                out.push(match symbol {
                    Symbol::Empty => '.',
                    other => other.as_char(),
                });
            }
            out.push('\n');
        }
        out.push_str("  abcdefgh\n");
        out
    }
}

/// Copies `board` as `perspective` sees it.
///
/// For a player perspective, every opponent piece outside `capturable` is
/// replaced by [`Symbol::Concealed`]. `capturable` is ignored for the audience.
pub fn render(
    board: &BoardState,
    perspective: Perspective,
    capturable: &SquareSet,
) -> RenderedBoard {
    let mut cells = [[Symbol::Empty; BOARD_SIZE]; BOARD_SIZE];
    for square in Square::all() {
        cells[square.row()][square.col()] = Symbol::from(board.cell_at(square));
    }

    if let Some(viewer) = perspective.owner() {
        for square in Square::all() {
            if let Some(piece) = board.cell_at(square) {
                if piece.color != viewer && !capturable.contains(&square) {
                    cells[square.row()][square.col()] = Symbol::Concealed;
                }
            }
        }
    }

    RenderedBoard { cells }
}

// ----------  Implement Board Display ----------

impl fmt::Display for RenderedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for file in 0..BOARD_SIZE {
            write!(f, " {} ", ((file as u8 + b'a') as char).to_string().cyan())?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", "─".repeat(24).bright_magenta())?;

        for (row, cells) in self.cells.iter().enumerate() {
            let rank = BOARD_SIZE - row;
            write!(f, "{} {}", rank.to_string().cyan(), "│".bright_magenta())?;
            for symbol in cells {
                let shown = match symbol {
                    Symbol::Piece(piece) if piece.color == Color::White => {
                        piece.symbol().to_string().bright_red()
                    }
                    Symbol::Piece(piece) => piece.symbol().to_string().bright_blue(),
                    Symbol::Concealed => CONCEALED_MARKER.to_string().yellow(),
                    Symbol::Empty => "·".bright_magenta(),
                };
                write!(f, " {} ", shown)?;
            }
            writeln!(f, "{} {}", "│".bright_magenta(), rank.to_string().cyan())?;
        }

        writeln!(f, "  {}", "─".repeat(24).bright_magenta())?;
        write!(f, "  ")?;
        for file in 0..BOARD_SIZE {
            write!(f, " {} ", ((file as u8 + b'a') as char).to_string().cyan())?;
        }
        writeln!(f)
    }
}
