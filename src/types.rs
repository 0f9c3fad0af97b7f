//////////////////////////
// types.rs
//////////////////////////

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: usize = 8;

/// Destination / capturable squares produced by move generation.
pub type SquareSet = HashSet<Square>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub color: Color,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance. White moves up the grid (toward row 0).
    pub fn pawn_direction(&self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(&self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl Piece {
    pub fn new(piece_type: PieceType, color: Color) -> Self {
        Piece { piece_type, color }
    }

    /// Uppercase letters for White, lowercase for Black.
    pub fn symbol(&self) -> char {
        let c = match self.piece_type {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Piece> {
        let piece_type = match symbol.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { piece_type, color })
    }

    pub fn is_king(&self) -> bool {
        self.piece_type == PieceType::King
    }
}

// ---------- SQUARES ----------

/// A cell on the 8x8 grid. Row 0 is rank 8, column 0 is file a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: usize, col: usize) -> Option<Square> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(Square {
            row: row as u8,
            col: col as u8,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    /// The square `(dr, dc)` away, or `None` if that falls off the board.
    pub fn offset(&self, dr: i32, dc: i32) -> Option<Square> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as usize, col as usize)
    }

    /// Parses a file letter `a`-`h` followed by a rank digit `1`-`8`.
    pub fn from_algebraic(text: &str) -> Result<Square, ParseSquareError> {
        let err = || ParseSquareError {
            input: text.to_string(),
        };
        let bytes = text.as_bytes();
        if bytes.len() != 2 {
            return Err(err());
        }
        let col = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(err()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => BOARD_SIZE - (bytes[1] - b'0') as usize,
            _ => return Err(err()),
        };
        Square::new(row, col).ok_or_else(err)
    }

    pub fn to_algebraic(&self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE - self.row as usize;
        format!("{}{}", file, rank)
    }

    /// All 64 squares in row-major order, starting at a8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square {
            row: row as u8,
            col: col as u8,
        }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSquareError {
    pub input: String,
}

impl fmt::Display for ParseSquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a square between a1 and h8", self.input)
    }
}

impl std::error::Error for ParseSquareError {}

// ---------- PERSPECTIVES & OUTCOMES ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Perspective {
    Audience,
    White,
    Black,
}

impl Perspective {
    /// The player whose pieces are shown in full, if any.
    pub fn owner(&self) -> Option<Color> {
        match self {
            Perspective::Audience => None,
            Perspective::White => Some(Color::White),
            Perspective::Black => Some(Color::Black),
        }
    }
}

impl From<Color> for Perspective {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Perspective::White,
            Color::Black => Perspective::Black,
        }
    }
}

impl FromStr for Perspective {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "audience" => Ok(Perspective::Audience),
            "white" => Ok(Perspective::White),
            "black" => Ok(Perspective::Black),
            other => Err(format!("unknown perspective '{}'", other)),
        }
    }
}

impl fmt::Display for Perspective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Perspective::Audience => write!(f, "audience"),
            Perspective::White => write!(f, "white"),
            Perspective::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameOutcome {
    Unfinished,
    WhiteWon,
    BlackWon,
}

impl GameOutcome {
    pub fn won_by(color: Color) -> GameOutcome {
        match color {
            Color::White => GameOutcome::WhiteWon,
            Color::Black => GameOutcome::BlackWon,
        }
    }

    pub fn is_finished(&self) -> bool {
        *self != GameOutcome::Unfinished
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::Unfinished => None,
            GameOutcome::WhiteWon => Some(Color::White),
            GameOutcome::BlackWon => Some(Color::Black),
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Unfinished => write!(f, "UNFINISHED"),
            GameOutcome::WhiteWon => write!(f, "WHITE_WON"),
            GameOutcome::BlackWon => write!(f, "BLACK_WON"),
        }
    }
}

// ---------- ERRORS ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfBounds(String),
    NoPieceAtSource,
    WrongColor,
    IllegalDestination,
    GameOver(GameOutcome),
}

impl From<ParseSquareError> for MoveError {
    fn from(err: ParseSquareError) -> Self {
        MoveError::OutOfBounds(err.input)
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfBounds(input) => write!(f, "'{}' is not on the board", input),
            MoveError::NoPieceAtSource => write!(f, "No piece at starting square"),
            MoveError::WrongColor => write!(f, "That's not your piece"),
            MoveError::IllegalDestination => write!(f, "That piece cannot move there"),
            MoveError::GameOver(outcome) => write!(f, "The game is already over ({})", outcome),
        }
    }
}

impl std::error::Error for MoveError {}
