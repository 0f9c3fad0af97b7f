//////////////////////////
// board.rs
//////////////////////////

use crate::types::*;

pub type Cell = Option<Piece>;

/// The 8x8 grid, indexed `[row][col]` with row 0 at rank 8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl BoardState {
    pub fn empty() -> Self {
        BoardState {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn standard_setup() -> Self {
        let mut board = BoardState::empty();
        for (col, piece_type) in BACK_RANK.iter().enumerate() {
            // Black on ranks 8 and 7 (rows 0, 1), White on ranks 2 and 1 (rows 6, 7)
            board.cells[0][col] = Some(Piece::new(*piece_type, Color::Black));
            board.cells[1][col] = Some(Piece::new(PieceType::Pawn, Color::Black));
            board.cells[6][col] = Some(Piece::new(PieceType::Pawn, Color::White));
            board.cells[7][col] = Some(Piece::new(*piece_type, Color::White));
        }
        board
    }

    /// Builds a board from eight rows of eight symbols, top row = rank 8.
    /// Pieces use the display alphabet; `.` or a space is an empty cell.
    pub fn from_diagram(rows: &[&str]) -> Result<Self, String> {
        if rows.len() != BOARD_SIZE {
            return Err(format!("expected {} rows, got {}", BOARD_SIZE, rows.len()));
        }
        let mut board = BoardState::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(format!("row {} has {} cells", row, symbols.len()));
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                if symbol == '.' || symbol == ' ' {
                    continue;
                }
                let piece = Piece::from_symbol(symbol)
                    .ok_or_else(|| format!("unknown piece symbol '{}'", symbol))?;
                if let Some(square) = Square::new(row, col) {
                    board.place(square, piece);
                }
            }
        }
        Ok(board)
    }

    pub fn cell_at(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.cell_at(square).is_none()
    }

    pub fn place(&mut self, square: Square, piece: Piece) {
        self.cells[square.row()][square.col()] = Some(piece);
    }

    /// Moves whatever is on `source` to `destination`, leaving `source` empty.
    /// No legality checks; returns the overwritten occupant of `destination`.
    pub fn relocate(&mut self, source: Square, destination: Square) -> Cell {
        let moving = self.cells[source.row()][source.col()].take();
        std::mem::replace(&mut self.cells[destination.row()][destination.col()], moving)
    }

    /// Every occupied square holding a piece of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.cell_at(sq) {
            Some(piece) if piece.color == color => Some((sq, piece)),
            _ => None,
        })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::standard_setup()
    }
}
