//////////////////////////
// game.rs
//////////////////////////

use log::{debug, info};
use std::fmt;

use crate::board::BoardState;
use crate::config::RuleConfig;
use crate::movegen;
use crate::types::*;
use crate::visibility::{self, RenderedBoard};

/// An accepted move, as applied to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
}

/// One game of fog-of-war chess.
///
/// The engine is the only owner of its board. It does no locking: a caller
/// sharing it between threads must serialize access itself.
#[derive(Clone, Debug)]
pub struct GameEngine {
    board: BoardState,
    current_turn: Color,
    outcome: GameOutcome,
    rules: RuleConfig,
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}

impl GameEngine {
    pub fn new() -> Self {
        GameEngine::with_rules(RuleConfig::default())
    }

    pub fn with_rules(rules: RuleConfig) -> Self {
        GameEngine {
            board: BoardState::standard_setup(),
            current_turn: Color::White,
            outcome: GameOutcome::Unfinished,
            rules,
        }
    }

    /// Starts from an arbitrary position instead of the standard setup.
    pub fn from_board(board: BoardState, side_to_move: Color, rules: RuleConfig) -> Self {
        GameEngine {
            board,
            current_turn: side_to_move,
            outcome: GameOutcome::Unfinished,
            rules,
        }
    }

    pub fn board_state(&self) -> &BoardState {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.current_turn
    }

    pub fn get_game_state(&self) -> GameOutcome {
        self.outcome
    }

    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Squares `color` could move a piece to right now.
    pub fn capturable_squares(&self, color: Color) -> SquareSet {
        movegen::capturable_squares(&self.board, color, &self.rules)
    }

    pub fn legal_destinations(&self, from: Square) -> SquareSet {
        match self.board.cell_at(from) {
            Some(piece) => movegen::destinations(&self.board, from, piece.color, &self.rules),
            None => SquareSet::new(),
        }
    }

    pub fn get_board(&self, perspective: Perspective) -> RenderedBoard {
        let capturable = match perspective.owner() {
            None => SquareSet::new(),
            Some(color) => self.capturable_squares(color),
        };
        visibility::render(&self.board, perspective, &capturable)
    }

    pub fn get_board_for_side_to_move(&self) -> RenderedBoard {
        self.get_board(Perspective::from(self.current_turn))
    }

    /// Boolean form of [`GameEngine::try_move`].
    pub fn make_move(&mut self, start: &str, end: &str) -> bool {
        self.try_move(start, end).is_ok()
    }

    /// Validates and applies a move given in algebraic notation.
    ///
    /// On any error the board, turn and outcome are left untouched.
    pub fn try_move(&mut self, start: &str, end: &str) -> Result<MoveRecord, MoveError> {
        let result = self.validate(start, end);
        match result {
            Ok((from, to, piece)) => Ok(self.commit(from, to, piece)),
            Err(e) => {
                debug!("Rejected {} -> {} for {}: {}", start, end, self.current_turn, e);
                Err(e)
            }
        }
    }

    fn validate(&self, start: &str, end: &str) -> Result<(Square, Square, Piece), MoveError> {
        if self.outcome.is_finished() {
            return Err(MoveError::GameOver(self.outcome));
        }

        let from = Square::from_algebraic(start)?;
        let to = Square::from_algebraic(end)?;

        let piece = self.board.cell_at(from).ok_or(MoveError::NoPieceAtSource)?;
        if piece.color != self.current_turn {
            return Err(MoveError::WrongColor);
        }

        let destinations = movegen::destinations(&self.board, from, piece.color, &self.rules);
        if !destinations.contains(&to) {
            return Err(MoveError::IllegalDestination);
        }

        Ok((from, to, piece))
    }

    fn commit(&mut self, from: Square, to: Square, piece: Piece) -> MoveRecord {
        let captured = self.board.relocate(from, to);
        debug!("{} {:?} {} -> {}", piece.color, piece.piece_type, from, to);

        if let Some(victim) = captured {
            if victim.is_king() {
                self.outcome = GameOutcome::won_by(piece.color);
                info!("{} captured the king on {}: {}", piece.color, to, self.outcome);
            }
        }

        self.current_turn = self.current_turn.opposite();

        MoveRecord {
            from,
            to,
            piece_moved: piece,
            piece_captured: captured,
        }
    }

    /// Throws away the current game and starts a new one with the same rules.
    pub fn reset(&mut self) {
        *self = GameEngine::with_rules(self.rules);
        info!("Game reset");
    }
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get_board(Perspective::Audience))?;
        match self.outcome.winner() {
            Some(color) => write!(f, "\n{} wins!", color),
            None => write!(f, "\nTurn: {}", self.current_turn),
        }
    }
}
