//////////////////////////
// api.rs
//////////////////////////

// Wire types for a front end that addresses squares by grid position and
// talks JSON. Each `Session` owns its own engine; nothing here is global.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::game::GameEngine;
use crate::types::*;
use crate::visibility::RenderedBoard;

/// Zero-based grid position as sent by a UI. Row 0 is rank 8, col 0 is file a.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCoord {
    pub row: i64,
    pub col: i64,
}

impl GridCoord {
    /// `None` for positions off the 8x8 grid.
    pub fn to_square(&self) -> Option<Square> {
        if self.row < 0 || self.col < 0 {
            return None;
        }
        Square::new(self.row as usize, self.col as usize)
    }

    pub fn to_algebraic(&self) -> Option<String> {
        self.to_square().map(|sq| sq.to_algebraic())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MoveRequest {
    pub source: GridCoord,
    pub target: GridCoord,
}

/// Which board a caller wants: a fixed perspective or whoever is to move.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PerspectiveRequest {
    Audience,
    White,
    Black,
    ToMove,
}

impl PerspectiveRequest {
    pub fn resolve(&self, side_to_move: Color) -> Perspective {
        match self {
            PerspectiveRequest::Audience => Perspective::Audience,
            PerspectiveRequest::White => Perspective::White,
            PerspectiveRequest::Black => Perspective::Black,
            PerspectiveRequest::ToMove => Perspective::from(side_to_move),
        }
    }
}

impl From<Perspective> for PerspectiveRequest {
    fn from(p: Perspective) -> Self {
        match p {
            Perspective::Audience => PerspectiveRequest::Audience,
            Perspective::White => PerspectiveRequest::White,
            Perspective::Black => PerspectiveRequest::Black,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BoardResponse {
    pub board: RenderedBoard,
    pub game_state: GameOutcome,
    pub turn: Color,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MoveResponse {
    pub success: bool,
    pub board: RenderedBoard,
    pub game_state: GameOutcome,
    pub turn: Color,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ResetResponse {
    pub message: String,
}

/// One game as seen from the request layer.
#[derive(Clone, Debug)]
pub struct Session {
    engine: GameEngine,
    view: PerspectiveRequest,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(&GameConfig::default())
    }
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Session {
            engine: GameEngine::with_rules(config.rules),
            view: config.default_perspective,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    /// Perspective used for the board returned after a move.
    pub fn view(&self) -> PerspectiveRequest {
        self.view
    }

    pub fn set_view(&mut self, view: PerspectiveRequest) {
        self.view = view;
    }

    pub fn board(&self, request: PerspectiveRequest) -> BoardResponse {
        let perspective = request.resolve(self.engine.side_to_move());
        BoardResponse {
            board: self.engine.get_board(perspective),
            game_state: self.engine.get_game_state(),
            turn: self.engine.side_to_move(),
        }
    }

    /// Converts grid coordinates and attempts the move. Coordinates off the
    /// grid are rejected like any other illegal move.
    pub fn apply_move(&mut self, request: &MoveRequest) -> MoveResponse {
        let success = match (request.source.to_algebraic(), request.target.to_algebraic()) {
            (Some(start), Some(end)) => self.engine.make_move(&start, &end),
            _ => {
                log::debug!("Move request off the grid: {:?}", request);
                false
            }
        };
        let state = self.board(self.view);
        MoveResponse {
            success,
            board: state.board,
            game_state: state.game_state,
            turn: state.turn,
        }
    }

    pub fn reset(&mut self) -> ResetResponse {
        self.engine.reset();
        ResetResponse {
            message: "Game reset".to_string(),
        }
    }

    /// JSON entry point for a move body such as
    /// `{"source": {"row": 6, "col": 4}, "target": {"row": 4, "col": 4}}`.
    pub fn apply_move_json(&mut self, body: &str) -> Result<String, serde_json::Error> {
        let request: MoveRequest = serde_json::from_str(body)?;
        serde_json::to_string(&self.apply_move(&request))
    }

    pub fn board_json(&self, request: PerspectiveRequest) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.board(request))
    }
}
