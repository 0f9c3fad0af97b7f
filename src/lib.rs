//////////////////////////
// lib.rs
//////////////////////////

//! Rules engine for fog-of-war chess.
//!
//! Pieces move as in standard chess (no castling, en passant or promotion),
//! a game is won by capturing the enemy king, and each player only sees the
//! enemy pieces one of their own pieces could capture this turn.

pub mod api;
pub mod board;
pub mod config;
pub mod game;
pub mod movegen;
pub mod types;
pub mod visibility;

pub use api::{PerspectiveRequest, Session};
pub use board::BoardState;
pub use config::{GameConfig, RuleConfig};
pub use game::{GameEngine, MoveRecord};
pub use types::*;
pub use visibility::{RenderedBoard, Symbol};
