//! Core Connect Four game logic: board representation, players, game state
//! and the engine that validates moves and detects wins and draws.

mod board;
mod engine;
mod player;
mod state;

pub use board::{Board, Cell, WIN_LENGTH};
pub use engine::GameEngine;
pub use player::{Color, Player, Seat};
pub use state::{DropResult, GameState, Outcome};
