//! Terminal UI: color setup screen, game board view and keyboard input.
//!
//! The engine never touches the screen. Drop results flow into a
//! [`DisplaySurface`] which the renderer draws from.

mod app;
pub mod board_widget;
mod game_view;
pub mod setup;
pub mod surface;

pub use app::App;
pub use surface::{BoardView, DisplaySurface};
