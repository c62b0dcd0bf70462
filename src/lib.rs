//! # Connect Four
//!
//! A two-player Connect Four game with a terminal UI built on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] - Rules engine: board, players, game state, win/draw detection
//! - [`ui`] - Terminal UI: color setup screen, board display, key input
//! - [`config`] - TOML configuration loading and validation
//! - [`error`] - Structured error types
//! - [`logging`] - `tracing` subscriber setup

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
