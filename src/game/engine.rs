use tracing::{debug, info};

use super::{Color, DropResult, GameState, Outcome, Player};
use crate::error::GameError;

/// Rules engine for Connect Four.
///
/// The engine holds no board of its own. Each game lives in a [`GameState`]
/// that the caller owns and passes back in for every move; the engine only
/// remembers the last accepted setup so [`GameEngine::reset`] can start a
/// fresh game with the same players.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    setup: Option<Setup>,
}

#[derive(Debug, Clone)]
struct Setup {
    width: usize,
    height: usize,
    players: [Player; 2],
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a game between "Player 1" and "Player 2" with the given colors.
    pub fn configure(
        &mut self,
        width: usize,
        height: usize,
        first: impl Into<Color>,
        second: impl Into<Color>,
    ) -> Result<GameState, GameError> {
        self.configure_players(
            width,
            height,
            Player::new("Player 1", first),
            Player::new("Player 2", second),
        )
    }

    /// Start a game between two fully described players.
    ///
    /// Fails with [`GameError::InvalidConfiguration`] when the colors match or
    /// the board has no cells; the previous setup is kept in that case.
    pub fn configure_players(
        &mut self,
        width: usize,
        height: usize,
        first: Player,
        second: Player,
    ) -> Result<GameState, GameError> {
        if first.color() == second.color() {
            return Err(GameError::InvalidConfiguration(format!(
                "both players picked the color '{}'",
                first.color()
            )));
        }
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "board must have at least one cell (got {width}x{height})"
            )));
        }

        info!(
            width,
            height,
            first = %first.color(),
            second = %second.color(),
            "game configured"
        );
        let setup = Setup {
            width,
            height,
            players: [first, second],
        };
        let state = setup.new_game();
        self.setup = Some(setup);
        Ok(state)
    }

    /// Start a fresh game with the last accepted setup.
    pub fn reset(&self) -> Result<GameState, GameError> {
        let setup = self.setup.as_ref().ok_or(GameError::NotConfigured)?;
        debug!("game reset");
        Ok(setup.new_game())
    }

    /// Drop a piece for the current player into `column`.
    ///
    /// A full column yields [`DropResult::ColumnFull`] and leaves the state
    /// untouched.
    pub fn drop_piece(&self, state: &mut GameState, column: usize) -> Result<DropResult, GameError> {
        if state.is_finished() {
            return Err(GameError::GameAlreadyFinished);
        }
        let width = state.board().width();
        if column >= width {
            return Err(GameError::InvalidColumn { column, width });
        }

        let result = state.place(column);
        match result {
            DropResult::Placed {
                row,
                column,
                seat,
                outcome,
            } => {
                debug!(row, column, ?seat, "piece placed");
                match outcome {
                    Outcome::Win { winner } => {
                        info!(winner = state.player(winner).name(), "game won")
                    }
                    Outcome::Draw => info!("game drawn"),
                    Outcome::Continue { .. } => {}
                }
            }
            DropResult::ColumnFull { column } => debug!(column, "column full, drop ignored"),
        }
        Ok(result)
    }

    /// Whether the player holding the turn owns a line of four.
    pub fn check_win(&self, state: &GameState) -> bool {
        state.check_win()
    }
}

impl Setup {
    fn new_game(&self) -> GameState {
        GameState::new(self.width, self.height, self.players.clone())
    }
}
