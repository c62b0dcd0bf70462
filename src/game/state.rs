use super::{Board, Player, Seat};

/// What happened after a piece was placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No result yet; `next` now holds the turn.
    Continue { next: Seat },
    Win { winner: Seat },
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue { .. })
    }
}

/// Result of a drop attempt that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// A piece landed at (`row`, `column`) for `seat`.
    Placed {
        row: usize,
        column: usize,
        seat: Seat,
        outcome: Outcome,
    },
    /// The column has no room; nothing changed.
    ColumnFull { column: usize },
}

/// One game in progress: the board, both players, whose turn it is and
/// whether the game has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    players: [Player; 2],
    current: Seat,
    finished: bool,
}

impl GameState {
    /// Create a fresh game; the first player moves first.
    pub(crate) fn new(width: usize, height: usize, players: [Player; 2]) -> Self {
        GameState {
            board: Board::new(width, height),
            players,
            current: Seat::First,
            finished: false,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_seat(&self) -> Seat {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the player holding the turn owns a winning line.
    pub fn check_win(&self) -> bool {
        self.board.has_line(self.current)
    }

    /// Get list of columns that still accept a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.finished {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Place a piece for the current player and settle the turn.
    /// The caller has already checked `finished` and the column range.
    pub(crate) fn place(&mut self, column: usize) -> DropResult {
        let seat = self.current;
        let Some(row) = self.board.drop_piece(column, seat) else {
            return DropResult::ColumnFull { column };
        };

        let outcome = if self.check_win() {
            self.finished = true;
            Outcome::Win { winner: seat }
        } else if self.board.is_full() {
            self.finished = true;
            Outcome::Draw
        } else {
            self.current = seat.other();
            Outcome::Continue { next: self.current }
        };

        DropResult::Placed {
            row,
            column,
            seat,
            outcome,
        }
    }

    /// Hand the turn to `seat` regardless of alternation.
    #[cfg(test)]
    pub(crate) fn force_turn(&mut self, seat: Seat) {
        self.current = seat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn players() -> [Player; 2] {
        [Player::new("Player 1", "red"), Player::new("Player 2", "blue")]
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(7, 6, players());
        assert_eq!(state.current_seat(), Seat::First);
        assert_eq!(state.current_player().name(), "Player 1");
        assert!(!state.is_finished());
        assert_eq!(state.legal_columns().len(), 7);
    }

    #[test]
    fn test_place_switches_turn() {
        let mut state = GameState::new(7, 6, players());
        let result = state.place(3);

        assert_eq!(
            result,
            DropResult::Placed {
                row: 5,
                column: 3,
                seat: Seat::First,
                outcome: Outcome::Continue { next: Seat::Second },
            }
        );
        assert_eq!(state.current_seat(), Seat::Second);
        assert_eq!(state.board().get(5, 3), Some(Some(Seat::First)));
    }

    #[test]
    fn test_win_keeps_turn() {
        let mut state = GameState::new(7, 6, players());

        // First player wins with a horizontal line, second stacks on top
        for col in 0..4 {
            let result = state.place(col);
            if col < 3 {
                state.place(col);
            } else {
                assert!(matches!(
                    result,
                    DropResult::Placed {
                        outcome: Outcome::Win { winner: Seat::First },
                        ..
                    }
                ));
            }
        }

        assert!(state.is_finished());
        assert_eq!(state.current_seat(), Seat::First);
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_full_column_is_a_no_op() {
        let mut state = GameState::new(2, 2, players());
        state.place(0);
        state.place(0);
        let before = state.clone();

        assert_eq!(state.place(0), DropResult::ColumnFull { column: 0 });
        assert_eq!(state, before);
    }
}
