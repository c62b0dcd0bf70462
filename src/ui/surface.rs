use crate::game::{Cell, DropResult, Outcome, Player, Seat};

/// Anything that shows a game to the players.
///
/// The surface learns about the game only through these calls; it never
/// reads the engine's board.
pub trait DisplaySurface {
    /// A new game started on an empty `width` x `height` board.
    fn begin(&mut self, width: usize, height: usize, players: &[Player; 2]);

    /// A piece for `seat` landed at (`row`, `column`).
    fn place(&mut self, row: usize, column: usize, seat: Seat);

    /// Result of the move that was just placed.
    fn outcome(&mut self, outcome: Outcome);

    /// Forward a drop result. Full columns are ignored.
    fn show(&mut self, result: &DropResult) {
        if let DropResult::Placed {
            row,
            column,
            seat,
            outcome,
        } = *result
        {
            self.place(row, column, seat);
            self.outcome(outcome);
        }
    }
}

/// In-memory picture of the board, rebuilt from drop results and drawn by
/// the terminal renderer.
#[derive(Debug, Clone, Default)]
pub struct BoardView {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    players: Vec<Player>,
    turn: Option<Seat>,
    result: Option<Outcome>,
    last_move: Option<(usize, usize)>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell contents; out-of-bounds positions read as empty.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        if row < self.height && column < self.width {
            self.cells[row * self.width + column]
        } else {
            None
        }
    }

    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.get(seat.index())
    }

    /// Seat expected to move next; `None` before the first game.
    pub fn turn(&self) -> Option<Seat> {
        self.turn
    }

    /// Final outcome once the game has ended.
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }
}

impl DisplaySurface for BoardView {
    fn begin(&mut self, width: usize, height: usize, players: &[Player; 2]) {
        self.width = width;
        self.height = height;
        self.cells = vec![None; width * height];
        self.players = players.to_vec();
        self.turn = Some(Seat::First);
        self.result = None;
        self.last_move = None;
    }

    fn place(&mut self, row: usize, column: usize, seat: Seat) {
        if row < self.height && column < self.width {
            self.cells[row * self.width + column] = Some(seat);
            self.last_move = Some((row, column));
        }
    }

    fn outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Continue { next } => self.turn = Some(next),
            Outcome::Win { .. } | Outcome::Draw => self.result = Some(outcome),
        }
    }
}
