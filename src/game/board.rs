use super::Seat;

/// Number of consecutive pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Contents of a single square: empty, or owned by a seat.
pub type Cell = Option<Seat>;

/// Forward directions scanned from every starting cell, as (row, col) steps:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    // Row-major, row 0 is the top.
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position, or `None` when out of bounds.
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width || self.height == 0 {
            return true;
        }
        self.cells[col].is_some()
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        if col >= self.width {
            return 0;
        }
        (0..self.height)
            .filter(|&row| self.cells[row * self.width + col].is_some())
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed or `None`
    /// when the column has no room.
    pub fn drop_piece(&mut self, col: usize, seat: Seat) -> Option<usize> {
        if col >= self.width {
            return None;
        }

        // Find the lowest empty row in this column
        let row = (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_none())?;
        self.cells[row * self.width + col] = Some(seat);
        Some(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check whether `seat` owns a line of [`WIN_LENGTH`] anywhere on the board.
    ///
    /// Every cell is tried as the start of a line in each of the four forward
    /// directions, which covers every possible line exactly once.
    pub fn has_line(&self, seat: Seat) -> bool {
        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.line_from(row, col, dr, dc, seat))
            })
        })
    }

    fn line_from(&self, row: usize, col: usize, dr: isize, dc: isize, seat: Seat) -> bool {
        (0..WIN_LENGTH as isize).all(|step| {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            if r < 0 || c < 0 {
                return false;
            }
            self.get(r as usize, c as usize) == Some(Some(seat))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: usize = 7;
    const HEIGHT: usize = 6;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(WIDTH, HEIGHT);
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                assert_eq!(board.get(row, col), Some(None));
            }
        }
        assert_eq!(board.get(HEIGHT, 0), None);
        assert_eq!(board.get(0, WIDTH), None);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new(WIDTH, HEIGHT);

        // Drop first piece in column 3
        let row = board.drop_piece(3, Seat::First).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Some(Some(Seat::First)));

        // Drop second piece in same column
        let row = board.drop_piece(3, Seat::Second).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Some(Some(Seat::Second)));
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new(WIDTH, HEIGHT);

        // Fill column 0
        for _ in 0..HEIGHT {
            board.drop_piece(0, Seat::First).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.drop_piece(0, Seat::Second), None);
        assert_eq!(board.get(0, 0), Some(Some(Seat::First)));
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new(WIDTH, HEIGHT);
        assert_eq!(board.drop_piece(7, Seat::First), None);
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(WIDTH, HEIGHT);
        for col in 0..WIDTH {
            for _ in 0..HEIGHT {
                board.drop_piece(col, Seat::First).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new(WIDTH, HEIGHT);
        for col in 3..7 {
            board.drop_piece(col, Seat::First).unwrap();
        }
        assert!(board.has_line(Seat::First));
        assert!(!board.has_line(Seat::Second));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new(WIDTH, HEIGHT);
        for _ in 0..4 {
            board.drop_piece(3, Seat::Second).unwrap();
        }
        assert!(board.has_line(Seat::Second));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new(WIDTH, HEIGHT);
        // Create diagonal / pattern
        board.drop_piece(0, Seat::First).unwrap();

        board.drop_piece(1, Seat::Second).unwrap();
        board.drop_piece(1, Seat::First).unwrap();

        board.drop_piece(2, Seat::Second).unwrap();
        board.drop_piece(2, Seat::Second).unwrap();
        board.drop_piece(2, Seat::First).unwrap();

        board.drop_piece(3, Seat::Second).unwrap();
        board.drop_piece(3, Seat::Second).unwrap();
        board.drop_piece(3, Seat::Second).unwrap();
        assert!(!board.has_line(Seat::First));
        board.drop_piece(3, Seat::First).unwrap();

        assert!(board.has_line(Seat::First));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new(WIDTH, HEIGHT);
        // Create diagonal \ pattern against the right edge
        board.drop_piece(6, Seat::First).unwrap();

        board.drop_piece(5, Seat::Second).unwrap();
        board.drop_piece(5, Seat::First).unwrap();

        board.drop_piece(4, Seat::Second).unwrap();
        board.drop_piece(4, Seat::Second).unwrap();
        board.drop_piece(4, Seat::First).unwrap();

        board.drop_piece(3, Seat::Second).unwrap();
        board.drop_piece(3, Seat::Second).unwrap();
        board.drop_piece(3, Seat::Second).unwrap();
        board.drop_piece(3, Seat::First).unwrap();

        assert!(board.has_line(Seat::First));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new(WIDTH, HEIGHT);
        for col in 0..3 {
            board.drop_piece(col, Seat::First).unwrap();
        }
        assert!(!board.has_line(Seat::First));
    }

    #[test]
    fn test_no_wraparound_between_rows() {
        let mut board = Board::new(WIDTH, HEIGHT);
        // Two on the right edge of the bottom row, two on the left of the row above
        board.drop_piece(5, Seat::First).unwrap();
        board.drop_piece(6, Seat::First).unwrap();
        board.drop_piece(0, Seat::Second).unwrap();
        board.drop_piece(1, Seat::Second).unwrap();
        board.drop_piece(0, Seat::First).unwrap();
        board.drop_piece(1, Seat::First).unwrap();
        assert!(!board.has_line(Seat::First));
    }

    #[test]
    fn test_small_board_never_wins() {
        let mut board = Board::new(3, 3);
        for col in 0..3 {
            for _ in 0..3 {
                board.drop_piece(col, Seat::First).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!board.has_line(Seat::First));
    }

    #[test]
    fn test_zero_sized_board() {
        let mut board = Board::new(0, 0);
        assert!(board.is_full());
        assert_eq!(board.drop_piece(0, Seat::First), None);
        assert!(!board.has_line(Seat::First));
    }
}
