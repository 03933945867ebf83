//! Board representation for 8x8 checkers

pub mod board;


// Re-exports
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Pieces each side starts with
pub const STARTING_PIECES: u8 = 12;

/// Ply cap: once `turns` exceeds this the game is a draw
pub const DRAW_TURN_LIMIT: u32 = 200;

/// The two opposing sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Starts on rows 5-7 and advances toward row 0
    Red,
    /// Starts on rows 0-2 and advances toward row 7
    White,
}

impl Side {
    /// Side whose perspective the evaluation scores favor
    pub const MAXIMIZER: Side = Side::White;

    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::White,
            Side::White => Side::Red,
        }
    }

    /// Row delta of a forward step for a man of this side
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => -1,
            Side::White => 1,
        }
    }

    /// Edge row where this side's men are promoted
    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::Red => 0,
            Side::White => (BOARD_SIZE - 1) as u8,
        }
    }

    /// Edge row this side starts from
    #[inline]
    pub fn home_row(self) -> u8 {
        self.opponent().promotion_row()
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::White => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::White => "White",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Diagonal neighbour, or `None` when it falls off the board
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Pos> {
        let row = self.row as i32 + dr as i32;
        let col = self.col as i32 + dc as i32;
        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Dark squares are the playable ones
    #[inline]
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// A single checker. The grid cell holding it is the owner of record;
/// `row`/`col` always mirror that cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub row: u8,
    pub col: u8,
    pub side: Side,
    pub king: bool,
}

impl Piece {
    pub fn new(row: u8, col: u8, side: Side) -> Self {
        Self {
            row,
            col,
            side,
            king: false,
        }
    }

    pub fn new_king(row: u8, col: u8, side: Side) -> Self {
        Self {
            king: true,
            ..Self::new(row, col, side)
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        Pos::new(self.row, self.col)
    }

    /// Vertical directions this piece may travel in
    pub fn row_directions(&self) -> &'static [i8] {
        if self.king {
            &[-1, 1]
        } else {
            match self.side {
                Side::Red => &[-1],
                Side::White => &[1],
            }
        }
    }
}

/// Terminal state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given side has taken every opposing piece
    Won(Side),
    /// Ply cap exceeded
    Draw,
    /// No winner yet
    InProgress,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
