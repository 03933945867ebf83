//! Board structure with piece and king bookkeeping

use super::{Outcome, Piece, Pos, Side, BOARD_SIZE, DRAW_TURN_LIMIT, STARTING_PIECES};
use crate::error::{EngineError, EngineResult};

/// Game board: an 8x8 grid where each cell owns at most one piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    /// Live pieces per side, indexed by `Side::index`
    left: [u8; 2],
    /// Promotions per side; captures do not lower it
    kings: [u8; 2],
    /// Plies applied so far
    turns: u32,
}

impl Board {
    /// Starting position: White on rows 0-2, Red on rows 5-7, dark squares only
    pub fn new() -> Self {
        let mut board = Self::empty();

        for row in 0..BOARD_SIZE as u8 {
            let side = match row {
                0..=2 => Side::White,
                5..=7 => Side::Red,
                _ => continue,
            };
            for col in 0..BOARD_SIZE as u8 {
                if Pos::new(row, col).is_dark() {
                    board.cells[row as usize][col as usize] = Some(Piece::new(row, col, side));
                }
            }
        }

        board.left = [STARTING_PIECES; 2];
        board
    }

    /// Board with no pieces, for setting up positions with [`Board::place`]
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            left: [0; 2],
            kings: [0; 2],
            turns: 0,
        }
    }

    /// Get the occupant of a cell
    pub fn piece_at(&self, row: i32, col: i32) -> EngineResult<Option<Piece>> {
        if !Pos::is_valid(row, col) {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(self.cells[row as usize][col as usize])
    }

    /// Get the occupant of an already validated position.
    ///
    /// Off-board positions read as vacant; public callers go through
    /// [`Board::piece_at`], which reports them as `OutOfBounds`.
    #[inline]
    pub(crate) fn get(&self, pos: Pos) -> Option<Piece> {
        self.cells
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
            .flatten()
    }

    #[inline]
    pub(crate) fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Get the occupant of a position, rejecting one that is off the grid
    pub fn at(&self, pos: Pos) -> EngineResult<Option<Piece>> {
        self.piece_at(pos.row as i32, pos.col as i32)
    }

    /// Put a piece on an empty cell, keeping the counts in sync
    pub fn place(&mut self, piece: Piece) -> EngineResult<()> {
        let pos = bounded(piece.row as i32, piece.col as i32)?;
        if !self.is_empty(pos) {
            return Err(EngineError::SquareOccupied {
                row: pos.row,
                col: pos.col,
            });
        }

        self.cells[pos.row as usize][pos.col as usize] = Some(piece);
        self.left[piece.side.index()] += 1;
        if piece.king {
            self.kings[piece.side.index()] += 1;
        }
        Ok(())
    }

    /// Relocate `piece` to `(row, col)` and promote it on the far edge.
    ///
    /// Returns the piece as it stands after the move.
    pub fn apply_move(&mut self, piece: &Piece, row: i32, col: i32) -> EngineResult<Piece> {
        let dest = bounded(row, col)?;
        let from = self.verify(piece)?;
        if !self.is_empty(dest) {
            return Err(EngineError::SquareOccupied {
                row: dest.row,
                col: dest.col,
            });
        }

        let mut moved = *piece;
        moved.row = dest.row;
        moved.col = dest.col;
        self.cells[from.row as usize][from.col as usize] = None;
        self.cells[dest.row as usize][dest.col as usize] = Some(moved);

        self.promote(row, col)?;
        self.turns += 1;

        Ok(self.get(dest).unwrap_or(moved))
    }

    /// Crown the piece at `(row, col)` if it sits on its promotion row.
    ///
    /// Returns whether a promotion happened; a king is never counted twice.
    pub fn promote(&mut self, row: i32, col: i32) -> EngineResult<bool> {
        let pos = bounded(row, col)?;
        let Some(piece) = self.cells[pos.row as usize][pos.col as usize].as_mut() else {
            return Err(EngineError::InvalidPiece {
                row: pos.row,
                col: pos.col,
            });
        };

        if piece.king || pos.row != piece.side.promotion_row() {
            return Ok(false);
        }

        piece.king = true;
        self.kings[piece.side.index()] += 1;
        Ok(true)
    }

    /// Take captured pieces off the board.
    ///
    /// Every piece is checked before any is removed, so an error leaves the
    /// board untouched. Only the live-piece count drops; `kings` records
    /// promotions and is never lowered.
    pub fn remove(&mut self, pieces: &[Piece]) -> EngineResult<()> {
        for piece in pieces {
            self.verify(piece)?;
        }

        for piece in pieces {
            // Duplicates in the list were already cleared by an earlier pass
            if self.cells[piece.row as usize][piece.col as usize].take().is_none() {
                continue;
            }
            let side = piece.side.index();
            self.left[side] = self.left[side].saturating_sub(1);
        }
        Ok(())
    }

    /// Current outcome. Pure query.
    ///
    /// The ply cap takes precedence, matching the evaluators which score any
    /// position past it as 0.
    pub fn winner(&self) -> Outcome {
        if self.is_draw() {
            Outcome::Draw
        } else if self.left(Side::Red) == 0 {
            Outcome::Won(Side::White)
        } else if self.left(Side::White) == 0 {
            Outcome::Won(Side::Red)
        } else {
            Outcome::InProgress
        }
    }

    /// Ply cap exceeded
    #[inline]
    pub fn is_draw(&self) -> bool {
        self.turns > DRAW_TURN_LIMIT
    }

    /// Pieces remaining for a side
    #[inline]
    pub fn left(&self, side: Side) -> u8 {
        self.left[side.index()]
    }

    /// Kings held by a side
    #[inline]
    pub fn kings(&self, side: Side) -> u8 {
        self.kings[side.index()]
    }

    #[inline]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Override the ply counter (position setup)
    pub fn set_turns(&mut self, turns: u32) {
        self.turns = turns;
    }

    /// All pieces of a side in row-major order
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Piece> + '_ {
        self.cells
            .iter()
            .flatten()
            .filter_map(|cell| *cell)
            .filter(move |piece| piece.side == side)
    }

    /// Check that `piece` is on the grid exactly where it claims to be
    fn verify(&self, piece: &Piece) -> EngineResult<Pos> {
        let pos = bounded(piece.row as i32, piece.col as i32)?;
        match self.get(pos) {
            Some(occupant) if occupant == *piece => Ok(pos),
            _ => Err(EngineError::InvalidPiece {
                row: pos.row,
                col: pos.col,
            }),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn bounded(row: i32, col: i32) -> EngineResult<Pos> {
    if Pos::is_valid(row, col) {
        Ok(Pos::new(row as u8, col as u8))
    } else {
        Err(EngineError::OutOfBounds { row, col })
    }
}
