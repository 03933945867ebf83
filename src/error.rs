//! Error types for the checkers engine
//!
//! Every variant is a caller precondition violation. The engine never clamps
//! or ignores bad input since that would corrupt the piece counts.

use thiserror::Error;

/// Errors that can occur in the checkers engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Row or column outside 0-7
    #[error("square ({row}, {col}) is off the board (must be 0-7)")]
    OutOfBounds { row: i32, col: i32 },

    /// Empty cell, or a piece that is not where it claims to be
    #[error("no matching piece at ({row}, {col})")]
    InvalidPiece { row: u8, col: u8 },

    /// Destination of a move already holds a piece
    #[error("destination ({row}, {col}) is occupied")]
    SquareOccupied { row: u8, col: u8 },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
