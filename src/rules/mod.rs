//! Move rules for 8x8 checkers
//!
//! This module implements the rule set for move generation:
//! - Men advance diagonally toward the opponent's edge, kings in all four directions
//! - Jumps over opposing pieces, chained for as long as a further jump exists
//! - Optional mandatory-capture filtering for callers that want it

use std::collections::BTreeMap;

use crate::board::{Piece, Pos};

mod capture;
pub mod moves;

/// Destination square -> pieces captured on the way (empty for a plain move)
pub type Moves = BTreeMap<Pos, Vec<Piece>>;

// Re-exports for convenient access
pub use moves::{can_move, captures_only, has_capture, legal_moves, legal_moves_for_side};
