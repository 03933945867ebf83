//! Per-side positional features derived from one move-generation pass

use std::collections::BTreeSet;

use crate::board::{Board, Pos, Side};
use crate::rules::legal_moves_for_side;

/// Raw feature counts for one side
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SideFeatures {
    /// Total destinations summed over every piece
    pub mobility: usize,
    /// Distinct destination squares
    pub control: BTreeSet<Pos>,
    /// Distinct squares of *opposing* pieces this side could capture
    pub threatened: BTreeSet<Pos>,
    /// Pieces still on the side's own starting edge
    pub home_row: usize,
}

impl SideFeatures {
    /// Generate the side's moves once and derive every feature from them
    pub fn collect(board: &Board, side: Side) -> Self {
        let mut features = SideFeatures::default();

        for (piece, moves) in legal_moves_for_side(board, side) {
            if piece.row == side.home_row() {
                features.home_row += 1;
            }

            features.mobility += moves.len();
            for (dest, captured) in moves {
                features.control.insert(dest);
                features.threatened.extend(captured.iter().map(|p| p.pos()));
            }
        }

        features
    }

    #[inline]
    pub fn control_count(&self) -> usize {
        self.control.len()
    }

    #[inline]
    pub fn threatened_count(&self) -> usize {
        self.threatened.len()
    }
}
