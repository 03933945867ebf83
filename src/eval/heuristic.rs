//! Evaluation functions for checkers positions
//!
//! Scores are always from the perspective of [`Side::MAXIMIZER`] (White):
//! positive favors White, negative favors Red. A drawn position scores 0.

use crate::board::{Board, Side};
use crate::config::HeuristicWeights;

use super::features::SideFeatures;

/// Material balance: piece difference plus king difference.
#[must_use]
pub fn material_score(board: &Board) -> i32 {
    if board.is_draw() {
        return 0;
    }

    let us = Side::MAXIMIZER;
    let them = us.opponent();

    (board.left(us) as i32 - board.left(them) as i32)
        + (board.kings(us) as i32 - board.kings(them) as i32)
}

/// Weighted multi-feature evaluation.
///
/// Combines:
/// - piece difference (full weight)
/// - king difference
/// - mobility: destinations summed over every piece
/// - board control: distinct destination squares
/// - vulnerability: opposing pieces we can capture minus our pieces they can
/// - home-row occupancy
///
/// Each non-material feature is scaled by its weight divided by 4.
#[must_use]
pub fn heuristic_score(board: &Board, weights: &HeuristicWeights) -> f64 {
    if board.is_draw() {
        return 0.0;
    }

    let us = Side::MAXIMIZER;
    let them = us.opponent();

    let ours = SideFeatures::collect(board, us);
    let theirs = SideFeatures::collect(board, them);

    let material = diff(board.left(us) as usize, board.left(them) as usize);
    let kings = diff(board.kings(us) as usize, board.kings(them) as usize);
    let mobility = diff(ours.mobility, theirs.mobility);
    let control = diff(ours.control_count(), theirs.control_count());
    // Opponent pieces we threaten count for us, our pieces they threaten against us
    let vulnerability = diff(ours.threatened_count(), theirs.threatened_count());
    let home = diff(ours.home_row, theirs.home_row);

    material
        + kings * weights.kings()
        + mobility * weights.mobility()
        + control * weights.control()
        + vulnerability * weights.vulnerability()
        + home * weights.home_row()
}

#[inline]
fn diff(ours: usize, theirs: usize) -> f64 {
    ours as f64 - theirs as f64
}
