//! Capture-chain discovery
//!
//! A branch starts on a diagonal neighbour of the moving piece. An empty
//! neighbour on the first step is a plain move. An opposing neighbour with an
//! empty square behind it is a jump; the landing square is recorded with the
//! captured pieces so far and the search continues from there along the same
//! vertical direction, in both column directions. Once a jump has been made,
//! only further jumps extend the branch.

use std::collections::btree_map::Entry;

use crate::board::{Board, Piece, Pos, Side};

use super::Moves;

/// Column directions probed from every square
const COL_DIRECTIONS: [i8; 2] = [-1, 1];

/// Probe one diagonal from `from` and record every destination it yields.
///
/// `chain` holds the pieces already jumped on this branch, most recent first.
pub(crate) fn probe(
    board: &Board,
    side: Side,
    from: Pos,
    dr: i8,
    dc: i8,
    chain: &[Piece],
    moves: &mut Moves,
) {
    let Some(next) = from.offset(dr, dc) else {
        return;
    };

    let jumped = match board.get(next) {
        None => {
            if chain.is_empty() {
                moves.entry(next).or_default();
            }
            return;
        }
        Some(piece) if piece.side == side => return,
        Some(piece) => piece,
    };

    if chain.contains(&jumped) {
        return;
    }

    let Some(landing) = next.offset(dr, dc) else {
        return;
    };
    if !board.is_empty(landing) {
        return;
    }

    let mut captured = Vec::with_capacity(chain.len() + 1);
    captured.push(jumped);
    captured.extend_from_slice(chain);

    record(moves, landing, &captured);

    for dc in COL_DIRECTIONS {
        probe(board, side, landing, dr, dc, &captured, moves);
    }
}

/// Start a search from the piece's own square in every direction it may use
pub(crate) fn probe_all(board: &Board, piece: &Piece, moves: &mut Moves) {
    let from = piece.pos();
    for &dr in piece.row_directions() {
        for dc in COL_DIRECTIONS {
            probe(board, piece.side, from, dr, dc, &[], moves);
        }
    }
}

/// Keep the longer capture list when two branches land on the same square
fn record(moves: &mut Moves, landing: Pos, captured: &[Piece]) {
    match moves.entry(landing) {
        Entry::Vacant(slot) => {
            slot.insert(captured.to_vec());
        }
        Entry::Occupied(mut slot) => {
            if slot.get().len() < captured.len() {
                slot.insert(captured.to_vec());
            }
        }
    }
}
