//! Legal move enumeration

use crate::board::{Board, Piece, Side};
use crate::error::{EngineError, EngineResult};

use super::capture::probe_all;
use super::Moves;

/// Every destination available to `piece`, each with the pieces it captures.
///
/// Mandatory capture is not enforced here; see [`captures_only`].
///
/// # Errors
/// `InvalidPiece` if `piece` is not on the board where it claims to be.
pub fn legal_moves(board: &Board, piece: &Piece) -> EngineResult<Moves> {
    match board.piece_at(piece.row as i32, piece.col as i32)? {
        Some(occupant) if occupant == *piece => {}
        _ => {
            return Err(EngineError::InvalidPiece {
                row: piece.row,
                col: piece.col,
            })
        }
    }

    Ok(moves_of(board, piece))
}

/// Every piece of `side` in row-major order, paired with its moves
pub fn legal_moves_for_side(board: &Board, side: Side) -> Vec<(Piece, Moves)> {
    board
        .pieces(side)
        .map(|piece| {
            let moves = moves_of(board, &piece);
            (piece, moves)
        })
        .collect()
}

/// Whether any piece of `side` has a capturing move
pub fn has_capture(side_moves: &[(Piece, Moves)]) -> bool {
    side_moves
        .iter()
        .any(|(_, moves)| moves.values().any(|captured| !captured.is_empty()))
}

/// Drop plain moves from `side_moves` if any capture exists.
///
/// This is the standard "capture is mandatory" rule. It is a caller policy and
/// changes which moves are playable, so nothing in the engine applies it.
pub fn captures_only(mut side_moves: Vec<(Piece, Moves)>) -> Vec<(Piece, Moves)> {
    if has_capture(&side_moves) {
        for (_, moves) in side_moves.iter_mut() {
            moves.retain(|_, captured| !captured.is_empty());
        }
    }
    side_moves
}

/// Whether `side` has at least one move
pub fn can_move(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|piece| !moves_of(board, &piece).is_empty())
}

#[inline]
fn moves_of(board: &Board, piece: &Piece) -> Moves {
    let mut moves = Moves::new();
    probe_all(board, piece, &mut moves);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn setup(pieces: &[Piece]) -> Board {
        let mut board = Board::empty();
        for &piece in pieces {
            board.place(piece).unwrap();
        }
        board
    }

    #[test]
    fn test_opening_red_row_five() {
        let board = Board::new();

        for col in [2u8, 4, 6] {
            let piece = board.piece_at(5, col as i32).unwrap().unwrap();
            let moves = legal_moves(&board, &piece).unwrap();
            assert_eq!(moves.len(), 2, "piece at (5, {})", col);
            assert!(moves.contains_key(&Pos::new(4, col - 1)));
            assert!(moves.contains_key(&Pos::new(4, col + 1)));
            assert!(moves.values().all(|captured| captured.is_empty()));
        }

        // The edge piece only has one diagonal
        let edge = board.piece_at(5, 0).unwrap().unwrap();
        let moves = legal_moves(&board, &edge).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves.get(&Pos::new(4, 1)), Some(&Vec::new()));
    }

    #[test]
    fn test_opening_back_rows_blocked() {
        let board = Board::new();
        let piece = board.piece_at(6, 1).unwrap().unwrap();
        assert!(legal_moves(&board, &piece).unwrap().is_empty());
    }

    #[test]
    fn test_single_jump() {
        let red = Piece::new(3, 2, Side::Red);
        let white = Piece::new(2, 3, Side::White);
        let board = setup(&[red, white]);

        let moves = legal_moves(&board, &red).unwrap();

        assert_eq!(moves.get(&Pos::new(1, 4)), Some(&vec![white]));
        assert_eq!(moves.get(&Pos::new(2, 1)), Some(&Vec::new()));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_double_jump_chain() {
        let red = Piece::new(5, 0, Side::Red);
        let first = Piece::new(4, 1, Side::White);
        let second = Piece::new(2, 3, Side::White);
        let board = setup(&[red, first, second]);

        let moves = legal_moves(&board, &red).unwrap();

        // Intermediate landing square carries only the first capture
        assert_eq!(moves.get(&Pos::new(3, 2)), Some(&vec![first]));
        let captured = moves.get(&Pos::new(1, 4)).unwrap();
        assert_eq!(captured, &vec![second, first]);
        assert!(moves.values().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_intermediate_square_not_plain_move() {
        let red = Piece::new(5, 2, Side::Red);
        let first = Piece::new(4, 3, Side::White);
        let second = Piece::new(2, 5, Side::White);
        let board = setup(&[red, first, second]);

        let moves = legal_moves(&board, &red).unwrap();

        assert_eq!(moves.get(&Pos::new(1, 6)), Some(&vec![second, first]));
        // (3, 4) is reached only by a capture, and the empty squares around
        // it are never offered once the chain has started
        assert_ne!(moves.get(&Pos::new(3, 4)), Some(&Vec::new()));
        assert!(!moves.contains_key(&Pos::new(2, 3)));
        assert_eq!(moves.get(&Pos::new(4, 1)), Some(&Vec::new()));
    }

    #[test]
    fn test_triple_jump_keeps_every_capture() {
        let red = Piece::new(7, 0, Side::Red);
        let a = Piece::new(6, 1, Side::White);
        let b = Piece::new(4, 3, Side::White);
        let c = Piece::new(2, 5, Side::White);
        let board = setup(&[red, a, b, c]);

        let moves = legal_moves(&board, &red).unwrap();
        assert_eq!(moves.get(&Pos::new(1, 6)), Some(&vec![c, b, a]));
    }

    #[test]
    fn test_chain_branches_both_ways() {
        let red = Piece::new(5, 2, Side::Red);
        let first = Piece::new(4, 3, Side::White);
        let left = Piece::new(2, 3, Side::White);
        let right = Piece::new(2, 5, Side::White);
        let board = setup(&[red, first, left, right]);

        let moves = legal_moves(&board, &red).unwrap();
        assert_eq!(moves.get(&Pos::new(1, 2)), Some(&vec![left, first]));
        assert_eq!(moves.get(&Pos::new(1, 6)), Some(&vec![right, first]));
    }

    #[test]
    fn test_blocked_landing() {
        let red = Piece::new(3, 2, Side::Red);
        let white = Piece::new(2, 3, Side::White);
        let blocker = Piece::new(1, 4, Side::White);
        let board = setup(&[red, white, blocker]);

        let moves = legal_moves(&board, &red).unwrap();
        assert!(!moves.contains_key(&Pos::new(1, 4)));
        assert!(moves.values().all(|c| c.is_empty()));
    }

    #[test]
    fn test_two_in_a_row_cannot_be_jumped() {
        let red = Piece::new(5, 0, Side::Red);
        let a = Piece::new(4, 1, Side::White);
        let b = Piece::new(3, 2, Side::White);
        let board = setup(&[red, a, b]);

        assert!(legal_moves(&board, &red).unwrap().is_empty());
    }

    #[test]
    fn test_friendly_piece_blocks() {
        let red = Piece::new(5, 2, Side::Red);
        let friend = Piece::new(4, 3, Side::Red);
        let board = setup(&[red, friend]);

        let moves = legal_moves(&board, &red).unwrap();
        assert_eq!(moves.keys().copied().collect::<Vec<_>>(), vec![Pos::new(4, 1)]);
    }

    #[test]
    fn test_jump_off_board() {
        let red = Piece::new(2, 1, Side::Red);
        let white = Piece::new(1, 0, Side::White);
        let board = setup(&[red, white]);

        let moves = legal_moves(&board, &red).unwrap();
        assert_eq!(moves.keys().copied().collect::<Vec<_>>(), vec![Pos::new(1, 2)]);
    }

    #[test]
    fn test_men_never_move_backward() {
        let board = Board::new();
        for side in [Side::Red, Side::White] {
            for (piece, moves) in legal_moves_for_side(&board, side) {
                for dest in moves.keys() {
                    let step = dest.row as i8 - piece.row as i8;
                    assert_eq!(step.signum(), side.forward());
                }
            }
        }

        // Open position: a White piece directly behind a Red man is not capturable
        let red = Piece::new(4, 3, Side::Red);
        let behind = Piece::new(5, 4, Side::White);
        let board = setup(&[red, behind]);
        let moves = legal_moves(&board, &red).unwrap();
        assert!(moves.keys().all(|dest| dest.row < 4));
        assert!(moves.values().all(|c| c.is_empty()));
    }

    #[test]
    fn test_white_moves_down() {
        let white = Piece::new(2, 3, Side::White);
        let red = Piece::new(3, 4, Side::Red);
        let board = setup(&[white, red]);

        let moves = legal_moves(&board, &white).unwrap();
        assert_eq!(moves.get(&Pos::new(3, 2)), Some(&Vec::new()));
        assert_eq!(moves.get(&Pos::new(4, 5)), Some(&vec![red]));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_king_moves_all_directions() {
        let king = Piece::new_king(3, 4, Side::Red);
        let board = setup(&[king]);

        let moves = legal_moves(&board, &king).unwrap();
        let dests: Vec<Pos> = moves.keys().copied().collect();
        assert_eq!(
            dests,
            vec![Pos::new(2, 3), Pos::new(2, 5), Pos::new(4, 3), Pos::new(4, 5)]
        );
    }

    #[test]
    fn test_king_captures_backward() {
        let king = Piece::new_king(2, 3, Side::Red);
        let white = Piece::new(3, 4, Side::White);
        let board = setup(&[king, white]);

        let moves = legal_moves(&board, &king).unwrap();
        assert_eq!(moves.get(&Pos::new(4, 5)), Some(&vec![white]));
    }

    #[test]
    fn test_legal_moves_rejects_stale_piece() {
        let board = Board::new();
        let ghost = Piece::new(4, 3, Side::Red);
        assert_eq!(
            legal_moves(&board, &ghost),
            Err(EngineError::InvalidPiece { row: 4, col: 3 })
        );

        let stale_king = Piece::new_king(5, 2, Side::Red);
        assert!(legal_moves(&board, &stale_king).is_err());
    }

    #[test]
    fn test_legal_moves_for_side() {
        let board = Board::new();
        let red = legal_moves_for_side(&board, Side::Red);
        assert_eq!(red.len(), 12);

        let total: usize = red.iter().map(|(_, moves)| moves.len()).sum();
        assert_eq!(total, 7);
        assert!(can_move(&board, Side::Red));
        assert!(!has_capture(&red));
    }

    #[test]
    fn test_captures_only_filters_plain_moves() {
        let red = Piece::new(3, 2, Side::Red);
        let other = Piece::new(5, 6, Side::Red);
        let white = Piece::new(2, 3, Side::White);
        let board = setup(&[red, other, white]);

        let forced = captures_only(legal_moves_for_side(&board, Side::Red));
        let moves: Vec<(Pos, usize)> = forced
            .iter()
            .flat_map(|(piece, moves)| moves.values().map(move |c| (piece.pos(), c.len())))
            .collect();
        assert_eq!(moves, vec![(Pos::new(3, 2), 1)]);

        // Without a capture on the board nothing is filtered
        let board = Board::new();
        let free = captures_only(legal_moves_for_side(&board, Side::Red));
        assert_eq!(free.iter().map(|(_, m)| m.len()).sum::<usize>(), 7);
    }

    #[test]
    fn test_can_move_when_blocked() {
        let red = Piece::new(0, 1, Side::Red);
        let board = setup(&[red, Piece::new(7, 0, Side::White)]);
        // Red man on its promotion row without being a king has nowhere to go
        assert!(!can_move(&board, Side::Red));
        assert!(!can_move(&Board::empty(), Side::White));
    }
}
