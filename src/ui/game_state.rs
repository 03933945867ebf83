//! Game state management for the checkers GUI

use tracing::{debug, info, warn};

use crate::config::{CapturePolicy, GameConfig};
use crate::error::EngineResult;
use crate::rules::{can_move, captures_only, legal_moves, legal_moves_for_side, Moves};
use crate::{heuristic_score, material_score, Board, Outcome, Piece, Pos, Side};

/// Record of a played move, enough to replay it on a fresh board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub side: Side,
    pub from: Pos,
    pub to: Pos,
    pub captured: Vec<Pos>,
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: GameConfig,
    pub current_turn: Side,
    pub outcome: Outcome,
    /// Piece picked up by the side to move, with its playable destinations
    pub selected: Option<(Piece, Moves)>,
    pub last_move: Option<(Pos, Pos)>,
    pub move_history: Vec<MoveRecord>,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        info!(?config, "new game");
        Self {
            board: Board::new(),
            config,
            current_turn: Side::Red,
            outcome: Outcome::InProgress,
            selected: None,
            last_move: None,
            move_history: Vec::new(),
            message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    /// Destinations the selected piece may move to
    pub fn targets(&self) -> Vec<Pos> {
        self.selected
            .as_ref()
            .map(|(_, moves)| moves.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Handle a click on a square: pick up a piece or move the held one.
    pub fn select(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is over".to_string());
        }

        if let Some((piece, moves)) = &self.selected {
            if let Some(captured) = moves.get(&pos) {
                let (piece, captured) = (*piece, captured.clone());
                return self
                    .execute_move(piece, pos, &captured)
                    .map_err(|err| err.to_string());
            }
        }

        match self.board.get(pos) {
            Some(piece) if piece.side == self.current_turn => {
                let moves = self.playable_moves(&piece).map_err(|err| err.to_string())?;
                if moves.is_empty() {
                    self.selected = None;
                    return Err(self.no_move_reason());
                }
                self.selected = Some((piece, moves));
                self.message = None;
                Ok(())
            }
            _ => {
                self.selected = None;
                Err(format!("Select a {} piece", self.current_turn.name()))
            }
        }
    }

    /// Moves `piece` may play under the configured capture policy
    pub fn playable_moves(&self, piece: &Piece) -> EngineResult<Moves> {
        match self.config.capture_policy {
            CapturePolicy::Free => legal_moves(&self.board, piece),
            CapturePolicy::Forced => {
                // Validates the piece before filtering the whole side
                legal_moves(&self.board, piece)?;
                let side_moves = captures_only(legal_moves_for_side(&self.board, piece.side));
                Ok(side_moves
                    .into_iter()
                    .find(|(p, _)| p == piece)
                    .map(|(_, moves)| moves)
                    .unwrap_or_default())
            }
        }
    }

    /// Apply a chosen move: remove the captured pieces, then relocate the mover
    fn execute_move(&mut self, piece: Piece, to: Pos, captured: &[Piece]) -> EngineResult<()> {
        let side = piece.side;

        self.board.remove(captured)?;
        let moved = self.board.apply_move(&piece, to.row as i32, to.col as i32)?;
        let crowned = moved.king && !piece.king;

        debug!(
            side = side.name(),
            from = ?piece.pos(),
            to = ?to,
            captured = captured.len(),
            crowned,
            "move applied"
        );

        self.move_history.push(MoveRecord {
            side,
            from: piece.pos(),
            to,
            captured: captured.iter().map(|p| p.pos()).collect(),
        });
        self.last_move = Some((piece.pos(), to));
        self.selected = None;
        self.message = None;

        self.current_turn = side.opponent();
        self.update_outcome();
        Ok(())
    }

    /// Refresh the outcome; a side left without a move loses
    fn update_outcome(&mut self) {
        self.outcome = match self.board.winner() {
            Outcome::InProgress if !can_move(&self.board, self.current_turn) => {
                Outcome::Won(self.current_turn.opponent())
            }
            outcome => outcome,
        };

        match self.outcome {
            Outcome::Won(side) => {
                info!(winner = side.name(), turns = self.board.turns(), "game over")
            }
            Outcome::Draw => info!(turns = self.board.turns(), "game drawn"),
            Outcome::InProgress => {}
        }
    }

    fn no_move_reason(&self) -> String {
        if self.config.capture_policy == CapturePolicy::Forced
            && crate::rules::has_capture(&legal_moves_for_side(&self.board, self.current_turn))
        {
            "A capture is available and must be taken".to_string()
        } else {
            "That piece cannot move".to_string()
        }
    }

    /// Material balance from White's perspective
    pub fn material(&self) -> i32 {
        material_score(&self.board)
    }

    /// Weighted heuristic from White's perspective
    pub fn heuristic(&self) -> f64 {
        heuristic_score(&self.board, &self.config.weights)
    }

    /// Undo last move by replaying the history on a fresh board
    pub fn undo(&mut self) {
        let Some(undone) = self.move_history.pop() else {
            return;
        };
        let history = std::mem::take(&mut self.move_history);

        let mut board = Board::new();
        let replayed = history
            .iter()
            .try_for_each(|record| replay(&mut board, record));
        if let Err(err) = replayed {
            warn!(%err, "history replay failed");
            self.message = Some(format!("Undo failed: {}", err));
            self.move_history = history;
            self.move_history.push(undone);
            return;
        }

        debug!(side = undone.side.name(), from = ?undone.from, to = ?undone.to, "move undone");

        self.board = board;
        self.current_turn = undone.side;
        self.last_move = history.last().map(|r| (r.from, r.to));
        self.move_history = history;
        self.selected = None;
        self.message = None;
        self.outcome = Outcome::InProgress;
        self.update_outcome();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

fn replay(board: &mut Board, record: &MoveRecord) -> EngineResult<()> {
    let piece = board
        .piece_at(record.from.row as i32, record.from.col as i32)?
        .ok_or(crate::EngineError::InvalidPiece {
            row: record.from.row,
            col: record.from.col,
        })?;

    let mut captured = Vec::with_capacity(record.captured.len());
    for pos in &record.captured {
        if let Some(p) = board.piece_at(pos.row as i32, pos.col as i32)? {
            captured.push(p);
        }
    }

    board.remove(&captured)?;
    board.apply_move(&piece, record.to.row as i32, record.to.col as i32)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeuristicWeights;

    fn play(state: &mut GameState, from: (u8, u8), to: (u8, u8)) {
        state.select(Pos::new(from.0, from.1)).unwrap();
        state.select(Pos::new(to.0, to.1)).unwrap();
    }

    #[test]
    fn test_red_moves_first() {
        let mut state = GameState::default();
        assert_eq!(state.current_turn, Side::Red);
        assert!(state.select(Pos::new(2, 1)).is_err());
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_select_and_move() {
        let mut state = GameState::default();

        state.select(Pos::new(5, 2)).unwrap();
        assert_eq!(state.targets(), vec![Pos::new(4, 1), Pos::new(4, 3)]);

        state.select(Pos::new(4, 3)).unwrap();
        assert_eq!(state.current_turn, Side::White);
        assert_eq!(state.board.turns(), 1);
        assert_eq!(state.last_move, Some((Pos::new(5, 2), Pos::new(4, 3))));
        assert!(state.selected.is_none());
    }

    #[test]
    fn test_reselect_other_piece() {
        let mut state = GameState::default();
        state.select(Pos::new(5, 2)).unwrap();
        state.select(Pos::new(5, 4)).unwrap();
        assert_eq!(state.selected.as_ref().map(|(p, _)| p.pos()), Some(Pos::new(5, 4)));
    }

    #[test]
    fn test_blocked_piece_rejected() {
        let mut state = GameState::default();
        assert_eq!(
            state.select(Pos::new(6, 1)),
            Err("That piece cannot move".to_string())
        );
    }

    #[test]
    fn test_capture_through_controller() {
        let mut state = GameState::default();
        play(&mut state, (5, 2), (4, 3));
        play(&mut state, (2, 5), (3, 4));

        state.select(Pos::new(4, 3)).unwrap();
        assert!(state.targets().contains(&Pos::new(2, 5)));
        state.select(Pos::new(2, 5)).unwrap();

        assert_eq!(state.board.left(Side::White), 11);
        assert_eq!(state.move_history.last().unwrap().captured, vec![Pos::new(3, 4)]);
        assert_eq!(state.current_turn, Side::White);
    }

    #[test]
    fn test_forced_capture_policy() {
        let config = GameConfig::new(HeuristicWeights::default(), CapturePolicy::Forced);
        let mut state = GameState::new(config);
        play(&mut state, (5, 2), (4, 3));
        play(&mut state, (2, 5), (3, 4));

        // Red must take: other pieces are frozen
        assert_eq!(
            state.select(Pos::new(5, 6)),
            Err("A capture is available and must be taken".to_string())
        );
        state.select(Pos::new(4, 3)).unwrap();
        assert_eq!(state.targets(), vec![Pos::new(2, 5)]);
    }

    #[test]
    fn test_undo_restores_position() {
        let mut state = GameState::default();
        play(&mut state, (5, 2), (4, 3));
        play(&mut state, (2, 5), (3, 4));
        play(&mut state, (4, 3), (2, 5));
        assert_eq!(state.board.left(Side::White), 11);

        state.undo();
        assert_eq!(state.board.left(Side::White), 12);
        assert_eq!(state.current_turn, Side::Red);
        assert_eq!(state.move_history.len(), 2);
        assert_eq!(state.last_move, Some((Pos::new(2, 5), Pos::new(3, 4))));

        state.undo();
        state.undo();
        assert_eq!(state.board, Board::new());
        state.undo();
        assert!(state.move_history.is_empty());
    }

    #[test]
    fn test_win_by_wiping_out() {
        let mut state = GameState::default();
        let mut board = Board::empty();
        board.place(Piece::new(3, 2, Side::Red)).unwrap();
        board.place(Piece::new(2, 3, Side::White)).unwrap();
        state.board = board;

        play(&mut state, (3, 2), (1, 4));
        assert_eq!(state.outcome, Outcome::Won(Side::Red));
        assert_eq!(state.select(Pos::new(1, 4)), Err("Game is over".to_string()));
    }

    #[test]
    fn test_side_without_moves_loses() {
        let mut state = GameState::default();
        let mut board = Board::empty();
        board.place(Piece::new(5, 0, Side::Red)).unwrap();
        // White man stuck on Red's edge with no king rights
        board.place(Piece::new(7, 0, Side::White)).unwrap();
        state.board = board;

        play(&mut state, (5, 0), (4, 1));
        assert_eq!(state.outcome, Outcome::Won(Side::Red));
    }

    #[test]
    fn test_scores_from_state() {
        let state = GameState::default();
        assert_eq!(state.material(), 0);
        assert_eq!(state.heuristic(), 0.0);
    }
}
