//! Checkers rules and evaluation engine
//!
//! An 8x8 checkers engine for callers such as a human-input handler or an AI
//! search:
//! - Red starts on rows 5-7 and moves toward row 0, White the opposite way
//! - Men move diagonally forward, kings in all four diagonal directions
//! - Jumps chain for as long as another opposing piece can be jumped
//! - Promotion to king on the far edge
//! - Draw once more than 200 plies have been played
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board state, pieces and count bookkeeping
//! - [`rules`]: Legal move enumeration with capture chains
//! - [`eval`]: Material and weighted heuristic scoring
//! - [`config`]: Heuristic weights and capture policy
//! - [`ui`]: egui front end for hotseat play
//!
//! # Quick Start
//!
//! ```
//! use checkers::{legal_moves, material_score, Board, Pos};
//!
//! let mut board = Board::new();
//!
//! // Red moves first from row 5
//! let piece = board.piece_at(5, 2)?.expect("starting piece");
//! let moves = legal_moves(&board, &piece)?;
//! assert_eq!(moves.len(), 2);
//!
//! // Executing a move: remove the captures, then relocate the piece
//! let dest = Pos::new(4, 3);
//! board.remove(&moves[&dest])?;
//! board.apply_move(&piece, 4, 3)?;
//!
//! assert_eq!(board.turns(), 1);
//! assert_eq!(material_score(&board), 0);
//! # Ok::<(), checkers::EngineError>(())
//! ```
//!
//! The engine holds no undo state. A search exploring several branches should
//! clone the [`Board`] for each one.

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Outcome, Piece, Pos, Side, BOARD_SIZE, DRAW_TURN_LIMIT};
pub use config::{CapturePolicy, GameConfig, HeuristicWeights};
pub use error::{EngineError, EngineResult};
pub use eval::{heuristic_score, material_score, SideFeatures};
pub use rules::{legal_moves, legal_moves_for_side, Moves};
