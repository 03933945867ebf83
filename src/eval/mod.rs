//! Evaluation module for checkers positions
//!
//! Two scoring functions, both from White's perspective:
//! - Material only (pieces and kings)
//! - Weighted heuristic adding mobility, board control, vulnerability and
//!   home-row occupancy

pub mod features;
pub mod heuristic;

pub use features::SideFeatures;
pub use heuristic::{heuristic_score, material_score};
