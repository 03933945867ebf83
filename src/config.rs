//! Tunable parameters for evaluation and play

/// Multipliers for the five non-material heuristic features.
///
/// Order: king count, mobility, board control, vulnerability, home row.
/// Each is applied as `weight / 4`; no bounds are enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicWeights(pub [f64; 5]);

impl HeuristicWeights {
    /// Divisor applied to every feature weight
    pub const DIVISOR: f64 = 4.0;

    pub fn new(weights: [f64; 5]) -> Self {
        Self(weights)
    }

    #[inline]
    pub fn kings(&self) -> f64 {
        self.0[0] / Self::DIVISOR
    }

    #[inline]
    pub fn mobility(&self) -> f64 {
        self.0[1] / Self::DIVISOR
    }

    #[inline]
    pub fn control(&self) -> f64 {
        self.0[2] / Self::DIVISOR
    }

    #[inline]
    pub fn vulnerability(&self) -> f64 {
        self.0[3] / Self::DIVISOR
    }

    #[inline]
    pub fn home_row(&self) -> f64 {
        self.0[4] / Self::DIVISOR
    }
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self([2.0, 4.0, 2.0, 4.0, 4.0])
    }
}

impl From<[f64; 5]> for HeuristicWeights {
    fn from(weights: [f64; 5]) -> Self {
        Self(weights)
    }
}

/// Whether the side to move must take a capture when one exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePolicy {
    /// Any legal destination may be played
    #[default]
    Free,
    /// Plain moves are hidden while any capture is available
    Forced,
}

/// Settings for a game session
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameConfig {
    pub weights: HeuristicWeights,
    pub capture_policy: CapturePolicy,
}

impl GameConfig {
    pub fn new(weights: HeuristicWeights, capture_policy: CapturePolicy) -> Self {
        Self {
            weights,
            capture_policy,
        }
    }
}
