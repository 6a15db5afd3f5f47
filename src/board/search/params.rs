#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tunables of move selection.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Plies searched below the root, counting the root move. Values below 1
    /// are treated as 1.
    pub depth: u32,
    /// Number of best candidates kept for the final random pick
    pub shortlist_size: usize,
    /// Centipawn band below the best score within which candidates stay
    /// eligible. Negative values are treated as 0.
    pub threshold: i32,
    /// Seed for the selection RNG; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            shortlist_size: 3,
            threshold: 30,
            seed: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_shortlist_size(mut self, size: usize) -> Self {
        self.shortlist_size = size;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
