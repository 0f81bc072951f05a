/// Backtracking steps granted per byte of searched text, on top of the limit.
///
/// An unanchored search pays a few steps at every byte it skips, so the
/// budget of a search grows with the text it covers.
pub const SCAN_STEPS_PER_BYTE: usize = 32;

/// Runtime limits for matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchLimits {
    /// Backtracking steps per search beyond the linear scanning allowance
    /// (default: 1,000,000).
    pub(crate) backtrack_limit: usize,
}

impl Default for MatchLimits {
    fn default() -> Self {
        Self {
            backtrack_limit: 1_000_000,
        }
    }
}

impl MatchLimits {
    /// Create new match limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backtrack limit.
    pub fn backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }

    pub fn get_backtrack_limit(&self) -> usize {
        self.backtrack_limit
    }

    /// Total step budget for searching `len` bytes.
    pub fn budget_for(&self, len: usize) -> usize {
        self.backtrack_limit
            .saturating_add(len.saturating_mul(SCAN_STEPS_PER_BYTE))
    }
}
