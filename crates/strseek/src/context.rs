use crate::match_state::{LastMatch, MatchData};

/// Explicit per-caller state threaded through the value-level entry points.
#[derive(Debug, Default)]
pub struct SearchContext {
    last_match: LastMatch,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent regex match made through this context.
    pub fn last_match(&self) -> Option<&MatchData> {
        self.last_match.get()
    }

    pub fn recorder_mut(&mut self) -> &mut LastMatch {
        &mut self.last_match
    }
}
