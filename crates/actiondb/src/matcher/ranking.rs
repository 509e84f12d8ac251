//! Result of matching one gesture against the database

use crate::actions::Action;
use crate::models::StrokeId;

/// `Ranking::id` when nothing matched
pub const NO_MATCH_ID: i64 = -2;

/// `Ranking::id` when a trivial gesture fell back to the default click
pub const DEFAULT_ID: i64 = -1;

/// Name reported for the default click
pub const DEFAULT_NAME: &str = "click (default)";

/// Which entry won
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinnerId {
    Entry(StrokeId),
    /// Synthesized click for a trivial gesture; has no action
    Default,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Winner<G> {
    pub id: WinnerId,
    pub name: String,
    pub action: Option<Action>,
    /// Closest registered gesture, absent for the default click
    pub stroke: Option<G>,
}

/// A registered gesture that scored above the relevance threshold
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<G> {
    pub score: f64,
    pub name: String,
    pub stroke: G,
}

/// Outcome of a match attempt
#[derive(Debug, Clone)]
pub struct Ranking<G> {
    /// The gesture that was matched
    pub stroke: Option<G>,
    /// Winning score, or -1 when nothing matched
    pub score: f64,
    pub winner: Option<Winner<G>>,
    /// Whether the winner's action ran; `None` if nothing was executed
    pub executed: Option<bool>,
    candidates: Vec<Candidate<G>>,
}

impl<G> Ranking<G> {
    /// A ranking with no winner and no candidates
    pub fn no_match(stroke: Option<G>) -> Self {
        Self {
            stroke,
            score: -1.0,
            winner: None,
            executed: None,
            candidates: Vec::new(),
        }
    }

    pub(crate) fn push_candidate(&mut self, candidate: Candidate<G>) {
        self.candidates.push(candidate);
    }

    /// Keep candidates ordered by score; equal scores stay in scan order
    pub(crate) fn sort_candidates(&mut self) {
        self.candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    }

    pub fn success(&self) -> bool {
        self.winner.is_some()
    }

    /// Numeric id: the entry id, [`DEFAULT_ID`] or [`NO_MATCH_ID`]
    pub fn id(&self) -> i64 {
        match self.winner.as_ref().map(|w| w.id) {
            Some(WinnerId::Entry(id)) => id.get() as i64,
            Some(WinnerId::Default) => DEFAULT_ID,
            None => NO_MATCH_ID,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.winner.as_ref().map(|w| w.name.as_str())
    }

    pub fn action(&self) -> Option<&Action> {
        self.winner.as_ref().and_then(|w| w.action.as_ref())
    }

    /// Every relevant candidate, ascending by score
    pub fn candidates(&self) -> &[Candidate<G>] {
        &self.candidates
    }

    /// The `n` best candidates, best first
    pub fn best_candidates(&self, n: usize) -> impl Iterator<Item = &Candidate<G>> {
        self.candidates.iter().rev().take(n)
    }
}
