//! Matching incoming gestures against the action database
//!
//! Every bound gesture is scored with the external comparator. Scores
//! below [`RELEVANCE_THRESHOLD`] are dropped, scores from there up are
//! reported as candidates, and the best one at or above
//! [`EXECUTE_THRESHOLD`] wins. Entries are scanned in ascending id order
//! and a later candidate wins a tie.

mod ranking;

pub use ranking::{Candidate, DEFAULT_ID, DEFAULT_NAME, NO_MATCH_ID, Ranking, Winner, WinnerId};

use log::info;

use crate::actions::Effects;
use crate::models::{Comparator, Gesture};
use crate::storage::ActionDb;

/// Minimum score for a gesture to be reported at all
pub const RELEVANCE_THRESHOLD: f64 = 0.25;

/// Minimum score for a gesture to win and have its action run
pub const EXECUTE_THRESHOLD: f64 = 0.7;

/// Ranks gestures using a comparator
pub struct Matcher<C> {
    comparator: C,
}

impl<C> Matcher<C> {
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }

    /// Score `query` against every bound gesture without running anything.
    ///
    /// A missing query returns a no-match ranking without comparing.
    pub fn rank<G>(&self, db: &ActionDb<G>, query: Option<&G>) -> Ranking<G>
    where
        G: Gesture,
        C: Comparator<G>,
    {
        let Some(query) = query else {
            return Ranking::no_match(None);
        };

        let mut ranking = Ranking::no_match(Some(query.clone()));
        let mut best_score = -1.0;
        let mut winner = None;

        for entry in db.strokes() {
            let score = self.comparator.compare(query, entry.stroke);
            if score.is_nan() || score < RELEVANCE_THRESHOLD {
                continue;
            }
            ranking.push_candidate(Candidate {
                score,
                name: entry.name.to_string(),
                stroke: entry.stroke.clone(),
            });
            if score >= best_score {
                best_score = score;
                if score >= EXECUTE_THRESHOLD {
                    winner = Some(Winner {
                        id: WinnerId::Entry(entry.id),
                        name: entry.name.to_string(),
                        action: entry.action.cloned(),
                        stroke: Some(entry.stroke.clone()),
                    });
                }
            }
        }

        if winner.is_none() && query.is_trivial() {
            winner = Some(Winner {
                id: WinnerId::Default,
                name: DEFAULT_NAME.to_string(),
                action: None,
                stroke: None,
            });
        }

        ranking.sort_candidates();
        if winner.is_some() {
            ranking.score = best_score;
            ranking.winner = winner;
        }
        ranking
    }

    /// Rank `query` and run the winner's action, if any
    pub fn handle<G>(
        &self,
        db: &ActionDb<G>,
        query: Option<&G>,
        fx: &mut dyn Effects,
    ) -> Ranking<G>
    where
        G: Gesture,
        C: Comparator<G>,
    {
        let mut ranking = self.rank(db, query);
        match &ranking.winner {
            Some(winner) => {
                info!("Executing Action {}...", winner.name);
                ranking.executed = winner.action.as_ref().map(|action| action.run(fx));
            }
            None => info!("Couldn't find matching stroke."),
        }
        ranking
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{Action, ButtonInfo, Modifiers, SendKey};
    use crate::models::{StrokeId, StrokeInfo};
    use serde::{Deserialize, Serialize};
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::io;

    /// Gesture identified by a number; `trivial` marks clicks
    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
    struct Shape {
        id: u32,
        trivial: bool,
    }

    fn shape(id: u32) -> Shape {
        Shape { id, trivial: false }
    }

    fn click() -> Shape {
        Shape { id: 0, trivial: true }
    }

    impl Gesture for Shape {
        fn is_trivial(&self) -> bool {
            self.trivial
        }
    }

    /// Comparator returning scripted scores per registered shape
    #[derive(Default)]
    struct Scripted {
        scores: HashMap<u32, f64>,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn with(scores: &[(u32, f64)]) -> Self {
            Self {
                scores: scores.iter().copied().collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl Comparator<Shape> for Scripted {
        fn compare(&self, _query: &Shape, candidate: &Shape) -> f64 {
            self.calls.set(self.calls.get() + 1);
            self.scores.get(&candidate.id).copied().unwrap_or(0.0)
        }
    }

    #[derive(Default)]
    struct Recorder {
        spawned: Vec<String>,
    }

    impl Effects for Recorder {
        fn spawn_shell(&mut self, command: &str) -> io::Result<()> {
            self.spawned.push(command.to_string());
            Ok(())
        }

        fn send_key(&mut self, _key: &SendKey) -> bool {
            true
        }

        fn press_button(&mut self, _button: &ButtonInfo) -> bool {
            true
        }

        fn scroll(&mut self, _mods: Modifiers) -> bool {
            true
        }
    }

    fn db_with(entries: &[(&str, u32, &str)]) -> ActionDb<Shape> {
        let mut db = ActionDb::new();
        for (name, id, cmd) in entries {
            db.add_command(Some(shape(*id)), *name, *cmd);
        }
        db
    }

    #[test]
    fn test_null_query_skips_comparisons() {
        let db = db_with(&[("a", 1, "true")]);
        let matcher = Matcher::new(Scripted::with(&[(1, 1.0)]));

        let r = matcher.rank(&db, None);
        assert_eq!(r.score, -1.0);
        assert_eq!(r.id(), NO_MATCH_ID);
        assert!(r.stroke.is_none());
        assert_eq!(matcher.comparator.calls.get(), 0);
    }

    #[test]
    fn test_below_relevance_is_dropped() {
        let db = db_with(&[("a", 1, "true")]);
        let matcher = Matcher::new(Scripted::with(&[(1, 0.24)]));

        let r = matcher.rank(&db, Some(&shape(99)));
        assert!(r.candidates().is_empty());
        assert!(!r.success());
        assert_eq!(r.id(), NO_MATCH_ID);
    }

    #[test]
    fn test_near_miss_is_reported_not_executed() {
        let db = db_with(&[("a", 1, "echo a")]);
        let matcher = Matcher::new(Scripted::with(&[(1, 0.5)]));
        let mut recorder = Recorder::default();

        let r = matcher.handle(&db, Some(&shape(99)), &mut recorder);
        assert_eq!(r.candidates().len(), 1);
        assert_eq!(r.candidates()[0].name, "a");
        assert!(!r.success());
        assert_eq!(r.score, -1.0);
        assert!(r.executed.is_none());
        assert!(recorder.spawned.is_empty());
    }

    #[test]
    fn test_exact_threshold_wins_and_runs() {
        let db = db_with(&[("a", 1, "echo a")]);
        let matcher = Matcher::new(Scripted::with(&[(1, 0.7)]));
        let mut recorder = Recorder::default();

        let r = matcher.handle(&db, Some(&shape(99)), &mut recorder);
        assert!(r.success());
        assert_eq!(r.id(), 0);
        assert_eq!(r.score, 0.7);
        assert_eq!(r.name(), Some("a"));
        assert_eq!(r.winner.as_ref().unwrap().stroke, Some(shape(1)));
        assert_eq!(r.executed, Some(true));
        assert_eq!(recorder.spawned, vec!["echo a"]);
    }

    #[test]
    fn test_best_score_wins() {
        let db = db_with(&[("a", 1, "a"), ("b", 2, "b"), ("c", 3, "c")]);
        let matcher = Matcher::new(Scripted::with(&[(1, 0.8), (2, 0.95), (3, 0.75)]));

        let r = matcher.rank(&db, Some(&shape(99)));
        assert_eq!(r.name(), Some("b"));
        assert_eq!(r.score, 0.95);
        assert_eq!(r.candidates().len(), 3);
        assert_eq!(r.best_candidates(1).next().unwrap().name, "b");
    }

    #[test]
    fn test_tie_goes_to_later_entry() {
        let db = db_with(&[("first", 1, "a"), ("second", 2, "b")]);
        let matcher = Matcher::new(Scripted::with(&[(1, 0.9), (2, 0.9)]));

        let r = matcher.rank(&db, Some(&shape(99)));
        assert_eq!(r.id(), 1);
        assert_eq!(r.name(), Some("second"));
    }

    #[test]
    fn test_every_bound_shape_compared_once() {
        let mut db = ActionDb::new();
        db.add(StrokeInfo::new("multi").with_stroke(shape(1)).with_stroke(shape(2)));
        db.add(StrokeInfo::new("unbound"));
        db.add_command(Some(shape(3)), "single", "true");
        let matcher = Matcher::new(Scripted::default());

        matcher.rank(&db, Some(&shape(99)));
        assert_eq!(matcher.comparator.calls.get(), 3);
    }

    #[test]
    fn test_trivial_falls_back_to_default_click() {
        let db: ActionDb<Shape> = ActionDb::new();
        let matcher = Matcher::new(Scripted::default());
        let mut recorder = Recorder::default();

        let r = matcher.handle(&db, Some(&click()), &mut recorder);
        assert!(r.success());
        assert_eq!(r.id(), DEFAULT_ID);
        assert_eq!(r.name(), Some(DEFAULT_NAME));
        assert!(r.action().is_none());
        assert!(r.executed.is_none());
        assert!(recorder.spawned.is_empty());
    }

    #[test]
    fn test_trivial_prefers_real_match() {
        let db = db_with(&[("tap", 1, "xdotool click 1")]);
        let matcher = Matcher::new(Scripted::with(&[(1, 0.9)]));

        let r = matcher.rank(&db, Some(&click()));
        assert_eq!(r.id(), 0);
        assert_eq!(r.name(), Some("tap"));
    }

    #[test]
    fn test_entry_without_action() {
        let mut db = ActionDb::new();
        let id = db.add(StrokeInfo::new("placeholder").with_stroke(shape(1)));
        let matcher = Matcher::new(Scripted::with(&[(1, 1.0)]));
        let mut recorder = Recorder::default();

        let r = matcher.handle(&db, Some(&shape(99)), &mut recorder);
        assert_eq!(r.winner.as_ref().unwrap().id, WinnerId::Entry(id));
        assert!(r.executed.is_none());
    }

    #[test]
    fn test_empty_command_winner_reports_not_run() {
        let mut db = ActionDb::new();
        db.add(StrokeInfo::new("todo").with_stroke(shape(1)).with_action(Action::command("")));
        let matcher = Matcher::new(Scripted::with(&[(1, 1.0)]));
        let mut recorder = Recorder::default();

        let r = matcher.handle(&db, Some(&shape(99)), &mut recorder);
        assert!(r.success());
        assert_eq!(r.executed, Some(false));
    }

    #[test]
    fn test_nan_score_is_dropped() {
        let db = db_with(&[("broken", 1, "a"), ("good", 2, "b")]);
        let matcher = Matcher::new(Scripted::with(&[(1, f64::NAN), (2, 0.5)]));

        let r = matcher.rank(&db, Some(&shape(99)));
        assert_eq!(r.candidates().len(), 1);
        assert_eq!(r.best_candidates(1).next().unwrap().name, "good");
        assert!(!r.success());
    }

    #[test]
    fn test_closure_comparator() {
        let db = db_with(&[("a", 1, "a")]);
        let matcher = Matcher::new(|_: &Shape, b: &Shape| if b.id == 1 { 0.99 } else { 0.0 });

        let r = matcher.rank(&db, Some(&shape(5)));
        assert_eq!(r.winner.unwrap().id, WinnerId::Entry(StrokeId(0)));
    }
}
