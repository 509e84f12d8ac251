//! StrokeInfo model: a set of gestures bound to a named action

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::actions::Action;

/// Identifier of an entry in the action database
///
/// Ids are handed out in increasing order and never reused while the
/// process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StrokeId(pub u32);

impl StrokeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for StrokeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entry of the action database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "G: Serialize",
    deserialize = "G: Ord + Deserialize<'de>"
))]
pub struct StrokeInfo<G> {
    /// Gestures that trigger this entry
    pub strokes: BTreeSet<G>,
    /// Action to run; `None` means nothing is bound yet
    pub action: Option<Action>,
    /// Display name
    #[serde(default)]
    pub name: String,
}

impl<G: Ord> StrokeInfo<G> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            strokes: BTreeSet::new(),
            action: None,
            name: name.into(),
        }
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_stroke(mut self, stroke: G) -> Self {
        self.strokes.insert(stroke);
        self
    }
}

impl<G: Ord> Default for StrokeInfo<G> {
    fn default() -> Self {
        Self::new("")
    }
}

/// Entry layout written before names were stored inline
///
/// Any `name` field present in such a record is ignored.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "G: Ord + Deserialize<'de>"))]
pub(crate) struct UnnamedStrokeInfo<G> {
    pub strokes: BTreeSet<G>,
    pub action: Option<Action>,
}

impl<G> UnnamedStrokeInfo<G> {
    pub fn named(self, name: impl Into<String>) -> StrokeInfo<G> {
        StrokeInfo {
            strokes: self.strokes,
            action: self.action,
            name: name.into(),
        }
    }
}
