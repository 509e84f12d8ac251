//! The action database: strokes bound to actions, keyed by stable ids

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::actions::Action;
use crate::models::{StrokeId, StrokeInfo};

/// Registry of [`StrokeInfo`] entries
///
/// Iteration is always in ascending id order, which makes matching
/// reproducible. Ids come from a counter that only grows, so an id held by
/// an editor either still refers to the same entry or to nothing at all.
#[derive(Debug, Clone)]
pub struct ActionDb<G> {
    entries: BTreeMap<StrokeId, StrokeInfo<G>>,
    next_id: u32,
    dirty: bool,
}

/// One bound gesture, as visited by [`ActionDb::strokes`]
#[derive(Debug, Clone, Copy)]
pub struct StrokeRef<'a, G> {
    pub id: StrokeId,
    pub name: &'a str,
    pub stroke: &'a G,
    pub action: Option<&'a Action>,
}

impl<G> ActionDb<G> {
    /// Create an empty database
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
            dirty: false,
        }
    }

    /// Insert an entry under a fresh id
    pub fn add(&mut self, info: StrokeInfo<G>) -> StrokeId {
        let id = StrokeId(self.next_id);
        self.entries.insert(id, info);
        self.next_id += 1;
        self.dirty = true;
        id
    }

    /// Remove an entry; returns whether it was present
    pub fn remove(&mut self, id: StrokeId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            self.dirty = true;
        }
        removed
    }

    pub fn get(&self, id: StrokeId) -> Option<&StrokeInfo<G>> {
        self.entries.get(&id)
    }

    /// Mutable access for the editor.
    ///
    /// Any successful call marks the database as changed, whether or not
    /// the entry is then modified, so use [`get`](Self::get) to read.
    pub fn get_mut(&mut self, id: StrokeId) -> Option<&mut StrokeInfo<G>> {
        let entry = self.entries.get_mut(&id);
        if entry.is_some() {
            self.dirty = true;
        }
        entry
    }

    pub fn contains(&self, id: StrokeId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The id the next [`add`](Self::add) will return
    pub fn next_id(&self) -> StrokeId {
        StrokeId(self.next_id)
    }

    /// Entries in ascending id order
    pub fn iter(&self) -> btree_map::Iter<'_, StrokeId, StrokeInfo<G>> {
        self.entries.iter()
    }

    /// Every bound gesture, by ascending id and then by gesture order
    pub fn strokes(&self) -> impl Iterator<Item = StrokeRef<'_, G>> {
        self.entries.iter().flat_map(|(id, info)| {
            info.strokes.iter().map(move |stroke| StrokeRef {
                id: *id,
                name: info.name.as_str(),
                stroke,
                action: info.action.as_ref(),
            })
        })
    }

    /// Total number of gestures bound across all entries
    pub fn count_bound_shapes(&self) -> usize {
        self.entries.values().map(|info| info.strokes.len()).sum()
    }

    /// Whether anything changed since the last [`take_dirty`](Self::take_dirty)
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Report and clear the changed flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl<G: Ord> ActionDb<G> {
    /// Add a named shell command, optionally bound to a gesture
    pub fn add_command(
        &mut self,
        stroke: Option<G>,
        name: impl Into<String>,
        cmd: impl Into<String>,
    ) -> StrokeId {
        let mut info = StrokeInfo::new(name).with_action(Action::command(cmd));
        if let Some(stroke) = stroke {
            info.strokes.insert(stroke);
        }
        self.add(info)
    }
}

impl<G> Default for ActionDb<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, G> IntoIterator for &'a ActionDb<G> {
    type Item = (&'a StrokeId, &'a StrokeInfo<G>);
    type IntoIter = btree_map::Iter<'a, StrokeId, StrokeInfo<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential() {
        let mut db: ActionDb<u8> = ActionDb::new();
        assert_eq!(db.add(StrokeInfo::new("a")), StrokeId(0));
        assert_eq!(db.add(StrokeInfo::new("b")), StrokeId(1));
        assert_eq!(db.next_id(), StrokeId(2));
        assert_eq!(db.len(), 2);
    }

    #[test]
    fn test_ids_never_reused_after_remove() {
        let mut db: ActionDb<u8> = ActionDb::new();
        let mut seen = Vec::new();
        for round in 0..5 {
            let id = db.add(StrokeInfo::new(format!("entry {}", round)));
            if let Some(last) = seen.last() {
                assert!(id > *last);
            }
            seen.push(id);
            assert!(db.remove(id));
        }
        assert!(db.is_empty());
        assert_eq!(db.next_id(), StrokeId(5));
    }

    #[test]
    fn test_remove_missing() {
        let mut db: ActionDb<u8> = ActionDb::new();
        let id = db.add(StrokeInfo::new("a"));
        assert!(db.remove(id));
        assert!(!db.remove(id));
        assert!(!db.remove(StrokeId(42)));
        assert_eq!(db.next_id(), StrokeId(1));
    }

    #[test]
    fn test_add_command_without_stroke() {
        let mut db: ActionDb<u8> = ActionDb::new();
        let id = db.add_command(None, "Terminal", "xterm");
        let info = db.get(id).unwrap();
        assert!(info.strokes.is_empty());
        assert_eq!(info.name, "Terminal");
        assert_eq!(info.action, Some(Action::command("xterm")));
    }

    #[test]
    fn test_add_command_with_stroke() {
        let mut db: ActionDb<u8> = ActionDb::new();
        let id = db.add_command(Some(7), "Browser", "firefox");
        assert_eq!(db.get(id).unwrap().strokes.len(), 1);
    }

    #[test]
    fn test_count_bound_shapes() {
        let mut db: ActionDb<u8> = ActionDb::new();
        db.add(StrokeInfo::new("a").with_stroke(1).with_stroke(2));
        db.add(StrokeInfo::new("b"));
        db.add_command(Some(3), "c", "true");
        assert_eq!(db.count_bound_shapes(), 3);
    }

    #[test]
    fn test_strokes_in_id_order() {
        let mut db: ActionDb<u8> = ActionDb::new();
        db.add(StrokeInfo::new("first").with_stroke(9).with_stroke(4));
        db.add(StrokeInfo::new("empty"));
        db.add(StrokeInfo::new("third").with_stroke(1));

        let visited: Vec<_> = db.strokes().map(|s| (s.id.get(), s.name, *s.stroke)).collect();
        assert_eq!(
            visited,
            vec![(0, "first", 4), (0, "first", 9), (2, "third", 1)]
        );
    }

    #[test]
    fn test_dirty_tracking() {
        let mut db: ActionDb<u8> = ActionDb::new();
        assert!(!db.is_dirty());

        let id = db.add(StrokeInfo::new("a"));
        assert!(db.take_dirty());
        assert!(!db.is_dirty());

        assert!(db.get(id).is_some());
        assert!(!db.is_dirty());

        db.get_mut(id).unwrap().name = "renamed".to_string();
        assert!(db.take_dirty());

        // Borrowing mutably counts as a change even without a write
        assert!(db.get_mut(id).is_some());
        assert!(db.take_dirty());
        assert!(db.get_mut(StrokeId(99)).is_none());
        assert!(!db.is_dirty());

        assert!(!db.remove(StrokeId(99)));
        assert!(!db.is_dirty());
    }
}
