//! Versioned on-disk format of the action database
//!
//! ```text
//! {
//!   "version": 1,               // database layout, absent means 0
//!   "stroke_info_version": 1,   // entry layout, absent means min(version, 1)
//!   "strokes": { "<id>": { "strokes": [...], "action": {...}, "name": "..." } }
//! }
//! ```
//!
//! Version 0 keyed entries by name and stored no `name` inside them.
//! Stored ids are never trusted: decoded entries are re-added in key
//! order and receive fresh sequential ids.

use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::{Gesture, StrokeId, StrokeInfo, UnnamedStrokeInfo};
use crate::storage::ActionDb;

/// Current database layout version
pub const DB_VERSION: u32 = 1;

/// Current entry layout version
pub const STROKE_INFO_VERSION: u32 = 1;

/// Errors produced while encoding or decoding a snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Malformed action database: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to encode action database: {0}")]
    Encode(#[source] serde_json::Error),
}

#[derive(Serialize)]
#[serde(bound(serialize = "G: Serialize"))]
struct SnapshotOut<'a, G> {
    version: u32,
    stroke_info_version: u32,
    strokes: BTreeMap<StrokeId, &'a StrokeInfo<G>>,
}

#[derive(Deserialize)]
struct SnapshotIn {
    #[serde(default)]
    version: u32,
    stroke_info_version: Option<u32>,
    strokes: Value,
}

/// Serialize the whole database
pub fn encode<G: Gesture>(db: &ActionDb<G>) -> Result<String, SnapshotError> {
    let snapshot = SnapshotOut {
        version: DB_VERSION,
        stroke_info_version: STROKE_INFO_VERSION,
        strokes: db.iter().map(|(id, info)| (*id, info)).collect(),
    };
    serde_json::to_string_pretty(&snapshot).map_err(SnapshotError::Encode)
}

/// Decode a snapshot of any known version into a fresh database
pub fn decode<G: Gesture>(text: &str) -> Result<ActionDb<G>, SnapshotError> {
    let snapshot: SnapshotIn = serde_json::from_str(text).map_err(SnapshotError::Malformed)?;

    if snapshot.version > DB_VERSION {
        warn!(
            "Action database version {} is newer than {}, reading it as {}",
            snapshot.version, DB_VERSION, DB_VERSION
        );
    }
    let info_version = snapshot
        .stroke_info_version
        .unwrap_or(snapshot.version.min(STROKE_INFO_VERSION));

    let mut db = ActionDb::new();
    if snapshot.version >= 1 {
        let entries: BTreeMap<i64, Value> =
            serde_json::from_value(snapshot.strokes).map_err(SnapshotError::Malformed)?;
        for value in entries.into_values() {
            db.add(decode_entry(value, info_version, None)?);
        }
    } else {
        let entries: BTreeMap<String, Value> =
            serde_json::from_value(snapshot.strokes).map_err(SnapshotError::Malformed)?;
        for (name, value) in entries {
            db.add(decode_entry(value, info_version, Some(name))?);
        }
    }

    // A freshly loaded database has nothing to save yet
    db.take_dirty();
    Ok(db)
}

/// Decode one entry; `key_name` is the map key of name-keyed layouts
fn decode_entry<G: Gesture>(
    value: Value,
    info_version: u32,
    key_name: Option<String>,
) -> Result<StrokeInfo<G>, SnapshotError> {
    let mut info = if info_version == 0 {
        let unnamed: UnnamedStrokeInfo<G> =
            serde_json::from_value(value).map_err(SnapshotError::Malformed)?;
        unnamed.named("")
    } else {
        serde_json::from_value::<StrokeInfo<G>>(value).map_err(SnapshotError::Malformed)?
    };
    if let Some(name) = key_name {
        info.name = name;
    }
    Ok(info)
}
