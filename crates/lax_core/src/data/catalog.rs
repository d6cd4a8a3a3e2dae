//! Embedded goal catalog.
//!
//! The authored goal library ships inside the binary via `include_str!`,
//! parsed once on first access. No file I/O at runtime.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::models::{Level, MetricKind, Position};

/// Authored goal library JSON (~174 entries: 10 templates per level for
/// Goalie/Attack/Midfield/Defense, 9 per level for the boys-only Faceoff
/// and LSM positions).
pub const GOAL_CATALOG_JSON: &str = include_str!("../../data/goal_catalog.json");

/// One authored entry in the goal library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalTemplate {
    pub id: String,
    pub position: Position,
    pub level: Level,
    pub title: String,
    pub metric_kind: MetricKind,
    pub target: f64,
    pub unit: String,
    pub tracking_key: String,
}

static CATALOG: OnceLock<HashMap<(Position, Level), Vec<GoalTemplate>>> = OnceLock::new();

fn catalog() -> &'static HashMap<(Position, Level), Vec<GoalTemplate>> {
    CATALOG.get_or_init(|| {
        // The catalog is a build artifact; a parse failure here means the
        // embedded JSON was corrupted at authoring time, not a runtime
        // condition the caller can handle.
        let entries: Vec<GoalTemplate> = serde_json::from_str(GOAL_CATALOG_JSON)
            .unwrap_or_else(|e| panic!("embedded goal catalog is malformed: {}", e));
        let mut by_cell: HashMap<(Position, Level), Vec<GoalTemplate>> = HashMap::new();
        for entry in entries {
            by_cell.entry((entry.position, entry.level)).or_default().push(entry);
        }
        by_cell
    })
}

/// Authored templates for a (position, level) cell, in authoring order.
/// Returns an empty slice for cells with no templates rather than failing.
pub fn lookup(position: Position, level: Level) -> &'static [GoalTemplate] {
    catalog().get(&(position, level)).map(Vec::as_slice).unwrap_or(&[])
}

/// Total number of authored templates.
pub fn len() -> usize {
    catalog().values().map(Vec::len).sum()
}
