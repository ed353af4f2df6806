use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A label and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub count: usize,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// Counts keys and returns the `limit` most frequent, highest count first.
///
/// Equal counts keep first-seen order: entries are accumulated in insertion
/// order and ranked with a stable sort.
pub fn rank_top<'a, I>(keys: I, limit: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut entries: Vec<RankedEntry> = Vec::new();

    for key in keys {
        match positions.get(key) {
            Some(&idx) => entries[idx].count += 1,
            None => {
                positions.insert(key, entries.len());
                entries.push(RankedEntry::new(key, 1));
            }
        }
    }

    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}
