//! Dashboard statistics derived from the current record sequence.

use serde::{Deserialize, Serialize};

use crate::sheet::MaintenanceRecord;

use super::emptiness::{is_empty, is_unlabelled};
use super::ranking::{rank_top, RankedEntry};

/// Length of the most-damaged items ranking.
pub const TOP_ITEMS_LIMIT: usize = 10;

/// Length of both complaint type rankings.
pub const TOP_COMPLAINTS_LIMIT: usize = 10;

/// Length of the obstacle ranking shown in the sidebar.
pub const TOP_OBSTACLES_LIMIT: usize = 5;

/// Number of pending records shown in the queue preview.
pub const PENDING_PREVIEW_LEN: usize = 4;

/// Counters and rankings for one record sequence.
///
/// A pure function of its input: recomputing from the same records always
/// yields the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSnapshot {
    pub total: usize,
    /// Records with a repair date.
    pub completed: usize,
    /// Records with neither a repair date nor a logged obstacle.
    pub pending_count: usize,
    pub with_obstacles: usize,
    /// Pending records in sheet order.
    pub pending_records: Vec<MaintenanceRecord>,
    pub top_items: Vec<RankedEntry>,
    pub top_all_complaints: Vec<RankedEntry>,
    pub top_unfinished_complaints: Vec<RankedEntry>,
    pub obstacle_data: Vec<RankedEntry>,
}

impl AggregateSnapshot {
    /// The first `limit` pending records, in sheet order.
    pub fn pending_preview(&self, limit: usize) -> &[MaintenanceRecord] {
        &self.pending_records[..limit.min(self.pending_records.len())]
    }

    /// Share of all records carried by `entry`, as a percentage.
    pub fn obstacle_share(&self, entry: &RankedEntry) -> f64 {
        entry.count as f64 / self.total.max(1) as f64 * 100.0
    }
}

/// Computes the snapshot. Never fails; empty input yields an all-zero snapshot.
pub fn aggregate(records: &[MaintenanceRecord]) -> AggregateSnapshot {
    let unfinished: Vec<&MaintenanceRecord> = records
        .iter()
        .filter(|r| is_empty(&r.repair_date))
        .collect();

    let pending_records: Vec<MaintenanceRecord> = unfinished
        .iter()
        .filter(|r| is_empty(&r.obstacles_main))
        .map(|r| (*r).clone())
        .collect();

    let with_obstacles = records
        .iter()
        .filter(|r| !is_empty(&r.obstacles_main))
        .count();

    let top_items = rank_top(
        records
            .iter()
            .map(|r| r.item_name.as_str())
            .filter(|i| !i.is_empty()),
        TOP_ITEMS_LIMIT,
    );

    let top_all_complaints = rank_top(
        records
            .iter()
            .map(|r| r.complaint_type.as_str())
            .filter(|c| !is_unlabelled(c)),
        TOP_COMPLAINTS_LIMIT,
    );

    let top_unfinished_complaints = rank_top(
        unfinished
            .iter()
            .map(|r| r.complaint_type.as_str())
            .filter(|c| !is_unlabelled(c)),
        TOP_COMPLAINTS_LIMIT,
    );

    let obstacle_data = rank_top(
        records
            .iter()
            .map(|r| r.obstacles_main.trim())
            .filter(|h| !is_unlabelled(h)),
        TOP_OBSTACLES_LIMIT,
    );

    AggregateSnapshot {
        total: records.len(),
        completed: records.len() - unfinished.len(),
        pending_count: pending_records.len(),
        with_obstacles,
        pending_records,
        top_items,
        top_all_complaints,
        top_unfinished_complaints,
        obstacle_data,
    }
}
