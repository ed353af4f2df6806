//! Plain-text rendering for terminal output.

use std::fmt::Write;

use medfix::advisor::PriorityAssessment;
use medfix::stats::{is_empty, is_unlabelled, RankedEntry, PENDING_PREVIEW_LEN};
use medfix::sync::{DashboardState, SyncOutcome};
use medfix::{AggregateSnapshot, MaintenanceRecord};

fn ranking(out: &mut String, title: &str, entries: &[RankedEntry]) {
    let _ = writeln!(out, "\n{}", title);
    if entries.is_empty() {
        let _ = writeln!(out, "  (none)");
        return;
    }
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {:<40} {:>4}", i + 1, entry.name, entry.count);
    }
}

pub fn summary(snapshot: &AggregateSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total reports     {:>6}", snapshot.total);
    let _ = writeln!(out, "Completed         {:>6}", snapshot.completed);
    let _ = writeln!(out, "Pending           {:>6}", snapshot.pending_count);
    let _ = writeln!(out, "With obstacles    {:>6}", snapshot.with_obstacles);

    ranking(&mut out, "Most damaged items", &snapshot.top_items);
    ranking(&mut out, "Most frequent complaints", &snapshot.top_all_complaints);
    ranking(&mut out, "Unfinished complaints", &snapshot.top_unfinished_complaints);

    let _ = writeln!(out, "\nObstacles");
    if snapshot.obstacle_data.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for entry in &snapshot.obstacle_data {
        let _ = writeln!(
            out,
            "  {:<40} {:>4} {:>5.1}%",
            entry.name,
            entry.count,
            snapshot.obstacle_share(entry)
        );
    }

    let _ = writeln!(out, "\nPending queue");
    let preview = snapshot.pending_preview(PENDING_PREVIEW_LEN);
    if preview.is_empty() {
        let _ = writeln!(out, "  (empty)");
    }
    for record in preview {
        let _ = writeln!(
            out,
            "  {:<8} {} / {}: {}",
            record.id, record.room_name, record.item_name, record.complaint_type
        );
    }
    out
}

/// Marker shown in place of an empty repair date.
pub const PENDING_MARKER: &str = "Pending";

pub fn records(records: &[&MaintenanceRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let repaired = if is_empty(&record.repair_date) {
            PENDING_MARKER
        } else {
            record.repair_date.trim()
        };
        let obstacle = if is_unlabelled(&record.obstacles_main) {
            "-"
        } else {
            record.obstacles_main.trim()
        };
        let _ = writeln!(
            out,
            "{:<8} {:<20} {:<24} {:<30} {:<12} {:<12} {}",
            record.id,
            record.room_name,
            record.item_name,
            record.complaint_type,
            record.complaint_date,
            repaired,
            obstacle
        );
    }
    let _ = writeln!(out, "{} record(s)", records.len());
    out
}

pub fn advice(record: &MaintenanceRecord, assessment: &PriorityAssessment) -> String {
    format!(
        "{} {} / {}: {}\nPriority: {}\nReason:   {}\n",
        record.id,
        record.room_name,
        record.item_name,
        record.complaint_type,
        assessment.priority,
        assessment.reasoning
    )
}

pub fn sync_report(outcome: &SyncOutcome, state: &DashboardState) -> String {
    match outcome {
        SyncOutcome::Updated { records } => format!(
            "Synced {} records at {}\n{}",
            records,
            state.last_sync().unwrap_or("-"),
            summary(state.snapshot())
        ),
        SyncOutcome::Failed { error } => {
            format!("Sync failed, keeping previous data: {}\n", error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medfix::advisor::Priority;
    use medfix::{aggregate, parse};

    const CSV: &str = "Ruangan,Item,Komplain,Tanggal,Status,Perbaikan,Kendala,Kendala Utama,Catatan\n\
                       ICU,Ventilator,Alarm mati,01/02,Baru,,,,\n\
                       Lab,Wastafel,Bocor,02/02,Selesai,03/02,,,\n\
                       IGD,AC,Bocor,04/02,Proses,,Ya,Menunggu sparepart,\n";

    #[test]
    fn test_summary_lists_counters_and_rankings() {
        let snapshot = aggregate(&parse(CSV));
        let text = summary(&snapshot);

        assert!(text.contains("Total reports          3"));
        assert!(text.contains("Completed              1"));
        assert!(text.contains("Pending                1"));
        assert!(text.contains("Menunggu sparepart"));
        assert!(text.contains("33.3%"));
        assert!(text.contains("row-2"));
    }

    #[test]
    fn test_summary_of_nothing() {
        let text = summary(&AggregateSnapshot::default());
        assert!(text.contains("(none)"));
        assert!(text.contains("(empty)"));
    }

    #[test]
    fn test_records_table() {
        let parsed = parse(CSV);
        let refs: Vec<&MaintenanceRecord> = parsed.iter().collect();
        let text = records(&refs);
        assert!(text.contains("row-3"));
        assert!(text.ends_with("3 record(s)\n"));

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains(PENDING_MARKER));
        assert!(lines[0].ends_with(" -"));
        assert!(lines[1].contains("03/02"));
        assert!(!lines[1].contains(PENDING_MARKER));
        assert!(lines[2].ends_with("Menunggu sparepart"));
    }

    #[test]
    fn test_records_table_treats_zero_repair_date_as_pending() {
        let parsed = parse("h\nICU,Bed,Leak,01/02,Baru,0,,Menunggu part,");
        let refs: Vec<&MaintenanceRecord> = parsed.iter().collect();
        let text = records(&refs);
        let row = text.lines().next().unwrap();

        assert!(row.contains(PENDING_MARKER));
        assert!(!row.contains(" 0 "));
        assert!(row.ends_with("Menunggu part"));
    }

    #[test]
    fn test_records_table_dash_obstacle_is_unlabelled() {
        let parsed = parse("h\nICU,Bed,Leak,01/02,Baru,null,Ya, - ,");
        let refs: Vec<&MaintenanceRecord> = parsed.iter().collect();
        let row = records(&refs).lines().next().unwrap().to_string();

        assert!(row.contains(PENDING_MARKER));
        assert!(row.ends_with(" -"));
    }

    #[test]
    fn test_advice_text() {
        let parsed = parse(CSV);
        let text = advice(
            &parsed[0],
            &PriorityAssessment::new(Priority::Critical, "Alat penunjang hidup."),
        );
        assert!(text.contains("Priority: Kritis"));
        assert!(text.contains("Alat penunjang hidup."));
    }

    #[test]
    fn test_failed_sync_report() {
        let text = sync_report(
            &SyncOutcome::Failed {
                error: "HTTP 503".to_string(),
            },
            &DashboardState::new(),
        );
        assert!(text.contains("HTTP 503"));
    }
}
