/// Values that sheet editors use to mean "not applicable", compared after
/// trimming and lowercasing.
const EMPTY_MARKERS: &[&str] = &["", "-", "0", "null"];

/// Returns true when a free-text cell counts as empty for status purposes.
///
/// Governs the unfinished check on the repair date and the obstacle check on
/// the main obstacles column. Ranking exclusions use [`is_unlabelled`]
/// instead, which does not treat `"0"` or `"null"` as empty.
pub fn is_empty(value: &str) -> bool {
    let normalized = value.trim().to_lowercase();
    EMPTY_MARKERS.contains(&normalized.as_str())
}

/// Literal exclusion used when ranking labels: blank or exactly `"-"`.
pub fn is_unlabelled(value: &str) -> bool {
    value.trim().is_empty() || value == "-"
}
