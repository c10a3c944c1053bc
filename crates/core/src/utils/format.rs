//! Human-readable execution time formatting

/// Format logged seconds as hours and minutes, dropping leading zero units
///
/// Seconds are truncated and negative totals are treated as zero.
///
/// # Examples
///
/// ```
/// use timelog_core::format_execution_time;
///
/// assert_eq!(format_execution_time(45 * 60), "45m");
/// assert_eq!(format_execution_time(3900), "1h 5m");
/// assert_eq!(format_execution_time(30), "0m");
/// ```
#[must_use]
pub fn format_execution_time(seconds: i64) -> String {
    let total_minutes = seconds.max(0) / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let components = [(hours, "h"), (minutes, "m")];
    let start_index =
        components.iter().position(|(value, _)| *value > 0).unwrap_or(components.len() - 1);

    components[start_index..]
        .iter()
        .map(|(value, suffix)| format!("{value}{suffix}"))
        .collect::<Vec<_>>()
        .join(" ")
}
