use chrono::NaiveDateTime;

/// Timestamp-suffixed work-file name, unique per run: `{prefix}_{YYYYMMDD_HHMMSS}.xlsx`.
pub fn work_filename(prefix: &str, now: &NaiveDateTime) -> String {
    format!("{prefix}_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}
