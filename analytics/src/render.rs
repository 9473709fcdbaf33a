use crate::timeline::Timeline;

/// Width of every grid column, value cells and header labels alike.
pub const COLUMN_WIDTH: usize = 10;

/// Right-justifies a value to `COLUMN_WIDTH`; over-long values are cut down
/// and end in `...` so the cell still occupies exactly the column width.
pub fn format_cell(value: &str) -> String {
    if value.chars().count() > COLUMN_WIDTH {
        let truncated: String = value.chars().take(COLUMN_WIDTH - 3).collect();
        format!("{truncated}...")
    } else {
        format!("{value:>COLUMN_WIDTH$}")
    }
}

/// Formats the grid: a `HH:MM` header row, a dashed rule, then one row per
/// key with blanks where the key saw no change in that minute. Pure
/// formatting over already-computed data.
pub fn render_timeline(timeline: &Timeline) -> String {
    let header = format!(
        "{:>width$} | {}",
        "",
        timeline
            .buckets()
            .map(|bucket| format!("{:>width$}", bucket.format("%H:%M"), width = COLUMN_WIDTH))
            .collect::<Vec<String>>()
            .join(" | "),
        width = COLUMN_WIDTH
    );
    let mut lines = vec![header.clone(), "-".repeat(header.len())];
    for key in timeline.keys() {
        let mut row = vec![format!("{key:>COLUMN_WIDTH$}")];
        for bucket in timeline.buckets() {
            match timeline.value(key, bucket) {
                Some(value) => row.push(format_cell(value)),
                None => row.push(" ".repeat(COLUMN_WIDTH)),
            }
        }
        lines.push(row.join(" | "));
    }
    lines.join("\n")
}
