/// Formats a duration as its two largest non-zero units among days, hours,
/// and minutes: "2d 3h", "2d 14m" when the hour component is zero, "42m"
/// under an hour. Zero and negative durations collapse to "0m".
pub fn format_uptime(duration: chrono::Duration) -> String {
    let total_minutes = duration.num_minutes().max(0);

    let days = total_minutes / (60 * 24);
    let hours = (total_minutes / 60) % 24;
    let minutes = total_minutes % 60;

    let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "m")]
        .iter()
        .filter(|(value, _)| *value > 0)
        .take(2)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        "0m".to_string()
    } else {
        parts.join(" ")
    }
}

/// Formats a byte count with one decimal in the largest fitting unit.
pub fn format_bytes(bytes: i64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let value = bytes.max(0) as f64;

    if value >= GB {
        format!("{:.1} GB", value / GB)
    } else if value >= MB {
        format!("{:.1} MB", value / MB)
    } else if value >= KB {
        format!("{:.1} KB", value / KB)
    } else {
        format!("{bytes} B")
    }
}

/// Truncates message content for chat previews, appending an ellipsis marker
/// when anything was cut. Operates on characters, not bytes, so multi-byte
/// content never splits mid-character.
pub fn truncate_content(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let mut truncated: String = content.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}
