//! Byte-count formatting for display.

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count using the largest unit whose divisor keeps the value
/// at or above 1, rounded to two decimal places with trailing zeros trimmed.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let k = 1024f64;
    let i = ((bytes as f64).ln() / k.ln()).floor() as usize;
    let i = i.min(UNITS.len() - 1);
    let value = bytes as f64 / k.powi(i as i32);

    let mut formatted = format!("{:.2}", value);
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }

    format!("{} {}", formatted, UNITS[i])
}
