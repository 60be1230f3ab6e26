//! Human-readable reporting for the compressor and editor screens.

use crate::encode::OutputFormat;

const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
const STEP: f64 = 1024.0;

/// Format a byte count with 1024 steps, e.g. `1536 -> "1.5 KB"`.
///
/// Trailing zeros of the fractional part are dropped. Sizes beyond the GB
/// range stay in GB.
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    format!("{} {}", trim_fraction(format!("{value:.decimals$}")), UNITS[unit])
}

fn trim_fraction(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Percentage saved, to one decimal, e.g. `"66.7%"`.
///
/// `None` until both sizes are known (either is zero). Negative when the
/// output grew.
pub fn savings_percent(original_size: u64, compressed_size: u64) -> Option<String> {
    if original_size == 0 || compressed_size == 0 {
        return None;
    }
    let saved = original_size as f64 - compressed_size as f64;
    Some(format!("{:.1}%", saved / original_size as f64 * 100.0))
}

/// Label shown next to the encoder quality slider.
pub fn quality_label(quality: u8) -> &'static str {
    match quality {
        0..=49 => "High Compression",
        50..=79 => "Medium",
        _ => "Low Compression",
    }
}

/// Label shown next to the estimator's compression level slider.
pub fn compression_level_label(level: u8) -> &'static str {
    match level {
        0..=29 => "Maximum (Lower Quality)",
        30..=59 => "High",
        60..=79 => "Medium",
        _ => "Low (Higher Quality)",
    }
}

/// Everything before the first dot, so `photo.final.png` gives `photo`.
fn file_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

/// Download name for a compressed file: `compressed_<stem>.<ext>`.
pub fn compressed_file_name(original_name: &str, format: OutputFormat) -> String {
    format!("compressed_{}.{}", file_stem(original_name), format.extension())
}

/// Download name for an edited file: `edited_<stem>.<ext>`.
pub fn edited_file_name(original_name: &str, format: OutputFormat) -> String {
    format!("edited_{}.{}", file_stem(original_name), format.extension())
}
