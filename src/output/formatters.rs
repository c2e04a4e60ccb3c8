//! Formatting utilities for terminal output

/// Format a tile decomposition, e.g. `qu+est+ion`
#[must_use]
pub fn format_tiles(tiles: &[String]) -> String {
    tiles.join("+")
}

/// Format a tile-index sequence, e.g. `[0,1,2]`
#[must_use]
pub fn format_indices(indices: &[usize]) -> String {
    let joined = indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("[{joined}]")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
