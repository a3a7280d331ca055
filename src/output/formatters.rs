//! Formatting utilities for terminal output

/// Render the shared string for prompts, making an empty round visible
#[must_use]
pub fn shared_display(shared: &str) -> String {
    if shared.is_empty() {
        "(empty)".to_string()
    } else {
        shared.to_uppercase()
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
