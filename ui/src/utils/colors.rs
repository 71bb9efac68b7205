//! Shared color constants for the demo.

use egui::Color32;

/// Forest green for active records.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for suspended records.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Amber for records waiting on an invite.
pub const COLOR_AMBER: Color32 = Color32::from_rgb(255, 193, 7);

/// Color for a status value, `None` when it has no dedicated color.
pub fn status_color(status: &str) -> Option<Color32> {
    match status.trim().to_ascii_lowercase().as_str() {
        "active" => Some(COLOR_GREEN),
        "suspended" | "disabled" => Some(COLOR_RED),
        "invited" | "pending" => Some(COLOR_AMBER),
        _ => None,
    }
}
