// MedConnect - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Brand accent (buttons, heading icon).
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235); // Blue 600

/// Rating star.
pub const STAR: Color32 = Color32::from_rgb(250, 204, 21); // Yellow 400

/// Favorite heart when set.
pub const FAVORITE: Color32 = Color32::from_rgb(239, 68, 68); // Red 500

/// Muted secondary text.
pub const MUTED: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Accepting-new-patients badge colours.
pub fn intake_colour(accepting: bool) -> Color32 {
    if accepting {
        Color32::from_rgb(22, 163, 74) // Green 600
    } else {
        Color32::from_rgb(156, 163, 175) // Gray 400
    }
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 260.0;
pub const SEARCH_WIDTH: f32 = 520.0;
pub const CARD_SPACING: f32 = 8.0;
pub const FAVORITES_WINDOW_WIDTH: f32 = 420.0;

/// Apply the configured visuals and body font size.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
    ctx.style_mut(|style| {
        if let Some(body) = style.text_styles.get_mut(&egui::TextStyle::Body) {
            body.size = font_size;
        }
        if let Some(button) = style.text_styles.get_mut(&egui::TextStyle::Button) {
            button.size = font_size;
        }
    });
}
