// MedConnect - ui/panels/header.rs
//
// Top bar: product name and the favorites button with its count.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::APP_NAME;

/// Render the header bar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("\u{2695} {APP_NAME}"))
                .size(20.0)
                .strong()
                .color(theme::ACCENT),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = format!("\u{2665} Favorites ({})", state.favorites_count());
            if ui.button(label).clicked() {
                state.show_favorites = true;
            }
        });
    });
}
