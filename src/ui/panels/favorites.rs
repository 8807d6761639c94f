// MedConnect - ui/panels/favorites.rs
//
// Favorites window: lists bookmarked providers with a remove button each.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the favorites window (if state.show_favorites is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_favorites {
        return;
    }

    let favorites = state.favorite_providers();
    let mut removed: Option<String> = None;
    let mut open = true;

    egui::Window::new("Favorite Doctors")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .min_width(theme::FAVORITES_WINDOW_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            if favorites.is_empty() {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label("You haven't added any favorites yet.");
                    ui.label(
                        egui::RichText::new("Tap the heart on a doctor's card to save them here.")
                            .color(theme::MUTED),
                    );
                });
                ui.add_space(12.0);
                return;
            }

            egui::ScrollArea::vertical()
                .id_salt("favorites_list")
                .max_height(420.0)
                .show(ui, |ui| {
                    for provider in &favorites {
                        ui.horizontal(|ui| {
                            ui.vertical(|ui| {
                                ui.label(egui::RichText::new(&provider.name).strong());
                                ui.label(
                                    egui::RichText::new(provider.specialty_label())
                                        .color(theme::MUTED),
                                );
                                ui.label(format!(
                                    "\u{1f4cd} {}  \u{2605} {:.1}",
                                    provider.location, provider.rating
                                ));
                            });
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if ui.button("Remove").clicked() {
                                        removed = Some(provider.id.clone());
                                    }
                                },
                            );
                        });
                        ui.separator();
                    }
                });
        });

    if let Some(id) = removed {
        state.toggle_favorite(&id);
    }
    if !open {
        state.show_favorites = false;
    }
}
