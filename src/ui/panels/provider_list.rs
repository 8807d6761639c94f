// MedConnect - ui/panels/provider_list.rs
//
// Result list: one card per provider in the current view, with a favorite
// toggle on each card.

use crate::app::state::AppState;
use crate::core::model::Provider;
use crate::ui::theme;

/// Render the result heading and provider cards.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.heading(state.result_heading());
        if state.loading {
            ui.spinner();
        }
    });
    ui.add_space(4.0);

    if state.loading && state.view.is_empty() {
        return;
    }

    if state.view.is_empty() {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("No doctors found").strong());
            ui.label(
                egui::RichText::new("Try adjusting your search or filters.").color(theme::MUTED),
            );
        });
        return;
    }

    let mut toggled: Option<String> = None;

    egui::ScrollArea::vertical()
        .id_salt("provider_list")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for provider in &state.view {
                if card(ui, provider, state.is_favorite(&provider.id)) {
                    toggled = Some(provider.id.clone());
                }
                ui.add_space(theme::CARD_SPACING);
            }
        });

    if let Some(id) = toggled {
        state.toggle_favorite(&id);
    }
}

/// Draw one provider card. Returns true when the favorite button was clicked.
pub fn card(ui: &mut egui::Ui, provider: &Provider, is_favorite: bool) -> bool {
    let mut clicked = false;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&provider.name).size(16.0).strong());
                ui.label(provider.specialty_label());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let (glyph, colour, hint) = if is_favorite {
                    ("\u{2665}", theme::FAVORITE, "Remove from favorites")
                } else {
                    ("\u{2661}", theme::MUTED, "Add to favorites")
                };
                let button = egui::Button::new(egui::RichText::new(glyph).size(18.0).color(colour))
                    .frame(false);
                if ui.add(button).on_hover_text(hint).clicked() {
                    clicked = true;
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("\u{2605}").color(theme::STAR));
            ui.label(format!(
                "{:.1} ({} reviews)",
                provider.rating, provider.review_count
            ));
        });

        ui.label(egui::RichText::new(&provider.education).color(theme::MUTED));
        ui.label(format!("\u{1f4cd} {}", provider.location));
        ui.label(format!("Available: {}", provider.availability.join(", ")));

        ui.horizontal(|ui| {
            let intake = if provider.accepting_new_patients {
                "Accepting new patients"
            } else {
                "Not accepting new patients"
            };
            ui.label(
                egui::RichText::new(intake)
                    .small()
                    .color(theme::intake_colour(provider.accepting_new_patients)),
            );
            ui.hyperlink_to("Photo", &provider.photo_url);
        });
    });

    clicked
}
