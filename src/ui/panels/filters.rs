// MedConnect - ui/panels/filters.rs
//
// Filter controls sidebar. Edits `state.filters`; nothing changes in the
// result list until Apply is pressed.

use crate::app::state::AppState;
use crate::core::catalog::{AVAILABILITY_DAYS, LOCATIONS, SPECIALTIES};
use crate::core::model::SortMode;
use crate::util::constants::{ALL_LOCATIONS_LABEL, ALL_SPECIALTIES_LABEL, ANY_DAY_LABEL};

/// Render the filter controls.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let active = state.applied_filters().active_count();
    let heading = if active > 0 {
        format!("Filter Results ({active})")
    } else {
        "Filter Results".to_string()
    };

    let arrow = if state.filters_expanded { "\u{25b2}" } else { "\u{25bc}" };
    if ui
        .add(egui::Button::new(format!("{heading}  {arrow}")).frame(false))
        .clicked()
    {
        state.filters_expanded = !state.filters_expanded;
    }
    ui.separator();

    if !state.filters_expanded {
        return;
    }

    ui.label("Specialty");
    choice_combo(
        ui,
        "filter_specialty",
        &mut state.filters.specialty,
        ALL_SPECIALTIES_LABEL,
        SPECIALTIES,
    );
    ui.add_space(6.0);

    ui.label("Location");
    choice_combo(
        ui,
        "filter_location",
        &mut state.filters.location,
        ALL_LOCATIONS_LABEL,
        LOCATIONS,
    );
    ui.add_space(6.0);

    ui.label("Availability");
    choice_combo(
        ui,
        "filter_availability",
        &mut state.filters.availability,
        ANY_DAY_LABEL,
        AVAILABILITY_DAYS,
    );
    ui.add_space(6.0);

    ui.checkbox(
        &mut state.filters.accepting_new_patients,
        "Accepting New Patients",
    );
    ui.add_space(6.0);

    ui.label("Sort By");
    egui::ComboBox::from_id_salt("filter_sort")
        .selected_text(state.filters.sort_by.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for mode in SortMode::all() {
                ui.selectable_value(&mut state.filters.sort_by, *mode, mode.label());
            }
        });

    ui.add_space(10.0);
    ui.horizontal(|ui| {
        if ui.button("Apply Filters").clicked() {
            state.apply_filters();
            state.status_message = format!("{} doctors match the filters.", state.view.len());
        }
        if ui.button("Reset").clicked() {
            state.reset_filters();
            state.status_message = "Filters reset.".to_string();
        }
    });
}

/// Combo box over a fixed vocabulary plus a leading "no constraint" entry.
fn choice_combo(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut Option<String>,
    none_label: &str,
    options: &[&str],
) {
    let selected = value.clone().unwrap_or_else(|| none_label.to_string());
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            ui.selectable_value(value, None, none_label);
            for option in options {
                ui.selectable_value(value, Some((*option).to_string()), *option);
            }
        });
}
