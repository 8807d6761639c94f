// MedConnect - ui/panels/search.rs
//
// Search box with the specialty suggestion dropdown.
// Keyboard handling is delegated to `AutocompleteState`; this panel only
// translates egui input into its calls.

use crate::app::autocomplete::SearchKey;
use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants::{MAX_VISIBLE_SUGGESTIONS, SEARCH_PLACEHOLDER};

/// Render the search box. Returns a query when the user submitted one.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> Option<String> {
    let mut submitted = None;
    let mut blurred = false;
    let mut box_focused = false;

    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.autocomplete.input)
                .hint_text(SEARCH_PLACEHOLDER)
                .desired_width(theme::SEARCH_WIDTH),
        );

        if response.changed() {
            state.autocomplete.on_input_changed();
        }
        if response.gained_focus() {
            state.autocomplete.on_focus();
        }

        box_focused = response.has_focus();
        if box_focused {
            let (up, down, escape) = ui.input(|i| {
                (
                    i.key_pressed(egui::Key::ArrowUp),
                    i.key_pressed(egui::Key::ArrowDown),
                    i.key_pressed(egui::Key::Escape),
                )
            });
            if up {
                state.autocomplete.on_key(SearchKey::ArrowUp);
            }
            if down {
                state.autocomplete.on_key(SearchKey::ArrowDown);
            }
            if escape {
                state.autocomplete.on_key(SearchKey::Escape);
            }
        }

        // Singleline edits drop focus on Enter.
        if response.lost_focus() {
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = state.autocomplete.on_key(SearchKey::Enter);
            } else {
                blurred = true;
            }
        }

        if ui
            .button("\u{1f50d}")
            .on_hover_text("Search")
            .clicked()
        {
            submitted = Some(state.autocomplete.submit());
        }
    });

    if state.autocomplete.dropdown_open() {
        let active = state.autocomplete.active_index();
        let mut clicked = None;

        let popup = egui::Frame::popup(ui.style()).show(ui, |ui| {
            ui.set_width(theme::SEARCH_WIDTH);
            egui::ScrollArea::vertical()
                .id_salt("search_suggestions")
                .max_height(MAX_VISIBLE_SUGGESTIONS as f32 * ui.spacing().interact_size.y)
                .show(ui, |ui| {
                    for (index, suggestion) in state.autocomplete.suggestions().iter().enumerate()
                    {
                        if ui.selectable_label(index == active, suggestion).clicked() {
                            clicked = Some(index);
                        }
                    }
                });
        });

        if let Some(index) = clicked {
            submitted = state.autocomplete.on_suggestion_clicked(index);
        } else if blurred || (!box_focused && ui.input(|i| i.pointer.any_click())) {
            state
                .autocomplete
                .on_blur(popup.response.contains_pointer());
        }
    } else if blurred {
        state.autocomplete.on_blur(false);
    }

    submitted
}
