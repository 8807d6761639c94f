// MedConnect - app/autocomplete.rs
//
// Search box state: typed text, suggestion dropdown, keyboard navigation.
// The UI feeds key presses in; a submitted query comes back out for
// `AppState::search`.

use crate::core::search;

/// Keys the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey {
    Enter,
    ArrowUp,
    ArrowDown,
    Escape,
}

/// Search box with a suggestion dropdown over a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct AutocompleteState {
    vocabulary: Vec<String>,

    /// Current text in the box.
    pub input: String,

    /// Vocabulary entries matching `input`.
    suggestions: Vec<String>,

    /// Whether the dropdown is shown.
    visible: bool,

    /// Highlighted row in `suggestions`.
    active: usize,
}

impl AutocompleteState {
    pub fn new<S: AsRef<str>>(vocabulary: &[S]) -> Self {
        Self {
            vocabulary: vocabulary.iter().map(|s| s.as_ref().to_string()).collect(),
            input: String::new(),
            suggestions: Vec::new(),
            visible: false,
            active: 0,
        }
    }

    /// Recompute suggestions after `input` changed.
    pub fn on_input_changed(&mut self) {
        self.suggestions = search::suggestions(&self.vocabulary, &self.input);
        self.visible = !self.input.trim().is_empty();
        self.active = 0;
    }

    /// Replace the text and recompute suggestions.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.on_input_changed();
    }

    /// Handle a key press. Returns the query to submit, if any.
    pub fn on_key(&mut self, key: SearchKey) -> Option<String> {
        match key {
            SearchKey::Enter => {
                if self.dropdown_open() {
                    let choice = self.suggestions[self.active].clone();
                    Some(self.accept(choice))
                } else {
                    Some(self.input.clone())
                }
            }
            SearchKey::ArrowUp => {
                self.active = self.active.saturating_sub(1);
                None
            }
            SearchKey::ArrowDown => {
                if self.active + 1 < self.suggestions.len() {
                    self.active += 1;
                }
                None
            }
            SearchKey::Escape => {
                self.visible = false;
                None
            }
        }
    }

    /// A suggestion row was clicked. Returns the query to submit.
    pub fn on_suggestion_clicked(&mut self, index: usize) -> Option<String> {
        let choice = self.suggestions.get(index)?.clone();
        Some(self.accept(choice))
    }

    /// The search button was pressed. Submits the raw text.
    pub fn submit(&mut self) -> String {
        self.visible = false;
        self.input.clone()
    }

    /// Show the dropdown again when the box regains focus with text in it.
    pub fn on_focus(&mut self) {
        if !self.input.is_empty() {
            self.visible = true;
        }
    }

    /// Focus left the box. A click landing in the dropdown keeps it open
    /// until the click completes; anywhere else closes it.
    pub fn on_blur(&mut self, pointer_in_dropdown: bool) {
        if !pointer_in_dropdown {
            self.visible = false;
        }
    }

    /// True when the dropdown should be drawn.
    pub fn dropdown_open(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    fn accept(&mut self, choice: String) -> String {
        self.input = choice.clone();
        self.visible = false;
        choice
    }
}
