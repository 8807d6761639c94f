// MedConnect - core/filter.rs
//
// Composable filter engine for provider listings.
// All active filters are AND-combined, then the sort mode is applied.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::{Provider, SortMode};
use std::cmp::Ordering;

/// Complete filter criteria. All fields are AND-combined when applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Exact specialty match against primary or sub-specialty. None = all.
    pub specialty: Option<String>,

    /// Exact location match. None = all.
    pub location: Option<String>,

    /// Weekday the provider must be available on. None = any day.
    pub availability: Option<String>,

    /// When true, only providers accepting new patients pass.
    /// False is "no constraint", not "not accepting".
    pub accepting_new_patients: bool,

    /// Ordering applied after filtering.
    pub sort_by: SortMode,
}

impl FilterCriteria {
    /// Returns true if no filter is active and the sort is a no-op.
    pub fn is_empty(&self) -> bool {
        self.active_count() == 0 && self.sort_by == SortMode::Relevance
    }

    /// Number of active constraints, sort mode excluded.
    pub fn active_count(&self) -> usize {
        [
            active(&self.specialty).is_some(),
            active(&self.location).is_some(),
            active(&self.availability).is_some(),
            self.accepting_new_patients,
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }

    /// Set a text constraint from a combo-box value; empty clears it.
    pub fn set_specialty(&mut self, value: &str) {
        self.specialty = non_empty(value);
    }

    pub fn set_location(&mut self, value: &str) {
        self.location = non_empty(value);
    }

    pub fn set_availability(&mut self, value: &str) {
        self.availability = non_empty(value);
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// An empty string behaves exactly like an absent constraint.
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Apply criteria to a slice of providers, returning a new filtered and
/// sorted list. The input is never reordered.
pub fn apply_filters(providers: &[Provider], criteria: &FilterCriteria) -> Vec<Provider> {
    if criteria.is_empty() {
        return providers.to_vec();
    }

    let mut filtered: Vec<Provider> = providers
        .iter()
        .filter(|p| matches_all(p, criteria))
        .cloned()
        .collect();

    sort_providers(&mut filtered, criteria.sort_by);
    filtered
}

/// Check if a single provider matches all active filters.
fn matches_all(provider: &Provider, criteria: &FilterCriteria) -> bool {
    if let Some(specialty) = active(&criteria.specialty) {
        if !provider.has_specialty(specialty) {
            return false;
        }
    }

    if let Some(location) = active(&criteria.location) {
        if provider.location != location {
            return false;
        }
    }

    if let Some(day) = active(&criteria.availability) {
        if !provider.is_available_on(day) {
            return false;
        }
    }

    if criteria.accepting_new_patients && !provider.accepting_new_patients {
        return false;
    }

    true
}

/// Stable in-place sort by the given mode. `Relevance` leaves order untouched.
pub fn sort_providers(providers: &mut [Provider], mode: SortMode) {
    match mode {
        SortMode::Relevance => {}
        SortMode::NameAscending => providers.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortMode::NameDescending => providers.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortMode::HighestRated => providers.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
}

/// Locale-style name comparison.
///
/// Primary key is the case-folded text; equal folds order lowercase before
/// uppercase, and the raw bytes break any remaining tie so the order is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a
        .cmp(folded_b)
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
