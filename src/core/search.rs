// MedConnect - core/search.rs
//
// Name search and autocomplete suggestion matching.
// Both are case-insensitive substring filters that preserve input order.

use crate::core::model::Provider;

/// Search providers by display name.
///
/// Returns `None` when the query is blank, meaning "no search filtering":
/// the caller substitutes the full provider list. Otherwise returns every
/// provider whose name contains the query, ignoring case, in input order.
pub fn search_by_name(providers: &[Provider], query: &str) -> Option<Vec<Provider>> {
    if query.trim().is_empty() {
        return None;
    }

    let needle = query.to_lowercase();
    Some(
        providers
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect(),
    )
}

/// Vocabulary entries containing `input`, ignoring case, in vocabulary order.
///
/// Blank input yields no suggestions (the dropdown is hidden, not "all").
pub fn suggestions<S: AsRef<str>>(vocabulary: &[S], input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let needle = input.to_lowercase();
    vocabulary
        .iter()
        .map(AsRef::as_ref)
        .filter(|entry| entry.to_lowercase().contains(&needle))
        .map(str::to_string)
        .collect()
}
