// MedConnect - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Provider (one directory listing)
// =============================================================================

/// A single provider listing in the directory.
///
/// Providers are immutable once loaded: they are read, filtered, sorted and
/// displayed, never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name, e.g. "Dr. Sarah Johnson".
    pub name: String,

    /// Primary specialty.
    pub specialty: String,

    /// Optional sub-specialty. Matched by the specialty filter as well.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subspecialty: Option<String>,

    /// Portrait image reference.
    #[serde(rename = "photo")]
    pub photo_url: String,

    /// Average rating on a 0-5 scale.
    pub rating: f32,

    /// Number of reviews behind `rating`.
    pub review_count: u32,

    /// Credential / school text.
    pub education: String,

    /// Weekday names on which the provider sees patients.
    pub availability: Vec<String>,

    /// City the practice is located in.
    pub location: String,

    /// Whether the provider is currently accepting new patients.
    pub accepting_new_patients: bool,
}

impl Provider {
    /// True when `specialty` equals the primary specialty or the sub-specialty.
    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialty == specialty || self.subspecialty.as_deref() == Some(specialty)
    }

    /// True when the provider is available on `day` (exact match).
    pub fn is_available_on(&self, day: &str) -> bool {
        self.availability.iter().any(|d| d == day)
    }

    /// Specialty line for display: "Cardiology - Interventional Cardiology".
    pub fn specialty_label(&self) -> String {
        match self.subspecialty {
            Some(ref sub) => format!("{} - {sub}", self.specialty),
            None => self.specialty.clone(),
        }
    }
}

// =============================================================================
// Sort mode
// =============================================================================

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// No reordering; output keeps input order. Also the mode used when no
    /// other ordering was chosen.
    #[default]
    Relevance,
    NameAscending,
    NameDescending,
    HighestRated,
}

impl SortMode {
    /// Returns all variants in display order.
    pub fn all() -> &'static [SortMode] {
        &[
            SortMode::Relevance,
            SortMode::NameAscending,
            SortMode::NameDescending,
            SortMode::HighestRated,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Relevance => "Relevance",
            SortMode::NameAscending => "Name (A-Z)",
            SortMode::NameDescending => "Name (Z-A)",
            SortMode::HighestRated => "Highest Rated",
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
