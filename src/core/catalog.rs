// MedConnect - core/catalog.rs
//
// Built-in provider catalog and the fixed vocabularies used to populate the
// filter controls and the search suggestions.
//
// The catalog is compiled into the binary; there is no external data file.

use crate::core::model::Provider;

/// Specialty vocabulary, in display order. Also the autocomplete vocabulary.
pub const SPECIALTIES: &[&str] = &[
    "Cardiology",
    "Neurology",
    "Orthopedics",
    "Pediatrics",
    "Dermatology",
    "Oncology",
    "Gastroenterology",
    "Psychiatry",
    "Endocrinology",
    "Pulmonology",
    "Rheumatology",
    "Ophthalmology",
    "Urology",
    "Nephrology",
    "Allergy & Immunology",
    "Infectious Disease",
    "Hematology",
];

/// Location vocabulary, in display order.
pub const LOCATIONS: &[&str] = &[
    "New York City",
    "Boston",
    "Los Angeles",
    "Chicago",
    "Seattle",
    "Philadelphia",
    "San Francisco",
    "Miami",
    "Houston",
    "Denver",
    "Atlanta",
    "Phoenix",
    "Austin",
];

/// Weekdays a provider can be filtered on.
pub const AVAILABILITY_DAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

const PHOTO_QUERY: &str = "?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1";

/// Compact row shape for the built-in listing table below.
struct Row {
    id: &'static str,
    name: &'static str,
    specialty: &'static str,
    subspecialty: Option<&'static str>,
    photo_id: u32,
    rating: f32,
    review_count: u32,
    education: &'static str,
    availability: &'static [&'static str],
    location: &'static str,
    accepting_new_patients: bool,
}

const ROWS: &[Row] = &[
    Row {
        id: "1",
        name: "Dr. Sarah Johnson",
        specialty: "Cardiology",
        subspecialty: Some("Interventional Cardiology"),
        photo_id: 5452201,
        rating: 4.8,
        review_count: 124,
        education: "Harvard Medical School",
        availability: &["Monday", "Wednesday", "Friday"],
        location: "New York City",
        accepting_new_patients: true,
    },
    Row {
        id: "2",
        name: "Dr. Michael Chen",
        specialty: "Neurology",
        subspecialty: Some("Neurological Surgery"),
        photo_id: 5215024,
        rating: 4.9,
        review_count: 89,
        education: "Johns Hopkins University",
        availability: &["Tuesday", "Thursday"],
        location: "Boston",
        accepting_new_patients: true,
    },
    Row {
        id: "3",
        name: "Dr. James Wilson",
        specialty: "Orthopedics",
        subspecialty: Some("Sports Medicine"),
        photo_id: 5407206,
        rating: 4.7,
        review_count: 156,
        education: "Stanford University",
        availability: &["Monday", "Wednesday", "Friday"],
        location: "Los Angeles",
        accepting_new_patients: false,
    },
    Row {
        id: "4",
        name: "Dr. Emily Rodriguez",
        specialty: "Pediatrics",
        subspecialty: Some("Pediatric Cardiology"),
        photo_id: 5214958,
        rating: 4.9,
        review_count: 203,
        education: "Yale School of Medicine",
        availability: &["Monday", "Tuesday", "Thursday"],
        location: "Chicago",
        accepting_new_patients: true,
    },
    Row {
        id: "5",
        name: "Dr. David Kim",
        specialty: "Dermatology",
        subspecialty: None,
        photo_id: 5327585,
        rating: 4.6,
        review_count: 78,
        education: "Columbia University",
        availability: &["Wednesday", "Friday"],
        location: "Seattle",
        accepting_new_patients: true,
    },
    Row {
        id: "6",
        name: "Dr. Lisa Patel",
        specialty: "Oncology",
        subspecialty: Some("Hematology"),
        photo_id: 5407214,
        rating: 4.8,
        review_count: 167,
        education: "University of Pennsylvania",
        availability: &["Monday", "Thursday", "Friday"],
        location: "Philadelphia",
        accepting_new_patients: true,
    },
    Row {
        id: "7",
        name: "Dr. Robert Taylor",
        specialty: "Gastroenterology",
        subspecialty: None,
        photo_id: 5452293,
        rating: 4.7,
        review_count: 92,
        education: "Duke University School of Medicine",
        availability: &["Tuesday", "Wednesday"],
        location: "San Francisco",
        accepting_new_patients: false,
    },
    Row {
        id: "8",
        name: "Dr. Amanda Wright",
        specialty: "Psychiatry",
        subspecialty: None,
        photo_id: 5215015,
        rating: 4.9,
        review_count: 145,
        education: "University of California, San Francisco",
        availability: &["Monday", "Tuesday", "Friday"],
        location: "Los Angeles",
        accepting_new_patients: true,
    },
];

/// Build the full built-in provider list, in catalog order.
pub fn builtin_providers() -> Vec<Provider> {
    ROWS.iter()
        .map(|row| Provider {
            id: row.id.to_string(),
            name: row.name.to_string(),
            specialty: row.specialty.to_string(),
            subspecialty: row.subspecialty.map(str::to_string),
            photo_url: format!(
                "https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg{PHOTO_QUERY}",
                id = row.photo_id
            ),
            rating: row.rating,
            review_count: row.review_count,
            education: row.education.to_string(),
            availability: row.availability.iter().map(|d| d.to_string()).collect(),
            location: row.location.to_string(),
            accepting_new_patients: row.accepting_new_patients,
        })
        .collect()
}
