// MedConnect - ui/panels/mod.rs

pub mod favorites;
pub mod filters;
pub mod header;
pub mod provider_list;
pub mod search;
