// MedConnect - app/mod.rs
//
// Application layer: state management, favorites, record source worker,
// search box state.
// Dependencies: core layer, the platform storage trait.
// Must NOT depend on: ui.

pub mod autocomplete;
pub mod favorites;
pub mod source;
pub mod state;
