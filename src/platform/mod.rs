// MedConnect - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories, toml, serde_json.
// Must NOT depend on: app, ui.

pub mod config;
pub mod storage;
