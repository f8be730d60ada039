//! Burrow - home-screen workspace model
//!
//! The data layer of a home-screen launcher: grid placement validation,
//! item-row loading, app title search, launch history and usage records.
//! There is no UI here and no platform bindings; a platform layer plugs in
//! through the `AppRegistry` and `DeviceStateProbe` seams.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

// Grid geometry and the placement validator
pub mod grid;

// Workspace items and the row load pass
pub mod model;

// App title search and web search providers
pub mod search;

// Launch history (counts, frequency, recents)
pub mod history;

// Usage records with device context
pub mod usage;

// config.toml loading
pub mod config;

// Store error types
pub mod errors;
