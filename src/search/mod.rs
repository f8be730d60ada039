//! App title search and web search providers

pub mod app_search;
pub mod matcher;

#[cfg(feature = "web-search")]
pub mod web;

pub use app_search::{AppInfo, AppSearchAlgorithm, MAX_RESULTS_COUNT};
