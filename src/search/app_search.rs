//! App title search
//!
//! A bounded linear filter over the all-apps list, not a ranking engine:
//! results keep list order and the scan stops at the result cap.

use super::matcher::query_matches;

/// Default cap on search results
pub const MAX_RESULTS_COUNT: usize = 5;

/// A searchable all-apps entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppInfo {
    /// Display title
    pub title: String,
    /// Launch component
    pub component: String,
}

impl AppInfo {
    /// Create a new entry
    pub fn new(title: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            component: component.into(),
        }
    }
}

/// The default title-match search
pub struct AppSearchAlgorithm {
    max_results: usize,
}

impl AppSearchAlgorithm {
    /// Create a search with the default result cap
    pub fn new() -> Self {
        Self {
            max_results: MAX_RESULTS_COUNT,
        }
    }

    /// Builder: override the result cap
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Filter apps whose title matches the query, in list order
    pub fn title_match_result(&self, apps: &[AppInfo], query: &str) -> Vec<AppInfo> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        apps.iter()
            .filter(|app| query_matches(query, &app.title))
            .take(self.max_results)
            .cloned()
            .collect()
    }
}

impl Default for AppSearchAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}
