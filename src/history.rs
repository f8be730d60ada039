//! Launch history
//!
//! Per-component launch counts and timestamps, persisted as a JSON file in
//! the user data dir. The frequency map feeds surfaces that want to boost
//! often-used apps; the search itself stays unranked.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

/// One component's history
#[derive(Clone, Debug, Serialize, Deserialize)]
struct HistoryEntry {
    count: u32,
    last_launch: DateTime<Utc>,
}

/// A single launch, as returned by `recent_launches`
#[derive(Clone, Debug, PartialEq)]
pub struct LaunchRecord {
    /// Launch component
    pub component: String,
    /// Time of the most recent launch
    pub timestamp: DateTime<Utc>,
}

/// Launch history storage
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LaunchHistory {
    /// Map from component to its entry
    #[serde(default)]
    entries: HashMap<String, HistoryEntry>,

    /// File path for persistence (not serialized)
    #[serde(skip)]
    path: PathBuf,
}

impl LaunchHistory {
    /// Create a new empty history persisting to the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            entries: HashMap::new(),
            path,
        }
    }

    /// Load history from the default location under the user data dir
    pub fn load_default() -> Self {
        if let Some(data_dir) = dirs::data_dir() {
            Self::load(&data_dir.join("burrow").join("launch_history.json"))
        } else {
            crate::log!("Could not determine data directory for launch history");
            Self::new(PathBuf::new())
        }
    }

    /// Load history from a specific file
    pub fn load(path: &Path) -> Self {
        let mut history = Self::new(path.to_path_buf());

        if path.exists() {
            if let Ok(file) = File::open(path) {
                let reader = BufReader::new(file);
                if let Ok(data) = serde_json::from_reader::<_, LaunchHistory>(reader) {
                    history.entries = data.entries;
                }
            }
        }

        history
    }

    /// Record a launch and persist the updated history
    pub fn record_launch(&mut self, component: &str) -> Result<(), StoreError> {
        let now = Utc::now();
        let entry = self
            .entries
            .entry(component.to_string())
            .or_insert(HistoryEntry {
                count: 0,
                last_launch: now,
            });

        entry.count += 1;
        entry.last_launch = now;

        self.save()
    }

    /// Launch count for a component
    pub fn launch_count(&self, component: &str) -> u32 {
        self.entries.get(component).map(|e| e.count).unwrap_or(0)
    }

    /// Launch counts normalized against the most-launched component
    pub fn frequency_map(&self) -> HashMap<String, f32> {
        let max_count = self.entries.values().map(|e| e.count).max().unwrap_or(1) as f32;

        self.entries
            .iter()
            .map(|(component, entry)| (component.clone(), entry.count as f32 / max_count))
            .collect()
    }

    /// Most recently launched components, newest first
    pub fn recent_launches(&self, limit: usize) -> Vec<LaunchRecord> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.1.last_launch.cmp(&a.1.last_launch));

        entries
            .into_iter()
            .take(limit)
            .map(|(component, entry)| LaunchRecord {
                component: component.clone(),
                timestamp: entry.last_launch,
            })
            .collect()
    }

    /// Forget all history and persist the empty state
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        self.save()
    }

    /// Save history to its file
    pub fn save(&self) -> Result<(), StoreError> {
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;

        Ok(())
    }
}
