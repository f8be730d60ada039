//! WorkspaceLoader - maps persisted rows into the in-memory workspace
//!
//! One pass over the row stream, in input order. Rows that cannot be
//! loaded are dropped and reported; a bad row never aborts the batch.

use std::collections::HashSet;

use crate::grid::{GridOccupancy, GridProfile};

use super::item::{ItemKind, WorkspaceItem};
use super::row::ItemRow;

/// Lookup for installed launch targets
///
/// The platform layer supplies the real package registry; tests use the
/// in-memory implementations below.
pub trait AppRegistry {
    /// Whether the component can currently be launched
    fn is_installed(&self, component: &str) -> bool;
}

/// A registry with nothing installed, for testing
pub struct NullAppRegistry;

impl AppRegistry for NullAppRegistry {
    fn is_installed(&self, _component: &str) -> bool {
        false
    }
}

/// An in-memory registry backed by a component set
#[derive(Default)]
pub struct StaticAppRegistry {
    components: HashSet<String>,
}

impl StaticAppRegistry {
    /// Build a registry from a list of installed components
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            components: components.into_iter().map(Into::into).collect(),
        }
    }

    /// Mark a component as installed
    pub fn install(&mut self, component: impl Into<String>) {
        self.components.insert(component.into());
    }
}

impl AppRegistry for StaticAppRegistry {
    fn is_installed(&self, component: &str) -> bool {
        self.components.contains(component)
    }
}

/// Why a row was dropped during a load pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The row is malformed (e.g. an app row without a component)
    InvalidRow,
    /// The target app is not installed and the row is not restorable
    MissingTarget,
    /// The item did not fit the grid or its slot was taken
    PlacementRejected,
}

/// Outcome summary of one load pass
#[derive(Clone, Debug, Default)]
pub struct LoadReport {
    /// Rows accepted into the model
    pub loaded: usize,
    /// Dropped rows with the reason each was dropped
    pub skipped: Vec<(i64, SkipReason)>,
}

/// The loaded workspace: accepted items plus the occupancy they produced
#[derive(Debug)]
pub struct WorkspaceModel {
    /// Accepted items in load order
    pub items: Vec<WorkspaceItem>,
    /// Occupancy after the pass, for "can I place X" queries
    pub occupancy: GridOccupancy,
    /// Accept/skip summary
    pub report: LoadReport,
}

impl WorkspaceModel {
    /// Items on one desktop screen
    pub fn items_on_screen(&self, screen_id: i64) -> impl Iterator<Item = &WorkspaceItem> {
        self.items.iter().filter(move |i| {
            i.container == super::item::Container::Desktop && i.screen_id == screen_id
        })
    }

    /// Items in the hotseat, in load order
    pub fn hotseat_items(&self) -> impl Iterator<Item = &WorkspaceItem> {
        self.items
            .iter()
            .filter(|i| i.container == super::item::Container::Hotseat)
    }
}

/// Loads workspace rows against a grid profile and an app registry
pub struct WorkspaceLoader<R: AppRegistry> {
    profile: GridProfile,
    registry: R,
}

impl<R: AppRegistry> WorkspaceLoader<R> {
    /// Create a loader for the given geometry and registry
    pub fn new(profile: GridProfile, registry: R) -> Self {
        Self { profile, registry }
    }

    /// Run one load pass over a row stream
    pub fn load<I>(&self, rows: I) -> WorkspaceModel
    where
        I: IntoIterator<Item = ItemRow>,
    {
        let mut occupancy = GridOccupancy::new(self.profile);
        let mut items = Vec::new();
        let mut report = LoadReport::default();

        for row in rows {
            let row_id = row.id;
            let item = match self.item_from_row(row) {
                Ok(item) => item,
                Err(reason) => {
                    crate::log!("Skipping row {}: {:?}", row_id, reason);
                    report.skipped.push((row_id, reason));
                    continue;
                }
            };

            if !occupancy.check_item_placement(&item) {
                crate::log!(
                    "Skipping row {}: no room at ({}, {}) span {}x{} on screen {}",
                    item.id,
                    item.cell_x,
                    item.cell_y,
                    item.span_x,
                    item.span_y,
                    item.screen_id
                );
                report.skipped.push((item.id, SkipReason::PlacementRejected));
                continue;
            }

            items.push(item);
        }

        report.loaded = items.len();
        WorkspaceModel {
            items,
            occupancy,
            report,
        }
    }

    fn item_from_row(&self, row: ItemRow) -> Result<WorkspaceItem, SkipReason> {
        let restored = match row.item_type {
            ItemKind::Application => {
                let component = row.component.as_deref().ok_or(SkipReason::InvalidRow)?;
                if self.registry.is_installed(component) {
                    false
                } else if row.restored {
                    // Keep the row pending until its target is reinstalled
                    true
                } else {
                    return Err(SkipReason::MissingTarget);
                }
            }
            // Shortcuts, folders and widgets load purely from row data
            ItemKind::Shortcut | ItemKind::Folder | ItemKind::Widget => false,
        };

        Ok(WorkspaceItem {
            id: row.id,
            title: row.title,
            kind: row.item_type,
            container: row.container,
            screen_id: row.screen,
            cell_x: row.cell_x,
            cell_y: row.cell_y,
            span_x: row.span_x,
            span_y: row.span_y,
            component: row.component,
            restored,
        })
    }
}
