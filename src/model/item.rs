//! Workspace item entities
//!
//! Items are the things a user pins to the home screen: apps, shortcuts,
//! folders and widgets. Position is expressed in grid cells relative to the
//! container the item lives in.

use serde::{Deserialize, Serialize};

use crate::grid::CellRect;

/// Where an item is placed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Container {
    /// A scrollable desktop page holding a 2-D grid of items
    Desktop,
    /// The fixed favorites row, indexed by slot rather than by coordinate
    Hotseat,
    /// Inside the folder with the given item id
    Folder(i64),
}

impl Container {
    /// Whether items in this container occupy desktop grid cells
    pub fn uses_grid_cells(&self) -> bool {
        matches!(self, Container::Desktop)
    }
}

/// What kind of item a row describes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A launchable application
    Application,
    /// A pinned deep shortcut
    Shortcut,
    /// A folder grouping other items
    Folder,
    /// An app widget
    Widget,
}

/// An item accepted into the in-memory workspace model
#[derive(Clone, Debug, PartialEq)]
pub struct WorkspaceItem {
    /// Row id from the item table
    pub id: i64,
    /// Display title
    pub title: String,
    /// Item kind
    pub kind: ItemKind,
    /// Container the item lives in
    pub container: Container,
    /// Desktop page id, or hotseat slot index for hotseat items
    pub screen_id: i64,
    /// Grid column of the top-left cell
    pub cell_x: i32,
    /// Grid row of the top-left cell
    pub cell_y: i32,
    /// Width in grid cells
    pub span_x: i32,
    /// Height in grid cells
    pub span_y: i32,
    /// Launch component, if the item targets an app
    pub component: Option<String>,
    /// Whether the item is awaiting its target app to be reinstalled
    pub restored: bool,
}

impl WorkspaceItem {
    /// The cell rectangle this item covers
    pub fn cell_rect(&self) -> CellRect {
        CellRect::new(self.cell_x, self.cell_y, self.span_x, self.span_y)
    }

    /// Whether the item still waits for a missing target
    pub fn is_restored(&self) -> bool {
        self.restored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_grid_cells() {
        assert!(Container::Desktop.uses_grid_cells());
        assert!(!Container::Hotseat.uses_grid_cells());
        assert!(!Container::Folder(42).uses_grid_cells());
    }

    #[test]
    fn test_cell_rect() {
        let item = WorkspaceItem {
            id: 1,
            title: "Clock".to_string(),
            kind: ItemKind::Widget,
            container: Container::Desktop,
            screen_id: 0,
            cell_x: 1,
            cell_y: 2,
            span_x: 3,
            span_y: 2,
            component: None,
            restored: false,
        };

        assert_eq!(item.cell_rect(), CellRect::new(1, 2, 3, 2));
    }
}
