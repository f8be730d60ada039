//! Persisted item rows
//!
//! One `ItemRow` mirrors one row of the launcher's item table, as written
//! to the JSON table dump. Span defaults to a single cell so rows written
//! by older versions keep loading.

use serde::{Deserialize, Serialize};

use super::item::{Container, ItemKind};

fn default_span() -> i32 {
    1
}

/// A raw row from the persisted item table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemRow {
    /// Row id
    pub id: i64,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Item kind
    pub item_type: ItemKind,
    /// Target container
    pub container: Container,
    /// Desktop page id or hotseat slot index
    pub screen: i64,
    /// Grid column
    #[serde(default)]
    pub cell_x: i32,
    /// Grid row
    #[serde(default)]
    pub cell_y: i32,
    /// Width in cells
    #[serde(default = "default_span")]
    pub span_x: i32,
    /// Height in cells
    #[serde(default = "default_span")]
    pub span_y: i32,
    /// Launch component for app items
    #[serde(default)]
    pub component: Option<String>,
    /// Row was restored from a backup and may lack its target app
    #[serde(default)]
    pub restored: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_defaults() {
        let row: ItemRow = serde_json::from_str(
            r#"{
                "id": 7,
                "item_type": "shortcut",
                "container": { "kind": "desktop" },
                "screen": 0
            }"#,
        )
        .unwrap();

        assert_eq!(row.title, "");
        assert_eq!(row.cell_x, 0);
        assert_eq!(row.span_x, 1);
        assert_eq!(row.span_y, 1);
        assert_eq!(row.component, None);
        assert!(!row.restored);
    }

    #[test]
    fn test_row_roundtrip_folder_container() {
        let row = ItemRow {
            id: 3,
            title: "Mail".to_string(),
            item_type: ItemKind::Application,
            container: Container::Folder(12),
            screen: 0,
            cell_x: 0,
            cell_y: 0,
            span_x: 1,
            span_y: 1,
            component: Some("com.example.mail/.Main".to_string()),
            restored: false,
        };

        let json = serde_json::to_string(&row).unwrap();
        let back: ItemRow = serde_json::from_str(&json).unwrap();

        assert_eq!(back, row);
    }
}
