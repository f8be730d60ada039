//! Workspace data model - items, persisted rows and the load pass

pub mod item;
pub mod loader;
pub mod row;

pub use item::{Container, ItemKind, WorkspaceItem};
pub use loader::{
    AppRegistry, LoadReport, NullAppRegistry, SkipReason, StaticAppRegistry, WorkspaceLoader,
    WorkspaceModel,
};
pub use row::ItemRow;
