//! GridOccupancy - placement validation for workspace items
//!
//! Built up cell by cell while a batch of items loads, then thrown away.
//! Desktop screens are materialized lazily; the hotseat is a 1-D slot set.
//! Rejection is a normal outcome the caller handles, never an error.

use std::collections::{HashMap, HashSet};

use super::cell::CellRect;
use super::profile::GridProfile;
use crate::model::{Container, WorkspaceItem};

/// Occupied cells of a single desktop screen, row-major
#[derive(Clone, Debug)]
struct ScreenGrid {
    cells: Vec<bool>,
}

impl ScreenGrid {
    fn new(profile: &GridProfile) -> Self {
        Self {
            cells: vec![false; profile.cells_per_screen()],
        }
    }

    fn index(&self, profile: &GridProfile, x: i32, y: i32) -> usize {
        (y * profile.num_columns + x) as usize
    }

    fn any_occupied(&self, profile: &GridProfile, rect: &CellRect) -> bool {
        rect.cells().any(|(x, y)| self.cells[self.index(profile, x, y)])
    }

    fn mark(&mut self, profile: &GridProfile, rect: &CellRect) {
        for (x, y) in rect.cells() {
            let idx = self.index(profile, x, y);
            self.cells[idx] = true;
        }
    }
}

/// Cumulative occupancy state for one load pass
///
/// Calls must be serialized per instance; the order of submission decides
/// which of two colliding items wins.
#[derive(Clone, Debug)]
pub struct GridOccupancy {
    profile: GridProfile,
    screens: HashMap<i64, ScreenGrid>,
    hotseat: HashSet<i64>,
}

impl GridOccupancy {
    /// Create empty occupancy for the given geometry
    pub fn new(profile: GridProfile) -> Self {
        Self {
            profile,
            screens: HashMap::new(),
            hotseat: HashSet::new(),
        }
    }

    /// The geometry this occupancy validates against
    pub fn profile(&self) -> &GridProfile {
        &self.profile
    }

    /// Validate one candidate item against everything accepted so far.
    ///
    /// Returns true and records the item's cells (or hotseat slot) when it
    /// fits; returns false and leaves the state untouched when it does not.
    pub fn check_item_placement(&mut self, item: &WorkspaceItem) -> bool {
        match item.container {
            // Folder contents have no grid presence of their own
            Container::Folder(_) => true,
            Container::Hotseat => self.place_hotseat(item.screen_id),
            Container::Desktop => self.place_desktop(item.screen_id, &item.cell_rect()),
        }
    }

    /// Query whether a desktop region could still be placed on a screen
    pub fn is_region_free(&self, screen_id: i64, rect: &CellRect) -> bool {
        if rect.is_degenerate() || !self.profile.desktop_in_bounds(rect) {
            return false;
        }
        match self.screens.get(&screen_id) {
            Some(grid) => !grid.any_occupied(&self.profile, rect),
            None => true,
        }
    }

    /// Query whether a hotseat slot could still be placed
    pub fn is_hotseat_slot_free(&self, slot: i64) -> bool {
        self.profile.hotseat_slot_in_range(slot) && !self.hotseat.contains(&slot)
    }

    fn place_desktop(&mut self, screen_id: i64, rect: &CellRect) -> bool {
        if rect.is_degenerate() || !self.profile.desktop_in_bounds(rect) {
            return false;
        }

        let profile = self.profile;
        let grid = self
            .screens
            .entry(screen_id)
            .or_insert_with(|| ScreenGrid::new(&profile));

        if grid.any_occupied(&profile, rect) {
            return false;
        }

        grid.mark(&profile, rect);
        true
    }

    fn place_hotseat(&mut self, slot: i64) -> bool {
        if !self.profile.hotseat_slot_in_range(slot) {
            return false;
        }
        // insert returns false when the slot was already taken
        self.hotseat.insert(slot)
    }
}
