//! GridProfile - fixed workspace geometry
//!
//! One profile describes every desktop page plus the hotseat row. The
//! geometry is invariant for the lifetime of a load pass.

use super::cell::CellRect;

/// Fixed grid geometry shared by all desktop screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridProfile {
    /// Columns per desktop screen
    pub num_columns: i32,
    /// Rows per desktop screen
    pub num_rows: i32,
    /// Hotseat capacity (valid slots are 0..num_hotseat_slots)
    pub num_hotseat_slots: i32,
}

impl GridProfile {
    /// Create a new grid profile
    pub fn new(num_columns: i32, num_rows: i32, num_hotseat_slots: i32) -> Self {
        Self {
            num_columns,
            num_rows,
            num_hotseat_slots,
        }
    }

    /// Check if a rectangle lies fully inside a desktop screen
    pub fn desktop_in_bounds(&self, rect: &CellRect) -> bool {
        rect.cell_x >= 0
            && rect.cell_y >= 0
            && rect.right() <= self.num_columns
            && rect.bottom() <= self.num_rows
    }

    /// Check if a hotseat slot index is within capacity
    pub fn hotseat_slot_in_range(&self, slot: i64) -> bool {
        slot >= 0 && slot < self.num_hotseat_slots as i64
    }

    /// Total cells on one desktop screen
    pub fn cells_per_screen(&self) -> usize {
        (self.num_columns.max(0) as usize) * (self.num_rows.max(0) as usize)
    }
}

impl Default for GridProfile {
    fn default() -> Self {
        Self::new(5, 5, 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_bounds() {
        let profile = GridProfile::new(4, 4, 3);

        assert!(profile.desktop_in_bounds(&CellRect::new(0, 0, 4, 4)));
        assert!(profile.desktop_in_bounds(&CellRect::new(3, 3, 1, 1)));
        assert!(!profile.desktop_in_bounds(&CellRect::new(4, 4, 1, 1)));
        assert!(!profile.desktop_in_bounds(&CellRect::new(-1, 0, 1, 1)));
        assert!(!profile.desktop_in_bounds(&CellRect::new(3, 0, 2, 1)));
    }

    #[test]
    fn test_hotseat_range_is_exclusive_at_capacity() {
        let profile = GridProfile::new(4, 4, 3);

        assert!(profile.hotseat_slot_in_range(0));
        assert!(profile.hotseat_slot_in_range(2));
        assert!(!profile.hotseat_slot_in_range(3));
        assert!(!profile.hotseat_slot_in_range(-1));
    }
}
