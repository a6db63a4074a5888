//! Mapping between continuous world coordinates and maze grid cells.
//!
//! Columns always grow along +X. Rows grow along -Z by default ("forward is
//! negative Z"); layouts authored with rows along +Z select
//! [`RowAxis::PositiveZ`]. The grid origin sits at world `(0, 0)`:
//!
//! ```text
//! col = floor(x / spacing)
//! row = floor(-z / spacing)        (NegativeZ)
//! row = floor( z / spacing)        (PositiveZ)
//! ```

use super::Cell;
use serde::{Deserialize, Serialize};

/// Direction in which row indices grow along the world Z axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowAxis {
    /// Row 0 starts at `z = 0` and rows continue towards negative Z.
    #[default]
    NegativeZ,
    /// Row 0 starts at `z = 0` and rows continue towards positive Z.
    PositiveZ,
}

impl RowAxis {
    fn sign(self) -> f32 {
        match self {
            RowAxis::NegativeZ => -1.0,
            RowAxis::PositiveZ => 1.0,
        }
    }
}

/// Signed grid coordinate. May lie outside the maze footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCoord {
    pub row: isize,
    pub col: isize,
}

impl GridCoord {
    /// Converts to an in-bounds [`Cell`] for a `width × height` grid.
    pub fn to_cell(self, width: usize, height: usize) -> Option<Cell> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < height && col < width).then(|| Cell::new(row, col))
    }
}

/// World-space placement of a maze grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// Edge length of one cell in world units.
    pub spacing: f32,
    pub row_axis: RowAxis,
}

impl GridLayout {
    pub fn new(spacing: f32, row_axis: RowAxis) -> Self {
        Self { spacing, row_axis }
    }

    /// Row coordinate measured along the row axis, so it grows with the row index.
    fn row_distance(&self, world_z: f32) -> f32 {
        world_z * self.row_axis.sign()
    }

    /// Grid coordinate owning the world point `(x, z)`.
    pub fn world_to_grid(&self, world_x: f32, world_z: f32) -> GridCoord {
        GridCoord {
            col: (world_x / self.spacing).floor() as isize,
            row: (self.row_distance(world_z) / self.spacing).floor() as isize,
        }
    }

    /// World `(x, z)` of a cell's centre.
    pub fn grid_to_world(&self, cell: Cell) -> (f32, f32) {
        let half = self.spacing / 2.0;
        let x = cell.col as f32 * self.spacing + half;
        let z = self.row_axis.sign() * (cell.row as f32 * self.spacing + half);
        (x, z)
    }

    /// Offsets of `(x, z)` from the west and north edges of the cell at `coord`.
    ///
    /// Both offsets lie in `[0, spacing)` when `coord` is the point's owning cell.
    /// North is the edge shared with row `coord.row - 1`.
    pub fn offset_in_cell(&self, coord: GridCoord, world_x: f32, world_z: f32) -> (f32, f32) {
        let from_west = world_x - coord.col as f32 * self.spacing;
        let from_north = self.row_distance(world_z) - coord.row as f32 * self.spacing;
        (from_west, from_north)
    }
}
