//! Hand-authored maze layouts shipped with the binary.

use super::layout::{GridLayout, RowAxis};
use super::occupancy::OccupancyGrid;
use super::wall_flags::{Side, SymmetryPolicy, WallFlagBuilder, WallFlagGrid};
use crate::error::MazeError;

/// Cell size of the corridor maze.
pub const CORRIDOR_SPACING: f32 = 4.0;

/// Cell size of the moonlit maze.
pub const MOONLIT_CELL_SIZE: f32 = 2.0;

/// Rendered wall thickness of the moonlit maze.
pub const MOONLIT_WALL_THICKNESS: f32 = 0.1;

/// 20×20 corridor maze. Entrance gap at columns 2-3 of the top row (row 0,
/// nearest `z = 0`), exit gap at columns 9-10 of the bottom row.
#[rustfmt::skip]
const CORRIDOR: [[u8; 20]; 20] = [
    [1,1,0,0,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,0,1],
    [1,0,0,1,0,0,0,0,0,0,0,0,0,0,0,0,0,1,0,1],
    [1,0,0,1,1,1,1,1,1,1,1,1,1,1,1,1,0,1,0,1],
    [1,0,0,1,0,0,0,0,0,0,0,0,0,0,0,1,0,1,0,1],
    [1,0,0,0,0,0,1,1,1,1,1,1,1,1,0,1,0,1,0,1],
    [1,0,0,0,0,0,1,0,0,0,1,0,0,0,0,1,0,0,0,1],
    [1,1,1,1,0,0,1,1,0,0,1,0,1,1,1,1,1,1,0,1],
    [1,0,0,0,0,0,0,0,0,0,1,0,0,0,0,0,0,1,0,1],
    [1,0,1,1,0,0,1,1,0,1,1,1,1,1,1,1,0,1,0,1],
    [1,0,1,0,0,0,0,0,0,1,1,1,0,0,0,1,0,1,0,1],
    [1,0,1,0,0,0,0,0,0,1,1,1,1,1,0,1,0,1,0,1],
    [1,0,0,0,1,0,0,0,0,1,0,0,0,1,0,0,0,1,0,1],
    [1,1,1,0,1,0,1,0,0,1,1,1,0,1,1,1,0,1,0,1],
    [1,0,0,0,0,0,1,0,0,0,0,1,0,0,0,1,0,0,0,1],
    [1,0,1,1,1,1,1,0,0,1,0,1,1,1,0,1,1,1,1,1],
    [1,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,1],
    [1,0,0,1,1,0,1,0,0,0,0,1,0,1,1,0,1,0,1,1],
    [1,1,1,1,1,1,1,1,1,0,0,1,1,1,1,1,1,1,1,1],
];

/// Builds the 20×20 corridor occupancy maze (rows along -Z).
pub fn corridor(spacing: f32) -> Result<OccupancyGrid, MazeError> {
    OccupancyGrid::from_matrix(&CORRIDOR, GridLayout::new(spacing, RowAxis::NegativeZ))
}

/// Builds the 10 wide × 6 deep moonlit wall-flag maze (rows along +Z).
///
/// Every cell starts closed; passages are carved in pairs so both sides of a
/// boundary agree. The entrance is the west edge of row 3, column 0 and the
/// exit is the east edge of row 5, column 9.
pub fn moonlit(
    cell_size: f32,
    wall_thickness: f32,
    policy: SymmetryPolicy,
) -> Result<WallFlagGrid, MazeError> {
    use Side::{East, North, South, West};

    let mut builder = WallFlagBuilder::closed(10, 6)
        .carve(3, 0, West)
        .carve(5, 9, East);

    // Main route: along row 3, up column 7, across row 1, down column 9.
    for col in 0..=6 {
        builder = builder.carve(3, col, East);
    }
    builder = builder.carve(3, 7, North).carve(2, 7, North);
    builder = builder.carve(1, 7, East).carve(1, 8, East);
    for row in 1..=4 {
        builder = builder.carve(row, 9, South);
    }

    // Dead ends and alternate routes below row 3.
    builder = builder
        .carve(3, 0, South)
        .carve(4, 0, South)
        .carve(5, 0, East)
        .carve(3, 2, South)
        .carve(4, 2, South)
        .carve(3, 4, South)
        .carve(4, 4, South);
    for col in 4..=8 {
        builder = builder.carve(5, col, East);
    }

    // Loop through the top rows.
    for col in 0..=2 {
        builder = builder.carve(0, col, East);
    }
    builder = builder.carve(0, 3, South).carve(1, 3, South);
    for col in 3..=5 {
        builder = builder.carve(2, col, East);
    }
    builder = builder.carve(2, 6, North).carve(1, 6, North);
    for col in 6..=8 {
        builder = builder.carve(0, col, East);
    }
    builder = builder.carve(0, 9, South);

    builder.build(
        GridLayout::new(cell_size, RowAxis::PositiveZ),
        wall_thickness,
        policy,
    )
}
