//! Maze topology and its spatial query surface.
//!
//! This module provides the two immutable grid representations used by the
//! walkthrough and a common [`Maze`] query trait:
//! - [`occupancy::OccupancyGrid`]: every cell is open or a solid wall block
//! - [`wall_flags::WallFlagGrid`]: every cell is open floor with up to four thin boundary walls
//!
//! Grids never change after construction, so a [`MazeGrid`] can be shared
//! (`Arc<MazeGrid>`) between the collision step and a renderer without locking.

pub mod layout;
pub mod layouts;
pub mod occupancy;
pub mod wall_flags;

use self::layout::GridLayout;
use self::occupancy::OccupancyGrid;
use self::wall_flags::WallFlagGrid;

/// Represents a cell in the maze grid
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row index of the cell
    pub row: usize,
    /// Column index of the cell
    pub col: usize,
}

impl Cell {
    /// Creates a new Cell with the given coordinates
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Read-only spatial queries against a maze.
pub trait Maze {
    /// World placement of the grid.
    fn layout(&self) -> &GridLayout;

    /// `(width, height)` in cells.
    fn dimensions(&self) -> (usize, usize);

    /// Whether the world point `(x, z)` is inside solid wall.
    ///
    /// Points outside the grid footprint are never blocked, leaving the
    /// margin around the maze free to roam.
    fn is_blocked(&self, world_x: f32, world_z: f32) -> bool;
}

/// Either grid representation behind one type.
#[derive(Debug, Clone)]
pub enum MazeGrid {
    Occupancy(OccupancyGrid),
    WallFlags(WallFlagGrid),
}

impl Maze for MazeGrid {
    fn layout(&self) -> &GridLayout {
        match self {
            MazeGrid::Occupancy(grid) => grid.layout(),
            MazeGrid::WallFlags(grid) => grid.layout(),
        }
    }

    fn dimensions(&self) -> (usize, usize) {
        match self {
            MazeGrid::Occupancy(grid) => grid.dimensions(),
            MazeGrid::WallFlags(grid) => grid.dimensions(),
        }
    }

    fn is_blocked(&self, world_x: f32, world_z: f32) -> bool {
        match self {
            MazeGrid::Occupancy(grid) => grid.is_blocked(world_x, world_z),
            MazeGrid::WallFlags(grid) => grid.is_blocked(world_x, world_z),
        }
    }
}

impl From<OccupancyGrid> for MazeGrid {
    fn from(grid: OccupancyGrid) -> Self {
        MazeGrid::Occupancy(grid)
    }
}

impl From<WallFlagGrid> for MazeGrid {
    fn from(grid: WallFlagGrid) -> Self {
        MazeGrid::WallFlags(grid)
    }
}
