//! Wall-flag grid: every cell is open floor bounded by up to four thin walls.
//!
//! Blocking is geometric. Each flagged edge of a cell owns a slab of
//! `wall_thickness / 2` lying inside that cell along the edge, which is the
//! half of the rendered wall standing on the cell's side of the boundary. A
//! query point is blocked iff it falls inside one of the slabs of the cell
//! that owns it.
//!
//! Hand-authored layouts may disagree about a shared boundary (one cell
//! declares the wall, its neighbour does not). [`SymmetryPolicy`] decides
//! what happens to such boundaries when the grid is built.

use super::layout::GridLayout;
use super::{Cell, Maze};
use crate::error::MazeError;
use serde::{Deserialize, Serialize};

/// One edge of a cell. North is the edge shared with the previous row,
/// west the edge shared with the previous column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::South, Side::East, Side::West];

    pub fn opposite(self) -> Side {
        match self {
            Side::North => Side::South,
            Side::South => Side::North,
            Side::East => Side::West,
            Side::West => Side::East,
        }
    }

    /// Cell across this edge, if it is inside a `width × height` grid.
    pub fn neighbour(self, cell: Cell, width: usize, height: usize) -> Option<Cell> {
        let Cell { row, col } = cell;
        match self {
            Side::North if row > 0 => Some(Cell::new(row - 1, col)),
            Side::South if row + 1 < height => Some(Cell::new(row + 1, col)),
            Side::West if col > 0 => Some(Cell::new(row, col - 1)),
            Side::East if col + 1 < width => Some(Cell::new(row, col + 1)),
            _ => None,
        }
    }
}

/// The four boundary flags of one cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CellWalls {
    pub north: bool,
    pub south: bool,
    pub east: bool,
    pub west: bool,
}

impl CellWalls {
    pub const CLOSED: CellWalls = CellWalls {
        north: true,
        south: true,
        east: true,
        west: true,
    };

    pub fn has(&self, side: Side) -> bool {
        match side {
            Side::North => self.north,
            Side::South => self.south,
            Side::East => self.east,
            Side::West => self.west,
        }
    }

    pub fn set(&mut self, side: Side, wall: bool) {
        match side {
            Side::North => self.north = wall,
            Side::South => self.south = wall,
            Side::East => self.east = wall,
            Side::West => self.west = wall,
        }
    }
}

/// How to treat interior boundaries whose two sides disagree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymmetryPolicy {
    /// Keep the flags as authored; a query consults only the owning cell.
    #[default]
    Trust,
    /// A wall declared on either side is added to both sides.
    Mirror,
    /// Building the grid fails on the first disagreement.
    Reject,
}

/// Immutable wall-flag grid stored as one row-major buffer.
#[derive(Debug, Clone)]
pub struct WallFlagGrid {
    width: usize,
    height: usize,
    cells: Vec<CellWalls>,
    layout: GridLayout,
    wall_thickness: f32,
}

impl WallFlagGrid {
    /// Builds a grid from a row-major cell buffer, applying `policy` to asymmetric boundaries.
    pub fn new(
        width: usize,
        height: usize,
        cells: Vec<CellWalls>,
        layout: GridLayout,
        wall_thickness: f32,
        policy: SymmetryPolicy,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }
        if cells.len() != width * height {
            return Err(MazeError::CellCount {
                expected: width * height,
                found: cells.len(),
            });
        }

        let mut grid = Self {
            width,
            height,
            cells,
            layout,
            wall_thickness,
        };

        let asymmetries = grid.asymmetries();
        if let Some(&(cell, side)) = asymmetries.first() {
            match policy {
                SymmetryPolicy::Trust => log::warn!(
                    "{} asymmetric wall boundaries; collisions follow the queried cell's flags",
                    asymmetries.len()
                ),
                SymmetryPolicy::Mirror => {
                    for &(cell, side) in &asymmetries {
                        grid.close_boundary(cell, side);
                    }
                    log::info!("mirrored {} asymmetric wall boundaries", asymmetries.len());
                }
                SymmetryPolicy::Reject => {
                    return Err(MazeError::AsymmetricWall {
                        row: cell.row,
                        col: cell.col,
                        side,
                    });
                }
            }
        }

        Ok(grid)
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.width + cell.col
    }

    /// Flags of an in-bounds cell.
    pub fn walls(&self, cell: Cell) -> Option<CellWalls> {
        (cell.row < self.height && cell.col < self.width).then(|| self.cells[self.index(cell)])
    }

    pub fn wall_thickness(&self) -> f32 {
        self.wall_thickness
    }

    /// Interior boundaries whose two sides disagree, each reported once
    /// from the cell on its north or west side.
    pub fn asymmetries(&self) -> Vec<(Cell, Side)> {
        let mut found = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                let cell = Cell::new(row, col);
                let walls = self.cells[self.index(cell)];
                for side in [Side::South, Side::East] {
                    if let Some(other) = side.neighbour(cell, self.width, self.height) {
                        let across = self.cells[self.index(other)];
                        if walls.has(side) != across.has(side.opposite()) {
                            found.push((cell, side));
                        }
                    }
                }
            }
        }
        found
    }

    fn close_boundary(&mut self, cell: Cell, side: Side) {
        let i = self.index(cell);
        self.cells[i].set(side, true);
        if let Some(other) = side.neighbour(cell, self.width, self.height) {
            let j = self.index(other);
            self.cells[j].set(side.opposite(), true);
        }
    }
}

impl Maze for WallFlagGrid {
    fn layout(&self) -> &GridLayout {
        &self.layout
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn is_blocked(&self, world_x: f32, world_z: f32) -> bool {
        let coord = self.layout.world_to_grid(world_x, world_z);
        let Some(walls) = coord
            .to_cell(self.width, self.height)
            .and_then(|cell| self.walls(cell))
        else {
            return false;
        };

        let (from_west, from_north) = self.layout.offset_in_cell(coord, world_x, world_z);
        let half = self.wall_thickness / 2.0;
        let far = self.layout.spacing - half;

        (walls.north && from_north < half)
            || (walls.south && from_north > far)
            || (walls.west && from_west < half)
            || (walls.east && from_west > far)
    }
}

/// Carves passages out of an all-walls grid, keeping both sides of every
/// boundary in agreement. Used for hand-authored layouts.
#[derive(Debug, Clone)]
pub struct WallFlagBuilder {
    width: usize,
    height: usize,
    cells: Vec<CellWalls>,
}

impl WallFlagBuilder {
    /// Every cell starts with all four walls.
    pub fn closed(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![CellWalls::CLOSED; width * height],
        }
    }

    /// Removes the wall on `side` of `(row, col)` and the matching wall of the neighbour.
    ///
    /// On the outer border there is no neighbour, which opens an entrance or exit.
    ///
    /// # Panics
    /// If `(row, col)` is outside the grid.
    pub fn carve(mut self, row: usize, col: usize, side: Side) -> Self {
        let cell = Cell::new(row, col);
        let i = self.index(row, col);
        self.cells[i].set(side, false);
        if let Some(other) = side.neighbour(cell, self.width, self.height) {
            self.cells[other.row * self.width + other.col].set(side.opposite(), false);
        }
        self
    }

    /// Removes a single flag without touching the neighbour.
    ///
    /// # Panics
    /// If `(row, col)` is outside the grid.
    pub fn clear_flag(mut self, row: usize, col: usize, side: Side) -> Self {
        let i = self.index(row, col);
        self.cells[i].set(side, false);
        self
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "cell (row {row}, col {col}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }

    pub fn build(
        self,
        layout: GridLayout,
        wall_thickness: f32,
        policy: SymmetryPolicy,
    ) -> Result<WallFlagGrid, MazeError> {
        WallFlagGrid::new(
            self.width,
            self.height,
            self.cells,
            layout,
            wall_thickness,
            policy,
        )
    }
}
