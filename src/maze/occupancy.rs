//! Dense occupancy grid: every cell is either open floor or a solid wall block.

use super::layout::{GridCoord, GridLayout};
use super::{Cell, Maze};
use crate::error::MazeError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// State of one occupancy cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
}

impl Tile {
    fn from_flag(flag: u8) -> Self {
        if flag == 0 { Tile::Open } else { Tile::Wall }
    }
}

/// Immutable `width × height` occupancy grid stored as one row-major buffer.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    layout: GridLayout,
}

impl OccupancyGrid {
    /// Builds a grid from a row-major tile buffer.
    pub fn new(
        width: usize,
        height: usize,
        tiles: Vec<Tile>,
        layout: GridLayout,
    ) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::Empty);
        }
        if tiles.len() != width * height {
            return Err(MazeError::CellCount {
                expected: width * height,
                found: tiles.len(),
            });
        }
        Ok(Self {
            width,
            height,
            tiles,
            layout,
        })
    }

    /// Builds a grid from hand-authored rows where `0` is open and anything else is a wall.
    pub fn from_matrix<const W: usize>(
        rows: &[[u8; W]],
        layout: GridLayout,
    ) -> Result<Self, MazeError> {
        let tiles = rows
            .iter()
            .flat_map(|row| row.iter().map(|&flag| Tile::from_flag(flag)))
            .collect();
        Self::new(W, rows.len(), tiles, layout)
    }

    /// Parses a text layout, one line per row.
    ///
    /// Each character is mapped as follows:
    /// - `#` becomes [`Tile::Wall`]
    /// - Any other character becomes [`Tile::Open`]
    ///
    /// Trailing blank lines are ignored; every other row must have the same length.
    ///
    /// # Example
    /// ```text
    /// ##  ##
    /// #    #
    /// ######
    /// ```
    pub fn parse(text: &str, layout: GridLayout) -> Result<Self, MazeError> {
        Self::from_lines(text.lines().map(str::to_owned), layout)
    }

    /// Reads a text layout from disk. See [`OccupancyGrid::parse`] for the format.
    pub fn from_file(path: impl AsRef<Path>, layout: GridLayout) -> Result<Self, MazeError> {
        let reader = BufReader::new(File::open(path)?);
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::from_lines(lines, layout)
    }

    fn from_lines(
        lines: impl IntoIterator<Item = String>,
        layout: GridLayout,
    ) -> Result<Self, MazeError> {
        let mut rows: Vec<Vec<Tile>> = lines
            .into_iter()
            .map(|line| {
                line.chars()
                    .map(|c| if c == '#' { Tile::Wall } else { Tile::Open })
                    .collect()
            })
            .collect();
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }

        let width = rows.first().map_or(0, Vec::len);
        for (row, tiles) in rows.iter().enumerate() {
            if tiles.len() != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    found: tiles.len(),
                });
            }
        }

        let height = rows.len();
        Self::new(width, height, rows.into_iter().flatten().collect(), layout)
    }

    /// Tile at an in-bounds cell.
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        (cell.row < self.height && cell.col < self.width)
            .then(|| self.tiles[cell.row * self.width + cell.col])
    }

    /// Whether the grid coordinate is an in-bounds wall. Out-of-bounds is open.
    pub fn is_wall(&self, coord: GridCoord) -> bool {
        coord
            .to_cell(self.width, self.height)
            .and_then(|cell| self.tile(cell))
            == Some(Tile::Wall)
    }

    /// Iterator over every wall cell, in row-major order.
    pub fn walls(&self) -> impl Iterator<Item = Cell> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == Tile::Wall)
            .map(|(i, _)| Cell::new(i / self.width, i % self.width))
    }
}

impl Maze for OccupancyGrid {
    fn layout(&self) -> &GridLayout {
        &self.layout
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn is_blocked(&self, world_x: f32, world_z: f32) -> bool {
        self.is_wall(self.layout.world_to_grid(world_x, world_z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::layout::RowAxis;
    use rand::Rng;

    fn layout() -> GridLayout {
        GridLayout::new(4.0, RowAxis::NegativeZ)
    }

    fn random_grid(rng: &mut impl Rng, width: usize, height: usize) -> OccupancyGrid {
        let tiles = (0..width * height)
            .map(|_| if rng.gen_bool(0.5) { Tile::Wall } else { Tile::Open })
            .collect();
        OccupancyGrid::new(width, height, tiles, layout()).unwrap()
    }

    #[test]
    fn test_parse_marks_hashes_as_walls() {
        let grid = OccupancyGrid::parse("## #\n#  #\n####\n\n", layout()).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.tile(Cell::new(0, 2)), Some(Tile::Open));
        assert_eq!(grid.tile(Cell::new(1, 1)), Some(Tile::Open));
        assert_eq!(grid.tile(Cell::new(2, 3)), Some(Tile::Wall));
        assert_eq!(grid.tile(Cell::new(3, 0)), None);
        assert_eq!(grid.walls().count(), 9);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = OccupancyGrid::parse("###\n#\n###", layout()).unwrap_err();
        assert!(matches!(
            err,
            MazeError::RaggedRow {
                row: 1,
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        assert!(matches!(
            OccupancyGrid::parse("", layout()),
            Err(MazeError::Empty)
        ));
        assert!(matches!(
            OccupancyGrid::new(2, 2, vec![Tile::Open; 3], layout()),
            Err(MazeError::CellCount { expected: 4, found: 3 })
        ));
    }

    #[test]
    fn test_from_file_reads_layout() {
        let path =
            std::env::temp_dir().join(format!("mazewalk-occupancy-{}.txt", std::process::id()));
        std::fs::write(&path, "###\n# #\n###\n").unwrap();
        let grid = OccupancyGrid::from_file(&path, layout()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert!(!grid.is_blocked(6.0, -6.0));
        assert!(grid.is_blocked(2.0, -2.0));
    }

    /// Out-of-bounds cells are open whatever the grid contains.
    #[test]
    fn test_out_of_bounds_is_never_blocked() {
        let mut rng = rand::thread_rng();
        for _ in 0..50 {
            let grid = random_grid(&mut rng, 20, 20);
            for (x, z) in [
                (-0.01, -10.0),
                (80.0, -10.0),
                (10.0, 0.5),
                (10.0, -80.0),
                (-50.0, 50.0),
                (1e6, -1e6),
            ] {
                assert!(!grid.is_blocked(x, z), "({x}, {z}) blocked");
            }
        }
    }

    /// In-bounds queries agree with the stored tile of the owning cell.
    #[test]
    fn test_in_bounds_queries_follow_tiles() {
        let mut rng = rand::thread_rng();
        let grid = random_grid(&mut rng, 12, 9);
        for _ in 0..1_000 {
            let x = rng.gen_range(0.0..48.0f32);
            let z = -rng.gen_range(0.0..36.0f32);
            let coord = grid.layout().world_to_grid(x, z);
            let cell = coord.to_cell(12, 9).unwrap();
            let expected = grid.tile(cell) == Some(Tile::Wall);
            assert_eq!(grid.is_blocked(x, z), expected);
        }
    }
}
