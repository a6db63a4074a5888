//! Load-time error types.
//!
//! The per-frame simulation never fails. Everything that can go wrong happens
//! while a maze layout or a configuration file is being read and validated,
//! and is reported through the two enums below.

use crate::maze::wall_flags::Side;

/// Errors produced while building a maze grid.
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    /// The layout has no rows or no columns.
    #[error("maze layout is empty")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Cell count does not match the declared dimensions.
    #[error("expected {expected} cells for the declared dimensions, got {found}")]
    CellCount { expected: usize, found: usize },

    /// Two neighbouring cells disagree about the wall between them.
    #[error("cell (row {row}, col {col}) {side:?} wall does not match its neighbour")]
    AsymmetricWall { row: usize, col: usize, side: Side },

    /// IO error while reading a layout file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced while loading or validating a [`SimulationConfig`](crate::config::SimulationConfig).
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A value is out of its allowed range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    /// The configured maze could not be built.
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),
}
