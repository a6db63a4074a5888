//! Static simulation configuration.
//!
//! A [`SimulationConfig`] is built once, from a preset or a `.toml` file, and
//! validated before any simulation state exists. Nothing here changes at
//! runtime.

use crate::demo::InputScript;
use crate::error::ConfigError;
use crate::game::motion::{LookMode, MotionConfig};
use crate::game::pose::Pose;
use crate::game::transition::TransitionConfig;
use crate::maze::MazeGrid;
use crate::maze::layout::{GridLayout, RowAxis};
use crate::maze::layouts;
use crate::maze::occupancy::OccupancyGrid;
use crate::maze::wall_flags::SymmetryPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the maze topology comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MazeSource {
    /// Built-in 20×20 occupancy maze.
    Corridor,
    /// Built-in 10×6 wall-flag maze.
    Moonlit,
    /// Occupancy text file, `#` for walls.
    File { path: PathBuf },
}

/// Maze topology and its placement in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// World-unit edge length of one cell.
    pub spacing: f32,
    #[serde(default)]
    pub row_axis: RowAxis,
    /// Wall-flag mazes only.
    #[serde(default)]
    pub wall_thickness: f32,
    /// Wall-flag mazes only.
    #[serde(default)]
    pub symmetry: SymmetryPolicy,
    pub source: MazeSource,
}

impl MazeConfig {
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.spacing, self.row_axis)
    }

    /// Builds the configured grid.
    ///
    /// The built-in layouts are authored for a fixed row axis; a
    /// configured axis only applies to file-based mazes.
    pub fn build(&self) -> Result<MazeGrid, ConfigError> {
        let grid: MazeGrid = match &self.source {
            MazeSource::Corridor => layouts::corridor(self.spacing)?.into(),
            MazeSource::Moonlit => {
                layouts::moonlit(self.spacing, self.wall_thickness, self.symmetry)?.into()
            }
            MazeSource::File { path } => OccupancyGrid::from_file(path, self.layout())?.into(),
        };
        Ok(grid)
    }
}

/// Everything needed to build a [`Simulation`](crate::game::Simulation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Upper bound on a single frame's `dt` in seconds. `None` leaves stalls uncapped.
    #[serde(default)]
    pub max_frame_dt: Option<f32>,
    pub initial_pose: Pose,
    pub maze: MazeConfig,
    pub motion: MotionConfig,
    /// Opening fly-in. `None` starts under interactive control.
    #[serde(default)]
    pub transition: Option<TransitionConfig>,
    /// Input timeline for the headless binary.
    #[serde(default)]
    pub script: Option<InputScript>,
}

impl SimulationConfig {
    /// Wall-flag maze with a five second fly-in from above the maze down to its entrance.
    pub fn moonlit() -> Self {
        let start = Pose::new(10.0, 25.0, 6.0, 0.0, -70.0);
        let entrance = Pose::new(-4.0, 1.0, 6.0, 0.0, 0.0);
        let duration = 5.0;
        Self {
            max_frame_dt: None,
            initial_pose: start,
            maze: MazeConfig {
                spacing: layouts::MOONLIT_CELL_SIZE,
                row_axis: RowAxis::PositiveZ,
                wall_thickness: layouts::MOONLIT_WALL_THICKNESS,
                symmetry: SymmetryPolicy::Trust,
                source: MazeSource::Moonlit,
            },
            motion: MotionConfig {
                move_speed: 3.0,
                turn_rate: 90.0,
                look: LookMode::Keyboard,
                pitch_min: -89.0,
                pitch_max: 89.0,
                entrance,
            },
            transition: Some(TransitionConfig {
                duration,
                start,
                end: entrance,
            }),
            script: Some(InputScript::walkthrough(duration)),
        }
    }

    /// Occupancy corridor maze, starting one row in front of the entrance gap facing -Z.
    pub fn corridor() -> Self {
        let spacing = layouts::CORRIDOR_SPACING;
        let start = Pose::new(spacing * 3.0, 2.0, spacing * 2.0, -90.0, 0.0);
        Self {
            max_frame_dt: None,
            initial_pose: start,
            maze: MazeConfig {
                spacing,
                row_axis: RowAxis::NegativeZ,
                wall_thickness: 0.0,
                symmetry: SymmetryPolicy::Trust,
                source: MazeSource::Corridor,
            },
            motion: MotionConfig {
                move_speed: 1.5,
                turn_rate: 9.0,
                look: LookMode::Pointer { sensitivity: 0.1 },
                pitch_min: -89.0,
                pitch_max: 89.0,
                entrance: start,
            },
            transition: None,
            script: Some(InputScript::walkthrough(0.0)),
        }
    }

    /// Preset by name: `moonlit` or `corridor`.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "moonlit" => Some(Self::moonlit()),
            "corridor" => Some(Self::corridor()),
            _ => None,
        }
    }

    /// Loads and validates a `.toml` configuration.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !has_toml_extension(path) {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if !has_toml_extension(path) {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()));
        }
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Rejects values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("maze.spacing", self.maze.spacing)?;
        non_negative("maze.wall_thickness", self.maze.wall_thickness)?;
        if self.maze.wall_thickness > self.maze.spacing {
            return Err(ConfigError::Invalid(format!(
                "maze.wall_thickness {} exceeds the cell size {}",
                self.maze.wall_thickness, self.maze.spacing
            )));
        }

        let motion = &self.motion;
        non_negative("motion.move_speed", motion.move_speed)?;
        non_negative("motion.turn_rate", motion.turn_rate)?;
        if let LookMode::Pointer { sensitivity } = motion.look {
            finite("motion.look.sensitivity", sensitivity)?;
        }
        finite("motion.pitch_min", motion.pitch_min)?;
        finite("motion.pitch_max", motion.pitch_max)?;
        if motion.pitch_min > motion.pitch_max {
            return Err(ConfigError::Invalid(format!(
                "pitch bounds are inverted: {} > {}",
                motion.pitch_min, motion.pitch_max
            )));
        }
        finite_pose("motion.entrance", &motion.entrance)?;
        finite_pose("initial_pose", &self.initial_pose)?;

        if let Some(transition) = &self.transition {
            // Zero or negative durations are legal and complete instantly.
            finite("transition.duration", transition.duration)?;
            finite_pose("transition.start", &transition.start)?;
            finite_pose("transition.end", &transition.end)?;
            if transition.start != self.initial_pose {
                return Err(ConfigError::Invalid(
                    "initial_pose must equal transition.start when a transition is set".into(),
                ));
            }
        }
        if let Some(cap) = self.max_frame_dt {
            positive("max_frame_dt", cap)?;
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::moonlit()
    }
}

fn has_toml_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

fn finite(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be finite, got {value}")))
    }
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid(format!("{name} must not be negative, got {value}")))
    }
}

fn finite_pose(name: &str, pose: &Pose) -> Result<(), ConfigError> {
    [pose.x, pose.y, pose.z, pose.yaw, pose.pitch]
        .into_iter()
        .try_for_each(|value| finite(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Maze;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mazewalk-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_presets_validate() {
        SimulationConfig::moonlit().validate().unwrap();
        SimulationConfig::corridor().validate().unwrap();
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(SimulationConfig::preset("corridor"), Some(SimulationConfig::corridor()));
        assert!(SimulationConfig::preset("labyrinth").is_none());
    }

    #[test]
    fn test_build_presets() {
        let moonlit = SimulationConfig::moonlit().maze.build().unwrap();
        assert!(matches!(moonlit, MazeGrid::WallFlags(_)));
        assert_eq!(moonlit.dimensions(), (10, 6));

        let corridor = SimulationConfig::corridor().maze.build().unwrap();
        assert!(matches!(corridor, MazeGrid::Occupancy(_)));
        assert_eq!(corridor.dimensions(), (20, 20));
    }

    /// Inverted pitch bounds and non-positive spacing are rejected.
    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = SimulationConfig::corridor();
        config.motion.pitch_min = 10.0;
        config.motion.pitch_max = -10.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SimulationConfig::corridor();
        config.maze.spacing = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SimulationConfig::moonlit();
        config.motion.move_speed = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = SimulationConfig::moonlit();
        config.max_frame_dt = Some(0.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_initial_pose_off_transition_start() {
        let mut config = SimulationConfig::moonlit();
        config.initial_pose = Pose::new(0.0, 2.0, 0.0, 45.0, 0.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        assert!(matches!(
            crate::game::Simulation::from_config(&config),
            Err(ConfigError::Invalid(_))
        ));

        // Without a fly-in the initial pose is free.
        config.transition = None;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_duration_transition_is_valid() {
        let mut config = SimulationConfig::moonlit();
        if let Some(transition) = config.transition.as_mut() {
            transition.duration = 0.0;
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let text = r#"
            max_frame_dt = 0.25

            [initial_pose]
            x = 6.0
            y = 1.0
            z = -6.0
            yaw = 270.0
            pitch = 0.0

            [maze]
            spacing = 4.0
            source = { kind = "File", path = "levels/first.txt" }

            [motion]
            move_speed = 2.0
            turn_rate = 45.0
            look = { Pointer = { sensitivity = 0.2 } }
            pitch_min = -60.0
            pitch_max = 60.0
            entrance = { x = 6.0, y = 1.0, z = -6.0, yaw = 270.0, pitch = 0.0 }
        "#;
        let config: SimulationConfig = toml::from_str(text).unwrap();
        assert_eq!(config.max_frame_dt, Some(0.25));
        assert_eq!(config.maze.row_axis, RowAxis::NegativeZ);
        assert_eq!(config.maze.symmetry, SymmetryPolicy::Trust);
        assert_eq!(
            config.maze.source,
            MazeSource::File {
                path: PathBuf::from("levels/first.txt")
            }
        );
        assert_eq!(config.motion.look, LookMode::Pointer { sensitivity: 0.2 });
        assert!(config.transition.is_none());
        assert!(config.script.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("moonlit.toml");
        let config = SimulationConfig::moonlit();
        config.save_to_file(&path).unwrap();
        let loaded = SimulationConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_format() {
        let result = SimulationConfig::load_from_file("settings.ron");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
        let result = SimulationConfig::moonlit().save_to_file(temp_path("moonlit.json"));
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SimulationConfig::load_from_file(temp_path("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_file_maze_source() {
        let path = temp_path("maze.txt");
        std::fs::write(&path, "###\n# #\n###\n").unwrap();
        let mut config = SimulationConfig::corridor();
        config.maze.source = MazeSource::File { path: path.clone() };
        let grid = config.maze.build();
        std::fs::remove_file(&path).ok();
        let grid = grid.unwrap();
        assert_eq!(grid.dimensions(), (3, 3));
        assert!(!grid.is_blocked(6.0, -6.0));
        assert!(grid.is_blocked(2.0, -2.0));
    }
}
