//! Boundary between the simulation and whatever draws it.
//!
//! The simulation never draws. After each update the loop hands a
//! [`FrameView`] to a [`RenderAdapter`], which may read the pose and the maze
//! but cannot change either.

use crate::game::FrameView;
use crate::maze::Maze;

/// Consumer of the per-frame read phase.
pub trait RenderAdapter {
    fn render(&mut self, frame: &FrameView<'_>);
}

/// Camera data laid out for a GPU uniform buffer.
///
/// `view` is the look-at matrix in column-major shader order; `eye` is the
/// camera position padded to 16 bytes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub fn from_frame(frame: &FrameView<'_>) -> Self {
        let eye = frame.pose.position();
        Self {
            view: frame.view.into(),
            eye: [eye.x(), eye.y(), eye.z(), 1.0],
        }
    }

    /// Raw bytes for upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Headless renderer that logs the camera every `interval` frames.
#[derive(Debug)]
pub struct LogRenderer {
    interval: u64,
    frames: u64,
    last_uniform: CameraUniform,
}

impl LogRenderer {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
            last_uniform: CameraUniform::default(),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Uniform built for the most recent frame.
    pub fn last_uniform(&self) -> &CameraUniform {
        &self.last_uniform
    }
}

impl RenderAdapter for LogRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.last_uniform = CameraUniform::from_frame(frame);
        if self.frames % self.interval == 0 {
            let (width, height) = frame.maze.dimensions();
            let pose = frame.pose;
            log::info!(
                "frame {}: pos=({:.2}, {:.2}, {:.2}) yaw={:.1} pitch={:.1}{} in {}x{} maze",
                self.frames,
                pose.x,
                pose.y,
                pose.z,
                pose.yaw,
                pose.pitch,
                if frame.in_transition { " [fly-in]" } else { "" },
                width,
                height
            );
        }
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::game::Simulation;
    use crate::game::input::InputState;
    use crate::game::pose::Pose;

    #[test]
    fn test_uniform_layout() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 80);
        assert_eq!(CameraUniform::default().as_bytes().len(), 80);
    }

    #[test]
    fn test_uniform_from_frame() {
        let sim = Simulation::from_config(&SimulationConfig::moonlit()).unwrap();
        let frame = sim.frame();
        let uniform = CameraUniform::from_frame(&frame);
        assert_eq!(uniform.eye, [10.0, 25.0, 6.0, 1.0]);
        assert_eq!(uniform.view, frame.view.0);
    }

    /// Renderers see the pose of the update that just ran.
    #[test]
    fn test_render_follows_update() {
        struct Recorder(Vec<Pose>);
        impl RenderAdapter for Recorder {
            fn render(&mut self, frame: &FrameView<'_>) {
                self.0.push(frame.pose);
            }
        }

        let mut sim = Simulation::from_config(&SimulationConfig::moonlit()).unwrap();
        let mut recorder = Recorder(Vec::new());
        for _ in 0..3 {
            sim.advance(&InputState::new(), 1.0);
            recorder.render(&sim.frame());
        }
        assert_eq!(recorder.0.len(), 3);
        assert_eq!(recorder.0[2], *sim.pose());
        assert!(recorder.0[0].y > recorder.0[2].y);
    }

    #[test]
    fn test_log_renderer_counts_frames() {
        let sim = Simulation::from_config(&SimulationConfig::corridor()).unwrap();
        let mut renderer = LogRenderer::new(0);
        renderer.render(&sim.frame());
        renderer.render(&sim.frame());
        assert_eq!(renderer.frames(), 2);
        assert_eq!(renderer.last_uniform().eye, [12.0, 2.0, 8.0, 1.0]);
    }
}
