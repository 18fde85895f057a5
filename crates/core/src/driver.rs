//! Animation state and loop control.
//!
//! The driver owns the two rotation angles and is the only thing that
//! mutates them, once per frame between render calls. Rendering itself stays
//! a pure function in [`crate::renderer`].

use std::time::{Duration, Instant};

use tui_donut_types::{ConfigError, RenderConfig};

use crate::frame::Frame;
use crate::renderer::render;

/// The two rotation angles, in radians.
///
/// Unbounded; trig periodicity wraps them implicitly. Created at zero and
/// advanced by a fixed increment every frame, never reset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderState {
    pub a: f64,
    pub b: f64,
}

/// Steps the rotation angles and produces frames.
pub struct AnimationDriver {
    cfg: RenderConfig,
    state: RenderState,
}

impl AnimationDriver {
    /// Build a driver at zero rotation, rejecting invalid configurations.
    pub fn new(cfg: RenderConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            state: RenderState::default(),
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.cfg
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Advance both angles by their per-frame increments, unconditionally.
    pub fn advance(&mut self) {
        self.state.a += self.cfg.a_step;
        self.state.b += self.cfg.b_step;
    }

    /// Render a frame at the current angles, then advance.
    pub fn tick(&mut self) -> Frame {
        let frame = render(&self.cfg, self.state.a, self.state.b);
        self.advance();
        frame
    }

    /// Render `frames` frames back to back, discarding each one.
    ///
    /// Measures rendering cost only; no sink is involved.
    pub fn run_benchmark(&mut self, frames: usize) -> BenchStats {
        let start = Instant::now();
        for _ in 0..frames {
            let _ = self.tick();
        }
        BenchStats {
            frames,
            total: start.elapsed(),
        }
    }
}

/// Wall-clock totals for a benchmark run.
#[derive(Debug, Clone, Copy)]
pub struct BenchStats {
    pub frames: usize,
    pub total: Duration,
}

impl BenchStats {
    pub fn total_secs(&self) -> f64 {
        self.total.as_secs_f64()
    }

    /// Average per-frame time in milliseconds.
    pub fn avg_ms(&self) -> f64 {
        self.total_secs() / self.frames as f64 * 1000.0
    }

    /// Sustained frames per second over the whole run.
    pub fn fps(&self) -> f64 {
        self.frames as f64 / self.total_secs()
    }
}
