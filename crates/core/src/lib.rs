//! Core rendering logic - pure, deterministic, and testable
//!
//! This crate contains the whole algorithmic content of the project: torus
//! surface sampling, 3-D rotation, perspective projection, z-buffer
//! resolution, and luminance shading. It has **zero dependencies** on UI or
//! I/O, making it:
//!
//! - **Deterministic**: same configuration and angles produce byte-identical
//!   frames
//! - **Testable**: every frame is an inspectable in-memory grid
//! - **Portable**: can run headless (benchmark mode renders to nowhere)
//!
//! # Module Structure
//!
//! - [`frame`]: width x height character grid with text serialization
//! - [`renderer`]: the pure `render(config, a, b)` frame function
//! - [`driver`]: rotation state, frame-to-frame stepping, benchmark timing
//!
//! # Pipeline
//!
//! Each frame walks the torus surface over its two parametric angles. Every
//! sample is rotated by the two animation angles, perspective-projected onto
//! the character grid, depth-tested against an inverse-depth buffer, and
//! shaded by mapping a light-alignment value onto the palette. Samples that
//! land outside the grid, face away from the light, or lose the depth test
//! are dropped silently.
//!
//! # Example
//!
//! ```
//! use tui_donut_core::AnimationDriver;
//! use tui_donut_types::RenderConfig;
//!
//! let mut driver = AnimationDriver::new(RenderConfig::default()).unwrap();
//! let frame = driver.tick();
//! assert_eq!(frame.to_text().lines().count(), 22);
//! ```

pub mod driver;
pub mod frame;
pub mod renderer;

pub use tui_donut_types as types;

pub use driver::{AnimationDriver, BenchStats, RenderState};
pub use frame::Frame;
pub use renderer::render;
