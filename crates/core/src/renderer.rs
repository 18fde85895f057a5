//! The per-frame torus renderer.
//!
//! `render` is a pure function of the configuration and the two rotation
//! angles; it owns no state and performs no I/O. The animation loop and the
//! benchmark both call it through [`crate::driver::AnimationDriver`].

use std::f64::consts::TAU;

use tui_donut_types::RenderConfig;

use crate::frame::Frame;

/// Inverse-depth buffer with the strictly-greater overwrite rule.
///
/// Stored values are `1 / (z + k2)`, larger meaning nearer to the viewer.
/// The sentinel 0.0 is below every attainable value since `z + k2 > 0` for
/// all sampled surface points.
struct DepthGrid {
    ooz: Vec<f64>,
}

impl DepthGrid {
    fn new(len: usize) -> Self {
        Self {
            ooz: vec![0.0; len],
        }
    }

    /// Accept the sample only if strictly nearer than what the cell holds.
    ///
    /// Equal depths keep the earlier writer, so resolution order is stable
    /// for a fixed sampling sequence.
    fn accept(&mut self, idx: usize, ooz: f64) -> bool {
        if ooz > self.ooz[idx] {
            self.ooz[idx] = ooz;
            true
        } else {
            false
        }
    }
}

/// Map a positive luminance value onto the palette.
///
/// Luminance spans roughly (0, sqrt(2)] for visible samples; scaling by 8
/// spreads that over a 12-character ramp. Values past the end clamp to the
/// brightest character.
fn shade(shading: &[char], luminance: f64) -> Option<char> {
    let idx = (luminance * 8.0) as isize;
    let last = shading.len() as isize - 1;
    shading.get(idx.clamp(0, last.max(0)) as usize).copied()
}

/// Number of samples covering `[0, 2*pi)` at the given step.
///
/// Iterating an integer count and multiplying avoids accumulating the step
/// in floating point, so the sampled angles are identical every frame.
fn sample_count(step: f64) -> usize {
    if step > 0.0 && step.is_finite() {
        (TAU / step).ceil() as usize
    } else {
        0
    }
}

/// Render one frame of the torus at rotation angles `a` and `b`.
///
/// Deterministic: repeated calls with equal inputs produce byte-identical
/// frames. Samples that project outside the grid, face away from the light,
/// or lose the depth test are dropped silently. Never panics, even for
/// degenerate configurations; callers that want diagnostics should run
/// [`RenderConfig::validate`] first.
pub fn render(cfg: &RenderConfig, a: f64, b: f64) -> Frame {
    let mut frame = Frame::new(cfg.width, cfg.height);
    let mut depth = DepthGrid::new(cfg.width * cfg.height);

    let (sin_a, cos_a) = a.sin_cos();
    let (sin_b, cos_b) = b.sin_cos();

    for i in 0..sample_count(cfg.theta_step) {
        let theta = i as f64 * cfg.theta_step;
        let theta_sin = theta.sin();
        let theta_cos = theta.cos();

        // Cross-section circle of the tube, before sweeping around the axis.
        let circle_x = cfg.r2 + cfg.r1 * theta_cos;
        let circle_y = cfg.r1 * theta_sin;

        for j in 0..sample_count(cfg.phi_step) {
            let phi = j as f64 * cfg.phi_step;
            let phi_sin = phi.sin();
            let phi_cos = phi.cos();

            let x = circle_x * phi_cos;
            let y = circle_x * phi_sin;
            let z = circle_y;

            // Rotate by `a` about the x axis, then by `b` about the z axis.
            let x1 = x;
            let y1 = y * cos_a - z * sin_a;
            let z1 = y * sin_a + z * cos_a;

            let x2 = x1 * cos_b - y1 * sin_b;
            let y2 = x1 * sin_b + y1 * cos_b;
            let z2 = z1;

            // Perspective projection. Vertical scale is halved for the
            // terminal character aspect ratio, and the sign is flipped
            // because rows grow downward.
            let ooz = 1.0 / (z2 + cfg.k2);
            let xp = (cfg.width as f64 / 2.0 + cfg.k1 * ooz * x2) as isize;
            let yp = (cfg.height as f64 / 2.0 - (cfg.k1 * 0.5) * ooz * y2) as isize;

            // Alignment of the surface normal with the fixed light
            // direction. Kept as the canonical closed form; only positive
            // values are lit.
            let luminance = phi_cos * theta_cos * sin_b
                - cos_a * theta_cos * phi_sin
                - sin_a * theta_sin
                + cos_b * (cos_a * theta_sin - theta_cos * sin_a * phi_sin);

            if luminance > 0.0
                && (0..cfg.width as isize).contains(&xp)
                && (0..cfg.height as isize).contains(&yp)
            {
                let idx = xp as usize + cfg.width * yp as usize;
                if depth.accept(idx, ooz) {
                    if let Some(ch) = shade(&cfg.shading, luminance) {
                        frame.put(idx, ch);
                    }
                }
            }
        }
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_grid_keeps_nearest_sample() {
        let mut depth = DepthGrid::new(1);
        assert!(depth.accept(0, 0.5));
        // Equal depth loses: the first writer stays.
        assert!(!depth.accept(0, 0.5));
        assert!(!depth.accept(0, 0.2));
        assert!(depth.accept(0, 0.8));
        assert_eq!(depth.ooz[0], 0.8);
    }

    #[test]
    fn shade_clamps_to_palette_ends() {
        let palette: Vec<char> = ".,@".chars().collect();
        assert_eq!(shade(&palette, 0.01), Some('.'));
        assert_eq!(shade(&palette, 0.2), Some(','));
        assert_eq!(shade(&palette, 100.0), Some('@'));
    }

    #[test]
    fn shade_of_empty_palette_is_none() {
        assert_eq!(shade(&[], 1.0), None);
    }

    #[test]
    fn sample_count_covers_full_turn() {
        assert_eq!(sample_count(TAU), 1);
        assert_eq!(sample_count(0.5), 13);
        assert_eq!(sample_count(0.0), 0);
        assert_eq!(sample_count(f64::NAN), 0);
    }
}
