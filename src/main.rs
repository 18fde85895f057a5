//! Spinning-torus runner (default binary).
//!
//! Thin glue around the core renderer: parses flags into a `RenderConfig`,
//! then either animates to the terminal or runs the headless benchmark and
//! prints the throughput report.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use tui_donut::core::AnimationDriver;
use tui_donut::term::TerminalScreen;
use tui_donut::types::{RenderConfig, DEFAULT_BENCH_FRAMES, DEFAULT_SHADING};

/// Input-poll timeout per frame; also paces the animation.
const FRAME_POLL_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(name = "tui-donut", about = "Rotating ASCII torus, or a render throughput benchmark")]
struct Cli {
    /// Output grid width in characters.
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Output grid height in rows.
    #[arg(long, default_value_t = 22)]
    height: usize,

    /// Tube radius.
    #[arg(long, default_value_t = 1.0)]
    r1: f64,

    /// Distance from torus center to tube center.
    #[arg(long, default_value_t = 2.0)]
    r2: f64,

    /// Projection scale constant.
    #[arg(long, default_value_t = 30.0)]
    k1: f64,

    /// Viewer distance along the projection axis.
    #[arg(long, default_value_t = 5.0)]
    k2: f64,

    /// Per-frame increment of rotation angle A, in radians.
    #[arg(long = "a-step", default_value_t = 0.04)]
    a_step: f64,

    /// Per-frame increment of rotation angle B, in radians.
    #[arg(long = "b-step", default_value_t = 0.02)]
    b_step: f64,

    /// Angular sampling step over the tube circle, in radians.
    #[arg(long = "theta-step", default_value_t = 0.07)]
    theta_step: f64,

    /// Angular sampling step around the torus axis, in radians.
    #[arg(long = "phi-step", default_value_t = 0.02)]
    phi_step: f64,

    /// Luminance palette, darkest to brightest.
    #[arg(long, default_value = DEFAULT_SHADING)]
    shading: String,

    /// Render frames without displaying them and report throughput.
    #[arg(long)]
    benchmark: bool,

    /// Frame count for the benchmark.
    #[arg(long, default_value_t = DEFAULT_BENCH_FRAMES)]
    frames: usize,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            r1: self.r1,
            r2: self.r2,
            k1: self.k1,
            k2: self.k2,
            a_step: self.a_step,
            b_step: self.b_step,
            theta_step: self.theta_step,
            phi_step: self.phi_step,
            shading: self.shading.chars().collect(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut driver = AnimationDriver::new(cli.render_config())?;

    if cli.benchmark {
        let stats = driver.run_benchmark(cli.frames);
        println!("Language: Rust");
        println!("Frames: {}", stats.frames);
        println!("Total Time: {:.4}s", stats.total_secs());
        println!("Avg Frame Time: {:.2}ms", stats.avg_ms());
        println!("FPS: {:.2}", stats.fps());
        return Ok(());
    }

    let mut screen = TerminalScreen::new();
    screen.enter()?;

    let result = animate(&mut screen, &mut driver);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn animate(screen: &mut TerminalScreen, driver: &mut AnimationDriver) -> Result<()> {
    loop {
        let frame = driver.tick();
        screen.draw(&frame)?;

        if event::poll(Duration::from_millis(FRAME_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }
    }
}

fn should_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}
