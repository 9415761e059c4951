#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "runner-horizon",
    version,
    about = "Infinitely scrolling runner-game horizon line"
)]
pub struct Cli {
    /// Scroll speed in pixels per 60 fps frame (default: 6)
    #[arg(long, allow_negative_numbers = true)]
    pub speed: Option<f64>,

    /// Target FPS (15..60)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u8).range(15..=60))]
    pub fps: u8,

    /// Use the double-size sprite atlas
    #[arg(long)]
    pub hidpi: bool,

    /// Seed for the flat/bumpy ground picks
    #[arg(long)]
    pub seed: Option<u64>,

    /// Probability threshold a sample must exceed to pick bumpy ground (0..1)
    #[arg(long, allow_negative_numbers = true)]
    pub bump_threshold: Option<f64>,

    /// Simulate frames and print the horizon to stdout (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Frames to simulate in one-shot mode
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Milliseconds per simulated frame in one-shot mode (capped at 250)
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u32,

    /// Output width in columns for one-shot mode
    #[arg(long, default_value_t = 80)]
    pub width: u16,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(speed) = self.speed
            && !(speed.is_finite() && speed >= 0.0)
        {
            anyhow::bail!("--speed must be a non-negative number");
        }
        if let Some(threshold) = self.bump_threshold
            && !(0.0..=1.0).contains(&threshold)
        {
            anyhow::bail!("--bump-threshold must be between 0 and 1");
        }
        Ok(())
    }
}
