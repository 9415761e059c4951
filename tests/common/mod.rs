#![allow(dead_code)]

use runner_horizon::{
    app::{settings::RuntimeSettings, state::AppState},
    cli::Cli,
    config::{Density, HorizonConfig},
    horizon::{FixedSequence, HorizonLine, VariantSource},
    sprite::{DrawSurface, Rect, SpriteAtlas, SpritePosition},
};

pub fn seeded_cli() -> Cli {
    Cli {
        speed: None,
        fps: 30,
        hidpi: false,
        seed: Some(7),
        bump_threshold: None,
        one_shot: true,
        frames: 0,
        frame_ms: 16,
        width: 80,
        log_file: None,
    }
}

pub fn seeded_state() -> AppState {
    AppState::from_settings(RuntimeSettings::from_cli_defaults(&seeded_cli()), None)
}

/// Swallows blits.
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn draw_image(&mut self, _atlas: &SpriteAtlas, _src: Rect, _dest: Rect) {}
}

pub fn standard_line<R: VariantSource>(rng: R) -> (HorizonLine<R>, SpriteAtlas) {
    let atlas = SpriteAtlas::runner(Density::Standard);
    let line = HorizonLine::new(
        &mut NullSurface,
        &atlas,
        SpritePosition::horizon(Density::Standard),
        &HorizonConfig::default(),
        rng,
    );
    (line, atlas)
}

pub fn fixed_line(samples: &[f64]) -> (HorizonLine<FixedSequence>, SpriteAtlas) {
    standard_line(FixedSequence::new(samples.to_vec()))
}
