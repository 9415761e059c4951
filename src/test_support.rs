use crate::{
    cli::Cli,
    sprite::{DrawSurface, Rect, SpriteAtlas},
};

pub(crate) fn test_cli() -> Cli {
    Cli {
        speed: None,
        fps: 30,
        hidpi: false,
        seed: Some(7),
        bump_threshold: None,
        one_shot: false,
        frames: 60,
        frame_ms: 16,
        width: 80,
        log_file: None,
    }
}

/// Remembers every blit instead of drawing it.
#[derive(Debug, Default)]
pub(crate) struct RecordingSurface {
    pub blits: Vec<(Rect, Rect)>,
}

impl DrawSurface for RecordingSurface {
    fn draw_image(&mut self, _atlas: &SpriteAtlas, src: Rect, dest: Rect) {
        self.blits.push((src, dest));
    }
}

/// Swallows blits.
#[derive(Debug, Default)]
pub(crate) struct NullSurface;

impl DrawSurface for NullSurface {
    fn draw_image(&mut self, _atlas: &SpriteAtlas, _src: Rect, _dest: Rect) {}
}

pub(crate) fn rect(x: i32, y: i32, width: i32, height: i32) -> Rect {
    Rect {
        x,
        y,
        width,
        height,
    }
}
