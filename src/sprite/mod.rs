pub mod atlas;
pub mod canvas;

pub use atlas::{AtlasError, SpriteAtlas};
pub use canvas::PixelCanvas;

use crate::config::Density;

/// Pixel rectangle on an atlas or a surface. Origin is top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Top-left corner of an artwork inside the sprite atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpritePosition {
    pub x: i32,
    pub y: i32,
}

impl SpritePosition {
    /// Where the built-in runner atlas keeps the ground artwork.
    #[must_use]
    pub fn horizon(density: Density) -> Self {
        match density {
            Density::Standard => Self { x: 2, y: 54 },
            Density::High => Self { x: 2, y: 104 },
        }
    }
}

/// Write-only drawing target.
///
/// `draw_image` copies `src` out of the atlas and scales it to fill `dest`.
/// Implementations clip to their own bounds.
pub trait DrawSurface {
    fn draw_image(&mut self, atlas: &SpriteAtlas, src: Rect, dest: Rect);
}
