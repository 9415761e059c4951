#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use super::{DrawSurface, Rect, SpriteAtlas};

/// Width and height of the runner game canvas.
pub const CANVAS_WIDTH: usize = 600;
pub const CANVAS_HEIGHT: usize = 150;

const EMPTY: char = ' ';

/// Character framebuffer the game draws into once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<char>>,
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl PixelCanvas {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![EMPTY; width]; height],
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(EMPTY);
        }
    }

    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y)?.get(x).copied()
    }

    /// `rows` lines of `cols` characters starting at `(x, y)`. Anything
    /// past the canvas edge reads as blank.
    #[must_use]
    pub fn window(&self, x: usize, y: usize, cols: usize, rows: usize) -> Vec<String> {
        (y..y + rows)
            .map(|row| {
                (x..x + cols)
                    .map(|col| self.cell(col, row).unwrap_or(EMPTY))
                    .collect()
            })
            .collect()
    }
}

impl DrawSurface for PixelCanvas {
    fn draw_image(&mut self, atlas: &SpriteAtlas, src: Rect, dest: Rect) {
        if let Err(err) = atlas.check_rect(src) {
            tracing::warn!(%err, "skipping sprite blit");
            return;
        }
        if src.width == 0 || src.height == 0 || dest.width <= 0 || dest.height <= 0 {
            return;
        }

        // only walk the part of `dest` that lands on the canvas
        let col_start = dest.x.saturating_neg().clamp(0, dest.width);
        let col_end = (self.width as i32)
            .saturating_sub(dest.x)
            .clamp(col_start, dest.width);
        let row_start = dest.y.saturating_neg().clamp(0, dest.height);
        let row_end = (self.height as i32)
            .saturating_sub(dest.y)
            .clamp(row_start, dest.height);

        for dy in row_start..row_end {
            let sy = src.y + scale_offset(dy, src.height, dest.height);
            let row = &mut self.cells[(dest.y + dy) as usize];
            for dx in col_start..col_end {
                let sx = src.x + scale_offset(dx, src.width, dest.width);
                if let Some(ch) = atlas.pixel(sx, sy)
                    && ch != EMPTY
                {
                    row[(dest.x + dx) as usize] = ch;
                }
            }
        }
    }
}

/// Nearest-neighbour mapping of a destination offset into the source span.
fn scale_offset(offset: i32, src_len: i32, dest_len: i32) -> i32 {
    (i64::from(offset) * i64::from(src_len) / i64::from(dest_len)) as i32
}
