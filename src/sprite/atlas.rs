#![allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use std::fmt;

use thiserror::Error;

use super::{Rect, SpritePosition};
use crate::config::{Density, HORIZON_HEIGHT, HORIZON_WIDTH};

const TRANSPARENT: char = ' ';

const GROUND_ROW: i32 = 2;
const BUMP_ROW: i32 = 1;
/// `(start column, width)` of each bump in the bumpy ground artwork.
const BUMPS: [(i32, i32); 4] = [(48, 10), (212, 6), (395, 12), (530, 8)];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AtlasError {
    #[error("sprite atlas is empty")]
    Empty,
    #[error("source {rect:?} lies outside the {width}x{height} atlas")]
    OutOfBounds { rect: Rect, width: usize, height: usize },
}

/// Character-grid sprite sheet. A space is a transparent pixel.
#[derive(Clone, PartialEq, Eq)]
pub struct SpriteAtlas {
    width: usize,
    height: usize,
    pixels: Vec<char>,
}

impl fmt::Debug for SpriteAtlas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpriteAtlas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl SpriteAtlas {
    /// Parses newline separated rows. Short rows are padded with transparency.
    pub fn parse(source: &str) -> Result<Self, AtlasError> {
        let rows = source
            .lines()
            .map(|line| line.chars().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(AtlasError::Empty);
        }

        let height = rows.len();
        let mut pixels = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, TRANSPARENT);
            pixels.extend(row);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Built-in runner sheet: flat ground followed by bumpy ground, both
    /// starting at [`SpritePosition::horizon`]. High density artwork is
    /// drawn at twice the size.
    #[must_use]
    pub fn runner(density: Density) -> Self {
        let origin = SpritePosition::horizon(density);
        let scale = density.scale();
        let width = (origin.x + HORIZON_WIDTH * 2 * scale) as usize;
        let height = (origin.y + HORIZON_HEIGHT * scale) as usize;

        let mut pixels = vec![TRANSPARENT; width * height];
        for y in origin.y..height as i32 {
            for x in origin.x..width as i32 {
                let ch = ground_pixel((x - origin.x) / scale, (y - origin.y) / scale);
                pixels[y as usize * width + x as usize] = ch;
            }
        }

        Self {
            width,
            height,
            pixels,
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

    #[must_use]
    pub fn pixel(&self, x: i32, y: i32) -> Option<char> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Succeeds when `rect` lies fully inside the sheet.
    pub fn check_rect(&self, rect: Rect) -> Result<(), AtlasError> {
        let right = i64::from(rect.x) + i64::from(rect.width);
        let bottom = i64::from(rect.y) + i64::from(rect.height);
        let inside = rect.x >= 0
            && rect.y >= 0
            && rect.width >= 0
            && rect.height >= 0
            && right <= self.width as i64
            && bottom <= self.height as i64;
        if inside {
            Ok(())
        } else {
            Err(AtlasError::OutOfBounds {
                rect,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One pixel of the 1200x12 ground strip: columns `0..600` are flat,
/// `600..1200` bumpy.
fn ground_pixel(x: i32, y: i32) -> char {
    let bumpy = x >= HORIZON_WIDTH;
    let col = x % HORIZON_WIDTH;

    if bumpy && let Some(ch) = bump_pixel(col, y) {
        return ch;
    }

    match y {
        GROUND_ROW => '-',
        5 if col % 23 == 4 => '.',
        8 if col % 31 == 17 => '.',
        _ => TRANSPARENT,
    }
}

fn bump_pixel(col: i32, y: i32) -> Option<char> {
    let &(start, width) = BUMPS
        .iter()
        .find(|(start, width)| (*start..start + width).contains(&col))?;
    match y {
        BUMP_ROW if col == start => Some('/'),
        BUMP_ROW if col == start + width - 1 => Some('\\'),
        BUMP_ROW => Some('-'),
        GROUND_ROW => Some(TRANSPARENT),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pads_short_rows_with_transparency() {
        let atlas = SpriteAtlas::parse("abc\nd\n").expect("valid atlas");
        assert_eq!(atlas.width(), 3);
        assert_eq!(atlas.height(), 2);
        assert_eq!(atlas.pixel(0, 1), Some('d'));
        assert_eq!(atlas.pixel(2, 1), Some(' '));
    }

    #[test]
    fn parse_rejects_empty_sheets() {
        assert_eq!(SpriteAtlas::parse(""), Err(AtlasError::Empty));
        assert_eq!(SpriteAtlas::parse("\n\n"), Err(AtlasError::Empty));
    }

    #[test]
    fn pixel_outside_sheet_is_none() {
        let atlas = SpriteAtlas::parse("ab").expect("valid atlas");
        assert_eq!(atlas.pixel(-1, 0), None);
        assert_eq!(atlas.pixel(2, 0), None);
        assert_eq!(atlas.pixel(0, 1), None);
    }

    #[test]
    fn check_rect_reports_out_of_bounds() {
        let atlas = SpriteAtlas::parse("abcd\nefgh").expect("valid atlas");
        let inside = Rect {
            x: 1,
            y: 0,
            width: 3,
            height: 2,
        };
        assert!(atlas.check_rect(inside).is_ok());

        let outside = Rect { width: 4, ..inside };
        let err = atlas.check_rect(outside).expect_err("rect overflows");
        assert_eq!(
            err,
            AtlasError::OutOfBounds {
                rect: outside,
                width: 4,
                height: 2,
            }
        );
        assert!(err.to_string().contains("4x2 atlas"));
    }

    #[test]
    fn runner_sheet_holds_both_ground_variants() {
        let atlas = SpriteAtlas::runner(Density::Standard);
        let origin = SpritePosition::horizon(Density::Standard);
        assert_eq!(atlas.width(), 1202);
        assert_eq!(atlas.height(), 66);

        let ground_y = origin.y + GROUND_ROW;
        let bump_y = origin.y + BUMP_ROW;
        // flat variant: unbroken line, nothing above it
        assert_eq!(atlas.pixel(origin.x + 48, ground_y), Some('-'));
        assert_eq!(atlas.pixel(origin.x + 48, bump_y), Some(' '));
        // bumpy variant: the line lifts over each bump
        let bump_x = origin.x + HORIZON_WIDTH + 48;
        assert_eq!(atlas.pixel(bump_x, bump_y), Some('/'));
        assert_eq!(atlas.pixel(bump_x + 9, bump_y), Some('\\'));
        assert_eq!(atlas.pixel(bump_x + 4, bump_y), Some('-'));
        assert_eq!(atlas.pixel(bump_x + 4, ground_y), Some(' '));
    }

    #[test]
    fn high_density_sheet_is_drawn_at_double_size() {
        let atlas = SpriteAtlas::runner(Density::High);
        let origin = SpritePosition::horizon(Density::High);
        assert_eq!(atlas.width(), 2402);
        assert_eq!(atlas.height(), 128);

        let ground_y = origin.y + GROUND_ROW * 2;
        assert_eq!(atlas.pixel(origin.x, ground_y), Some('-'));
        assert_eq!(atlas.pixel(origin.x, ground_y + 1), Some('-'));
        assert_eq!(atlas.pixel(origin.x, ground_y + 2), Some(' '));
    }
}
