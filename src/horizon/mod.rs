//! Two-segment ground line that scrolls left forever.
//!
//! The segments sit side by side and each is as wide as the canvas. The one
//! at or left of the origin leads. Once it has scrolled fully off screen it
//! jumps to the far right and gets a fresh flat or bumpy look.

#![allow(clippy::cast_possible_truncation)]

pub mod variant;


pub use variant::{FixedSequence, SeededRandom, ThreadRandom, VariantSource};

use crate::{
    config::{Density, HorizonConfig},
    sprite::{DrawSurface, Rect, SpriteAtlas, SpritePosition},
};

/// Segment size and vertical placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: i32,
    pub height: i32,
    pub y_pos: i32,
}

impl Dimensions {
    /// Size as read from an atlas of the given density. `y_pos` is a surface
    /// coordinate and never scales.
    #[must_use]
    pub fn scaled_for(self, density: Density) -> Self {
        let scale = density.scale();
        Self {
            width: self.width * scale,
            height: self.height * scale,
            y_pos: self.y_pos,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    First,
    Second,
}

impl Segment {
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Flat,
    Bumpy,
}

impl Variant {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Bumpy => "bumpy",
        }
    }
}

/// Pixels to scroll for a frame of `delta_ms` at `speed` pixels per frame
/// of a `target_fps` baseline, floored.
///
/// Grouped as `speed * (fps / 1000) * delta`. The grouping shows up in the
/// floored result, e.g. speed 11 over 50ms is 32.
#[must_use]
pub fn scroll_increment(delta_ms: f64, speed: f64, target_fps: u32) -> i32 {
    (speed * (f64::from(target_fps) / 1000.0) * delta_ms).floor() as i32
}

#[derive(Debug)]
pub struct HorizonLine<R = ThreadRandom> {
    sprite_position: SpritePosition,
    dimensions: Dimensions,
    source_dimensions: Dimensions,
    source_x: [i32; 2],
    x_pos: [i32; 2],
    bump_threshold: f64,
    target_fps: u32,
    rng: R,
}

impl<R: VariantSource> HorizonLine<R> {
    /// Lays both segments out edge to edge from the origin and draws them.
    pub fn new<S: DrawSurface + ?Sized>(
        surface: &mut S,
        atlas: &SpriteAtlas,
        sprite_position: SpritePosition,
        config: &HorizonConfig,
        rng: R,
    ) -> Self {
        let dimensions = Dimensions {
            width: config.width,
            height: config.height,
            y_pos: config.y_pos,
        };
        let source_dimensions = dimensions.scaled_for(config.density);

        let line = Self {
            sprite_position,
            dimensions,
            source_dimensions,
            source_x: [
                sprite_position.x,
                sprite_position.x.saturating_add(dimensions.width),
            ],
            x_pos: [0, dimensions.width],
            bump_threshold: config.bump_threshold,
            target_fps: config.target_fps,
            rng,
        };
        line.draw(surface, atlas);
        line
    }

    #[must_use]
    pub fn sprite_position(&self) -> SpritePosition {
        self.sprite_position
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub fn source_dimensions(&self) -> Dimensions {
        self.source_dimensions
    }

    #[must_use]
    pub fn x_positions(&self) -> [i32; 2] {
        self.x_pos
    }

    #[must_use]
    pub fn source_offsets(&self) -> [i32; 2] {
        self.source_x
    }

    #[must_use]
    pub fn variant(&self, segment: Segment) -> Variant {
        if self.source_x[segment.index()] == self.sprite_position.x {
            Variant::Flat
        } else {
            Variant::Bumpy
        }
    }

    /// Atlas x offset for a freshly recycled segment: the bumpy artwork
    /// when the sample clears the threshold, the flat one otherwise.
    ///
    /// The offset is the unscaled segment width at every density, so a
    /// high density bumpy segment starts halfway into the flat artwork.
    pub fn random_variant(&mut self) -> i32 {
        if self.rng.next_unit() > self.bump_threshold {
            self.dimensions.width
        } else {
            0
        }
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, atlas: &SpriteAtlas) {
        for (source_x, x_pos) in self.source_x.into_iter().zip(self.x_pos) {
            let src = Rect {
                x: source_x,
                y: self.sprite_position.y,
                width: self.source_dimensions.width,
                height: self.source_dimensions.height,
            };
            let dest = Rect {
                x: x_pos,
                y: self.dimensions.y_pos,
                width: self.dimensions.width,
                height: self.dimensions.height,
            };
            surface.draw_image(atlas, src, dest);
        }
    }

    /// Scrolls `active` left by `increment` and pins the other segment to
    /// its right edge. Returns the new variant when `active` wrapped.
    pub fn advance_segment(&mut self, active: Segment, increment: i32) -> Option<Variant> {
        let (line1, line2) = (active.index(), active.other().index());
        let width = self.dimensions.width;

        self.x_pos[line1] = self.x_pos[line1].saturating_sub(increment);
        self.x_pos[line2] = self.x_pos[line1].saturating_add(width);

        if self.x_pos[line1] > -width {
            return None;
        }

        self.x_pos[line1] = self.x_pos[line1].saturating_add(width.saturating_mul(2));
        self.x_pos[line2] = self.x_pos[line1].saturating_sub(width);
        let offset = self.random_variant();
        self.source_x[line1] = self.sprite_position.x.saturating_add(offset);

        let variant = self.variant(active);
        tracing::debug!(
            segment = line1,
            variant = variant.label(),
            x = self.x_pos[line1],
            "horizon segment recycled"
        );
        Some(variant)
    }

    /// Advances one frame and redraws. Returns the new variant if a segment
    /// wrapped during this frame.
    pub fn update<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        atlas: &SpriteAtlas,
        delta_ms: f64,
        speed: f64,
    ) -> Option<Variant> {
        let increment = scroll_increment(delta_ms, speed, self.target_fps);
        let active = if self.x_pos[0] <= 0 {
            Segment::First
        } else {
            Segment::Second
        };

        let wrapped = self.advance_segment(active, increment);
        self.draw(surface, atlas);
        wrapped
    }

    /// Back to the starting layout. Variants are kept.
    pub fn reset(&mut self) {
        self.x_pos = [0, self.dimensions.width];
        tracing::info!("horizon line reset");
    }
}
