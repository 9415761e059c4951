use serde::{Deserialize, Serialize};

/// Frame rate the scroll speed is normalized against.
pub const TARGET_FPS: u32 = 60;

pub const HORIZON_WIDTH: i32 = 600;
pub const HORIZON_HEIGHT: i32 = 12;
pub const HORIZON_Y_POS: i32 = 127;
pub const DEFAULT_BUMP_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Density {
    #[default]
    Standard,
    High,
}

impl Density {
    #[must_use]
    pub fn from_hidpi(hidpi: bool) -> Self {
        if hidpi { Self::High } else { Self::Standard }
    }

    /// Atlas pixels per surface pixel.
    #[must_use]
    pub fn scale(self) -> i32 {
        match self {
            Self::Standard => 1,
            Self::High => 2,
        }
    }
}

/// Everything the horizon line reads from shared game configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizonConfig {
    pub width: i32,
    pub height: i32,
    pub y_pos: i32,
    pub target_fps: u32,
    pub density: Density,
    pub bump_threshold: f64,
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            width: HORIZON_WIDTH,
            height: HORIZON_HEIGHT,
            y_pos: HORIZON_Y_POS,
            target_fps: TARGET_FPS,
            density: Density::Standard,
            bump_threshold: DEFAULT_BUMP_THRESHOLD,
        }
    }
}

impl HorizonConfig {
    #[must_use]
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    #[must_use]
    pub fn with_bump_threshold(mut self, bump_threshold: f64) -> Self {
        self.bump_threshold = bump_threshold;
        self
    }
}
