//! Data-driven game balance
//!
//! Everything the simulation needs to know about the playfield and physics
//! lives here so callers can supply their own numbers. A `Tuning` is
//! validated once at session start; a playfield that cannot host a gap is a
//! configuration error, not something the spawner papers over.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Invalid game configuration, rejected at session start
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("playfield dimensions must be positive (got {width}x{height})")]
    EmptyPlayfield { width: f32, height: f32 },
    #[error("gap of {gap} plus margins {top}+{bottom} does not fit a playfield {height} tall")]
    GapDoesNotFit {
        gap: f32,
        top: f32,
        bottom: f32,
        height: f32,
    },
    #[error("obstacle width must be positive (got {0})")]
    BadPipeWidth(f32),
    #[error("scroll speed and spawn interval must be positive")]
    BadScrollRate,
    #[error("avatar does not start inside the playfield")]
    AvatarOutOfBounds,
}

/// Playfield geometry and physics constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Playfield width (px)
    pub width: f32,
    /// Playfield height (px)
    pub height: f32,
    /// Ground strip height; the floor sits at `height - ground_height`
    pub ground_height: f32,

    /// Avatar geometry and starting position
    pub avatar_x: f32,
    pub avatar_start_y: f32,
    pub avatar_width: f32,
    pub avatar_height: f32,

    /// Gravity acceleration (px/s², downward)
    pub gravity: f32,
    /// Velocity a flap sets (px/s, negative = up)
    pub flap_impulse: f32,

    /// Obstacle geometry and motion
    pub pipe_width: f32,
    pub gap_height: f32,
    /// Leftward scroll speed (px/s)
    pub scroll_speed: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Minimum space above the gap
    pub gap_margin_top: f32,
    /// Minimum space below the gap, measured from the playfield bottom
    pub gap_margin_bottom: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            avatar_x: AVATAR_X,
            avatar_start_y: AVATAR_START_Y,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            gravity: GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            pipe_width: PIPE_WIDTH,
            gap_height: PIPE_GAP,
            scroll_speed: PIPE_SPEED,
            spawn_interval: PIPE_INTERVAL,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
        }
    }
}

impl Tuning {
    /// Top of the ground strip; crossing it is terminal
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Highest allowed `gap_top` for a spawned obstacle
    #[inline]
    pub fn gap_top_min(&self) -> f32 {
        self.gap_margin_top
    }

    /// Lowest allowed `gap_top` for a spawned obstacle
    #[inline]
    pub fn gap_top_max(&self) -> f32 {
        self.height - self.gap_height - self.gap_margin_bottom
    }

    /// Check that a session can actually be played with these numbers
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(TuningError::EmptyPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        if self.pipe_width <= 0.0 {
            return Err(TuningError::BadPipeWidth(self.pipe_width));
        }
        if self.scroll_speed <= 0.0 || self.spawn_interval <= 0.0 {
            return Err(TuningError::BadScrollRate);
        }
        // The spawner draws gap_top from [gap_top_min, gap_top_max]; an
        // empty range means no obstacle can ever be placed.
        if self.gap_top_max() < self.gap_top_min() {
            return Err(TuningError::GapDoesNotFit {
                gap: self.gap_height,
                top: self.gap_margin_top,
                bottom: self.gap_margin_bottom,
                height: self.height,
            });
        }
        if self.avatar_x < 0.0
            || self.avatar_x + self.avatar_width > self.width
            || self.avatar_start_y < 0.0
            || self.avatar_start_y + self.avatar_height > self.floor_y()
        {
            return Err(TuningError::AvatarOutOfBounds);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_gap_taller_than_playfield_rejected() {
        let tuning = Tuning {
            gap_height: 500.0,
            ..Default::default()
        };
        // 500 + 50 + 100 > 600
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_zero_playfield_rejected() {
        let tuning = Tuning {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::EmptyPlayfield { .. })
        ));
    }

    #[test]
    fn test_avatar_below_floor_rejected() {
        let tuning = Tuning {
            avatar_start_y: 580.0,
            ..Default::default()
        };
        // 580 + 30 > floor at 570
        assert_eq!(tuning.validate(), Err(TuningError::AvatarOutOfBounds));
    }

    #[test]
    fn test_gap_range_matches_margins() {
        let t = Tuning::default();
        assert_eq!(t.gap_top_min(), 50.0);
        assert_eq!(t.gap_top_max(), 600.0 - 150.0 - 100.0);
    }
}
