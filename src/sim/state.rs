//! Game state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::{Tuning, TuningError};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start
    Idle,
    /// Active gameplay
    Running,
    /// Run ended
    GameOver,
}

/// Things that happened during a tick, surfaced so frontends can react
/// (HUD, sound) without the simulation knowing about them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A session was (re)started
    Started,
    /// The avatar was impulsed upward
    Flapped,
    /// An obstacle was passed; score already incremented
    Scored,
    /// Terminal verdict; phase is now GameOver
    Crashed,
}

/// The player-controlled avatar
///
/// `pos.x` never changes during a session; gravity and flaps only move y.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity (px/s, positive = down)
    pub velocity: f32,
    /// Gravity acceleration (px/s²)
    pub gravity: f32,
    /// Velocity a flap sets (px/s, negative = up)
    pub impulse: f32,
}

impl Avatar {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.avatar_x, tuning.avatar_start_y),
            width: tuning.avatar_width,
            height: tuning.avatar_height,
            velocity: 0.0,
            gravity: tuning.gravity,
            impulse: tuning.flap_impulse,
        }
    }

    /// Advance one step. A flap overwrites velocity for this step (repeated
    /// triggers within a tick coalesce upstream); gravity resumes on the
    /// next step.
    pub fn step(&mut self, dt: f32, flapped: bool) {
        if flapped {
            self.velocity = self.impulse;
        } else {
            self.velocity += self.gravity * dt;
        }
        self.pos.y += self.velocity * dt;
    }

    /// Bounding box for collision checks
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// A scrolling gated obstacle: a top pipe from the ceiling down to
/// `gap_top`, and a bottom pipe from `gap_top + gap_height` to the floor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge (px, decreases every step)
    pub x: f32,
    /// Bottom of the top pipe / top of the gap
    pub gap_top: f32,
    /// Set once the avatar has been credited for this obstacle
    pub passed: bool,
}

impl Obstacle {
    pub fn spawn(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    #[inline]
    pub fn right_edge(&self, tuning: &Tuning) -> f32 {
        self.x + tuning.pipe_width
    }

    /// Rectangle of the top pipe (ceiling down to the gap)
    pub fn top_rect(&self, tuning: &Tuning) -> Aabb {
        Aabb::new(self.x, 0.0, tuning.pipe_width, self.gap_top)
    }

    /// Rectangle of the bottom pipe (below the gap to the playfield bottom)
    pub fn bottom_rect(&self, tuning: &Tuning) -> Aabb {
        let top = self.gap_top + tuning.gap_height;
        Aabb::new(self.x, top, tuning.pipe_width, tuning.height - top)
    }
}

/// Complete session state
///
/// Owns the avatar and obstacle sequence for the session's lifetime; the
/// best score lives with the persistence collaborator, not here.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Validated session configuration
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Obstacles passed this session
    pub score: u32,
    /// Player avatar
    pub avatar: Avatar,
    /// Live obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds accumulated toward the next spawn
    pub(crate) spawn_timer: f32,
    /// Injectable random source for gap placement
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session in the Idle phase. Fails fast on a configuration
    /// that could never spawn an obstacle or host the avatar.
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        let avatar = Avatar::new(&tuning);
        Ok(Self {
            seed,
            phase: GamePhase::Idle,
            score: 0,
            avatar,
            obstacles: Vec::new(),
            time_ticks: 0,
            spawn_timer: tuning.spawn_interval,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        })
    }

    /// Start or restart a session: score 0, avatar at its initial position
    /// and velocity, no obstacles. Valid from any phase and idempotent.
    pub fn start(&mut self) {
        self.score = 0;
        self.avatar = Avatar::new(&self.tuning);
        self.obstacles.clear();
        // Primed so the first Running tick spawns the first obstacle
        self.spawn_timer = self.tuning.spawn_interval;
        self.phase = GamePhase::Running;
    }

    /// Draw a gap position such that gap and margins stay within bounds
    pub(crate) fn draw_gap_top(&mut self) -> f32 {
        let (min, max) = (self.tuning.gap_top_min(), self.tuning.gap_top_max());
        self.rng.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_idle_with_clean_slate() {
        let state = GameState::new(1, Tuning::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.avatar.pos, Vec2::new(80.0, 300.0));
        assert_eq!(state.avatar.velocity, 0.0);
    }

    #[test]
    fn test_new_rejects_bad_tuning() {
        let tuning = Tuning {
            gap_height: 600.0,
            ..Default::default()
        };
        assert!(GameState::new(1, tuning).is_err());
    }

    #[test]
    fn test_start_twice_yields_same_reset() {
        let mut state = GameState::new(7, Tuning::default()).unwrap();
        state.start();
        let first = (
            state.score,
            state.avatar.clone(),
            state.obstacles.clone(),
            state.phase,
        );

        // Dirty the session, then start again
        state.score = 12;
        state.avatar.pos.y = 40.0;
        state.avatar.velocity = -300.0;
        state.obstacles.push(Obstacle::spawn(200.0, 100.0));
        state.phase = GamePhase::GameOver;
        state.start();

        assert_eq!(first.0, state.score);
        assert_eq!(first.1, state.avatar);
        assert_eq!(first.2, state.obstacles);
        assert_eq!(first.3, state.phase);
    }

    #[test]
    fn test_draw_gap_top_stays_in_margins() {
        let mut state = GameState::new(42, Tuning::default()).unwrap();
        let (min, max) = (
            state.tuning.gap_top_min(),
            state.tuning.gap_top_max(),
        );
        for _ in 0..200 {
            let gap_top = state.draw_gap_top();
            assert!(gap_top >= min && gap_top <= max);
        }
    }
}
