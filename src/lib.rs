//! Flapdash - a gravity-and-gates arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `renderer`: Scene snapshots and the terminal backend
//! - `platform`: Fixed-timestep scheduling
//! - `highscores`: Best-score persistence
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use highscores::BestScore;
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (y grows downward, origin at top-left)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Height of the ground strip; the floor is its top edge
    pub const GROUND_HEIGHT: f32 = 30.0;

    /// Avatar defaults - x never changes, only y
    pub const AVATAR_X: f32 = 80.0;
    pub const AVATAR_START_Y: f32 = 300.0;
    pub const AVATAR_WIDTH: f32 = 40.0;
    pub const AVATAR_HEIGHT: f32 = 30.0;

    /// Gravity acceleration (px/s², downward). Tuned against a 16 ms
    /// reference frame: 0.5 px/frame².
    pub const GRAVITY: f32 = 1953.125;
    /// Velocity set by a flap (px/s, negative = up): -10 px/frame
    pub const FLAP_IMPULSE: f32 = -625.0;

    /// Obstacle defaults
    pub const PIPE_WIDTH: f32 = 60.0;
    pub const PIPE_GAP: f32 = 150.0;
    /// Leftward scroll speed (px/s): 3 px/frame
    pub const PIPE_SPEED: f32 = 187.5;
    /// Seconds between obstacle spawns
    pub const PIPE_INTERVAL: f32 = 1.5;
    /// Smallest allowed space above the gap
    pub const GAP_MARGIN_TOP: f32 = 50.0;
    /// Smallest allowed space below the gap (measured from the playfield
    /// bottom, so it already covers the ground strip)
    pub const GAP_MARGIN_BOTTOM: f32 = 100.0;
}
