//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit timestep only (the caller supplies dt)
//! - Seeded RNG only
//! - Stable obstacle order (creation order, oldest first)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collision_verdict, hits_obstacle, out_of_bounds};
pub use state::{Avatar, GameEvent, GamePhase, GameState, Obstacle};
pub use tick::{TickInput, tick};
