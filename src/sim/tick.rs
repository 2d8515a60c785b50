//! Simulation step
//!
//! Advances one elapsed-time slice: avatar physics, obstacle spawning and
//! scrolling, passage scoring, and the terminal collision verdict. All
//! motion is scaled by `dt`, so the result does not depend on how the
//! caller slices time.

use super::collision::collision_verdict;
use super::state::{GameEvent, GamePhase, GameState, Obstacle};

/// Input commands for a single tick (deterministic)
///
/// Triggers arriving faster than one per tick coalesce into one flag;
/// last write wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Impulse the avatar upward (key press / pointer click)
    pub flap: bool,
    /// Start or restart the session
    pub start: bool,
}

/// Advance the game state by one timestep of `dt` seconds
///
/// Outside the Running phase nothing moves; `start` is the only way back in.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.start {
        state.start();
        events.push(GameEvent::Started);
    }

    if state.phase != GamePhase::Running {
        return events;
    }

    state.time_ticks += 1;

    // Avatar physics; a flap overwrites velocity for this step
    if input.flap {
        events.push(GameEvent::Flapped);
    }
    state.avatar.step(dt, input.flap);

    // Spawn on a fixed cadence. The timer is primed at start so the first
    // tick of a session produces the first obstacle.
    state.spawn_timer += dt;
    while state.spawn_timer >= state.tuning.spawn_interval {
        state.spawn_timer -= state.tuning.spawn_interval;
        let gap_top = state.draw_gap_top();
        let spawn_x = state.tuning.width;
        state.obstacles.push(Obstacle::spawn(spawn_x, gap_top));
    }

    // Scroll obstacles and credit passages. Each obstacle scores at most
    // once, guarded by its `passed` flag.
    let avatar_left = state.avatar.pos.x;
    let scroll = state.tuning.scroll_speed * dt;
    for obstacle in &mut state.obstacles {
        obstacle.x -= scroll;
        if !obstacle.passed && obstacle.right_edge(&state.tuning) < avatar_left {
            obstacle.passed = true;
            state.score += 1;
            events.push(GameEvent::Scored);
        }
    }

    // Drop obstacles whose right edge scrolled past the left boundary
    state.obstacles.retain(|o| o.right_edge(&state.tuning) >= 0.0);

    if collision_verdict(&state.avatar, &state.obstacles, &state.tuning) {
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::Crashed);
    }

    events
}
