//! Scene snapshots and the renderer seam
//!
//! The simulation hands a renderer plain rectangles in playfield
//! coordinates; how they get drawn is the backend's business. The shipped
//! backend lives in `terminal`.

pub mod terminal;

use std::io;

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState};

/// What a rectangle represents, so backends can pick colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Avatar,
    PipeTop,
    PipeBottom,
    Ground,
}

/// One rectangle in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RectShape {
    pub kind: ShapeKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything a backend needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    /// Playfield dimensions the rects are expressed in
    pub width: f32,
    pub height: f32,
    pub rects: Vec<RectShape>,
    pub score: u32,
    pub best: u32,
    pub phase: GamePhase,
}

impl Scene {
    /// Snapshot the drawable state of a session
    pub fn capture(state: &GameState, best: u32) -> Self {
        let tuning = &state.tuning;
        let mut rects = Vec::with_capacity(state.obstacles.len() * 2 + 2);

        for obstacle in &state.obstacles {
            let top = obstacle.top_rect(tuning);
            rects.push(RectShape {
                kind: ShapeKind::PipeTop,
                x: top.x,
                y: top.y,
                width: top.width,
                height: top.height,
            });
            let bottom = obstacle.bottom_rect(tuning);
            rects.push(RectShape {
                kind: ShapeKind::PipeBottom,
                x: bottom.x,
                y: bottom.y,
                width: bottom.width,
                height: bottom.height,
            });
        }

        rects.push(RectShape {
            kind: ShapeKind::Ground,
            x: 0.0,
            y: tuning.floor_y(),
            width: tuning.width,
            height: tuning.ground_height,
        });

        let avatar = state.avatar.aabb();
        rects.push(RectShape {
            kind: ShapeKind::Avatar,
            x: avatar.x,
            y: avatar.y,
            width: avatar.width,
            height: avatar.height,
        });

        Self {
            width: tuning.width,
            height: tuning.height,
            rects,
            score: state.score,
            best,
            phase: state.phase,
        }
    }
}

/// A drawing backend; the core never sees past this trait
pub trait Renderer {
    fn draw(&mut self, scene: &Scene) -> io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Obstacle;
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_lists_every_shape() {
        let mut state = GameState::new(1, Tuning::default()).unwrap();
        state.start();
        state.obstacles.push(Obstacle::spawn(300.0, 200.0));
        state.obstacles.push(Obstacle::spawn(100.0, 120.0));

        let scene = Scene::capture(&state, 7);
        // Two rects per obstacle, plus ground and avatar
        assert_eq!(scene.rects.len(), 6);
        assert_eq!(scene.best, 7);
        assert_eq!(scene.phase, GamePhase::Running);
        assert!(
            scene
                .rects
                .iter()
                .filter(|r| r.kind == ShapeKind::Avatar)
                .count()
                == 1
        );
        // The avatar is drawn last so it stays on top
        assert_eq!(scene.rects.last().unwrap().kind, ShapeKind::Avatar);
    }
}
