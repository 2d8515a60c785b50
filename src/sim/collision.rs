//! Axis-aligned collision detection
//!
//! The terminal verdict for a session: the avatar's bounding box against the
//! floor/ceiling and against the pipe rectangles of every live obstacle.
//! Overlap is strict on all four sides - touching edges never collide.

use serde::{Deserialize, Serialize};

use super::state::{Avatar, Obstacle};
use crate::tuning::Tuning;

/// Axis-aligned bounding box (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test; shared edges do not count
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// True if the avatar crossed the floor (top of the ground strip) or the
/// ceiling. Resting exactly on either boundary is not terminal.
pub fn out_of_bounds(avatar: &Avatar, tuning: &Tuning) -> bool {
    let aabb = avatar.aabb();
    aabb.bottom() > tuning.floor_y() || aabb.y < 0.0
}

/// True if the avatar overlaps either pipe of one obstacle
pub fn hits_obstacle(avatar: &Avatar, obstacle: &Obstacle, tuning: &Tuning) -> bool {
    let aabb = avatar.aabb();
    aabb.intersects(&obstacle.top_rect(tuning)) || aabb.intersects(&obstacle.bottom_rect(tuning))
}

/// Terminal verdict for the whole playfield
pub fn collision_verdict(avatar: &Avatar, obstacles: &[Obstacle], tuning: &Tuning) -> bool {
    out_of_bounds(avatar, tuning)
        || obstacles
            .iter()
            .any(|obstacle| hits_obstacle(avatar, obstacle, tuning))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn avatar_at(x: f32, y: f32) -> Avatar {
        let mut avatar = Avatar::new(&Tuning::default());
        avatar.pos.x = x;
        avatar.pos.y = y;
        avatar
    }

    #[test]
    fn test_touching_edge_is_no_collision() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge exactly
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        // Shares the y=10 edge exactly
        let c = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
        // Corner contact only
        let d = Aabb::new(10.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_one_unit_overlap_is_collision() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(9.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        let c = Aabb::new(0.0, 9.0, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_floor_boundary() {
        let tuning = Tuning::default();
        // Floor at 570; avatar is 30 tall
        let resting = avatar_at(80.0, 540.0);
        assert!(!out_of_bounds(&resting, &tuning));
        let sunk = avatar_at(80.0, 541.0);
        assert!(out_of_bounds(&sunk, &tuning));
    }

    #[test]
    fn test_ceiling_boundary() {
        let tuning = Tuning::default();
        let touching = avatar_at(80.0, 0.0);
        assert!(!out_of_bounds(&touching, &tuning));
        let above = avatar_at(80.0, -1.0);
        assert!(out_of_bounds(&above, &tuning));
    }

    #[test]
    fn test_avatar_in_gap_is_safe() {
        let tuning = Tuning::default();
        // Gap from 200 to 350; avatar 40x30 centered in it, inside the
        // obstacle's x range
        let obstacle = Obstacle::spawn(70.0, 200.0);
        let avatar = avatar_at(80.0, 260.0);
        assert!(!hits_obstacle(&avatar, &obstacle, &tuning));
        assert!(!collision_verdict(&avatar, &[obstacle], &tuning));
    }

    #[test]
    fn test_avatar_clips_top_pipe() {
        let tuning = Tuning::default();
        let obstacle = Obstacle::spawn(70.0, 200.0);
        // Avatar top at 199: one unit inside the top pipe (0..200)
        let avatar = avatar_at(80.0, 199.0);
        assert!(hits_obstacle(&avatar, &obstacle, &tuning));
        // Top exactly at the pipe's lower edge: no collision
        let grazing = avatar_at(80.0, 200.0);
        assert!(!hits_obstacle(&grazing, &obstacle, &tuning));
    }

    #[test]
    fn test_avatar_clips_bottom_pipe() {
        let tuning = Tuning::default();
        let obstacle = Obstacle::spawn(70.0, 200.0);
        // Bottom pipe starts at 350; avatar is 30 tall
        let grazing = avatar_at(80.0, 320.0);
        assert!(!hits_obstacle(&grazing, &obstacle, &tuning));
        let clipping = avatar_at(80.0, 321.0);
        assert!(hits_obstacle(&clipping, &obstacle, &tuning));
    }

    #[test]
    fn test_x_range_respected() {
        let tuning = Tuning::default();
        // Obstacle fully to the right of the avatar (80 + 40 = 120)
        let ahead = Obstacle::spawn(120.0, 200.0);
        let avatar = avatar_at(80.0, 100.0); // inside top-pipe y-range
        assert!(!hits_obstacle(&avatar, &ahead, &tuning));
        // One unit of horizontal overlap
        let overlapping = Obstacle::spawn(119.0, 200.0);
        assert!(hits_obstacle(&avatar, &overlapping, &tuning));
    }
}
