//! Pipe obstacles.
//!
//! A pipe is a top segment hanging from the ceiling and a bottom segment
//! standing on the floor, separated by a fixed gap. Only the top segment's
//! height (`gap_top`) is stored; everything else is derived.

use bevy::reflect::Reflect;
use rand::Rng;
use serde::Serialize;

use super::{SCREEN_HEIGHT, collision::Aabb};

/// Horizontal scroll per tick.
pub const PIPE_SPEED: f32 = 3.0;

/// Vertical clearance between the top and bottom segments.
pub const PIPE_GAP: u32 = 200;

pub const PIPE_WIDTH: f32 = 60.0;

/// Smallest top-segment height a fresh pipe can get.
pub const PIPE_MIN_HEIGHT: u32 = 100;

/// Largest top-segment height a fresh pipe can get.
pub const PIPE_MAX_HEIGHT: u32 = 400;

/// Horizontal distance between the pipes placed at round start.
pub const PIPE_SPACING: f32 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Reflect)]
pub struct Pipe {
    /// Left edge.
    pub x: f32,
    /// Height of the top segment, in `PIPE_MIN_HEIGHT..=PIPE_MAX_HEIGHT`.
    pub gap_top: u32,
}

impl Pipe {
    /// Create a pipe at `x` with a uniformly random gap height.
    pub fn spawn<R: Rng>(x: f32, rng: &mut R) -> Self {
        Self::with_gap(x, rng.random_range(PIPE_MIN_HEIGHT..=PIPE_MAX_HEIGHT))
    }

    pub fn with_gap(x: f32, gap_top: u32) -> Self {
        Self { x, gap_top }
    }

    pub fn scroll(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// True once the right edge has passed the left edge of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.x + PIPE_WIDTH < 0.0
    }

    /// Y coordinate where the bottom segment begins.
    pub fn gap_bottom(&self) -> f32 {
        (self.gap_top + PIPE_GAP) as f32
    }

    pub fn bottom_height(&self) -> f32 {
        SCREEN_HEIGHT - self.gap_bottom()
    }

    pub fn top_hitbox(&self) -> Aabb {
        Aabb::pixel(self.x, 0.0, PIPE_WIDTH, self.gap_top as f32)
    }

    pub fn bottom_hitbox(&self) -> Aabb {
        Aabb::pixel(self.x, self.gap_bottom(), PIPE_WIDTH, self.bottom_height())
    }

    pub fn hitboxes(&self) -> [Aabb; 2] {
        [self.top_hitbox(), self.bottom_hitbox()]
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_spawn_gap_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen_min = u32::MAX;
        let mut seen_max = 0;

        for _ in 0..5_000 {
            let pipe = Pipe::spawn(400.0, &mut rng);
            assert!((PIPE_MIN_HEIGHT..=PIPE_MAX_HEIGHT).contains(&pipe.gap_top));
            assert_eq!(pipe.x, 400.0);
            seen_min = seen_min.min(pipe.gap_top);
            seen_max = seen_max.max(pipe.gap_top);
        }

        // Both ends of the inclusive range are reachable
        assert_eq!(seen_min, PIPE_MIN_HEIGHT);
        assert_eq!(seen_max, PIPE_MAX_HEIGHT);
    }

    #[test]
    fn test_scroll() {
        let mut pipe = Pipe::with_gap(400.0, 150);
        pipe.scroll();
        assert_eq!(pipe.x, 397.0);
        assert_eq!(pipe.gap_top, 150);
    }

    #[test]
    fn test_off_screen_uses_right_edge() {
        assert!(!Pipe::with_gap(0.0, 150).is_off_screen());
        assert!(!Pipe::with_gap(-60.0, 150).is_off_screen());
        assert!(Pipe::with_gap(-61.0, 150).is_off_screen());
    }

    #[test]
    fn test_segments_leave_gap_clear() {
        for gap_top in [PIPE_MIN_HEIGHT, 250, PIPE_MAX_HEIGHT] {
            let pipe = Pipe::with_gap(100.0, gap_top);
            let top = pipe.top_hitbox();
            let bottom = pipe.bottom_hitbox();

            assert_eq!(top.y, 0.0);
            assert_eq!(top.h, gap_top as f32);
            assert_eq!(bottom.y - (top.y + top.h), PIPE_GAP as f32);
            assert_eq!(bottom.y + bottom.h, SCREEN_HEIGHT);
            assert!(!top.intersects(&bottom));
        }
    }

    #[test]
    fn test_tallest_top_leaves_empty_bottom() {
        let pipe = Pipe::with_gap(0.0, PIPE_MAX_HEIGHT);
        assert_eq!(pipe.bottom_height(), 0.0);
        assert!(pipe.bottom_hitbox().is_empty());
    }
}
