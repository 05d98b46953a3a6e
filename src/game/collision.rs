//! Collision detection between the bird, the pipes and the screen edges.
//!
//! Only the current tick's post-update positions are tested, so a very fast
//! bird can pass through a pipe corner between two ticks. That is part of
//! the game's feel and is kept as is.

use serde::Serialize;

use super::round::Round;

/// Axis-aligned rectangle in screen space (top-left origin, y down).
///
/// Hitboxes sit on whole pixels: `Aabb::pixel` drops the fractional part
/// of the position, toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle snapped to the pixel grid.
    pub fn pixel(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(x.trunc(), y.trunc(), w, h)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Overlap test with a non-zero shared area.
    ///
    /// Rectangles that only touch along an edge do not intersect, and an
    /// empty rectangle never intersects anything.
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Crash {
    /// The bird overlapped a pipe segment.
    Pipe,
    /// The bird left the top of the screen or fell past the bottom.
    OutOfBounds,
}

/// Check the round's current positions for anything that ends it.
pub fn detect_crash(round: &Round) -> Option<Crash> {
    let bird = round.bird.hitbox();
    let hit_pipe = round
        .pipes
        .iter()
        .flat_map(|pipe| pipe.hitboxes())
        .any(|segment| bird.intersects(&segment));

    if hit_pipe {
        Some(Crash::Pipe)
    } else if round.bird.is_out_of_bounds() {
        Some(Crash::OutOfBounds)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{bird::Bird, pipe::Pipe};

    fn round_with(bird_y: f32, pipes: [Pipe; 3]) -> Round {
        let mut bird = Bird::new();
        bird.y = bird_y;
        Round::with_entities(bird, pipes)
    }

    /// Pipes far to the right, out of the bird's column.
    fn distant_pipes() -> [Pipe; 3] {
        [
            Pipe::with_gap(400.0, 250),
            Pipe::with_gap(700.0, 250),
            Pipe::with_gap(1000.0, 250),
        ]
    }

    #[test]
    fn test_overlap_detected() {
        let bird = Aabb::new(30.0, 100.0, 50.0, 50.0);
        let top = Aabb::new(30.0, 0.0, 60.0, 140.0);
        assert!(bird.intersects(&top));
        assert!(top.intersects(&bird));
    }

    #[test]
    fn test_no_overlap_above_bird() {
        let bird = Aabb::new(30.0, 100.0, 50.0, 50.0);
        let top = Aabb::new(30.0, 0.0, 60.0, 90.0);
        assert!(!bird.intersects(&top));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let bird = Aabb::new(30.0, 100.0, 50.0, 50.0);
        // Shares the bird's top edge
        assert!(!bird.intersects(&Aabb::new(30.0, 0.0, 60.0, 100.0)));
        // Shares the bird's right edge
        assert!(!bird.intersects(&Aabb::new(80.0, 0.0, 60.0, 600.0)));
        // One pixel further and they overlap
        assert!(bird.intersects(&Aabb::new(79.0, 0.0, 60.0, 600.0)));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let bird = Aabb::new(30.0, 560.0, 50.0, 50.0);
        let flat = Aabb::new(30.0, 600.0, 60.0, 0.0);
        assert!(!bird.intersects(&flat));
    }

    #[test]
    fn test_crash_into_top_segment() {
        let round = round_with(
            100.0,
            [
                Pipe::with_gap(30.0, 140),
                Pipe::with_gap(700.0, 250),
                Pipe::with_gap(1000.0, 250),
            ],
        );
        assert_eq!(detect_crash(&round), Some(Crash::Pipe));
    }

    #[test]
    fn test_passing_through_gap() {
        let round = round_with(
            100.0,
            [
                Pipe::with_gap(30.0, 100),
                Pipe::with_gap(700.0, 250),
                Pipe::with_gap(1000.0, 250),
            ],
        );
        // Gap spans 100..300, bird spans 100..150
        assert_eq!(detect_crash(&round), None);
    }

    #[test]
    fn test_crash_into_bottom_segment() {
        let round = round_with(
            280.0,
            [
                Pipe::with_gap(0.0, 100),
                Pipe::with_gap(700.0, 250),
                Pipe::with_gap(1000.0, 250),
            ],
        );
        // Bottom segment starts at 300, bird spans 280..330
        assert_eq!(detect_crash(&round), Some(Crash::Pipe));
    }

    #[test]
    fn test_pixel_rect_truncates_toward_zero() {
        assert_eq!(
            Aabb::pixel(30.0, 250.5, 50.0, 50.0),
            Aabb::new(30.0, 250.0, 50.0, 50.0)
        );
        assert_eq!(
            Aabb::pixel(-2.5, -0.5, 60.0, 10.0),
            Aabb::new(-2.0, 0.0, 60.0, 10.0)
        );
    }

    #[test]
    fn test_half_pixel_bird_resting_on_bottom_segment() {
        let round = round_with(
            250.5,
            [
                Pipe::with_gap(30.0, 100),
                Pipe::with_gap(700.0, 250),
                Pipe::with_gap(1000.0, 250),
            ],
        );
        // Hitbox snaps to 250..300, bottom segment starts at 300
        assert_eq!(detect_crash(&round), None);
    }

    #[test]
    fn test_half_pixel_bird_clips_top_segment() {
        let round = round_with(
            99.5,
            [
                Pipe::with_gap(30.0, 100),
                Pipe::with_gap(700.0, 250),
                Pipe::with_gap(1000.0, 250),
            ],
        );
        // Hitbox snaps to 99..149, top segment ends at 100
        assert_eq!(detect_crash(&round), Some(Crash::Pipe));
    }

    #[test]
    fn test_out_of_bounds_ends_round() {
        assert_eq!(
            detect_crash(&round_with(601.0, distant_pipes())),
            Some(Crash::OutOfBounds)
        );
        assert_eq!(
            detect_crash(&round_with(-1.0, distant_pipes())),
            Some(Crash::OutOfBounds)
        );
    }

    #[test]
    fn test_in_bounds_round_continues() {
        for y in [0.0, 1.0, 299.5, 598.0, 599.0] {
            assert_eq!(detect_crash(&round_with(y, distant_pipes())), None, "y={y}");
        }
    }
}
