//! Scrolling terrain boundaries
//!
//! The corridor is bounded by two independent polylines (floor and ceiling),
//! each a bounded random walk: points spaced exactly one segment apart in x,
//! with y sampled uniformly from a per-boundary range. Points scroll left
//! each tick; once the leading point leaves the screen by a full segment it
//! is recycled to the right edge with a fresh height.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

/// Which side of the corridor a boundary forms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    Floor,
    Ceiling,
}

impl BoundaryKind {
    /// Sampling range for new point heights.
    ///
    /// The ceiling range depends on the current corridor height and can
    /// invert for large corridors even inside the tuning clamp; the upper
    /// bound is raised to the lower bound so sampling stays well-defined.
    pub fn sample_range(&self, corridor_height: f32) -> (f32, f32) {
        match self {
            BoundaryKind::Floor => (FLOOR_Y_MIN, FLOOR_Y_MAX),
            BoundaryKind::Ceiling => {
                let lo = CEILING_Y_MIN;
                let hi = (SCREEN_HEIGHT - corridor_height - CEILING_MARGIN).max(lo);
                (lo, hi)
            }
        }
    }
}

/// An ordered scrolling polyline of terrain points
#[derive(Debug, Clone)]
pub struct Boundary {
    pub kind: BoundaryKind,
    pub points: Vec<Vec2>,
}

impl Boundary {
    /// Fill a boundary with freshly sampled points at x = i * SEGMENT_WIDTH
    pub fn generate<R: Rng>(kind: BoundaryKind, rng: &mut R, corridor_height: f32) -> Self {
        let (lo, hi) = kind.sample_range(corridor_height);
        let points = (0..BOUNDARY_POINTS)
            .map(|i| Vec2::new(i as f32 * SEGMENT_WIDTH, rng.random_range(lo..=hi)))
            .collect();
        Self { kind, points }
    }

    /// Scroll every point left by `scroll_speed` pixels
    pub fn advance(&mut self, scroll_speed: f32) {
        for p in &mut self.points {
            p.x -= scroll_speed;
        }
    }

    /// Splice off the leading point once it is a full segment off-screen and
    /// append a fresh one past the trailing point. At most one splice per
    /// call; heights use the current corridor height.
    pub fn recycle<R: Rng>(&mut self, rng: &mut R, corridor_height: f32) {
        let Some(head) = self.points.first() else {
            return;
        };
        if head.x >= -SEGMENT_WIDTH {
            return;
        }
        self.points.remove(0);
        if let Some(last) = self.points.last().copied() {
            let (lo, hi) = self.kind.sample_range(corridor_height);
            self.points
                .push(Vec2::new(last.x + SEGMENT_WIDTH, rng.random_range(lo..=hi)));
        }
    }
}
