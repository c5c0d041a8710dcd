//! Game state and core simulation types
//!
//! Everything the fixed-rate loop mutates lives in one owned `GameState`;
//! there are no ambient globals and no cross-thread sharing.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::terrain::{Boundary, BoundaryKind};
use crate::consts::*;
use crate::tuning::TuningState;

/// The steerable sprite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    /// Fixed horizontal position
    pub x: f32,
    pub y: f32,
    /// Level state of the ascend key, consumed once per tick
    pub ascending: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            ascending: false,
        }
    }
}

impl Player {
    /// Move one tick's worth vertically (sign from the ascend state) and
    /// clamp the sprite box to the screen
    pub fn apply_motion(&mut self, speed: f32) {
        if self.ascending {
            self.y -= speed;
        } else {
            self.y += speed;
        }
        self.y = self.y.clamp(0.0, SCREEN_HEIGHT - SPRITE_SIZE);
    }

    /// Current tilt in degrees: nose up while climbing, nose down while diving
    pub fn tilt_angle(&self, max_deg: f32) -> f32 {
        if self.ascending { max_deg } else { -max_deg }
    }

    /// Trail emission point: sprite center offset along the tilt direction
    /// (y negated because the screen axis grows downward)
    pub fn emission_point(&self, tilt_deg: f32) -> Vec2 {
        let rad = tilt_deg.to_radians();
        Vec2::new(
            self.x + SPRITE_SIZE / 2.0 + rad.cos() * TRAIL_RADIUS,
            self.y + SPRITE_SIZE / 2.0 - rad.sin() * TRAIL_RADIUS,
        )
    }

    /// Back to the fixed start position
    pub fn respawn(&mut self) {
        self.x = PLAYER_START_X;
        self.y = PLAYER_START_Y;
    }
}

/// Decaying polyline behind the player
#[derive(Debug, Clone, Default)]
pub struct Trail {
    points: Vec<Vec2>,
}

impl Trail {
    /// Scroll with the terrain, not the player (the smear effect)
    pub fn advance(&mut self, scroll_speed: f32) {
        for p in &mut self.points {
            p.x -= scroll_speed;
        }
    }

    /// Append the newest emission point, evicting the oldest past the cap
    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
        if self.points.len() > TRAIL_LENGTH {
            self.points.remove(0);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Complete game state, owned by the loop and advanced deterministically
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Collision resets so far (diagnostic only)
    pub resets: u32,
    pub player: Player,
    pub floor: Boundary,
    pub ceiling: Boundary,
    pub trail: Trail,
    pub tuning: TuningState,
    rng: Pcg32,
}

impl GameState {
    /// Fresh state with default tuning and seeded terrain
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, TuningState::default())
    }

    pub fn with_tuning(seed: u64, tuning: TuningState) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let floor = Boundary::generate(BoundaryKind::Floor, &mut rng, tuning.corridor_height);
        let ceiling = Boundary::generate(BoundaryKind::Ceiling, &mut rng, tuning.corridor_height);
        Self {
            seed,
            time_ticks: 0,
            resets: 0,
            player: Player::default(),
            floor,
            ceiling,
            trail: Trail::default(),
            tuning,
            rng,
        }
    }

    /// Collision recovery: respawn the player and regenerate terrain and
    /// trail together. The only consequence of a crash; no lives, no score.
    pub fn reset_run(&mut self) {
        self.player.respawn();
        self.floor = Boundary::generate(
            BoundaryKind::Floor,
            &mut self.rng,
            self.tuning.corridor_height,
        );
        self.ceiling = Boundary::generate(
            BoundaryKind::Ceiling,
            &mut self.rng,
            self.tuning.corridor_height,
        );
        self.trail.clear();
        self.resets += 1;
    }

    /// Splice both boundaries with the current corridor height
    pub fn recycle_boundaries(&mut self) {
        let corridor = self.tuning.corridor_height;
        self.floor.recycle(&mut self.rng, corridor);
        self.ceiling.recycle(&mut self.rng, corridor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn climb_is_monotonic_and_clamped() {
        let mut player = Player::default();
        player.ascending = true;

        let mut prev = player.y;
        for _ in 0..10 {
            player.apply_motion(CLIMB_SPEED);
            assert_eq!(player.y, prev - CLIMB_SPEED);
            prev = player.y;
        }

        // Keep climbing well past the top edge
        for _ in 0..100 {
            player.apply_motion(CLIMB_SPEED);
        }
        assert_eq!(player.y, 0.0);
    }

    #[test]
    fn dive_clamps_at_bottom_edge() {
        let mut player = Player::default();
        player.ascending = false;
        for _ in 0..200 {
            player.apply_motion(CLIMB_SPEED);
        }
        assert_eq!(player.y, SCREEN_HEIGHT - SPRITE_SIZE);
    }

    #[test]
    fn tilt_sign_follows_ascend_state() {
        let mut player = Player::default();
        player.ascending = true;
        assert_eq!(player.tilt_angle(45.0), 45.0);
        player.ascending = false;
        assert_eq!(player.tilt_angle(45.0), -45.0);
    }

    #[test]
    fn emission_point_offsets_from_sprite_center() {
        let player = Player::default();
        // Level flight: offset is purely horizontal
        let e = player.emission_point(0.0);
        assert!((e.x - (PLAYER_START_X + SPRITE_SIZE / 2.0 + TRAIL_RADIUS)).abs() < 1e-4);
        assert!((e.y - (PLAYER_START_Y + SPRITE_SIZE / 2.0)).abs() < 1e-4);

        // Climbing: emission point sits above center (screen y grows down)
        let up = player.emission_point(45.0);
        assert!(up.y < PLAYER_START_Y + SPRITE_SIZE / 2.0);
    }

    #[test]
    fn trail_caps_at_forty_points() {
        let mut trail = Trail::default();
        for i in 0..41 {
            trail.push(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(trail.len(), TRAIL_LENGTH);
        // Oldest point evicted, the rest in order
        assert_eq!(trail.points()[0], Vec2::new(1.0, 0.0));
        assert_eq!(trail.points()[TRAIL_LENGTH - 1], Vec2::new(40.0, 0.0));
    }

    #[test]
    fn reset_restores_start_and_regenerates() {
        let mut state = GameState::new(5);
        state.player.y = 100.0;
        state.trail.push(Vec2::new(10.0, 10.0));
        let old_floor = state.floor.points.clone();

        state.reset_run();

        assert_eq!(state.player.x, PLAYER_START_X);
        assert_eq!(state.player.y, PLAYER_START_Y);
        assert!(state.trail.is_empty());
        assert_eq!(state.floor.points.len(), BOUNDARY_POINTS);
        assert_eq!(state.ceiling.points.len(), BOUNDARY_POINTS);
        assert_ne!(state.floor.points, old_floor);
        assert_eq!(state.resets, 1);
    }
}
