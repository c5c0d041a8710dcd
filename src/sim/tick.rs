//! Fixed timestep simulation tick
//!
//! Advances the game deterministically, one tick per call, in a strict
//! intra-frame order: tuning keys, player motion, trail, terrain, floor
//! collision, ceiling collision.

use super::collision::{ceiling_hit, floor_hit};
use super::state::GameState;
use crate::consts::CLIMB_SPEED;

/// Input commands for a single tick. `ascend_held` is level state; the rest
/// are one-shot edges cleared by the caller after each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Ascend key held: climb this tick, otherwise dive
    pub ascend_held: bool,
    pub speed_up: bool,
    pub speed_down: bool,
    pub widen_corridor: bool,
    pub narrow_corridor: bool,
    pub tilt_up: bool,
    pub tilt_down: bool,
    pub reset_tuning: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Tuning keys first, so this tick already runs with the new values
    if input.speed_up {
        state.tuning.speed_up();
    }
    if input.speed_down {
        state.tuning.speed_down();
    }
    if input.widen_corridor {
        state.tuning.widen_corridor();
    }
    if input.narrow_corridor {
        state.tuning.narrow_corridor();
    }
    if input.tilt_up {
        state.tuning.tilt_up();
    }
    if input.tilt_down {
        state.tuning.tilt_down();
    }
    if input.reset_tuning {
        state.tuning.reset();
    }

    // Player motion: one step up or down, clamped to the screen
    state.player.ascending = input.ascend_held;
    state.player.apply_motion(CLIMB_SPEED);

    let scroll = state.tuning.scroll_speed;

    // Trail rides the terrain; new point at the current emission tip
    state.trail.advance(scroll);
    let tilt = state.player.tilt_angle(state.tuning.tilt_angle_max);
    let tip = state.player.emission_point(tilt);
    state.trail.push(tip);

    // Scroll and splice both boundaries
    state.floor.advance(scroll);
    state.ceiling.advance(scroll);
    state.recycle_boundaries();

    // Floor first; a hit consumes this frame's reset and skips the ceiling
    let (px, py) = (state.player.x, state.player.y);
    if floor_hit(px, py, &state.floor.points) {
        state.reset_run();
    } else if ceiling_hit(px, py, &state.ceiling.points) {
        state.reset_run();
    }

    state.time_ticks += 1;
}
