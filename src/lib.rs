//! Wave Rider - a scrolling-corridor arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, player motion, collisions)
//! - `renderer`: Backend-agnostic frame geometry
//! - `platform`: Input events, fixed-rate clock, asset loading
//! - `tuning`: Live-adjustable game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::TuningState;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Fixed simulation rate
    pub const TICK_HZ: u32 = 60;
    pub const TICK_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Horizontal spacing between terrain points
    pub const SEGMENT_WIDTH: f32 = 60.0;
    /// Boundary point count: one segment past each screen edge
    pub const BOUNDARY_POINTS: usize = (SCREEN_WIDTH / SEGMENT_WIDTH) as usize + 2;

    /// Floor sampling range (y grows downward)
    pub const FLOOR_Y_MIN: f32 = SCREEN_HEIGHT - 150.0;
    pub const FLOOR_Y_MAX: f32 = SCREEN_HEIGHT - 50.0;
    /// Ceiling sampling lower bound; the upper bound depends on corridor height
    pub const CEILING_Y_MIN: f32 = 50.0;
    /// Subtracted together with corridor height to get the ceiling upper bound
    pub const CEILING_MARGIN: f32 = 150.0;

    /// Player sprite is square, pre-scaled at load
    pub const SPRITE_SIZE: f32 = 30.0;
    /// Fixed horizontal position and respawn point
    pub const PLAYER_START_X: f32 = 150.0;
    pub const PLAYER_START_Y: f32 = SCREEN_HEIGHT / 2.0;
    /// Vertical speed in pixels per tick (sign from the ascend key)
    pub const CLIMB_SPEED: f32 = 6.0;

    /// Trail history cap
    pub const TRAIL_LENGTH: usize = 40;
    /// Distance from sprite center to the trail emission point
    pub const TRAIL_RADIUS: f32 = 5.0;
    /// Stroke widths (pixels)
    pub const TRAIL_STROKE: f32 = 8.0;
    pub const BOUNDARY_STROKE: f32 = 4.0;
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
