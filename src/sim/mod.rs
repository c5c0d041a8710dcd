//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{ceiling_hit, floor_hit, height_at};
pub use state::{GameState, Player, Trail};
pub use terrain::{Boundary, BoundaryKind};
pub use tick::{TickInput, tick};
