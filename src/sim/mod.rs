//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by the per-tick input and delta the host supplies
//! - Seeded RNG only
//! - Stable iteration order (blocks in layout order, bonuses/effects in
//!   spawn order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod bonus;
pub mod effect;
pub mod field;
pub mod geometry;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use bonus::{Bonus, BonusOutcome};
pub use effect::{Effect, EffectKind};
pub use field::{Block, BlockColor, BlockField, Side, SweptHit};
pub use geometry::{cross, opposite_sides, segments_intersect};
pub use paddle::{HoldState, Paddle};
pub use state::{GameEvent, GameState};
pub use tick::{TickInput, generate_field, tick};
