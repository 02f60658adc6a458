//! Brickfall - a paddle-and-bricks arcade game simulation core
//!
//! This crate is the simulation only. The host owns the window, input
//! devices, rendering and the frame pump; each frame it feeds
//! [`sim::tick`] a [`sim::TickInput`] of key states and a delta in
//! seconds, then reads positions off the [`sim::GameState`] and drains
//! discrete [`sim::GameEvent`]s for its presentation layer.

pub mod sim;

pub use sim::{Ball, GameEvent, GameState, Paddle, TickInput, tick};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Fixed simulation timestep suggested to hosts (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Default play field dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;
    /// Velocity the ball leaves the paddle with on first launch
    pub const BALL_START_VEL: Vec2 = Vec2::new(200.0, -200.0);

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 400.0;
    /// How long a caught ball sticks to the paddle before release
    pub const CATCH_HOLD_TIME: f32 = 0.075;

    /// Block field layout
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_COLUMNS: usize = 25;
    pub const BLOCK_HEIGHT: f32 = 25.0;

    /// Bonus defaults
    pub const BONUS_DROP_PERCENT: u32 = 20;
    pub const BONUS_FALL_SPEED: f32 = 250.0;
    pub const BONUS_RADIUS: f32 = 15.0;

    /// Fireball effect duration in seconds
    pub const FIREBALL_DURATION: f32 = 5.0;

    /// Below this speed a swept collision query has no usable direction
    pub const MIN_SWEEP_SPEED: f32 = 1e-4;
}
