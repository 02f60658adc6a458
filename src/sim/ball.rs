//! The ball: motion integration and border reflection

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The moving ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// While set, block hits do not reflect the ball (it pierces through)
    pub fire_mode: bool,
    /// Cleared while the paddle holds the ball
    pub movement_allowed: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        assert!(radius > 0.0, "ball radius must be positive, got {radius}");
        Self {
            pos,
            vel,
            radius,
            fire_mode: false,
            movement_allowed: true,
        }
    }

    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Reflect off the left, right and top screen borders.
    ///
    /// A crossed border flips that axis's velocity and mirrors the
    /// overshoot back inside, so a large dt cannot tunnel the ball out of
    /// the field. The bottom border is open: the paddle and game-over
    /// logic own it.
    pub fn resolve_borders(&mut self, canvas: Vec2) {
        let min_x = self.radius;
        let max_x = canvas.x - self.radius;
        let min_y = self.radius;

        if self.pos.x < min_x && self.vel.x < 0.0 {
            self.vel.x = -self.vel.x;
            self.pos.x = min_x + (min_x - self.pos.x);
        }
        if self.pos.x > max_x && self.vel.x > 0.0 {
            self.vel.x = -self.vel.x;
            self.pos.x = max_x - (self.pos.x - max_x);
        }
        if self.pos.y < min_y && self.vel.y < 0.0 {
            self.vel.y = -self.vel.y;
            self.pos.y = min_y + (min_y - self.pos.y);
        }
    }
}
