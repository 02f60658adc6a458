//! Falling bonus pickups

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::paddle::Paddle;
use crate::consts::{BONUS_FALL_SPEED, BONUS_RADIUS};

/// What a bonus did this tick; the orchestrator owns removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusOutcome {
    Falling,
    /// Landed on the paddle - grants its effect
    Collected,
    /// Fell past the bottom border
    Expired,
}

/// A collectible dropped by a destroyed block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bonus {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    pub fall_speed: f32,
    pub radius: f32,
}

impl Bonus {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            fall_speed: BONUS_FALL_SPEED,
            radius: BONUS_RADIUS,
        }
    }

    /// Fall, then check for paddle pickup or bottom-border expiry
    pub fn update(&mut self, dt: f32, paddle: &Paddle, canvas: Vec2) -> BonusOutcome {
        self.pos.y += self.fall_speed * dt;

        let deck = canvas.y - paddle.size.y - self.radius;
        if self.pos.y > deck {
            let left = paddle.pos_x - self.radius;
            let right = paddle.pos_x + paddle.size.x + self.radius;
            if self.pos.x >= left && self.pos.x <= right {
                return BonusOutcome::Collected;
            }
            if self.pos.y > canvas.y - self.radius {
                return BonusOutcome::Expired;
            }
        }
        BonusOutcome::Falling
    }
}
