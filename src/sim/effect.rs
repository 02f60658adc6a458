//! Time-scoped status effects on the ball/paddle pair

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::paddle::Paddle;
use crate::consts::FIREBALL_DURATION;

/// Effect variants; closed set, extended here as new bonuses appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Ball pierces blocks instead of reflecting off them
    Fireball,
}

impl EffectKind {
    pub fn duration(self) -> f32 {
        match self {
            EffectKind::Fireball => FIREBALL_DURATION,
        }
    }
}

/// An active effect counting down to its own deactivation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub kind: EffectKind,
    pub remaining: f32,
}

impl Effect {
    pub fn new(kind: EffectKind) -> Self {
        Self { kind, remaining: kind.duration() }
    }

    /// Apply the effect's behavioral hook to its targets
    pub fn activate(&self, ball: &mut Ball, _paddle: &mut Paddle) {
        match self.kind {
            EffectKind::Fireball => ball.fire_mode = true,
        }
        log::debug!("effect activated: {:?}", self.kind);
    }

    /// Revert the hook when the timer runs out
    pub fn deactivate(&self, ball: &mut Ball, _paddle: &mut Paddle) {
        match self.kind {
            EffectKind::Fireball => ball.fire_mode = false,
        }
        log::debug!("effect expired: {:?}", self.kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_fireball_hooks_toggle_fire_mode() {
        let canvas = Vec2::new(800.0, 600.0);
        let mut paddle = Paddle::new(canvas);
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 15.0);

        let effect = Effect::new(EffectKind::Fireball);
        assert_eq!(effect.remaining, FIREBALL_DURATION);

        effect.activate(&mut ball, &mut paddle);
        assert!(ball.fire_mode);

        effect.deactivate(&mut ball, &mut paddle);
        assert!(!ball.fire_mode);
    }
}
