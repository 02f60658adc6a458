//! The player paddle and its ball-holding states

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::tick::TickInput;
use crate::consts::{CATCH_HOLD_TIME, PADDLE_HEIGHT, PADDLE_SPEED, PADDLE_WIDTH};

/// A temporary mode where the ball is slaved to the paddle position plus
/// a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HoldState {
    /// Short catch pause after a paddle hit; releases itself when the
    /// timer runs out, transferring paddle travel into ball spin
    Timer {
        offset: Vec2,
        remaining: f32,
        paddle_x_at_hold: f32,
    },
    /// Pre-launch staging; releases only on the launch action
    Manual { offset: Vec2 },
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge, clamped to `[0, canvas width - paddle width]`
    pub pos_x: f32,
    /// Top edge, fixed at the bottom of the play field
    pub pos_y: f32,
    pub size: Vec2,
    /// Horizontal speed while a move key is down
    pub speed: f32,
    pub hold: Option<HoldState>,
    max_x: f32,
}

impl Paddle {
    /// Create a paddle centered at the bottom of the given play field
    pub fn new(canvas: Vec2) -> Self {
        let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);
        assert!(
            canvas.x >= size.x,
            "canvas width {} cannot fit paddle width {}",
            canvas.x,
            size.x
        );
        Self {
            pos_x: (canvas.x - size.x) * 0.5,
            pos_y: canvas.y - size.y,
            size,
            speed: PADDLE_SPEED,
            hold: None,
            max_x: canvas.x - size.x,
        }
    }

    /// Top-left corner; hold offsets are relative to this
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.pos_x, self.pos_y)
    }

    /// Move from key state, clamp, and service the hold state.
    ///
    /// A held ball's position is forced to the paddle every tick. Timer
    /// holds count down and, on expiry, add the paddle's travel since the
    /// catch to the ball's horizontal velocity before releasing it.
    pub fn update(&mut self, ball: &mut Ball, input: &TickInput, dt: f32) {
        let mut dx = 0.0;
        if input.left {
            dx -= self.speed * dt;
        }
        if input.right {
            dx += self.speed * dt;
        }
        self.pos_x = (self.pos_x + dx).clamp(0.0, self.max_x);

        match self.hold.take() {
            Some(HoldState::Timer { offset, remaining, paddle_x_at_hold }) => {
                ball.pos = self.origin() + offset;
                let remaining = remaining - dt;
                if remaining < 0.0 {
                    // Paddle motion while holding becomes spin
                    ball.vel.x += self.pos_x - paddle_x_at_hold;
                    ball.movement_allowed = true;
                } else {
                    self.hold = Some(HoldState::Timer { offset, remaining, paddle_x_at_hold });
                }
            }
            Some(HoldState::Manual { offset }) => {
                ball.pos = self.origin() + offset;
                if input.launch {
                    ball.movement_allowed = true;
                } else {
                    self.hold = Some(HoldState::Manual { offset });
                }
            }
            None => {}
        }
    }

    /// Catch the ball for a brief pause before it reflects away
    pub fn on_hit(&mut self, ball: &mut Ball) {
        ball.movement_allowed = false;
        self.hold = Some(HoldState::Timer {
            offset: ball.pos - self.origin(),
            remaining: CATCH_HOLD_TIME,
            paddle_x_at_hold: self.pos_x,
        });
    }

    /// Stick the ball to the paddle until the player launches it
    pub fn hold_on_start(&mut self, ball: &mut Ball) {
        ball.movement_allowed = false;
        self.hold = Some(HoldState::Manual {
            offset: ball.pos - self.origin(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BALL_RADIUS, BALL_START_VEL};
    use proptest::prelude::*;

    const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

    fn test_ball() -> Ball {
        Ball::new(Vec2::new(400.0, 575.0), BALL_START_VEL, BALL_RADIUS)
    }

    #[test]
    #[should_panic(expected = "cannot fit paddle")]
    fn test_canvas_narrower_than_paddle_rejected() {
        let _ = Paddle::new(Vec2::new(100.0, 600.0));
    }

    #[test]
    fn test_key_movement_and_cancel() {
        let mut paddle = Paddle::new(CANVAS);
        let mut ball = test_ball();
        let x0 = paddle.pos_x;

        let right = TickInput { right: true, ..Default::default() };
        paddle.update(&mut ball, &right, 0.1);
        assert_eq!(paddle.pos_x, x0 + 40.0);

        // Opposing keys cancel to a net zero
        let both = TickInput { left: true, right: true, ..Default::default() };
        paddle.update(&mut ball, &both, 0.1);
        assert_eq!(paddle.pos_x, x0 + 40.0);
    }

    #[test]
    fn test_manual_hold_tracks_then_launches() {
        let mut paddle = Paddle::new(CANVAS);
        let mut ball = test_ball();
        paddle.hold_on_start(&mut ball);
        let offset = ball.pos - paddle.origin();
        assert!(!ball.movement_allowed);

        let right = TickInput { right: true, ..Default::default() };
        for _ in 0..5 {
            paddle.update(&mut ball, &right, 0.016);
            assert_eq!(ball.pos, paddle.origin() + offset);
        }
        assert!(!ball.movement_allowed);

        let launch = TickInput { launch: true, ..Default::default() };
        paddle.update(&mut ball, &launch, 0.016);
        assert!(ball.movement_allowed);
        assert!(paddle.hold.is_none());
    }

    #[test]
    fn test_timer_hold_releases_with_spin() {
        let mut paddle = Paddle::new(CANVAS);
        let mut ball = test_ball();
        let vx0 = ball.vel.x;
        paddle.on_hit(&mut ball);
        assert!(!ball.movement_allowed);

        // Two 50 ms ticks moving right: the 75 ms catch expires on the
        // second one, transferring the travel since the catch as spin
        let right = TickInput { right: true, ..Default::default() };
        paddle.update(&mut ball, &right, 0.05);
        assert!(!ball.movement_allowed);
        paddle.update(&mut ball, &right, 0.05);

        assert!(ball.movement_allowed);
        assert!(paddle.hold.is_none());
        assert_eq!(ball.vel.x, vx0 + 40.0);
    }

    proptest! {
        /// The paddle never leaves its clamp range, for any key sequence
        #[test]
        fn prop_paddle_stays_clamped(steps in prop::collection::vec(
            (any::<bool>(), any::<bool>(), 0.0f32..0.1), 1..200,
        )) {
            let mut paddle = Paddle::new(CANVAS);
            let mut ball = test_ball();
            let max_x = CANVAS.x - paddle.size.x;

            for (left, right, dt) in steps {
                let input = TickInput { left, right, ..Default::default() };
                paddle.update(&mut ball, &input, dt);
                prop_assert!(paddle.pos_x >= 0.0);
                prop_assert!(paddle.pos_x <= max_x);
            }
        }
    }
}
