use crate::{Config, GameRng};
use glam::Vec2;

/// Which side of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Ai,    // left, tracking AI
    Human, // right, arrow keys
}

/// Paddle component - a character portrait that deflects the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // Left edge, fixed for the paddle's lifetime
    pub y: f32, // Top edge (clamped to surface)
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_spawn_y(),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Ball component - position is the top-left of its bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Pixels per frame
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// Reset ball to center with a random serve
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = config.ball_spawn();
        self.size = config.ball_size;

        // Full speed towards either side, any vertical speed up to the same magnitude
        let dx = if rng.0.gen_bool(0.5) {
            config.ball_speed
        } else {
            -config.ball_speed
        };
        let dy = config.ball_speed * rng.0.gen_range(-1.0f32..1.0);

        self.vel = Vec2::new(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_geometry() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Human, &config);
        assert_eq!(paddle.x, 690.0);
        assert_eq!(paddle.right(), 770.0);
        assert_eq!(paddle.bottom(), 290.0);
        assert_eq!(paddle.center_y(), 250.0);
    }

    #[test]
    fn test_ball_reset_serves_from_center() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-50.0, 3.0), Vec2::ZERO, config.ball_size);

        for _ in 0..32 {
            ball.reset(&config, &mut rng);
            assert_eq!(ball.pos, config.ball_spawn());
            assert_eq!(ball.vel.x.abs(), config.ball_speed, "Serve is always full speed");
            assert!(ball.vel.y.abs() <= config.ball_speed);
        }
    }

    #[test]
    fn test_ball_reset_serves_both_directions() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_size);

        let mut left = false;
        let mut right = false;
        for _ in 0..64 {
            ball.reset(&config, &mut rng);
            left |= ball.vel.x < 0.0;
            right |= ball.vel.x > 0.0;
        }
        assert!(left && right, "Serves should go both ways over many resets");
    }
}
