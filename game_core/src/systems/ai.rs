use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Direction the AI paddle wants to move (-1 = up, 0 = hold, 1 = down)
///
/// Chases the ball's vertical centre, holding still inside the dead zone.
pub fn ai_paddle_dir(paddle: &Paddle, ball: &Ball, config: &Config) -> i8 {
    let paddle_center = paddle.center_y();
    let ball_center = ball.center().y;

    if paddle_center < ball_center - config.ai_dead_zone {
        1
    } else if paddle_center > ball_center + config.ai_dead_zone {
        -1
    } else {
        0
    }
}

/// New Y for the AI paddle after one frame of tracking
pub fn ai_target_y(paddle: &Paddle, ball: &Ball, config: &Config) -> f32 {
    let dir = ai_paddle_dir(paddle, ball, config);
    config.clamp_paddle_y(paddle.y + dir as f32 * config.paddle_speed)
}

/// Move the AI paddle towards the ball
pub fn move_ai_paddle(world: &mut World, config: &Config) {
    let ball = world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball);
    let Some(ball) = ball else {
        return; // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Ai {
            paddle.y = ai_target_y(paddle, &ball, config);
        }
    }
}
