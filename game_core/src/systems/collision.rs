use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if bounce_off_walls(ball, config) {
            events.ball_hit_wall = true;
        }

        // The AI paddle is resolved first, then the human paddle
        for side in [Side::Ai, Side::Human] {
            let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
                continue;
            };
            if deflect_off_paddle(ball, paddle, config) {
                events.ball_hit_paddle = Some(side);
            }
        }
    }
}

/// Reflect the ball off the top and bottom walls
///
/// Returns true if the ball touched a wall this frame.
pub fn bounce_off_walls(ball: &mut Ball, config: &Config) -> bool {
    if ball.pos.y <= 0.0 || ball.bottom() >= config.surface_height {
        ball.vel.y = -ball.vel.y;
        // Clamp position to prevent sticking
        ball.pos.y = ball.pos.y.clamp(0.0, config.surface_height - ball.size);
        true
    } else {
        false
    }
}

/// Where on the paddle the ball hit, from -1 (top edge) to 1 (bottom edge)
pub fn impact_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    let hit_relative_y = (ball.center().y - paddle.center_y()) / (paddle.height / 2.0);
    // A ball overlapping a corner can sit past the paddle's edge. Bounded to
    // [-1, 1] so the deflected vertical speed never exceeds ball_speed.
    hit_relative_y.clamp(-1.0, 1.0)
}

/// Whether the ball's leading edge is inside the paddle's rectangle
pub fn overlaps_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let leading_edge = match paddle.side {
        Side::Ai => ball.pos.x,
        Side::Human => ball.right(),
    };
    let in_x_span = leading_edge >= paddle.x && leading_edge <= paddle.right();
    let in_y_span = ball.bottom() >= paddle.y && ball.pos.y <= paddle.bottom();
    in_x_span && in_y_span
}

/// Send the ball back towards the other side if it overlaps the paddle
///
/// Returns true on a hit. The ball is moved flush against the paddle's
/// face and its vertical speed is set from the impact offset.
pub fn deflect_off_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    if !overlaps_paddle(ball, paddle) {
        return false;
    }

    ball.vel.y = config.ball_speed * impact_offset(ball, paddle);

    match paddle.side {
        Side::Ai => {
            ball.vel.x = ball.vel.x.abs();
            ball.pos.x = paddle.right();
        }
        Side::Human => {
            ball.vel.x = -ball.vel.x.abs();
            ball.pos.x = paddle.x - ball.size;
        }
    }
    true
}
