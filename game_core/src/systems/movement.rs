use crate::{Ball, Config, Paddle, Side};
use hecs::World;

/// Move one side's paddle by `dir` steps of paddle speed (-1 = up, 1 = down)
pub fn move_paddle(world: &mut World, side: Side, dir: i8, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == side {
            paddle.y += dir as f32 * config.paddle_speed;

            // Clamp to surface bounds
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_move_ball_applies_velocity_once() {
        let config = Config::new();
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(100.0, 100.0), Vec2::new(6.0, -3.0), config.ball_size);

        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(106.0, 97.0));
        }
    }

    #[test]
    fn test_move_paddle_only_moves_its_side() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Ai, &config);
        create_paddle(&mut world, Side::Human, &config);

        move_paddle(&mut world, Side::Human, 1, &config);

        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Ai => assert_eq!(paddle.y, config.paddle_spawn_y()),
                Side::Human => assert_eq!(paddle.y, config.paddle_spawn_y() + config.paddle_speed),
            }
        }
    }

    #[test]
    fn test_move_paddle_clamps_to_surface() {
        let config = Config::new();
        let mut world = World::new();
        create_paddle(&mut world, Side::Human, &config);

        for _ in 0..200 {
            move_paddle(&mut world, Side::Human, 1, &config);
        }
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.y, config.surface_height - config.paddle_height);
        }

        for _ in 0..200 {
            move_paddle(&mut world, Side::Human, -1, &config);
        }
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            assert_eq!(paddle.y, 0.0);
        }
    }
}
