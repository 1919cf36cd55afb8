use crate::{Ball, Config, Events, Side};
use hecs::World;

/// Check if ball left the surface, returning the winning side
pub fn check_scoring(world: &World, config: &Config, events: &mut Events) -> Option<Side> {
    let winner = world
        .query::<&Ball>()
        .iter()
        .find_map(|(_entity, ball)| escaped_past(ball, config));

    if winner.is_some() {
        events.winner = winner;
    }
    winner
}

/// Which side wins if the ball has escaped past a side edge
pub fn escaped_past(ball: &Ball, config: &Config) -> Option<Side> {
    if ball.pos.x < 0.0 {
        // Got past the AI paddle
        Some(Side::Human)
    } else if ball.right() > config.surface_width {
        // Got past the human paddle
        Some(Side::Ai)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    #[test]
    fn test_human_wins_when_ball_exits_left() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(-1.0, 200.0), Vec2::new(-6.0, 0.0), config.ball_size);

        let winner = check_scoring(&world, &config, &mut events);

        assert_eq!(winner, Some(Side::Human));
        assert_eq!(events.winner, Some(Side::Human));
    }

    #[test]
    fn test_ai_wins_when_ball_exits_right() {
        let (mut world, config, mut events) = setup_world();
        let x = config.surface_width - config.ball_size + 0.5;
        create_ball(&mut world, Vec2::new(x, 200.0), Vec2::new(6.0, 0.0), config.ball_size);

        let winner = check_scoring(&world, &config, &mut events);

        assert_eq!(winner, Some(Side::Ai));
        assert_eq!(events.winner, Some(Side::Ai));
    }

    #[test]
    fn test_ball_touching_edges_does_not_score() {
        let config = Config::new();
        let left = Ball::new(Vec2::new(0.0, 200.0), Vec2::ZERO, config.ball_size);
        let right = Ball::new(
            Vec2::new(config.surface_width - config.ball_size, 200.0),
            Vec2::ZERO,
            config.ball_size,
        );

        assert_eq!(escaped_past(&left, &config), None);
        assert_eq!(escaped_past(&right, &config), None);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, config.ball_spawn(), Vec2::new(6.0, 4.0), config.ball_size);

        assert_eq!(check_scoring(&world, &config, &mut events), None);
        assert_eq!(events.winner, None, "No scoring events");
    }
}
