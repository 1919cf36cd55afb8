pub mod assets;
pub mod components;
pub mod config;
pub mod fsm;
pub mod params;
pub mod render;
pub mod resources;
pub mod session;
pub mod systems;

pub use assets::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use params::*;
pub use render::{render, Font, Surface};
pub use resources::*;
pub use session::*;

use hecs::World;
pub use systems::*;

/// Run one frame of play, returning the winner if the ball escaped
///
/// Order matters: paddles move first, then the ball, then collisions are
/// resolved, and scoring looks at the post-collision position.
pub fn step(
    world: &mut World,
    config: &Config,
    input: &InputState,
    events: &mut Events,
) -> Option<Side> {
    // Clear events at start of frame
    events.clear();

    // 1. AI paddle tracks the ball
    move_ai_paddle(world, config);

    // 2. Human paddle follows held arrow keys
    move_human_paddle(world, input, config);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, events);

    // 5. Check scoring (ball escaped past a side)
    check_scoring(world, config, events)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Paddle::new(side, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
