use hecs::World;

use crate::render::draw_playing;
use crate::{
    create_ball, create_paddle, is_confirm_key, render, step, Action, Ball, Config, Events,
    GameFsm, GameRng, InputState, Paddle, Side, State, Surface,
};

/// The single mutable game aggregate: state, winner, and the entities
pub struct Session {
    pub world: World,
    config: Config,
    fsm: GameFsm,
    winner: Option<Side>,
    events: Events,
    rng: GameRng,
}

impl Session {
    /// Title screen with both paddles centred and a ball ready to serve
    pub fn new(config: Config, seed: u64) -> Self {
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, Side::Ai, &config);
        create_paddle(&mut world, Side::Human, &config);

        let mut ball = Ball::new(config.ball_spawn(), glam::Vec2::ZERO, config.ball_size);
        ball.reset(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel, ball.size);

        Self {
            world,
            config,
            fsm: GameFsm::new(),
            winner: None,
            events: Events::new(),
            rng,
        }
    }

    pub fn state(&self) -> State {
        self.fsm.state()
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Events from the most recent frame
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Start (or restart) a game from the title or game-over screen
    ///
    /// Returns false, leaving everything untouched, while already playing.
    pub fn start(&mut self) -> bool {
        if !self.fsm.transition(Action::Start).success {
            return false;
        }

        let spawn_y = self.config.paddle_spawn_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = spawn_y;
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }
        self.winner = None;
        true
    }

    /// End the game in favour of `winner`
    pub fn finish(&mut self, winner: Side) -> bool {
        if !self.fsm.transition(Action::Score).success {
            return false;
        }

        self.winner = Some(winner);
        log::info!("{} wins", self.config.name(winner));
        true
    }

    /// Record a key press; confirm keys start a game when one isn't running
    ///
    /// Auto-repeat events from a held key only refresh the held state.
    pub fn handle_key_down(&mut self, input: &mut InputState, key: &str, repeat: bool) {
        input.key_down(key);

        if is_confirm_key(key) && !repeat && !self.fsm.is_playing() {
            self.start();
        }
    }

    pub fn handle_key_up(&mut self, input: &mut InputState, key: &str) {
        input.key_up(key);
    }

    /// Advance one frame of play; no-op outside the Playing state
    pub fn update(&mut self, input: &InputState) {
        if !self.fsm.is_playing() {
            return;
        }

        let winner = step(&mut self.world, &self.config, input, &mut self.events);

        if self.events.ball_hit_wall {
            log::trace!("ball hit wall");
        }
        if let Some(side) = self.events.ball_hit_paddle {
            log::trace!("ball hit {} paddle", self.config.name(side));
        }
        if let Some(winner) = winner {
            self.finish(winner);
        }
    }

    /// One tick of the frame driver: update if playing, then draw
    ///
    /// The frame is drawn for the state it started in, so the frame that
    /// ends a game still shows the court and the overlay follows next tick.
    pub fn frame(&mut self, input: &InputState, surface: &mut impl Surface) {
        if self.fsm.is_playing() {
            self.update(input);
            draw_playing(self, surface);
        } else {
            render(self, surface);
        }
    }
}
