use crate::Side;
use std::collections::HashMap;

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub ball_hit_wall: bool,
    pub ball_hit_paddle: Option<Side>,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ball_hit_wall = false;
        self.ball_hit_paddle = None;
        self.winner = None;
    }
}

/// Keys currently held, keyed by DOM `KeyboardEvent.key`
///
/// Entries are never removed: a key whose up-event was missed stays held.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<String, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_owned(), true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.insert(key.to_owned(), false);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.get(key).copied().unwrap_or(false)
    }
}
