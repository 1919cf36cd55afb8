use crate::{Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub ai_dead_zone: f32,
    pub title: &'static str,
    pub ai_name: &'static str,
    pub human_name: &'static str,
    pub ai_portrait_src: &'static str,
    pub human_portrait_src: &'static str,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            title: "SuperMicro vs Dell",
            ai_name: "Vadim",
            human_name: "TJay",
            ai_portrait_src: "vadim.png",
            human_portrait_src: "tjay.png",
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Ai => self.paddle_margin,
            Side::Human => self.surface_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge of a vertically centred paddle
    pub fn paddle_spawn_y(&self) -> f32 {
        self.surface_height / 2.0 - self.paddle_height / 2.0
    }

    /// Top-left corner of a centred ball
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(
            self.surface_width / 2.0 - self.ball_size / 2.0,
            self.surface_height / 2.0 - self.ball_size / 2.0,
        )
    }

    /// Clamp paddle Y so the whole paddle stays on the surface
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.surface_height - self.paddle_height)
    }

    pub fn name(&self, side: Side) -> &'static str {
        match side {
            Side::Ai => self.ai_name,
            Side::Human => self.human_name,
        }
    }

    pub fn portrait_src(&self, side: Side) -> &'static str {
        match side {
            Side::Ai => self.ai_portrait_src,
            Side::Human => self.human_portrait_src,
        }
    }
}
