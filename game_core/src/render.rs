//! Screen drawing over an abstract 2D surface
//!
//! Every routine is a pure function of the session: drawing twice with an
//! unchanged session issues the same commands twice.

use std::fmt;

use glam::Vec2;

use crate::{Ball, Paddle, Session, Side, State};

pub const BACKGROUND: &str = "#222";
pub const TEXT: &str = "#fff";
pub const CENTER_LINE: &str = "#aaa";
pub const BALL_FILL: &str = "#f5c542";
pub const BALL_STROKE: &str = "#333";
pub const VEIL: &str = "rgba(0,0,0,0.7)";

pub const CENTER_LINE_DASH: [f32; 2] = [10.0, 10.0];
pub const TITLE_PORTRAIT_SIZE: f32 = 64.0;

pub const START_PROMPT: &str = "Press SPACE or ENTER to Start";
pub const RESTART_PROMPT: &str = "Press SPACE or ENTER to Restart";

/// Font used for centre-aligned text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    pub px: u32,
    pub bold: bool,
}

impl Font {
    pub const fn regular(px: u32) -> Self {
        Self { px, bold: false }
    }

    pub const fn bold(px: u32) -> Self {
        Self { px, bold: true }
    }
}

/// CSS font shorthand, e.g. `bold 40px Arial`
impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold {
            write!(f, "bold {}px Arial", self.px)
        } else {
            write!(f, "{}px Arial", self.px)
        }
    }
}

/// Drawing primitives provided by the host
///
/// Coordinates are surface pixels with the origin at the top-left.
pub trait Surface {
    /// Clear the whole surface to transparent
    fn clear(&mut self);

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str);

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str);

    /// Draw a side's character portrait scaled into a rectangle
    fn draw_portrait(&mut self, side: Side, pos: Vec2, size: Vec2);

    /// Draw text horizontally centred on `at.x`, baseline at `at.y`
    fn fill_text(&mut self, text: &str, at: Vec2, font: Font, color: &str);

    fn circle(&mut self, center: Vec2, radius: f32, fill: &str, stroke: &str);
}

/// Draw the screen for the session's current state
pub fn render(session: &Session, surface: &mut impl Surface) {
    match session.state() {
        State::Title => draw_title(session, surface),
        State::Playing => draw_playing(session, surface),
        State::GameOver => draw_game_over(session, surface),
    }
}

pub fn draw_title(session: &Session, surface: &mut impl Surface) {
    let config = session.config();
    let size = Vec2::new(config.surface_width, config.surface_height);
    let center = size / 2.0;

    surface.fill_rect(Vec2::ZERO, size, BACKGROUND);

    surface.fill_text(
        config.title,
        center + Vec2::new(0.0, -40.0),
        Font::bold(40),
        TEXT,
    );
    surface.fill_text(
        START_PROMPT,
        center + Vec2::new(0.0, 20.0),
        Font::regular(24),
        TEXT,
    );

    // Portraits either side of the prompt, names underneath
    let portrait = Vec2::splat(TITLE_PORTRAIT_SIZE);
    surface.draw_portrait(Side::Ai, center + Vec2::new(-160.0, 60.0), portrait);
    surface.draw_portrait(Side::Human, center + Vec2::new(96.0, 60.0), portrait);

    surface.fill_text(
        config.name(Side::Ai),
        center + Vec2::new(-128.0, 140.0),
        Font::regular(18),
        TEXT,
    );
    surface.fill_text(
        config.name(Side::Human),
        center + Vec2::new(128.0, 140.0),
        Font::regular(18),
        TEXT,
    );
}

pub fn draw_playing(session: &Session, surface: &mut impl Surface) {
    let config = session.config();
    let mid_x = config.surface_width / 2.0;

    surface.clear();
    surface.dashed_line(
        Vec2::new(mid_x, 0.0),
        Vec2::new(mid_x, config.surface_height),
        CENTER_LINE_DASH,
        CENTER_LINE,
    );

    for side in [Side::Ai, Side::Human] {
        if let Some(paddle) = session.paddle(side) {
            draw_paddle(&paddle, surface);
        }
    }

    if let Some(ball) = session.ball() {
        draw_ball(&ball, surface);
    }
}

pub fn draw_game_over(session: &Session, surface: &mut impl Surface) {
    // Final frame underneath the veil
    draw_playing(session, surface);

    let config = session.config();
    let size = Vec2::new(config.surface_width, config.surface_height);
    let center = size / 2.0;

    surface.fill_rect(Vec2::ZERO, size, VEIL);

    if let Some(winner) = session.winner() {
        surface.fill_text(
            &format!("{} Wins!", config.name(winner)),
            center,
            Font::bold(36),
            TEXT,
        );
    }
    surface.fill_text(
        RESTART_PROMPT,
        center + Vec2::new(0.0, 40.0),
        Font::regular(24),
        TEXT,
    );
}

fn draw_paddle(paddle: &Paddle, surface: &mut impl Surface) {
    surface.draw_portrait(
        paddle.side,
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(paddle.width, paddle.height),
    );
}

fn draw_ball(ball: &Ball, surface: &mut impl Surface) {
    surface.circle(ball.center(), ball.size / 2.0, BALL_FILL, BALL_STROKE);
}
