//! Canvas 2D drawing surface

use game_core::{Font, Side, Surface};
use glam::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// One portrait image per side
pub struct Portraits {
    ai: HtmlImageElement,
    human: HtmlImageElement,
}

impl Portraits {
    /// Create empty image elements; `driver::load_portraits` sets their sources
    pub fn new() -> Result<Self, JsValue> {
        Ok(Self {
            ai: HtmlImageElement::new()?,
            human: HtmlImageElement::new()?,
        })
    }

    pub fn get(&self, side: Side) -> &HtmlImageElement {
        match side {
            Side::Ai => &self.ai,
            Side::Human => &self.human,
        }
    }
}

pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    portraits: Portraits,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement, portraits: Portraits) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into()?;

        Ok(Self {
            ctx,
            portraits,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    pub fn portraits(&self) -> &Portraits {
        &self.portraits
    }
}

/// Canvas calls only fail on bad arguments; keep drawing the rest of the frame
fn warn_on_err(result: Result<(), JsValue>, what: &str) {
    if let Err(e) = result {
        log::warn!("Failed to {}: {:?}", what, e);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
    }

    fn dashed_line(&mut self, from: Vec2, to: Vec2, dash: [f32; 2], color: &str) {
        let pattern = js_sys::Array::of2(
            &JsValue::from_f64(dash[0] as f64),
            &JsValue::from_f64(dash[1] as f64),
        );

        self.ctx.set_stroke_style_str(color);
        warn_on_err(self.ctx.set_line_dash(&pattern), "set line dash");
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        // Later strokes (the ball outline) are solid
        warn_on_err(self.ctx.set_line_dash(&js_sys::Array::new()), "reset line dash");
    }

    fn draw_portrait(&mut self, side: Side, pos: Vec2, size: Vec2) {
        let image = self.portraits.get(side);
        warn_on_err(
            self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
                image,
                pos.x as f64,
                pos.y as f64,
                size.x as f64,
                size.y as f64,
            ),
            "draw portrait",
        );
    }

    fn fill_text(&mut self, text: &str, at: Vec2, font: Font, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.set_font(&font.to_string());
        self.ctx.set_text_align("center");
        warn_on_err(self.ctx.fill_text(text, at.x as f64, at.y as f64), "fill text");
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: &str, stroke: &str) {
        self.ctx.begin_path();
        warn_on_err(
            self.ctx.arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            ),
            "trace ball",
        );
        self.ctx.set_fill_style_str(fill);
        self.ctx.fill();
        self.ctx.set_stroke_style_str(stroke);
        self.ctx.stroke();
    }
}
