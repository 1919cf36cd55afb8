//! Browser client for Portrait Pong
//!
//! Draws with the canvas 2D API, listens for keys on the document, and runs
//! the session once per animation frame after both portraits have loaded.
//! Only available when compiling for wasm32.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod driver;
mod input;

use std::cell::RefCell;
use std::rc::Rc;

use canvas::{CanvasSurface, Portraits};
use game_core::{AssetGate, Config, InputState, Session};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

/// Id of the `<canvas>` element the game draws into
pub const CANVAS_ID: &str = "gameCanvas";

/// Everything the browser callbacks share
///
/// Key, image-load and animation-frame callbacks all run on the JS event
/// loop, so borrows of the `RefCell` never overlap.
pub(crate) struct Game {
    pub session: Session,
    pub input: InputState,
    pub surface: CanvasSurface,
    pub gate: AssetGate,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str(&format!("No #{} element", CANVAS_ID)))?
        .dyn_into()?;

    let config = Config::new();
    canvas.set_width(config.surface_width as u32);
    canvas.set_height(config.surface_height as u32);

    let surface = CanvasSurface::new(&canvas, Portraits::new()?)?;

    let seed = js_sys::Date::now() as u64;
    let game = Rc::new(RefCell::new(Game {
        session: Session::new(config, seed),
        input: InputState::new(),
        surface,
        gate: AssetGate::default(),
    }));
    log::info!("Portrait Pong initialized with seed: {}", seed);

    input::install_key_listeners(&document, game.clone())?;
    driver::load_portraits(&game);

    Ok(())
}
