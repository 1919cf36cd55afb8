//! Portrait loading and the animation-frame loop

use std::cell::RefCell;
use std::rc::Rc;

use game_core::Side;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::Game;

/// Start loading both portraits; the frame loop starts when the last one lands
///
/// A portrait that fails to load is logged and never counted, so the game
/// stays on a blank canvas.
pub fn load_portraits(game: &Rc<RefCell<Game>>) {
    for side in [Side::Ai, Side::Human] {
        let (image, src) = {
            let g = game.borrow();
            (
                g.surface.portraits().get(side).clone(),
                g.session.config().portrait_src(side),
            )
        };

        let onload = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || on_portrait_loaded(&game, side))
        };
        image.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::<dyn FnMut()>::new(move || {
            log::warn!("Portrait {} failed to load; game will not start", src);
        });
        image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        image.set_src(src);
    }
}

fn on_portrait_loaded(game: &Rc<RefCell<Game>>, side: Side) {
    let opened = game.borrow_mut().gate.mark_loaded();
    log::info!("{:?} portrait loaded", side);

    if opened {
        log::info!("All portraits loaded, starting frame loop");
        request_animation_frame(game.clone());
    }
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let Some(window) = web_sys::window() else {
        log::error!("No window, frame loop stopped");
        return;
    };

    let callback = Closure::once_into_js(move |_time: f64| game_loop(game));
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

fn game_loop(game: Rc<RefCell<Game>>) {
    {
        let mut g = game.borrow_mut();
        let Game {
            session,
            input,
            surface,
            ..
        } = &mut *g;
        session.frame(input, surface);
    }

    request_animation_frame(game);
}
