//! Keyboard input handling

use std::cell::RefCell;
use std::rc::Rc;

use game_core::is_game_key;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, KeyboardEvent};

use crate::Game;

/// Extract key from keyboard event
pub fn get_key_from_event(event: &KeyboardEvent) -> String {
    event.key()
}

/// Feed document key events into the shared input state and session
pub fn install_key_listeners(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
    {
        let game = game.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = get_key_from_event(&event);
            if is_game_key(&key) {
                event.prevent_default();
            }

            let mut g = game.borrow_mut();
            let Game { session, input, .. } = &mut *g;
            session.handle_key_down(input, &key, event.repeat());
        });
        document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = get_key_from_event(&event);

            let mut g = game.borrow_mut();
            let Game { session, input, .. } = &mut *g;
            session.handle_key_up(input, &key);
        });
        document.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
