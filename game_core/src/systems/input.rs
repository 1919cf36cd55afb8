use hecs::World;

use crate::{move_paddle, Config, InputState, Side};

pub const KEY_UP: &str = "ArrowUp";
pub const KEY_DOWN: &str = "ArrowDown";
pub const KEY_SPACE: &str = " ";
pub const KEY_ENTER: &str = "Enter";

/// Space or Enter starts and restarts a game
pub fn is_confirm_key(key: &str) -> bool {
    matches!(key, KEY_SPACE | KEY_ENTER)
}

/// Keys the game reacts to, whose browser default (page scrolling) is suppressed
pub fn is_game_key(key: &str) -> bool {
    matches!(key, KEY_UP | KEY_DOWN) || is_confirm_key(key)
}

/// Apply held arrow keys to the human paddle
///
/// Up and down are applied independently, so holding both cancels out.
pub fn move_human_paddle(world: &mut World, input: &InputState, config: &Config) {
    if input.is_held(KEY_UP) {
        move_paddle(world, Side::Human, -1, config);
    }
    if input.is_held(KEY_DOWN) {
        move_paddle(world, Side::Human, 1, config);
    }
}
