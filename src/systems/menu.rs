//! Menu screen input.

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::input::InputState;
use crate::resources::screenstate::{NextScreenState, Screens};

/// Any pointer press on the menu starts the game.
pub fn start_game_on_pointer(input: Res<InputState>, mut next_screen: ResMut<NextScreenState>) {
    if input.pointer.active && !next_screen.is_pending() {
        debug!("Pointer pressed on menu, starting game");
        next_screen.set(Screens::Game);
    }
}
