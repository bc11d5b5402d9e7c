use crate::events::screenstate::ScreenChangedEvent;
use crate::resources::input::InputState;
use crate::resources::screenstate::{NextScreenState, ScreenState, Screens};
use bevy_ecs::prelude::*;

/// Fire [`ScreenChangedEvent`] when a transition is pending.
pub fn check_pending_screen(mut commands: Commands, next_screen: Res<NextScreenState>) {
    if next_screen.is_pending() {
        commands.trigger(ScreenChangedEvent {});
    }
}

pub fn state_is_menu(screen: Res<ScreenState>) -> bool {
    matches!(screen.get(), Screens::Menu)
}

pub fn state_is_game(screen: Res<ScreenState>) -> bool {
    matches!(screen.get(), Screens::Game)
}

/// Escape on the game screen quits the application.
pub fn quit_on_back(input: Res<InputState>, mut next_screen: ResMut<NextScreenState>) {
    if input.action_back.just_pressed && !next_screen.is_pending() {
        next_screen.set(Screens::Quitting);
    }
}
