//! Screen transition event and observer.
//!
//! Systems request a change of screen by updating [`NextScreenState`].
//! Emitting a [`ScreenChangedEvent`] then triggers the observer in this
//! module, which applies the transition to [`ScreenState`] and runs the exit
//! hook of the old screen and the enter hook of the new one, both looked up
//! in [`SystemsStore`].
use crate::resources::screenstate::NextScreens::{Pending, Unchanged};
use crate::resources::screenstate::{NextScreenState, ScreenState, Screens};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Hook names looked up in [`SystemsStore`].
pub const SETUP_HOOK: &str = "setup";
pub const ENTER_MENU_HOOK: &str = "enter_menu";
pub const EXIT_MENU_HOOK: &str = "exit_menu";
pub const ENTER_GAME_HOOK: &str = "enter_game";
pub const EXIT_GAME_HOOK: &str = "exit_game";
pub const QUIT_GAME_HOOK: &str = "quit_game";

/// Event used to indicate that a pending screen transition should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct ScreenChangedEvent {}

/// Observer that applies a pending screen transition.
///
/// Contract
/// - Reads the intention from [`NextScreenState`].
/// - If pending, copies the new value into [`ScreenState`], then:
///   - runs the exit hook of the previous screen
///   - runs the enter hook of the new screen
///   - resets [`NextScreenState`] to [`Unchanged`]
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_screen_change_event(
    _trigger: On<ScreenChangedEvent>,
    mut commands: Commands,
    mut next_screen: Option<ResMut<NextScreenState>>,
    mut screen: Option<ResMut<ScreenState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("ScreenChangedEvent triggered");

    if next_screen.is_none() || screen.is_none() {
        warn!(
            "One or more resources missing in observe_screen_change_event. next_screen: {:?}, screen: {:?}",
            next_screen.is_some(),
            screen.is_some()
        );
        return;
    }
    let (Some(next_screen), Some(screen)) = (next_screen.as_deref_mut(), screen.as_deref_mut())
    else {
        return;
    };

    // Clone first so no borrow is held while mutating.
    let next_value = next_screen.get().clone();
    match next_value {
        Pending(new_screen) => {
            let old_screen = screen.get().clone();
            info!("Transitioning from {:?} to {:?}", old_screen, new_screen);
            screen.set(new_screen.clone());
            next_screen.reset();
            on_screen_exit(&old_screen, &mut commands, &systems_store);
            on_screen_enter(&new_screen, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No screen change pending.");
        }
    }
}

fn run_hook(name: &str, commands: &mut Commands, systems_store: &SystemsStore) {
    match systems_store.get(name) {
        Some(id) => {
            debug!("Running hook '{}'", name);
            commands.run_system(*id);
        }
        None => warn!("Hook '{}' not found in SystemsStore", name),
    }
}

fn on_screen_enter(screen: &Screens, commands: &mut Commands, systems_store: &SystemsStore) {
    match screen {
        Screens::None => debug!("Entered None screen"),
        Screens::Setup => run_hook(SETUP_HOOK, commands, systems_store),
        Screens::Menu => run_hook(ENTER_MENU_HOOK, commands, systems_store),
        Screens::Game => run_hook(ENTER_GAME_HOOK, commands, systems_store),
        Screens::Quitting => run_hook(QUIT_GAME_HOOK, commands, systems_store),
    }
}

fn on_screen_exit(screen: &Screens, commands: &mut Commands, systems_store: &SystemsStore) {
    match screen {
        Screens::Menu => run_hook(EXIT_MENU_HOOK, commands, systems_store),
        Screens::Game => run_hook(EXIT_GAME_HOOK, commands, systems_store),
        other => debug!("Exited {:?} screen", other),
    }
}
