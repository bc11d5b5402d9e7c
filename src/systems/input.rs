//! Input systems.
//!
//! [`update_input_state`] reads hardware input from raylib each frame and
//! writes the results into [`crate::resources::input::InputState`]. The debug
//! key is edge-triggered and fires a
//! [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{Binding, InputState};

/// Read (down, pressed, released) for one binding.
fn poll(rl: &RaylibHandle, binding: Binding) -> (bool, bool, bool) {
    match binding {
        Binding::Key(key) => (
            rl.is_key_down(key),
            rl.is_key_pressed(key),
            rl.is_key_released(key),
        ),
        Binding::Mouse(button) => (
            rl.is_mouse_button_down(button),
            rl.is_mouse_button_pressed(button),
            rl.is_mouse_button_released(button),
        ),
        Binding::None => (false, false, false),
    }
}

/// Poll raylib for keyboard and pointer input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<RaylibHandle>,
    mut commands: Commands,
) {
    for control in input.controls_mut() {
        let (down, pressed, released) = poll(&rl, control.binding);
        control.update(down, pressed, released);
    }

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
