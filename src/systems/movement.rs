//! Player movement and camera follow.
//!
//! Each held direction moves the player by `speed * delta`. The camera stays
//! put while the player is inside the dead-zone for that direction and moves
//! by the same step once the player leaves it. Afterwards both are clamped to
//! the world independently: the camera so the view never leaves the world,
//! the player so it stays inside.
//!
//! Directions are applied one after another in [`Direction::ALL`] order, so
//! holding two keys moves diagonally.
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::GameCamera;
use crate::resources::input::{Direction, DirectionInput, InputState};
use crate::resources::worldbounds::WorldBounds;
use crate::resources::worldtime::WorldTime;

/// Whether the camera should follow a step in `direction` taken from `player`.
///
/// The dead-zone boundary sits half a view minus half a player from the
/// world edge the player is moving away from.
pub fn camera_should_follow(
    direction: Direction,
    player: Vector2,
    player_size: Vector2,
    camera: &GameCamera,
    bounds: &WorldBounds,
) -> bool {
    let view_w = camera.visible_width();
    let view_h = camera.visible_height();
    match direction {
        Direction::Right => player.x > (view_w - player_size.x) / 2.0,
        Direction::Left => player.x < bounds.width - (view_w + player_size.x) / 2.0,
        Direction::Up => player.y > (view_h - player_size.y) / 2.0,
        Direction::Down => player.y < bounds.height - (view_h + player_size.y) / 2.0,
    }
}

/// Move the player `distance` units towards `direction`, drag the camera when
/// it is outside the dead-zone, then clamp both to the world.
pub fn move_player(
    direction: Direction,
    distance: f32,
    player: &mut Vector2,
    player_size: Vector2,
    camera: &mut GameCamera,
    bounds: &WorldBounds,
) {
    // decided before the player moves
    let follow = camera_should_follow(direction, *player, player_size, camera, bounds);
    let step = direction.unit().scale_by(distance);

    *player = *player + step;
    if follow {
        camera.translate(step);
    }

    camera.clamp_to_world(bounds);
    *player = bounds.clamp_position(*player, player_size);
}

/// Apply every held direction for one frame.
pub fn apply_input(
    input: &impl DirectionInput,
    distance: f32,
    player: &mut Vector2,
    player_size: Vector2,
    camera: &mut GameCamera,
    bounds: &WorldBounds,
) {
    for direction in Direction::ALL {
        if input.is_held(direction) {
            move_player(direction, distance, player, player_size, camera, bounds);
        }
    }
}

/// Move input-controlled entities and the game camera from held directions.
pub fn player_movement(
    input: Res<InputState>,
    time: Res<WorldTime>,
    bounds: Res<WorldBounds>,
    camera: Option<ResMut<GameCamera>>,
    mut query: Query<(&mut MapPosition, &BoxCollider, &InputControlled)>,
) {
    let Some(mut camera) = camera else {
        return;
    };
    for (mut position, collider, controlled) in query.iter_mut() {
        let distance = controlled.speed * time.delta;
        apply_input(
            &*input,
            distance,
            &mut position.pos,
            collider.size,
            &mut camera,
            &bounds,
        );
    }
}
