//! Resource collection.
//!
//! Once per frame the player's box is tested against every pickup. Each
//! overlap adds one to the [`Score`] and moves that pickup to a random
//! in-bounds spot. The pass walks the pickups once, so a relocated pickup is
//! not tested again in the same frame.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::pickup::Pickup;
use crate::events::collection::ResourceCollectedEvent;
use crate::resources::rng::GameRng;
use crate::resources::score::Score;
use crate::resources::worldbounds::WorldBounds;

pub fn pickup_collection(
    mut commands: Commands,
    score: Option<ResMut<Score>>,
    mut rng: ResMut<GameRng>,
    bounds: Res<WorldBounds>,
    player: Query<(&MapPosition, &BoxCollider), (With<InputControlled>, Without<Pickup>)>,
    mut pickups: Query<(Entity, &mut MapPosition, &BoxCollider), (With<Pickup>, Without<InputControlled>)>,
) {
    let Some(mut score) = score else {
        return;
    };
    let (player_position, player_collider) = match player.single() {
        Ok(found) => found,
        Err(e) => {
            debug!("pickup_collection: no single player: {}", e);
            return;
        }
    };

    for (entity, mut position, collider) in pickups.iter_mut() {
        if !player_collider.overlaps(player_position.pos, collider, position.pos) {
            continue;
        }
        let total = score.increment();
        position.pos = bounds.random_position(collider.size, &mut rng.0);
        commands.trigger(ResourceCollectedEvent {
            pickup: entity,
            new_position: position.pos,
            total,
        });
    }
}
