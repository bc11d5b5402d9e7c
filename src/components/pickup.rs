//! Collectable resource marker.

use bevy_ecs::prelude::Component;

/// A resource pickup lying somewhere in the world.
///
/// Pickups are never despawned while the game screen is active; the
/// collection system relocates them instead.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Pickup;
