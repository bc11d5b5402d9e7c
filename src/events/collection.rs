//! Resource collection event.
//!
//! [`pickup_collection`](crate::systems::collection::pickup_collection)
//! triggers a [`ResourceCollectedEvent`] for every pickup the player touches.
//! The bundled observer only logs; other observers can hang sounds or effects
//! off the same event.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

/// A pickup was collected and moved to `new_position`.
#[derive(Event, Debug, Clone, Copy)]
pub struct ResourceCollectedEvent {
    pub pickup: Entity,
    pub new_position: Vector2,
    /// Score after this collection.
    pub total: u32,
}

pub fn log_resource_collected(trigger: On<ResourceCollectedEvent>) {
    let event = trigger.event();
    info!("Resources collected: {}", event.total);
    log::debug!(
        "Pickup {:?} respawned at ({:.2}, {:.2})",
        event.pickup,
        event.new_position.x,
        event.new_position.y
    );
}
