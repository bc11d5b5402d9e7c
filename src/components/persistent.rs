//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component survive screen changes. Observers
//! and registered hook systems are tagged with it.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across screen changes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
