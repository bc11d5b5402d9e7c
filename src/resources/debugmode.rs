//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that debug rendering should
//! be enabled. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws collider outlines and a
/// stats readout.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
