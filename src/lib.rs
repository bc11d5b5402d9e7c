//! Resource Collector library.
//!
//! This module exposes the game's ECS components, resources, systems, events
//! and screen hooks for use in integration tests and by the executable.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
