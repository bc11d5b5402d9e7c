//! Game systems.
//!
//! This module groups all ECS systems that advance input, simulation and
//! rendering.
//!
//! Submodules overview
//! - [`camera`] – keep the camera viewport in step with the window size
//! - [`collection`] – player/pickup overlap, score and pickup relocation
//! - [`hud`] – keep the score label text and position current
//! - [`input`] – read hardware input and update [`crate::resources::input::InputState`]
//! - [`menu`] – start the game from the main menu
//! - [`movement`] – held directions to player and camera displacement
//! - [`render`] – draw the menu, the world and debug overlays using Raylib
//! - [`screenstate`] – check for pending screen transitions and trigger events
//! - [`time`] – update simulation time and delta

pub mod camera;
pub mod collection;
pub mod hud;
pub mod input;
pub mod menu;
pub mod movement;
pub mod render;
pub mod screenstate;
pub mod time;
