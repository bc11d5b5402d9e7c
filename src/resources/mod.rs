//! ECS resources made available to systems.
//!
//! Overview
//! - `appexit` – request to leave the main loop with an exit code
//! - `assets` – locations of the three images
//! - `camera2d` – game screen camera: position, viewport and clamping
//! - `debugmode` – presence toggles debug overlays
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – per-frame keyboard/pointer state and the [`input::DirectionInput`] trait
//! - `rng` – seedable random source for pickup placement
//! - `score` – resources collected this session
//! - `screenstate` – active screen and pending transition
//! - `systemsstore` – registry of screen hooks by name
//! - `texturestore` – loaded textures keyed by name
//! - `windowsize` – current window dimensions in pixels
//! - `worldbounds` – fixed world rectangle and in-bounds helpers
//! - `worldtime` – simulation time and delta
pub mod appexit;
pub mod assets;
pub mod camera2d;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod rng;
pub mod score;
pub mod screenstate;
pub mod systemsstore;
pub mod texturestore;
pub mod windowsize;
pub mod worldbounds;
pub mod worldtime;
