//! Shared random number generator.
//!
//! Pickup placement draws from this resource so a run can be replayed with
//! `--seed` and tests stay deterministic.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub fastrand::Rng);

impl GameRng {
    pub fn with_seed(seed: u64) -> Self {
        Self(fastrand::Rng::with_seed(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self(fastrand::Rng::new())
    }
}
