use bevy_ecs::prelude::Component;

/// Marks the text entity that shows the running score.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct ScoreLabel;
