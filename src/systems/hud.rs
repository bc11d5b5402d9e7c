//! Score label upkeep.

use bevy_ecs::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::scorelabel::ScoreLabel;
use crate::resources::camera2d::GameCamera;
use crate::resources::score::Score;

/// Vertical offset of the label above the bottom edge of the view.
pub const SCORE_LABEL_RAISE: f32 = 1.0;

/// Keep the score label text current and pinned to the view's bottom-left corner.
pub fn update_score_label(
    score: Option<Res<Score>>,
    camera: Option<Res<GameCamera>>,
    mut query: Query<(&mut DynamicText, &mut MapPosition), With<ScoreLabel>>,
) {
    let (Some(score), Some(camera)) = (score, camera) else {
        return;
    };
    let corner = camera.bottom_left();
    for (mut text, mut position) in query.iter_mut() {
        let label = score.label();
        if text.content != label {
            text.set_content(label);
        }
        position.pos.x = corner.x;
        position.pos.y = corner.y + SCORE_LABEL_RAISE;
    }
}
