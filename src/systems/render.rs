//! Rendering.
//!
//! World coordinates grow upward while raylib draws downward, so every world
//! box goes through [`WorldBounds::to_screen_rect`] and the raylib camera is
//! built by [`GameCamera::to_raylib`] with the same mirroring.
//!
//! The menu lays its text out in a small fixed world ([`MENU_WIDTH`] ×
//! [`MENU_HEIGHT`]) fitted into the window with letterboxing.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::GameCamera;
use crate::resources::debugmode::DebugMode;
use crate::resources::score::Score;
use crate::resources::screenstate::{ScreenState, Screens};
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldbounds::WorldBounds;

pub const MENU_WIDTH: f32 = 5.0;
pub const MENU_HEIGHT: f32 = 3.0;

/// raylib's default font is 10 px tall; this keeps its native spacing when scaled.
fn default_spacing(font_size: f32) -> f32 {
    font_size / 10.0
}

type TextQuery<'w, 's> = Query<'w, 's, (&'static DynamicText, &'static MapPosition, &'static ZIndex)>;
type SpriteQuery<'w, 's> = Query<'w, 's, (&'static Sprite, &'static MapPosition, &'static ZIndex)>;
type ColliderQuery<'w, 's> = Query<'w, 's, (&'static BoxCollider, &'static MapPosition)>;

/// Texts sorted back to front.
fn sorted_texts<'a>(texts: &'a TextQuery) -> Vec<(&'a DynamicText, &'a MapPosition, &'a ZIndex)> {
    let mut list: Vec<_> = texts.iter().collect();
    list.sort_by_key(|(_, _, z)| **z);
    list
}

pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    screen: Res<ScreenState>,
    window: Res<WindowSize>,
    bounds: Res<WorldBounds>,
    camera: Option<Res<GameCamera>>,
    textures: Option<Res<TextureStore>>,
    score: Option<Res<Score>>,
    debug_mode: Option<Res<DebugMode>>,
    sprites: SpriteQuery,
    texts: TextQuery,
    colliders: ColliderQuery,
) {
    let font = rl.get_font_default();
    let fps = rl.get_fps();
    let mut d = rl.begin_drawing(&th);

    match (screen.get(), camera.as_deref(), textures.as_deref()) {
        (Screens::Menu, _, _) => draw_menu(&mut d, &font, &window, &texts),
        (Screens::Game, Some(camera), Some(textures)) => {
            let show_colliders = debug_mode.is_some().then_some(&colliders);
            draw_game(
                &mut d,
                &font,
                &window,
                &bounds,
                camera,
                textures,
                &sprites,
                &texts,
                show_colliders,
            );
        }
        _ => d.clear_background(Color::BLACK),
    }

    if debug_mode.is_some() {
        draw_debug_overlay(&mut d, fps, screen.get(), camera.as_deref(), score.as_deref());
    }
}

fn draw_menu(d: &mut RaylibDrawHandle, font: &WeakFont, window: &WindowSize, texts: &TextQuery) {
    d.clear_background(Color::PINK);
    let area = window.fit_rect(MENU_WIDTH, MENU_HEIGHT);
    let camera = Camera2D {
        offset: Vector2 {
            x: area.x,
            y: area.y,
        },
        target: Vector2::zero(),
        rotation: 0.0,
        zoom: area.width / MENU_WIDTH,
    };
    let mut d2 = d.begin_mode2D(camera);
    for (text, position, _) in sorted_texts(texts) {
        let top_left = Vector2 {
            x: position.pos.x,
            y: MENU_HEIGHT - position.pos.y,
        };
        d2.draw_text_ex(
            font,
            &text.content,
            top_left,
            text.font_size,
            default_spacing(text.font_size),
            text.color,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_game(
    d: &mut RaylibDrawHandle,
    font: &WeakFont,
    window: &WindowSize,
    bounds: &WorldBounds,
    camera: &GameCamera,
    textures: &TextureStore,
    sprites: &SpriteQuery,
    texts: &TextQuery,
    colliders: Option<&ColliderQuery>,
) {
    d.clear_background(Color::BLACK);
    let mut d2 = d.begin_mode2D(camera.to_raylib(window.w, window.h, bounds.height));

    let mut to_draw: Vec<_> = sprites.iter().collect();
    to_draw.sort_by_key(|(_, _, z)| **z);
    for (sprite, position, _) in to_draw {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: tex.width as f32,
            height: tex.height as f32,
        };
        let dest = bounds.to_screen_rect(position.pos, Vector2::new(sprite.width, sprite.height));
        d2.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    for (text, position, _) in sorted_texts(texts) {
        d2.draw_text_ex(
            font,
            &text.content,
            bounds.to_screen_point(position.pos),
            text.font_size,
            default_spacing(text.font_size),
            text.color,
        );
    }

    if let Some(colliders) = colliders {
        // one screen pixel wide at the current zoom
        let thickness = camera.visible_width() / window.w.max(1) as f32;
        for (collider, position) in colliders.iter() {
            let (x, y, w, h) = collider.get_aabb(position.pos);
            let rect = bounds.to_screen_rect(Vector2::new(x, y), Vector2::new(w, h));
            d2.draw_rectangle_lines_ex(rect, thickness, Color::RED);
        }
    }
}

fn draw_debug_overlay(
    d: &mut RaylibDrawHandle,
    fps: u32,
    screen: &Screens,
    camera: Option<&GameCamera>,
    score: Option<&Score>,
) {
    let text = format!("DEBUG MODE (press F11 to toggle) | FPS: {} | Screen: {:?}", fps, screen);
    d.draw_text(&text, 10, 10, 10, Color::BLACK);

    if let Some(cam) = camera {
        let cam_text = format!(
            "Camera pos: ({:.2}, {:.2}) view: {:.2}x{:.2} zoom: {:.2}",
            cam.position.x,
            cam.position.y,
            cam.visible_width(),
            cam.visible_height(),
            cam.zoom
        );
        d.draw_text(&cam_text, 10, 30, 10, Color::BLACK);
    }
    if let Some(score) = score {
        d.draw_text(&score.label(), 10, 50, 10, Color::BLACK);
    }
}
