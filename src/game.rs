//! Screen hooks.
//!
//! Each function here is registered as a one-shot system in
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore) and run by
//! the screen transition observer when its screen is entered or left.
//! The game screen owns its textures, camera and score: they are inserted on
//! enter and removed on exit.

use bevy_ecs::prelude::*;
use log::{debug, error, info};
use raylib::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::persistent::Persistent;
use crate::components::pickup::Pickup;
use crate::components::scorelabel::ScoreLabel;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::appexit::AppExit;
use crate::resources::assets::{AssetPaths, BACKGROUND_TEXTURE, PLAYER_TEXTURE, RESOURCE_TEXTURE};
use crate::resources::camera2d::GameCamera;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::GameRng;
use crate::resources::score::Score;
use crate::resources::screenstate::{NextScreenState, Screens};
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldbounds::WorldBounds;
use crate::systems::hud::SCORE_LABEL_RAISE;

pub const WELCOME_TEXT: &str = "Welcome to my little test game <3";
pub const START_TEXT: &str = "Tap anywhere to start the game";
/// Menu text size in menu world units.
pub const MENU_FONT_SIZE: f32 = 0.15;
/// Left edge of the menu lines. Text is drawn from its left edge, so a
/// mid-width anchor (2.5) would push both lines past the 5-unit menu.
pub const MENU_TEXT_X: f32 = 0.25;
pub const SCORE_FONT_SIZE: f32 = 0.6;

const BACKGROUND_Z: i32 = -1;
const PICKUP_Z: i32 = 0;
const PLAYER_Z: i32 = 1;
const LABEL_Z: i32 = 2;

/// Build the world from the configuration and go to the main menu.
pub fn setup(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut next_screen: ResMut<NextScreenState>,
) {
    let bounds = WorldBounds::new(config.world_width, config.world_height);
    info!("World is {}x{} units", bounds.width, bounds.height);
    commands.insert_resource(bounds);
    next_screen.set(Screens::Menu);
}

pub fn enter_menu(mut commands: Commands) {
    commands.spawn((
        MapPosition::new(MENU_TEXT_X, 1.75),
        ZIndex(0),
        DynamicText::new(WELCOME_TEXT, MENU_FONT_SIZE, Color::PURPLE),
    ));
    commands.spawn((
        MapPosition::new(MENU_TEXT_X, 1.25),
        ZIndex(0),
        DynamicText::new(START_TEXT, MENU_FONT_SIZE, Color::PURPLE),
    ));
}

pub fn exit_menu(commands: Commands, query: Query<Entity, (With<MapPosition>, Without<Persistent>)>) {
    despawn_scene_entities(commands, query);
}

/// Load the textures, then populate the world.
///
/// A texture that fails to load stops the application with a failure code.
pub fn enter_game(
    mut commands: Commands,
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    assets: Res<AssetPaths>,
    config: Res<GameConfig>,
    bounds: Res<WorldBounds>,
    window: Res<WindowSize>,
    mut rng: ResMut<GameRng>,
) {
    let mut textures = TextureStore::new();
    for (key, path) in assets.textures() {
        match rl.load_texture(&th, &path.to_string_lossy()) {
            Ok(texture) => {
                debug!("Loaded texture '{}' from {}", key, path.display());
                textures.insert(key, texture);
            }
            Err(e) => {
                error!("Failed to load texture {}: {}", path.display(), e);
                commands.insert_resource(AppExit::failure());
                return;
            }
        }
    }
    commands.insert_resource(textures);
    populate_game(&mut commands, &config, &bounds, &window, &mut rng.0);
}

/// Spawn the game screen entities and insert its camera and score.
///
/// The player starts at the world center with the camera centered on it;
/// pickups are scattered uniformly over the world.
pub fn populate_game(
    commands: &mut Commands,
    config: &GameConfig,
    bounds: &WorldBounds,
    window: &WindowSize,
    rng: &mut fastrand::Rng,
) {
    let player_size = Vector2::new(config.player_width, config.player_height);
    let player_pos = bounds.centered(player_size);

    let mut camera = GameCamera::new(config.camera_width, window, config.camera_zoom)
        .with_position(player_pos + player_size.scale_by(0.5));
    camera.clamp_to_world(bounds);

    let score = Score::default();
    let label_pos = camera.bottom_left() + Vector2::new(0.0, SCORE_LABEL_RAISE);

    commands.spawn((
        MapPosition::new(0.0, 0.0),
        ZIndex(BACKGROUND_Z),
        Sprite::new(BACKGROUND_TEXTURE, bounds.width, bounds.height),
    ));

    commands.spawn((
        MapPosition::from_vec(player_pos),
        ZIndex(PLAYER_Z),
        Sprite::new(PLAYER_TEXTURE, player_size.x, player_size.y),
        BoxCollider::new(player_size.x, player_size.y),
        InputControlled::new(config.player_speed),
    ));

    let pickup_size = Vector2::new(config.resource_width, config.resource_height);
    for _ in 0..config.resource_count {
        commands.spawn((
            Pickup,
            MapPosition::from_vec(bounds.random_position(pickup_size, rng)),
            ZIndex(PICKUP_Z),
            Sprite::new(RESOURCE_TEXTURE, pickup_size.x, pickup_size.y),
            BoxCollider::new(pickup_size.x, pickup_size.y),
        ));
    }

    commands.spawn((
        ScoreLabel,
        MapPosition::from_vec(label_pos),
        ZIndex(LABEL_Z),
        DynamicText::new(score.label(), SCORE_FONT_SIZE, Color::BLUE),
    ));

    info!(
        "Game started: player at ({}, {}), {} resources",
        player_pos.x, player_pos.y, config.resource_count
    );
    commands.insert_resource(camera);
    commands.insert_resource(score);
}

/// Tear down the game screen. Removing the texture store unloads the textures.
pub fn exit_game(
    mut commands: Commands,
    query: Query<Entity, (With<MapPosition>, Without<Persistent>)>,
) {
    commands.remove_resource::<GameCamera>();
    commands.remove_resource::<TextureStore>();
    commands.remove_resource::<Score>();
    despawn_scene_entities(commands, query);
}

pub fn quit_game(mut commands: Commands) {
    info!("Quitting");
    commands.insert_resource(AppExit::success());
}

/// Despawn every positioned entity that is not marked [`Persistent`].
pub fn despawn_scene_entities(
    mut commands: Commands,
    query: Query<Entity, (With<MapPosition>, Without<Persistent>)>,
) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn();
        count += 1;
    }
    debug!("Despawned {} scene entities", count);
}
