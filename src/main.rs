//! Resource Collector main entry point.
//!
//! A small 2D top-down game written in Rust using:
//! - **raylib** for windowing, input, textures and drawing
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Steer the player with the arrow keys and collect the resources scattered
//! over the world. The score counts every resource picked up.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, check that the three images exist
//! 2. Initialize raylib window, ECS world and resources
//! 3. Register observers and screen hooks
//! 4. Run the main loop until the window closes or an exit is requested:
//!    - Update input, screen transitions, movement, collection
//!    - Render the active screen
//! 5. Unload textures before the window closes
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini --assets ./assets
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use resource_collector::components::persistent::Persistent;
use resource_collector::events::collection::log_resource_collected;
use resource_collector::events::screenstate::{
    ENTER_GAME_HOOK, ENTER_MENU_HOOK, EXIT_GAME_HOOK, EXIT_MENU_HOOK, QUIT_GAME_HOOK, SETUP_HOOK,
    ScreenChangedEvent, observe_screen_change_event,
};
use resource_collector::events::switchdebug::switch_debug_observer;
use resource_collector::game;
use resource_collector::resources::appexit::AppExit;
use resource_collector::resources::assets::AssetPaths;
use resource_collector::resources::gameconfig::{DEFAULT_CONFIG_PATH, GameConfig};
use resource_collector::resources::input::InputState;
use resource_collector::resources::rng::GameRng;
use resource_collector::resources::screenstate::{NextScreenState, ScreenState, Screens};
use resource_collector::resources::systemsstore::SystemsStore;
use resource_collector::resources::texturestore::TextureStore;
use resource_collector::resources::windowsize::WindowSize;
use resource_collector::resources::worldtime::WorldTime;
use resource_collector::systems::camera::camera_resize;
use resource_collector::systems::collection::pickup_collection;
use resource_collector::systems::hud::update_score_label;
use resource_collector::systems::input::update_input_state;
use resource_collector::systems::menu::start_game_on_pointer;
use resource_collector::systems::movement::player_movement;
use resource_collector::systems::render::render_system;
use resource_collector::systems::screenstate::{
    check_pending_screen, quit_on_back, state_is_game, state_is_menu,
};
use resource_collector::systems::time::update_world_time;

/// Resource Collector
#[derive(Parser)]
#[command(version, about = "Collect the resources scattered over the world.")]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Directory holding player.png, resource.png and the background image.
    /// Overrides the configuration file.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Seed for resource placement.
    #[arg(long)]
    seed: Option<u64>,
}

/// Register a screen hook as a persistent one-shot system.
fn register_hook<M>(
    world: &mut World,
    store: &mut SystemsStore,
    name: &str,
    system: impl IntoSystem<(), (), M> + 'static,
) {
    let id = world.register_system(system);
    // Registered systems are entities; keep them across screen changes.
    world.entity_mut(id.entity()).insert(Persistent);
    store.insert(name, id);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(dir) = &cli.assets {
        config.set_assets_dir(dir);
    }

    let assets = AssetPaths::new(&config.assets_dir);
    if let Err(e) = assets.verify() {
        log::error!("{}", e);
        std::process::exit(1);
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width, window_height)
        .resizable()
        .title("Resource Collector")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled by the game screen
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(match cli.seed {
        Some(seed) => GameRng::with_seed(seed),
        None => GameRng::default(),
    });
    world.insert_resource(config);
    world.insert_resource(assets);
    world.insert_resource(ScreenState::new());
    world.insert_resource(NextScreenState::new());

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn((Observer::new(observe_screen_change_event), Persistent));

    let mut systems_store = SystemsStore::new();
    register_hook(&mut world, &mut systems_store, SETUP_HOOK, game::setup);
    register_hook(&mut world, &mut systems_store, ENTER_MENU_HOOK, game::enter_menu);
    register_hook(&mut world, &mut systems_store, EXIT_MENU_HOOK, game::exit_menu);
    register_hook(&mut world, &mut systems_store, ENTER_GAME_HOOK, game::enter_game);
    register_hook(&mut world, &mut systems_store, EXIT_GAME_HOOK, game::exit_game);
    register_hook(&mut world, &mut systems_store, QUIT_GAME_HOOK, game::quit_game);
    world.insert_resource(systems_store);

    world.flush();

    // Enter Setup immediately so the world bounds exist before the first frame
    world.resource_mut::<NextScreenState>().set(Screens::Setup);
    world.trigger(ScreenChangedEvent {});
    world.flush();

    world.spawn((Observer::new(switch_debug_observer), Persistent));
    world.spawn((Observer::new(log_resource_collected), Persistent));
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(
        start_game_on_pointer
            .run_if(state_is_menu)
            .after(update_input_state)
            .before(check_pending_screen),
    );
    update.add_systems(
        quit_on_back
            .run_if(state_is_game)
            .after(update_input_state)
            .before(check_pending_screen),
    );
    update.add_systems(check_pending_screen.after(update_input_state));
    update.add_systems(
        player_movement
            .run_if(state_is_game)
            .after(check_pending_screen),
    );
    update.add_systems(
        pickup_collection
            .run_if(state_is_game)
            .after(player_movement),
    );
    update.add_systems(camera_resize.after(check_pending_screen).before(player_movement));
    update.add_systems(
        update_score_label
            .run_if(state_is_game)
            .after(pickup_collection),
    );
    update.add_systems(render_system.after(update_score_label));

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {:?}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.contains_resource::<AppExit>()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed resources for next frame

        // Update window size only when it changes so camera_resize sees the change
        let current = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            WindowSize {
                w: rl.get_screen_width(),
                h: rl.get_screen_height(),
            }
        };
        if *world.resource::<WindowSize>() != current {
            *world.resource_mut::<WindowSize>() = current;
        }
    }

    let code = world.get_resource::<AppExit>().map_or(0, |exit| exit.code);
    // Textures must be unloaded while the window still exists
    world.remove_resource::<TextureStore>();
    drop(world);
    log::info!("Bye (exit code {})", code);
    std::process::exit(code);
}
