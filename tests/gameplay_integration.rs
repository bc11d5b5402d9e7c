//! Gameplay tick integration tests for movement, camera and collection.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use resource_collector::components::boxcollider::BoxCollider;
use resource_collector::components::dynamictext::DynamicText;
use resource_collector::components::inputcontrolled::InputControlled;
use resource_collector::components::mapposition::MapPosition;
use resource_collector::components::pickup::Pickup;
use resource_collector::components::scorelabel::ScoreLabel;
use resource_collector::events::collection::ResourceCollectedEvent;
use resource_collector::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use resource_collector::resources::camera2d::GameCamera;
use resource_collector::resources::debugmode::DebugMode;
use resource_collector::resources::input::{Direction, InputState};
use resource_collector::resources::rng::GameRng;
use resource_collector::resources::score::Score;
use resource_collector::resources::windowsize::WindowSize;
use resource_collector::resources::worldbounds::WorldBounds;
use resource_collector::resources::worldtime::WorldTime;
use resource_collector::systems::camera::camera_resize;
use resource_collector::systems::collection::pickup_collection;
use resource_collector::systems::hud::update_score_label;
use resource_collector::systems::movement::player_movement;
use resource_collector::systems::time::update_world_time;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
    });
    world.insert_resource(WorldBounds::new(25.0, 25.0));
    world.insert_resource(InputState::default());
    world.insert_resource(GameRng::with_seed(42));
    world.insert_resource(Score::default());
    world.insert_resource(
        GameCamera::new(10.0, &WindowSize { w: 100, h: 100 }, 1.0)
            .with_position(Vector2::new(12.5, 12.5)),
    );
    world
}

fn spawn_player(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((
            MapPosition::new(x, y),
            BoxCollider::new(1.0, 1.0),
            InputControlled::new(3.0),
        ))
        .id()
}

fn spawn_pickup(world: &mut World, x: f32, y: f32) -> Entity {
    world
        .spawn((Pickup, MapPosition::new(x, y), BoxCollider::new(1.0, 1.0)))
        .id()
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_movement);
    schedule.run(world);
}

fn tick_collection(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(pickup_collection);
    schedule.run(world);
    world.flush();
}

fn position(world: &World, entity: Entity) -> Vector2 {
    world.get::<MapPosition>(entity).unwrap().pos
}

#[derive(Resource, Default)]
struct CollectedTotals(Vec<u32>);

fn record_collected(trigger: On<ResourceCollectedEvent>, mut totals: ResMut<CollectedTotals>) {
    totals.0.push(trigger.event().total);
}

// ==================== MOVEMENT ====================

#[test]
fn test_hold_left_one_second() {
    let mut world = make_world(1.0);
    let player = spawn_player(&mut world, 12.0, 12.0);
    world
        .resource_mut::<InputState>()
        .set_held(Direction::Left, true);

    tick_movement(&mut world);

    let pos = position(&world, player);
    assert!(approx_eq(pos.x, 9.0), "x = {}", pos.x);
    assert!(approx_eq(pos.y, 12.0));
}

#[test]
fn test_hold_left_ten_seconds_stops_at_edge() {
    let mut world = make_world(10.0);
    let player = spawn_player(&mut world, 12.0, 12.0);
    world
        .resource_mut::<InputState>()
        .set_held(Direction::Left, true);

    tick_movement(&mut world);

    assert!(approx_eq(position(&world, player).x, 0.0));
    assert!(approx_eq(world.resource::<GameCamera>().position.x, 5.0));
}

#[test]
fn test_camera_tracks_player_until_clamped() {
    let mut world = make_world(0.25);
    world.resource_mut::<GameCamera>().position = Vector2::new(6.0, 12.5);
    let player = spawn_player(&mut world, 1.0, 12.0);
    world
        .resource_mut::<InputState>()
        .set_held(Direction::Left, true);

    let mut last_camera_x = f32::MAX;
    for _ in 0..8 {
        tick_movement(&mut world);
        let cam_x = world.resource::<GameCamera>().position.x;
        assert!(cam_x <= last_camera_x);
        assert!(cam_x >= 5.0);
        last_camera_x = cam_x;
    }
    assert!(approx_eq(position(&world, player).x, 0.0));
    assert!(approx_eq(last_camera_x, 5.0));
}

#[test]
fn test_no_input_no_movement() {
    let mut world = make_world(1.0);
    let player = spawn_player(&mut world, 12.0, 12.0);
    let camera_before = *world.resource::<GameCamera>();

    tick_movement(&mut world);

    assert_eq!(position(&world, player), Vector2::new(12.0, 12.0));
    assert_eq!(*world.resource::<GameCamera>(), camera_before);
}

#[test]
fn test_movement_without_camera_is_skipped() {
    let mut world = make_world(1.0);
    world.remove_resource::<GameCamera>();
    let player = spawn_player(&mut world, 12.0, 12.0);
    world
        .resource_mut::<InputState>()
        .set_held(Direction::Up, true);

    tick_movement(&mut world);

    assert_eq!(position(&world, player), Vector2::new(12.0, 12.0));
}

#[test]
fn test_player_stays_in_bounds_over_many_frames() {
    let mut world = make_world(0.5);
    let player = spawn_player(&mut world, 12.0, 12.0);
    let mut rng = fastrand::Rng::with_seed(3);

    for _ in 0..300 {
        {
            let mut input = world.resource_mut::<InputState>();
            for direction in Direction::ALL {
                input.set_held(direction, rng.bool());
            }
        }
        tick_movement(&mut world);
        let pos = position(&world, player);
        assert!((0.0..=24.0).contains(&pos.x), "x = {}", pos.x);
        assert!((0.0..=24.0).contains(&pos.y), "y = {}", pos.y);
        let cam = world.resource::<GameCamera>().position;
        assert!((5.0..=20.0).contains(&cam.x), "camera x = {}", cam.x);
        assert!((5.0..=20.0).contains(&cam.y), "camera y = {}", cam.y);
    }
}

// ==================== COLLECTION ====================

#[test]
fn test_pickup_under_player_is_collected_and_moved() {
    let mut world = make_world(0.016);
    world.init_resource::<CollectedTotals>();
    world.add_observer(record_collected);
    spawn_player(&mut world, 12.0, 12.0);
    let pickup = spawn_pickup(&mut world, 12.0, 12.0);
    for i in 0..9 {
        spawn_pickup(&mut world, i as f32 * 2.0, 24.0);
    }

    tick_collection(&mut world);

    assert_eq!(world.resource::<Score>().collected, 1);
    let pos = position(&world, pickup);
    assert_ne!(pos, Vector2::new(12.0, 12.0));
    assert!((0.0..=24.0).contains(&pos.x), "x = {}", pos.x);
    assert!((0.0..=24.0).contains(&pos.y), "y = {}", pos.y);
    assert_eq!(world.resource::<CollectedTotals>().0, vec![1]);

    let mut pickups = world.query_filtered::<Entity, With<Pickup>>();
    assert_eq!(pickups.iter(&world).count(), 10);
}

#[test]
fn test_edge_touching_pickup_is_not_collected() {
    let mut world = make_world(0.016);
    spawn_player(&mut world, 12.0, 12.0);
    let right = spawn_pickup(&mut world, 13.0, 12.0);
    let above = spawn_pickup(&mut world, 12.0, 13.0);

    tick_collection(&mut world);

    assert_eq!(world.resource::<Score>().collected, 0);
    assert_eq!(position(&world, right), Vector2::new(13.0, 12.0));
    assert_eq!(position(&world, above), Vector2::new(12.0, 13.0));
}

#[test]
fn test_several_overlaps_count_once_each() {
    let mut world = make_world(0.016);
    world.init_resource::<CollectedTotals>();
    world.add_observer(record_collected);
    spawn_player(&mut world, 12.0, 12.0);
    spawn_pickup(&mut world, 12.5, 12.5);
    spawn_pickup(&mut world, 11.5, 11.5);

    tick_collection(&mut world);

    assert_eq!(world.resource::<Score>().collected, 2);
    let mut totals = world.resource::<CollectedTotals>().0.clone();
    totals.sort();
    assert_eq!(totals, vec![1, 2]);
}

#[test]
fn test_collection_without_player_does_nothing() {
    let mut world = make_world(0.016);
    spawn_pickup(&mut world, 12.0, 12.0);

    tick_collection(&mut world);

    assert_eq!(world.resource::<Score>().collected, 0);
}

// ==================== CAMERA & HUD ====================

#[test]
fn test_camera_resize_follows_window_and_ignores_minimize() {
    let mut world = make_world(0.016);
    world.insert_resource(GameCamera::new(10.0, &WindowSize { w: 800, h: 400 }, 1.0));
    world.insert_resource(WindowSize { w: 800, h: 400 });
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_resize);

    schedule.run(&mut world);
    assert!(approx_eq(world.resource::<GameCamera>().viewport_height, 5.0));

    *world.resource_mut::<WindowSize>() = WindowSize { w: 0, h: 0 };
    schedule.run(&mut world);
    assert!(approx_eq(world.resource::<GameCamera>().viewport_height, 5.0));

    *world.resource_mut::<WindowSize>() = WindowSize { w: 1000, h: 1000 };
    schedule.run(&mut world);
    let camera = world.resource::<GameCamera>();
    assert!(approx_eq(camera.viewport_width, 10.0));
    assert!(approx_eq(camera.viewport_height, 10.0));
}

#[test]
fn test_score_label_tracks_score_and_camera() {
    let mut world = make_world(0.016);
    world.resource_mut::<Score>().collected = 3;
    world.resource_mut::<GameCamera>().position = Vector2::new(8.0, 9.0);
    let label = world
        .spawn((
            ScoreLabel,
            MapPosition::new(0.0, 0.0),
            DynamicText::new("Resources: 0", 0.6, raylib::prelude::Color::BLUE),
        ))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(update_score_label);
    schedule.run(&mut world);

    assert_eq!(world.get::<DynamicText>(label).unwrap().content, "Resources: 3");
    let pos = position(&world, label);
    assert!(approx_eq(pos.x, 3.0));
    assert!(approx_eq(pos.y, 5.0));
}

// ==================== TIME & DEBUG ====================

#[test]
fn test_world_time_applies_scale() {
    let mut world = make_world(0.0);
    world.insert_resource(WorldTime::default().with_time_scale(0.5));
    update_world_time(&mut world, 0.2);
    update_world_time(&mut world, 0.2);
    let time = world.resource::<WorldTime>();
    assert!(approx_eq(time.delta, 0.1));
    assert!(approx_eq(time.elapsed, 0.2));
}

#[test]
fn test_debug_event_toggles_debug_mode() {
    let mut world = make_world(0.016);
    world.add_observer(switch_debug_observer);
    world.flush();

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(world.contains_resource::<DebugMode>());

    world.trigger(SwitchDebugEvent {});
    world.flush();
    assert!(!world.contains_resource::<DebugMode>());
}
