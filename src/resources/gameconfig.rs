//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Every key is optional and
//! falls back to the built-in default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 480
//! target_fps = 60
//!
//! [world]
//! width = 25
//! height = 25
//!
//! [player]
//! width = 1
//! height = 1
//! speed = 3
//!
//! [resources]
//! width = 1
//! height = 1
//! count = 10
//!
//! [camera]
//! width = 10
//! zoom = 1
//!
//! [assets]
//! dir = ./assets
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: i32 = 800;
const DEFAULT_WINDOW_HEIGHT: i32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_WORLD_WIDTH: f32 = 25.0;
const DEFAULT_WORLD_HEIGHT: f32 = 25.0;
const DEFAULT_PLAYER_WIDTH: f32 = 1.0;
const DEFAULT_PLAYER_HEIGHT: f32 = 1.0;
const DEFAULT_PLAYER_SPEED: f32 = 3.0;
const DEFAULT_RESOURCE_WIDTH: f32 = 1.0;
const DEFAULT_RESOURCE_HEIGHT: f32 = 1.0;
const DEFAULT_DISPLAYED_RESOURCES_LIMIT: usize = 10;
const DEFAULT_CAMERA_WIDTH: f32 = 10.0;
const DEFAULT_CAMERA_ZOOM: f32 = 1.0;
const DEFAULT_ASSETS_DIR: &str = "./assets";
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Read a strictly positive float, `Ok(None)` when the key is absent.
fn positive_float(ini: &Ini, section: &str, key: &str) -> Result<Option<f32>, String> {
    match ini.getfloat(section, key) {
        Ok(Some(v)) if v > 0.0 && v.is_finite() => Ok(Some(v as f32)),
        Ok(Some(v)) => Err(format!("[{section}] {key} must be positive, got {v}")),
        Ok(None) => Ok(None),
        Err(e) => Err(format!("[{section}] {key}: {e}")),
    }
}

/// Read a strictly positive integer that fits in `T`, `Ok(None)` when the
/// key is absent.
fn positive_int<T: TryFrom<u64>>(
    ini: &Ini,
    section: &str,
    key: &str,
) -> Result<Option<T>, String> {
    match ini.getuint(section, key) {
        Ok(Some(0)) => Err(format!("[{section}] {key} must be positive, got 0")),
        Ok(Some(v)) => T::try_from(v)
            .map(Some)
            .map_err(|_| format!("[{section}] {key} out of range: {v}")),
        Ok(None) => Ok(None),
        Err(e) => Err(format!("[{section}] {key}: {e}")),
    }
}

/// Apply `value` to `target` when present; log and keep the default otherwise.
fn apply<T>(target: &mut T, value: Result<Option<T>, String>) {
    match value {
        Ok(Some(v)) => *target = v,
        Ok(None) => {}
        Err(e) => warn!("Ignoring config value: {}", e),
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: i32,
    /// Window height in pixels.
    pub window_height: i32,
    /// Target frames per second.
    pub target_fps: u32,
    /// World size in world units.
    pub world_width: f32,
    pub world_height: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Player speed in world units per second.
    pub player_speed: f32,
    pub resource_width: f32,
    pub resource_height: f32,
    /// How many resources are on the field at once.
    pub resource_count: usize,
    /// Camera viewport width in world units; height follows the window.
    pub camera_width: f32,
    pub camera_zoom: f32,
    /// Directory holding the three images.
    pub assets_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            player_width: DEFAULT_PLAYER_WIDTH,
            player_height: DEFAULT_PLAYER_HEIGHT,
            player_speed: DEFAULT_PLAYER_SPEED,
            resource_width: DEFAULT_RESOURCE_WIDTH,
            resource_height: DEFAULT_RESOURCE_HEIGHT,
            resource_count: DEFAULT_DISPLAYED_RESOURCES_LIMIT,
            camera_width: DEFAULT_CAMERA_WIDTH,
            camera_zoom: DEFAULT_CAMERA_ZOOM,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values. Returns an error
    /// if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.load(&self.config_path)
            .map_err(|e| format!("Failed to load config file {}: {}", self.config_path.display(), e))?;
        self.apply_ini(&ini);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut ini = Ini::new();
        ini.read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&ini);
        Ok(())
    }

    fn apply_ini(&mut self, ini: &Ini) {
        // [window] section
        apply(&mut self.window_width, positive_int(ini, "window", "width"));
        apply(&mut self.window_height, positive_int(ini, "window", "height"));
        apply(&mut self.target_fps, positive_int(ini, "window", "target_fps"));

        // [world] section
        apply(&mut self.world_width, positive_float(ini, "world", "width"));
        apply(&mut self.world_height, positive_float(ini, "world", "height"));

        // [player] section
        apply(&mut self.player_width, positive_float(ini, "player", "width"));
        apply(&mut self.player_height, positive_float(ini, "player", "height"));
        apply(&mut self.player_speed, positive_float(ini, "player", "speed"));

        // [resources] section
        apply(&mut self.resource_width, positive_float(ini, "resources", "width"));
        apply(&mut self.resource_height, positive_float(ini, "resources", "height"));
        apply(&mut self.resource_count, positive_int(ini, "resources", "count"));

        // [camera] section
        apply(&mut self.camera_width, positive_float(ini, "camera", "width"));
        apply(&mut self.camera_zoom, positive_float(ini, "camera", "zoom"));

        // [assets] section
        if let Some(dir) = ini.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, world {}x{}, {} resources, camera width {}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.world_width,
            self.world_height,
            self.resource_count,
            self.camera_width
        );
    }

    /// Override the assets directory (command line wins over the file).
    pub fn set_assets_dir(&mut self, dir: impl AsRef<Path>) {
        self.assets_dir = dir.as_ref().to_path_buf();
    }

    /// Get the window size.
    pub fn window_size(&self) -> (i32, i32) {
        (self.window_width, self.window_height)
    }
}
