//! Loaded textures keyed by name.
//!
//! Owned by the game screen: filled on enter, dropped on exit. Dropping a
//! [`Texture2D`] unloads it, so removing the store releases every texture
//! exactly once.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

#[derive(Resource)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}
