//! Fixed asset file locations.
//!
//! The game uses exactly three images, all in one directory. [`AssetPaths`]
//! resolves them and checks they exist before the window opens so a missing
//! file stops the program with a message naming the path.

use bevy_ecs::prelude::Resource;
use std::path::{Path, PathBuf};

pub const PLAYER_IMAGE_FILE_NAME: &str = "player.png";
pub const RESOURCE_IMAGE_FILE_NAME: &str = "resource.png";
pub const BACKGROUND_IMAGE_FILE_NAME: &str = "resource-collector-background.png";

/// Texture store keys.
pub const PLAYER_TEXTURE: &str = "player";
pub const RESOURCE_TEXTURE: &str = "resource";
pub const BACKGROUND_TEXTURE: &str = "background";

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub dir: PathBuf,
}

impl AssetPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn player(&self) -> PathBuf {
        self.dir.join(PLAYER_IMAGE_FILE_NAME)
    }

    pub fn resource(&self) -> PathBuf {
        self.dir.join(RESOURCE_IMAGE_FILE_NAME)
    }

    pub fn background(&self) -> PathBuf {
        self.dir.join(BACKGROUND_IMAGE_FILE_NAME)
    }

    /// Texture key and file path of every image the game screen needs.
    pub fn textures(&self) -> [(&'static str, PathBuf); 3] {
        [
            (BACKGROUND_TEXTURE, self.background()),
            (PLAYER_TEXTURE, self.player()),
            (RESOURCE_TEXTURE, self.resource()),
        ]
    }

    /// Fail on the first image that is not a regular file.
    pub fn verify(&self) -> Result<(), String> {
        for (_, path) in self.textures() {
            if !Path::new(&path).is_file() {
                return Err(format!("Missing asset: {}", path.display()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_paths_join_dir() {
        let assets = AssetPaths::new("some/dir");
        assert_eq!(assets.player(), Path::new("some/dir/player.png"));
        assert_eq!(assets.resource(), Path::new("some/dir/resource.png"));
        assert_eq!(
            assets.background(),
            Path::new("some/dir/resource-collector-background.png")
        );
    }

    #[test]
    fn test_verify_names_missing_path() {
        let assets = AssetPaths::new("definitely/not/here");
        let err = assets.verify().unwrap_err();
        assert!(err.contains("resource-collector-background.png"), "{err}");
        assert!(err.contains("definitely"), "{err}");
    }

    #[test]
    fn test_verify_accepts_complete_dir() {
        let dir = std::env::temp_dir().join(format!("rc-assets-ok-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let assets = AssetPaths::new(&dir);
        for (_, path) in assets.textures() {
            fs::write(path, b"png").unwrap();
        }
        assert!(assets.verify().is_ok());

        fs::remove_file(assets.resource()).unwrap();
        let err = assets.verify().unwrap_err();
        assert!(err.contains(RESOURCE_IMAGE_FILE_NAME), "{err}");
        fs::remove_dir_all(&dir).unwrap();
    }
}
