use bevy_ecs::prelude::Resource;

/// Inserted to stop the main loop; `code` becomes the process exit status.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppExit {
    pub code: i32,
}

impl AppExit {
    pub fn success() -> Self {
        Self { code: 0 }
    }

    pub fn failure() -> Self {
        Self { code: 1 }
    }
}
