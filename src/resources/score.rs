use bevy_ecs::prelude::Resource;

/// Number of resources collected during the current game screen session.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub collected: u32,
}

impl Score {
    /// Count one collection and return the new total.
    pub fn increment(&mut self) -> u32 {
        self.collected += 1;
        self.collected
    }

    pub fn label(&self) -> String {
        format!("Resources: {}", self.collected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_and_label() {
        let mut score = Score::default();
        assert_eq!(score.label(), "Resources: 0");
        assert_eq!(score.increment(), 1);
        assert_eq!(score.increment(), 2);
        assert_eq!(score.label(), "Resources: 2");
    }
}
