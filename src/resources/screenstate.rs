//! Active screen resources.
//!
//! These resources track which screen is currently shown and any pending
//! transition requested by systems. See
//! `crate::events::screenstate::observe_screen_change_event` for how a
//! transition is applied and enter/exit hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Screens the application can be on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Screens {
    #[default]
    None,
    Setup,
    Menu,
    Game,
    Quitting,
}

/// Representation of a requested next screen.
///
/// Use [`NextScreenState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextScreens::Unchanged`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextScreens {
    #[default]
    Unchanged,
    Pending(Screens),
}

/// Authoritative current screen.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ScreenState {
    current: Screens,
}

impl ScreenState {
    /// Create a new state initialized to [`Screens::None`].
    pub fn new() -> Self {
        ScreenState {
            current: Screens::None,
        }
    }
    /// Read-only access to the current screen.
    pub fn get(&self) -> &Screens {
        &self.current
    }
    /// Update the current screen immediately, without running hooks.
    pub fn set(&mut self, screen: Screens) {
        self.current = screen;
    }
}

/// Intent to change to a new screen.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextScreenState {
    next: NextScreens,
}

impl NextScreenState {
    pub fn new() -> Self {
        NextScreenState {
            next: NextScreens::Unchanged,
        }
    }

    pub fn get(&self) -> &NextScreens {
        &self.next
    }

    /// Request a transition to `next`.
    ///
    /// `check_pending_screen` notices the request and fires the change event.
    pub fn set(&mut self, next: Screens) {
        self.next = NextScreens::Pending(next);
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextScreens::Pending(_))
    }

    /// Reset to [`NextScreens::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextScreens::Unchanged;
    }
}
