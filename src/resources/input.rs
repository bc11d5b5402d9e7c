//! Per-frame input resource.
//!
//! Captures the subset of keyboard and pointer state the game cares about and
//! exposes it to systems via the [`InputState`] resource. Movement uses the
//! arrow keys; the menu starts the game on any pointer press.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// The four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Evaluation order for held directions within a frame.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step in world space (y grows upward).
    pub fn unit(self) -> Vector2 {
        match self {
            Direction::Up => Vector2 { x: 0.0, y: 1.0 },
            Direction::Down => Vector2 { x: 0.0, y: -1.0 },
            Direction::Left => Vector2 { x: -1.0, y: 0.0 },
            Direction::Right => Vector2 { x: 1.0, y: 0.0 },
        }
    }
}

/// Anything that can say whether a direction is currently held.
pub trait DirectionInput {
    fn is_held(&self, direction: Direction) -> bool;
}

/// Physical control bound to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Key(KeyboardKey),
    Mouse(MouseButton),
    None,
}

#[derive(Debug, Clone, Copy)]
/// Boolean control state with an associated binding.
pub struct BoolState {
    /// Whether the control is currently held this frame.
    pub active: bool,
    /// Whether the control was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the control was just released this frame.
    pub just_released: bool,

    pub binding: Binding,
}

impl BoolState {
    pub fn bound_to(binding: Binding) -> Self {
        Self {
            binding,
            ..Self::default()
        }
    }

    /// Store this frame's readings.
    pub fn update(&mut self, down: bool, pressed: bool, released: bool) {
        self.active = down;
        self.just_pressed = pressed;
        self.just_released = released;
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            binding: Binding::None,
        }
    }
}

/// Resource capturing the per-frame input state relevant to the game.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_down: BoolState,
    pub direction_left: BoolState,
    pub direction_right: BoolState,
    /// Left mouse button, which raylib also drives from touch input.
    pub pointer: BoolState,
    pub action_back: BoolState,
    pub mode_debug: BoolState,
}

impl InputState {
    /// Mutable iteration over every control, for polling.
    pub fn controls_mut(&mut self) -> [&mut BoolState; 7] {
        [
            &mut self.direction_up,
            &mut self.direction_down,
            &mut self.direction_left,
            &mut self.direction_right,
            &mut self.pointer,
            &mut self.action_back,
            &mut self.mode_debug,
        ]
    }

    /// Mark a direction as held or released. Handy for scripted input.
    pub fn set_held(&mut self, direction: Direction, held: bool) {
        let state = match direction {
            Direction::Up => &mut self.direction_up,
            Direction::Down => &mut self.direction_down,
            Direction::Left => &mut self.direction_left,
            Direction::Right => &mut self.direction_right,
        };
        state.active = held;
    }
}

impl DirectionInput for InputState {
    fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.direction_up.active,
            Direction::Down => self.direction_down.active,
            Direction::Left => self.direction_left.active,
            Direction::Right => self.direction_right.active,
        }
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(Binding::Key(KeyboardKey::KEY_UP)),
            direction_down: BoolState::bound_to(Binding::Key(KeyboardKey::KEY_DOWN)),
            direction_left: BoolState::bound_to(Binding::Key(KeyboardKey::KEY_LEFT)),
            direction_right: BoolState::bound_to(Binding::Key(KeyboardKey::KEY_RIGHT)),
            pointer: BoolState::bound_to(Binding::Mouse(MouseButton::MOUSE_BUTTON_LEFT)),
            action_back: BoolState::bound_to(Binding::Key(KeyboardKey::KEY_ESCAPE)),
            mode_debug: BoolState::bound_to(Binding::Key(KeyboardKey::KEY_F11)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
        assert_eq!(bs.binding, Binding::None);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_up.binding, Binding::Key(KeyboardKey::KEY_UP));
        assert_eq!(input.direction_down.binding, Binding::Key(KeyboardKey::KEY_DOWN));
        assert_eq!(input.direction_left.binding, Binding::Key(KeyboardKey::KEY_LEFT));
        assert_eq!(input.direction_right.binding, Binding::Key(KeyboardKey::KEY_RIGHT));
        assert_eq!(
            input.pointer.binding,
            Binding::Mouse(MouseButton::MOUSE_BUTTON_LEFT)
        );
        assert_eq!(input.action_back.binding, Binding::Key(KeyboardKey::KEY_ESCAPE));
        assert_eq!(input.mode_debug.binding, Binding::Key(KeyboardKey::KEY_F11));
    }

    #[test]
    fn test_directions_are_independent() {
        let mut input = InputState::default();
        input.set_held(Direction::Up, true);
        input.set_held(Direction::Left, true);
        assert!(input.is_held(Direction::Up));
        assert!(input.is_held(Direction::Left));
        assert!(!input.is_held(Direction::Down));
        assert!(!input.is_held(Direction::Right));
        input.set_held(Direction::Up, false);
        assert!(!input.is_held(Direction::Up));
    }

    #[test]
    fn test_direction_units() {
        for direction in Direction::ALL {
            let u = direction.unit();
            assert_eq!(u.x.abs() + u.y.abs(), 1.0);
        }
        assert_eq!(Direction::Up.unit().y, 1.0);
        assert_eq!(Direction::Left.unit().x, -1.0);
    }
}
