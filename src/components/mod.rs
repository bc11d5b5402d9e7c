//! ECS components for entities.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap tests
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`inputcontrolled`] – marks the keyboard-steered player and its speed
//! - [`mapposition`] – world-space bottom-left position of an entity
//! - [`persistent`] – marker for entities that persist across screen changes
//! - [`pickup`] – marker for collectable resources
//! - [`scorelabel`] – marker for the score text
//! - [`sprite`] – 2D sprite rendering component
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod boxcollider;
pub mod dynamictext;
pub mod inputcontrolled;
pub mod mapposition;
pub mod persistent;
pub mod pickup;
pub mod scorelabel;
pub mod sprite;
pub mod zindex;
