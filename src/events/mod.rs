//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`collection`] – a pickup was collected
//! - [`screenstate`] – screen transitions and their enter/exit hooks
//! - [`switchdebug`] – toggle debug rendering on/off
pub mod collection;
pub mod screenstate;
pub mod switchdebug;
