//! Platform abstraction layer
//!
//! Window and event-loop backends poll their own key state; this layer turns
//! whatever they report into the simulation's per-frame [`TickInput`].
//!
//! [`TickInput`]: crate::sim::TickInput

pub mod input;

pub use input::{HeldKeys, Key, KeyBindings, RandomKeyboard};
