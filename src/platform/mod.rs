//! Platform abstraction layer
//!
//! Translates raw device events (keyboard, mouse, touch) into the per-tick
//! `TickInput` the simulation consumes.

pub mod input;

pub use input::{InputAdapter, Key};
