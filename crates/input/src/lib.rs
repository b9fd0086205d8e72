//! Terminal input mapping.
//!
//! Maps `crossterm` key events onto [`gridfall_types::GameAction`] values.
//! This crate knows nothing about game state; it is the only place where
//! keyboard bindings live.

pub mod map;

pub use gridfall_types as types;

pub use map::{handle_key_event, should_quit};
