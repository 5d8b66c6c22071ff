//! Ports (trait boundaries) between the game engine and its surroundings.

pub mod observer;

pub use observer::Observer;
