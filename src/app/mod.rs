//! Application-level configuration.
//!
//! [`EngineConfig`] decides the player marks, the seed and the learning
//! rewards; the CLI fills it from flags or a JSON file before building an
//! [`Engine`](crate::engine::Engine).

pub mod config;

pub use config::EngineConfig;
