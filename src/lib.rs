//! Tic-tac-toe strategy engine with two learning players
//!
//! This crate provides:
//! - Board, win detection and base-3 state encoding
//! - Seven move selection strategies, from uniform random to two learners
//! - Learning tables for per-cell scores and per-state values
//! - A game runner that applies learning after each game
//! - A round-robin tournament with table, CSV and JSON output

pub mod app;
pub mod cli;
pub mod engine;
pub mod error;
pub mod learning;
pub mod pipeline;
pub mod ports;
pub mod strategy;
pub mod tictactoe;

pub use app::EngineConfig;
pub use engine::Engine;
pub use error::{Error, Result};
pub use learning::{LearningTables, RewardConfig};
pub use strategy::Strategy;
pub use tictactoe::{Board, Coord, GameOutcome, Mark};
