//! Command-line interface for running tournaments, single games and
//! state-value inspection.

pub mod commands;
pub mod config;
pub mod output;
