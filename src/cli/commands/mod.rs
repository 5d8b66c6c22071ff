//! Command implementations

pub mod play;
pub mod tournament;
pub mod values;
