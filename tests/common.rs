//! Shared helpers for the integration tests.

#![allow(dead_code)]

use noughts::{Engine, EngineConfig};
use rand::{SeedableRng, rngs::StdRng};

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Engine with default marks and rewards and a fixed seed
pub fn seeded_engine(seed: u64) -> Engine {
    Engine::new(EngineConfig::new().with_seed(seed)).unwrap()
}
