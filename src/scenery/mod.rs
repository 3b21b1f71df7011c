//! Scenery module - roadside decoration recycled toward the horizon

mod bush;
mod random;

pub use bush::*;
pub use random::RandomSource;
#[cfg(test)]
pub use random::ScriptedRandom;
