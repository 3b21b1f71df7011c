//! Vehicle module - the player's car

mod car;

pub use car::*;
