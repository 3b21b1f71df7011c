//! Road module - everything derived from the perspective projection
//!
//! - Depth/screen-Y mapping and perspective-scaled speed
//! - Road trapezoid and per-row drivable span
//! - Scrolling lane markings

mod projection;
mod geometry;
mod markings;

pub use projection::*;
pub use geometry::*;
pub use markings::*;
