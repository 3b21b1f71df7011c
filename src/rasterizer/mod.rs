//! Software rasterizer
//!
//! Features:
//! - CPU RGBA framebuffer, uploaded to a texture once per frame
//! - Flat-filled rectangles, convex polygons and discs
//! - Everything clipped to the buffer, no depth buffer (painter's order)

mod math;
mod types;
mod render;

pub use math::*;
pub use types::*;
pub use render::*;
