//! Core types for the rasterizer

use serde::{Serialize, Deserialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Fixed color scheme for every drawn element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub sky: Color,
    pub ground: Color,
    pub road: Color,
    pub marking: Color,
    pub car: Color,
    pub bush: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            sky: Color::new(135, 206, 235),
            ground: Color::new(34, 139, 34),
            road: Color::new(100, 100, 100),
            marking: Color::new(240, 240, 240),
            car: Color::new(255, 0, 0),
            bush: Color::new(0, 100, 0),
        }
    }
}
