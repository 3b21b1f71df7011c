//! Core rendering functions
//! Flat-colored 2D primitives rasterized into a CPU framebuffer

use macroquad::prelude::{draw_texture_ex, DrawTextureParams, FilterMode, Texture2D, WHITE};
use super::math::{barycentric, Vec2};
use super::types::Color;

/// Draw target for the compositor.
///
/// All coordinates are screen pixels with Y growing downwards. Implementors
/// clip to their own extent; callers never need to pre-clip.
pub trait RenderSurface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    /// Fill a convex polygon given in winding order
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    #[cfg(test)]
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Color::with_alpha(
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            )
        } else {
            Color::BLACK
        }
    }

    /// Rasterize a single flat triangle
    fn fill_triangle(&mut self, v1: Vec2, v2: Vec2, v3: Vec2, color: Color) {
        // Bounding box, clipped to the buffer
        let min_x = v1.x.min(v2.x).min(v3.x).max(0.0) as usize;
        let max_x = (v1.x.max(v2.x).max(v3.x) + 1.0).clamp(0.0, self.width as f32) as usize;
        let min_y = v1.y.min(v2.y).min(v3.y).max(0.0) as usize;
        let max_y = (v1.y.max(v2.y).max(v3.y) + 1.0).clamp(0.0, self.height as f32) as usize;

        // Degenerate (zero area) triangles cover nothing
        if barycentric(v1, v1, v2, v3).is_none() {
            return;
        }

        for y in min_y..max_y {
            for x in min_x..max_x {
                let p = Vec2::new(x as f32, y as f32);
                if let Some((u, v, w)) = barycentric(p, v1, v2, v3) {
                    const ERR: f32 = -0.0001;
                    if u >= ERR && v >= ERR && w >= ERR {
                        self.set_pixel(x, y, color);
                    }
                }
            }
        }
    }
}

impl RenderSurface for Framebuffer {
    fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let x0 = x.max(0.0) as usize;
        let y0 = y.max(0.0) as usize;
        let x1 = (x + w).clamp(0.0, self.width as f32) as usize;
        let y1 = (y + h).clamp(0.0, self.height as f32) as usize;

        for py in y0..y1 {
            for px in x0..x1 {
                self.set_pixel(px, py, color);
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }

        // Convex, so a fan from the first vertex covers it
        let anchor = points[0];
        for pair in points[1..].windows(2) {
            self.fill_triangle(anchor, pair[0], pair[1], color);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        // i64 so squaring an oversized radius can't overflow
        let radius = radius as i64;
        if radius <= 0 {
            return;
        }

        let cx = center.x as i64;
        let cy = center.y as i64;
        let r_sq = radius * radius;
        for y in (cy - radius).max(0)..=(cy + radius).min(self.height as i64 - 1) {
            for x in (cx - radius).max(0)..=(cx + radius).min(self.width as i64 - 1) {
                let dx = x - cx;
                let dy = y - cy;
                if dx * dx + dy * dy <= r_sq {
                    self.set_pixel(x as usize, y as usize, color);
                }
            }
        }
    }
}

/// Upload the framebuffer and draw it stretched over the window
pub fn present(fb: &Framebuffer, dest_w: f32, dest_h: f32) {
    let texture = Texture2D::from_rgba8(fb.width as u16, fb.height as u16, &fb.pixels);
    texture.set_filter(FilterMode::Nearest);

    draw_texture_ex(
        &texture,
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(macroquad::math::Vec2::new(dest_w, dest_h)),
            ..Default::default()
        },
    );
}
