//! Scrolling center-line dashes
//!
//! Dashes are laid out in depth space every `length + gap` units starting at
//! the scroll offset, projected to screen rows, and widened with proximity
//! to the viewer. The one dash crossing the horizon is clipped to it.

use serde::{Serialize, Deserialize};
use crate::rasterizer::{lerp, Vec2};
use super::projection::ProjectionConstants;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkingConfig {
    /// Dash width at the bottom edge of the screen
    pub width: f32,
    /// Dash length in depth units
    pub length: f32,
    /// Gap between dashes in depth units
    pub gap: f32,
}

impl Default for MarkingConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            length: 60.0,
            gap: 40.0,
        }
    }
}

impl MarkingConfig {
    pub fn period(&self) -> f32 {
        self.length + self.gap
    }
}

/// Scroll position of the dash pattern, in depth units, always in
/// `[0, length + gap)`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarkingScroller {
    offset: f32,
}

impl MarkingScroller {
    pub fn new() -> Self {
        Self { offset: 0.0 }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Build the dash quads for the current offset, nearest last.
    /// Each quad is top-left, top-right, bottom-right, bottom-left.
    pub fn dashes(&self, cfg: &MarkingConfig, proj: &ProjectionConstants) -> Vec<[Vec2; 4]> {
        let mut quads = Vec::new();
        let period = cfg.period();
        if period <= 0.0 {
            return quads;
        }

        let band = proj.screen_height - proj.horizon_y;
        let x_center = proj.center_x();
        let width_at = |screen_y: f32| cfg.width * (screen_y - proj.horizon_y) / band;

        let mut depth = 0.0;
        loop {
            let top_depth = depth + self.offset;
            let screen_top = proj.depth_to_screen_y(top_depth);
            if screen_top >= proj.screen_height {
                break;
            }

            let screen_bottom = proj.depth_to_screen_y(top_depth + cfg.length);
            let width_top = width_at(screen_top);
            let width_bottom = width_at(screen_bottom);

            if screen_top >= proj.horizon_y {
                quads.push(dash_quad(x_center, screen_top, width_top, screen_bottom, width_bottom));
            } else if screen_bottom > proj.horizon_y {
                let clip = (proj.horizon_y - screen_top) / (screen_bottom - screen_top);
                let width_clip = lerp(width_top, width_bottom, clip);
                quads.push(dash_quad(x_center, proj.horizon_y, width_clip, screen_bottom, width_bottom));
            }

            depth += period;
        }

        quads
    }

    /// Depth advanced per frame: the perspective speed at the viewer's own depth
    pub fn frame_delta(proj: &ProjectionConstants) -> f32 {
        proj.perspective_speed(proj.viewer_depth(), proj.base_speed)
    }

    /// Move the pattern by `delta` depth units and wrap into one period
    pub fn advance(&mut self, delta: f32, cfg: &MarkingConfig) {
        let period = cfg.period();
        if period <= 0.0 {
            return;
        }
        self.offset = (self.offset + delta).rem_euclid(period);
        // rem_euclid can round up to exactly `period` for tiny negative inputs
        if self.offset >= period {
            self.offset = 0.0;
        }
    }
}

fn dash_quad(x_center: f32, top_y: f32, top_w: f32, bottom_y: f32, bottom_w: f32) -> [Vec2; 4] {
    [
        Vec2::new(x_center - top_w / 2.0, top_y),
        Vec2::new(x_center + top_w / 2.0, top_y),
        Vec2::new(x_center + bottom_w / 2.0, bottom_y),
        Vec2::new(x_center - bottom_w / 2.0, bottom_y),
    ]
}
