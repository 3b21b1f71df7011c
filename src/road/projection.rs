//! Depth <-> screen-Y perspective mapping
//!
//! Depth is a logical distance along the road, not pixels. Screen Y grows
//! quadratically with depth from the vanishing point, so the forward and
//! inverse mappings below must always be used as a pair.

use serde::{Serialize, Deserialize};

/// Immutable screen and perspective setup, fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConstants {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Boundary between sky and ground; nothing is drawn on the road above it
    pub horizon_y: f32,
    /// Asymptotic reference above the horizon
    pub vanishing_point_y: f32,
    /// Road width at the bottom edge of the screen
    pub road_width: f32,
    /// Scroll speed in depth units per frame, before perspective scaling
    pub base_speed: f32,
    /// How much faster things near the viewer move than things far away
    pub perspective_speed_factor: f32,
}

impl Default for ProjectionConstants {
    fn default() -> Self {
        Self {
            screen_width: 800.0,
            screen_height: 600.0,
            horizon_y: 200.0,
            vanishing_point_y: 150.0,
            road_width: 600.0,
            base_speed: 0.8,
            perspective_speed_factor: 5.0,
        }
    }
}

impl ProjectionConstants {
    /// Screen distance from the vanishing point to the bottom edge.
    /// Validated non-zero when the configuration is loaded.
    pub fn total_height(&self) -> f32 {
        self.screen_height - self.vanishing_point_y
    }

    pub fn center_x(&self) -> f32 {
        self.screen_width / 2.0
    }

    pub fn depth_to_screen_y(&self, depth: f32) -> f32 {
        let total = self.total_height();
        self.vanishing_point_y + (depth * depth) / (total * 4.0)
    }

    /// Exact inverse of `depth_to_screen_y`. `screen_y` must not be above the
    /// vanishing point.
    pub fn screen_y_to_depth(&self, screen_y: f32) -> f32 {
        let total = self.total_height();
        ((screen_y - self.vanishing_point_y) * total * 4.0).sqrt()
    }

    /// Per-frame advance at `depth`: grows linearly so nearby objects
    /// appear to move faster.
    pub fn perspective_speed(&self, depth: f32, base_speed: f32) -> f32 {
        let perspective_factor = depth / self.total_height();
        base_speed * (1.0 + self.perspective_speed_factor * perspective_factor)
    }

    /// Depth of the viewer, i.e. the bottom edge of the screen
    pub fn viewer_depth(&self) -> f32 {
        self.screen_y_to_depth(self.screen_height)
    }

    pub fn horizon_depth(&self) -> f32 {
        self.screen_y_to_depth(self.horizon_y)
    }

    /// Size/offset scale for objects drawn at `screen_y`: 0 at the vanishing
    /// point, 1 at the bottom of the screen
    pub fn scale_at(&self, screen_y: f32) -> f32 {
        (screen_y - self.vanishing_point_y) / self.total_height()
    }
}
