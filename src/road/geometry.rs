//! Road trapezoid and the drivable width at a given screen row

use crate::rasterizer::Vec2;
use super::projection::ProjectionConstants;

/// Horizontal extent of the road on one screen row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub left: f32,
    pub right: f32,
}

impl Span {
    /// Span of `width` centered on `center_x`
    pub fn centered(center_x: f32, width: f32) -> Self {
        let left = center_x - width / 2.0;
        Self { left, right: left + width }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }
}

/// Road edges at the bottom of the screen and at the horizon.
/// Recomputed every frame, read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadBounds {
    pub bottom: Span,
    pub top: Span,
}

impl RoadBounds {
    /// Drawable quad: bottom-left, bottom-right, top-right, top-left
    pub fn polygon(&self, proj: &ProjectionConstants) -> [Vec2; 4] {
        [
            Vec2::new(self.bottom.left, proj.screen_height),
            Vec2::new(self.bottom.right, proj.screen_height),
            Vec2::new(self.top.right, proj.horizon_y),
            Vec2::new(self.top.left, proj.horizon_y),
        ]
    }

    /// Legal lateral range for something sitting on row `screen_y`
    pub fn span_at(&self, screen_y: f32, proj: &ProjectionConstants) -> Span {
        let width = road_width_at_screen_y(screen_y, self.bottom, self.top, proj);
        Span::centered(proj.center_x(), width)
    }
}

/// Road trapezoid: full reference width at the bottom edge, shrunk at the
/// horizon by how far the horizon sits below the vanishing point.
pub fn compute_road_trapezoid(proj: &ProjectionConstants) -> RoadBounds {
    let horizon_width =
        proj.road_width * (proj.horizon_y - proj.vanishing_point_y) / proj.total_height();

    RoadBounds {
        bottom: Span::centered(proj.center_x(), proj.road_width),
        top: Span::centered(proj.center_x(), horizon_width),
    }
}

/// Road width at `screen_y`, interpolated linearly between the bottom span
/// (at the screen bottom) and the top span (at the vanishing point).
pub fn road_width_at_screen_y(screen_y: f32, bottom: Span, top: Span, proj: &ProjectionConstants) -> f32 {
    let y_factor = (screen_y - proj.vanishing_point_y) / proj.total_height();
    bottom.width() + (top.width() - bottom.width()) * (1.0 - y_factor)
}
