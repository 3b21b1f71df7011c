//! Player car physics and shape
//!
//! The car lives purely in screen space. Per frame: accelerate from the
//! input axis, apply friction, cap the speed, integrate, then clamp to the
//! playable band and the road span at the car's row. Reordering these steps
//! changes how the car handles.

use serde::{Serialize, Deserialize};
use crate::input::AxisSample;
use crate::rasterizer::Vec2;
use crate::road::{ProjectionConstants, RoadBounds};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub width: f32,
    pub height: f32,
    /// Highest row the car's top edge may reach
    pub y_min: f32,
    /// Lowest row, also the start row
    pub y_max: f32,
    pub acceleration: f32,
    /// Velocity multiplier applied every frame
    pub friction: f32,
    pub max_speed: f32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        let height = 60.0;
        Self {
            width: 100.0,
            height,
            y_min: 600.0 - height - 100.0,
            y_max: 600.0 - height,
            acceleration: 0.2,
            friction: 0.98,
            max_speed: 8.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl VehicleState {
    /// Centered on the road, at the bottom of the band, at rest
    pub fn new(cfg: &VehicleConfig, proj: &ProjectionConstants) -> Self {
        Self {
            pos: Vec2::new(proj.center_x(), cfg.y_max),
            vel: Vec2::ZERO,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.len()
    }

    /// One physics step. A missing axis sample means no input: friction only.
    pub fn update(
        &mut self,
        axis: Option<AxisSample>,
        cfg: &VehicleConfig,
        road: &RoadBounds,
        proj: &ProjectionConstants,
    ) {
        if let Some(axis) = axis {
            self.vel.x += axis.lateral * cfg.acceleration;
            self.vel.y += axis.depth * cfg.acceleration;
        }

        self.vel = self.vel * cfg.friction;

        let speed = self.speed();
        if speed > cfg.max_speed {
            self.vel = self.vel * (cfg.max_speed / speed);
        }

        self.pos = self.pos + self.vel;

        // Vertical band first so the road span is taken at the final row
        if self.pos.y < cfg.y_min {
            self.pos.y = cfg.y_min;
            self.vel.y = 0.0;
        } else if self.pos.y > cfg.y_max {
            self.pos.y = cfg.y_max;
            self.vel.y = 0.0;
        }

        let span = road.span_at(self.pos.y, proj);
        if self.pos.x < span.left {
            self.pos.x = span.left;
            self.vel.x = 0.0;
        } else if self.pos.x > span.right {
            self.pos.x = span.right;
            self.vel.x = 0.0;
        }
    }

    /// Body quad pulled toward the vanishing point:
    /// top-left, top-right, bottom-right, bottom-left
    pub fn shape(&self, cfg: &VehicleConfig, proj: &ProjectionConstants) -> [Vec2; 4] {
        let top = self.pos.y;
        let bottom = self.pos.y + cfg.height;
        let left = self.pos.x - cfg.width / 2.0;
        let right = self.pos.x + cfg.width / 2.0;

        [
            Vec2::new(toward_center(left, top, proj), top),
            Vec2::new(toward_center(right, top, proj), top),
            Vec2::new(toward_center(right, bottom, proj), bottom),
            Vec2::new(toward_center(left, bottom, proj), bottom),
        ]
    }
}

/// X of `base_x` after perspective narrowing at row `y`
fn toward_center(base_x: f32, y: f32, proj: &ProjectionConstants) -> f32 {
    let center = proj.center_x();
    if y == proj.vanishing_point_y {
        return center;
    }
    center + (base_x - center) * proj.scale_at(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::road::compute_road_trapezoid;

    fn setup() -> (VehicleConfig, ProjectionConstants, RoadBounds) {
        let proj = ProjectionConstants::default();
        (VehicleConfig::default(), proj, compute_road_trapezoid(&proj))
    }

    fn assert_in_bounds(car: &VehicleState, cfg: &VehicleConfig, road: &RoadBounds, proj: &ProjectionConstants) {
        let span = road.span_at(car.pos.y, proj);
        assert!(car.pos.x >= span.left && car.pos.x <= span.right, "x {} outside {:?}", car.pos.x, span);
        assert!(car.pos.y >= cfg.y_min && car.pos.y <= cfg.y_max, "y {} outside band", car.pos.y);
    }

    #[test]
    fn test_starts_centered_at_rest() {
        let (cfg, proj, _) = setup();
        let car = VehicleState::new(&cfg, &proj);
        assert_eq!(car.pos, Vec2::new(400.0, 540.0));
        assert_eq!(car.vel, Vec2::ZERO);
    }

    #[test]
    fn test_single_right_push() {
        let (cfg, proj, road) = setup();
        let mut car = VehicleState::new(&cfg, &proj);
        car.update(Some(AxisSample::new(1.0, 0.0)), &cfg, &road, &proj);
        let expected = cfg.acceleration * cfg.friction;
        assert!((car.vel.x - expected).abs() < 0.0001);
        assert!((car.pos.x - (400.0 + expected)).abs() < 0.0001);
        assert_eq!(car.vel.y, 0.0);
        assert_in_bounds(&car, &cfg, &road, &proj);
    }

    #[test]
    fn test_no_input_decays_under_friction() {
        let (cfg, proj, road) = setup();
        let mut car = VehicleState::new(&cfg, &proj);
        car.vel = Vec2::new(2.0, -1.0);
        car.update(None, &cfg, &road, &proj);
        assert!((car.vel.x - 2.0 * cfg.friction).abs() < 0.0001);
        assert!((car.vel.y + cfg.friction).abs() < 0.0001);
    }

    #[test]
    fn test_speed_never_exceeds_max() {
        let (cfg, proj, road) = setup();
        let axes = [
            AxisSample::new(1.0, 0.0),
            AxisSample::new(-1.0, -1.0),
            AxisSample::new(1.0, 1.0),
            AxisSample::new(0.0, -1.0),
        ];
        for axis in axes {
            let mut car = VehicleState::new(&cfg, &proj);
            for _ in 0..300 {
                car.update(Some(axis), &cfg, &road, &proj);
                assert!(car.speed() <= cfg.max_speed + 0.0001);
                assert_in_bounds(&car, &cfg, &road, &proj);
            }
        }
    }

    #[test]
    fn test_cap_preserves_direction() {
        let (cfg, proj, road) = setup();
        let mut car = VehicleState::new(&cfg, &proj);
        car.pos = Vec2::new(400.0, 490.0);
        car.vel = Vec2::new(30.0, -40.0);
        car.update(None, &cfg, &road, &proj);
        // Direction (0.6, -0.8) scaled to max speed, before integration
        let moved = Vec2::new(car.pos.x - 400.0, car.pos.y - 490.0);
        assert!((moved.x - 4.8).abs() < 0.001);
        assert!((moved.y + 6.4).abs() < 0.001);
    }

    #[test]
    fn test_held_right_hits_wall_and_stops() {
        let (cfg, proj, road) = setup();
        let mut car = VehicleState::new(&cfg, &proj);
        let mut hit_wall = false;
        for _ in 0..600 {
            car.update(Some(AxisSample::new(1.0, 0.0)), &cfg, &road, &proj);
            assert!(car.vel.x <= cfg.max_speed);
            let span = road.span_at(car.pos.y, &proj);
            if car.pos.x == span.right {
                hit_wall = true;
                assert!(car.vel.x.abs() <= cfg.acceleration * cfg.friction + 0.0001);
            }
        }
        assert!(hit_wall);
    }

    #[test]
    fn test_held_right_on_open_road_reaches_cap() {
        let cfg = VehicleConfig::default();
        // Road so wide the walls never stop the car
        let proj = ProjectionConstants { road_width: 1.0e7, ..ProjectionConstants::default() };
        let road = compute_road_trapezoid(&proj);
        let mut car = VehicleState::new(&cfg, &proj);
        let mut prev = 0.0;

        for _ in 0..400 {
            car.update(Some(AxisSample::new(1.0, 0.0)), &cfg, &road, &proj);
            assert!(car.vel.x >= prev - 0.0001, "vel.x fell from {} to {}", prev, car.vel.x);
            assert!(car.vel.x <= cfg.max_speed + 0.0001);
            prev = car.vel.x;
        }

        // Uncapped it would settle near 9.8
        assert!((car.vel.x - cfg.max_speed).abs() < 0.0001);
        assert_eq!(car.vel.y, 0.0);
    }

    #[test]
    fn test_vertical_band_clamp_zeroes_velocity() {
        let (cfg, proj, road) = setup();
        let mut car = VehicleState::new(&cfg, &proj);
        car.update(Some(AxisSample::new(0.0, 1.0)), &cfg, &road, &proj);
        assert_eq!(car.pos.y, cfg.y_max);
        assert_eq!(car.vel.y, 0.0);

        car.pos.y = cfg.y_min + 0.1;
        car.vel.y = -5.0;
        car.update(None, &cfg, &road, &proj);
        assert_eq!(car.pos.y, cfg.y_min);
        assert_eq!(car.vel.y, 0.0);
    }

    #[test]
    fn test_shape_narrows_toward_top() {
        let (cfg, proj, _) = setup();
        let car = VehicleState::new(&cfg, &proj);
        let quad = car.shape(&cfg, &proj);
        let top_w = quad[1].x - quad[0].x;
        let bottom_w = quad[2].x - quad[3].x;
        assert!(top_w < bottom_w);
        // Bottom edge sits on the screen bottom: full width
        assert!((bottom_w - cfg.width).abs() < 0.001);
        assert!((quad[0].x + quad[1].x - 800.0).abs() < 0.001);
    }

    #[test]
    fn test_shape_collapses_at_vanishing_point() {
        let proj = ProjectionConstants::default();
        assert_eq!(toward_center(10.0, proj.vanishing_point_y, &proj), proj.center_x());
    }
}
