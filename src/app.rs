//! Frame compositor
//!
//! Owns the simulation and draws it in a fixed order every frame:
//! backdrop, road, markings, bushes, car. Markings are drawn before the
//! scroll advances; bushes and the car are drawn after they move.

use crate::config::RacerConfig;
use crate::input::AxisSample;
use crate::rasterizer::RenderSurface;
use crate::road::compute_road_trapezoid;
use crate::scenery::RandomSource;
use crate::sim::{advance_frame, SimulationState};

pub struct Game<R: RandomSource> {
    pub config: RacerConfig,
    pub state: SimulationState,
    rng: R,
}

impl<R: RandomSource> Game<R> {
    pub fn new(config: RacerConfig, mut rng: R) -> Self {
        let state = SimulationState::new(&config, &mut rng);
        Self { config, state, rng }
    }

    /// Compose one frame onto `surface` and step the simulation
    pub fn frame(&mut self, axis: Option<AxisSample>, surface: &mut impl RenderSurface) {
        self.draw_backdrop(surface);
        self.draw_road(surface);

        self.state = advance_frame(self.state.clone(), axis, &self.config, &mut self.rng);

        self.draw_bushes(surface);
        self.draw_vehicle(surface);
    }

    fn draw_backdrop(&self, surface: &mut impl RenderSurface) {
        let proj = &self.config.projection;
        let palette = &self.config.palette;

        surface.clear(palette.sky);
        surface.fill_rect(
            0.0,
            proj.horizon_y,
            proj.screen_width,
            proj.screen_height - proj.horizon_y,
            palette.ground,
        );
    }

    /// Road surface plus the dashes at the current, not yet advanced, offset
    fn draw_road(&self, surface: &mut impl RenderSurface) {
        let proj = &self.config.projection;
        let palette = &self.config.palette;

        let road = compute_road_trapezoid(proj);
        surface.fill_polygon(&road.polygon(proj), palette.road);

        for dash in self.state.markings.dashes(&self.config.markings, proj) {
            surface.fill_polygon(&dash, palette.marking);
        }
    }

    fn draw_bushes(&self, surface: &mut impl RenderSurface) {
        let color = self.config.palette.bush;
        for disc in self.state.bushes.discs(&self.config.bushes, &self.config.projection) {
            surface.fill_circle(disc.center, disc.radius, color);
        }
    }

    fn draw_vehicle(&self, surface: &mut impl RenderSurface) {
        let shape = self.state.vehicle.shape(&self.config.vehicle, &self.config.projection);
        surface.fill_polygon(&shape, self.config.palette.car);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rasterizer::{Color, Framebuffer, Vec2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq)]
    enum DrawCall {
        Clear(Color),
        Rect(f32, f32, f32, f32, Color),
        Polygon(Vec<Vec2>, Color),
        Circle(Vec2, f32, Color),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<DrawCall>,
    }

    impl RenderSurface for RecordingSurface {
        fn clear(&mut self, color: Color) {
            self.calls.push(DrawCall::Clear(color));
        }

        fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
            self.calls.push(DrawCall::Rect(x, y, w, h, color));
        }

        fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
            self.calls.push(DrawCall::Polygon(points.to_vec(), color));
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.calls.push(DrawCall::Circle(center, radius, color));
        }
    }

    fn game() -> Game<StdRng> {
        Game::new(RacerConfig::default(), StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_draw_order() {
        let mut game = game();
        let palette = game.config.palette;
        let mut surface = RecordingSurface::default();
        game.frame(None, &mut surface);

        let calls = &surface.calls;
        assert_eq!(calls[0], DrawCall::Clear(palette.sky));
        assert_eq!(calls[1], DrawCall::Rect(0.0, 200.0, 800.0, 400.0, palette.ground));
        assert!(matches!(&calls[2], DrawCall::Polygon(p, c) if p.len() == 4 && *c == palette.road));
        assert!(matches!(calls.last(), Some(DrawCall::Polygon(_, c)) if *c == palette.car));

        // Markings, then bushes, then the car: each group contiguous
        let rank = |call: &DrawCall| match call {
            DrawCall::Clear(_) => 0,
            DrawCall::Rect(..) => 1,
            DrawCall::Polygon(_, c) if *c == palette.road => 2,
            DrawCall::Polygon(_, c) if *c == palette.marking => 3,
            DrawCall::Circle(..) => 4,
            DrawCall::Polygon(..) => 5,
        };
        let ranks: Vec<u8> = calls.iter().map(rank).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "out of order: {:?}", ranks);
        assert!(ranks.contains(&3));
    }

    #[test]
    fn test_markings_drawn_before_scroll() {
        let mut game = game();
        let before = game.state.markings;
        let expected = before.dashes(&game.config.markings, &game.config.projection);

        let mut surface = RecordingSurface::default();
        game.frame(None, &mut surface);

        let drawn: Vec<Vec<Vec2>> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Polygon(p, color) if *color == game.config.palette.marking => Some(p.clone()),
                _ => None,
            })
            .collect();
        let expected: Vec<Vec<Vec2>> = expected.iter().map(|q| q.to_vec()).collect();
        assert_eq!(drawn, expected);
        assert!(game.state.markings.offset() > before.offset());
    }

    #[test]
    fn test_bushes_drawn_after_moving() {
        let mut game = game();
        let mut surface = RecordingSurface::default();
        game.frame(None, &mut surface);

        let expected: Vec<DrawCall> = game
            .state
            .bushes
            .discs(&game.config.bushes, &game.config.projection)
            .map(|d| DrawCall::Circle(d.center, d.radius, game.config.palette.bush))
            .collect();
        let drawn: Vec<DrawCall> = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle(..)))
            .cloned()
            .collect();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_car_drawn_at_updated_position() {
        let mut game = game();
        let mut surface = RecordingSurface::default();
        game.frame(Some(AxisSample::new(1.0, 0.0)), &mut surface);

        let shape = game.state.vehicle.shape(&game.config.vehicle, &game.config.projection);
        assert_eq!(surface.calls.last(), Some(&DrawCall::Polygon(shape.to_vec(), game.config.palette.car)));
        assert!(game.state.vehicle.pos.x > 400.0);
    }

    #[test]
    fn test_framebuffer_frame_colors() {
        let mut game = game();
        let mut fb = Framebuffer::new(800, 600);
        game.frame(None, &mut fb);
        let palette = game.config.palette;

        assert_eq!(fb.get_pixel(400, 50), palette.sky);
        // Car body sits around the bottom center
        assert_eq!(fb.get_pixel(400, 570), palette.car);
        // Road just below the horizon, off the center line
        assert_eq!(fb.get_pixel(380, 205), palette.road);
    }
}
