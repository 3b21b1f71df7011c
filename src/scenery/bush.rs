//! Roadside bushes
//!
//! A fixed pool of discs on the shoulders. Each one drifts toward the
//! viewer at the perspective speed of its own depth and is recycled far
//! away once it passes the bottom of the screen.

use serde::{Serialize, Deserialize};
use crate::rasterizer::Vec2;
use crate::road::ProjectionConstants;
use super::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BushConfig {
    /// Pool size, fixed for the process lifetime
    pub count: usize,
    /// Disc radius at the bottom edge of the screen
    pub size: f32,
    /// Extra distance past the road edge, drawn per respawn
    pub spread_min: f32,
    pub spread_max: f32,
}

impl Default for BushConfig {
    fn default() -> Self {
        Self {
            count: 40,
            size: 40.0,
            spread_min: 50.0,
            spread_max: 200.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bush {
    /// Depth from the viewer, in `[0, viewer depth]`
    pub depth: f32,
    /// Signed offset from the road center at the bottom edge; sign picks the side
    pub lateral: f32,
}

/// Screen-space disc for one bush
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BushDisc {
    pub center: Vec2,
    pub radius: f32,
}

impl Bush {
    /// Fresh bush somewhere in `[0, max_depth]`
    pub fn spawn(max_depth: f32, cfg: &BushConfig, proj: &ProjectionConstants, rng: &mut impl RandomSource) -> Self {
        let depth = rng.uniform(0.0, max_depth);
        let lateral = random_lateral(cfg, proj, rng);
        Self { depth, lateral }
    }

    /// Recycle this bush out at the horizon
    pub fn respawn(&mut self, cfg: &BushConfig, proj: &ProjectionConstants, rng: &mut impl RandomSource) {
        *self = Self::spawn(proj.horizon_depth(), cfg, proj, rng);
    }

    /// Advance one frame; returns true if the bush was recycled
    pub fn advance(&mut self, cfg: &BushConfig, proj: &ProjectionConstants, rng: &mut impl RandomSource) -> bool {
        self.depth += proj.perspective_speed(self.depth, proj.base_speed);
        if self.depth > proj.viewer_depth() {
            self.respawn(cfg, proj, rng);
            return true;
        }
        false
    }

    /// Disc to draw, or None when the bush is outside the road band
    pub fn disc(&self, cfg: &BushConfig, proj: &ProjectionConstants) -> Option<BushDisc> {
        let screen_y = proj.depth_to_screen_y(self.depth);
        if screen_y < proj.horizon_y || screen_y > proj.screen_height {
            return None;
        }

        let scale = proj.scale_at(screen_y);
        Some(BushDisc {
            center: Vec2::new(proj.center_x() + self.lateral * scale, screen_y),
            radius: cfg.size * scale,
        })
    }
}

fn random_lateral(cfg: &BushConfig, proj: &ProjectionConstants, rng: &mut impl RandomSource) -> f32 {
    let side = if rng.coin_flip() { 1.0 } else { -1.0 };
    side * (proj.road_width / 2.0 + rng.uniform(cfg.spread_min, cfg.spread_max))
}

/// The whole bush pool
#[derive(Debug, Clone, PartialEq)]
pub struct BushField {
    pub bushes: Vec<Bush>,
}

impl BushField {
    /// Populate the whole visible road so the first frame isn't empty
    pub fn new(cfg: &BushConfig, proj: &ProjectionConstants, rng: &mut impl RandomSource) -> Self {
        let max_depth = proj.viewer_depth();
        let bushes = (0..cfg.count)
            .map(|_| Bush::spawn(max_depth, cfg, proj, rng))
            .collect();
        Self { bushes }
    }

    pub fn advance(&mut self, cfg: &BushConfig, proj: &ProjectionConstants, rng: &mut impl RandomSource) {
        for bush in &mut self.bushes {
            bush.advance(cfg, proj, rng);
        }
    }

    pub fn discs<'a>(&'a self, cfg: &'a BushConfig, proj: &'a ProjectionConstants) -> impl Iterator<Item = BushDisc> + 'a {
        self.bushes.iter().filter_map(move |b| b.disc(cfg, proj))
    }
}
