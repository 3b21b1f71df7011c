//! Game tuning
//!
//! Uses RON (Rusty Object Notation). The shipped tuning is compiled into the
//! binary; nothing is read from disk at runtime.

use serde::{Serialize, Deserialize};
use crate::rasterizer::Palette;
use crate::road::{MarkingConfig, ProjectionConstants};
use crate::scenery::BushConfig;
use crate::vehicle::VehicleConfig;

/// Embedded default tuning
pub const DEFAULT_CONFIG: &str = include_str!("../assets/config/racer.ron");

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    ParseError(ron::error::SpannedError),
    Invalid { field: &'static str, reason: String },
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid { field, reason } => write!(f, "Invalid {}: {}", field, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub title: String,
    pub target_fps: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Racing Game with Bushes".to_string(),
            target_fps: 60,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RacerConfig {
    pub window: WindowConfig,
    pub projection: ProjectionConstants,
    pub markings: MarkingConfig,
    pub vehicle: VehicleConfig,
    pub bushes: BushConfig,
    pub palette: Palette,
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid { field, reason: reason.into() }
}

impl RacerConfig {
    /// Parse and validate a RON document
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: RacerConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The tuning compiled into the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_ron_str(DEFAULT_CONFIG)
    }

    /// Reject tuning the projection math or physics can't run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.projection;
        if p.screen_width <= 0.0 || p.screen_height <= 0.0 {
            return Err(invalid("projection.screen_width/screen_height", "screen size must be positive"));
        }
        if p.total_height() <= 0.0 {
            return Err(invalid(
                "projection.vanishing_point_y",
                format!("must be above the screen bottom ({} >= {})", p.vanishing_point_y, p.screen_height),
            ));
        }
        if p.vanishing_point_y > p.horizon_y {
            return Err(invalid(
                "projection.horizon_y",
                format!("horizon {} is above the vanishing point {}", p.horizon_y, p.vanishing_point_y),
            ));
        }
        if p.horizon_y >= p.screen_height {
            return Err(invalid("projection.horizon_y", "horizon must be above the screen bottom"));
        }
        if p.base_speed < 0.0 || p.perspective_speed_factor < 0.0 {
            return Err(invalid("projection.base_speed", "speeds must not be negative"));
        }

        let m = &self.markings;
        if m.length < 0.0 || m.gap < 0.0 || m.period() <= 0.0 {
            return Err(invalid("markings", "dash length plus gap must be positive"));
        }

        let v = &self.vehicle;
        if !(0.0..1.0).contains(&v.friction) {
            return Err(invalid("vehicle.friction", format!("{} is outside [0, 1)", v.friction)));
        }
        if v.max_speed <= 0.0 {
            return Err(invalid("vehicle.max_speed", "must be positive"));
        }
        if v.y_min > v.y_max {
            return Err(invalid("vehicle.y_min", format!("{} is below y_max {}", v.y_min, v.y_max)));
        }
        if v.y_min < p.horizon_y {
            return Err(invalid("vehicle.y_min", "car band must stay below the horizon"));
        }

        let b = &self.bushes;
        if !b.size.is_finite() || b.size < 0.0 || b.size > p.screen_width.max(p.screen_height) {
            return Err(invalid(
                "bushes.size",
                format!("{} must be between 0 and the screen size", b.size),
            ));
        }
        if b.spread_min < 0.0 || b.spread_min > b.spread_max {
            return Err(invalid(
                "bushes.spread_min",
                format!("spread range [{}, {}] is inverted or negative", b.spread_min, b.spread_max),
            ));
        }

        if self.window.target_fps == 0 {
            return Err(invalid("window.target_fps", "must be at least 1"));
        }

        Ok(())
    }

    /// One-line summary for the startup log
    pub fn summary(&self) -> String {
        let p = &self.projection;
        format!(
            "{}x{} horizon {} vanishing point {} road {} | {} bushes | {} fps",
            p.screen_width,
            p.screen_height,
            p.horizon_y,
            p.vanishing_point_y,
            p.road_width,
            self.bushes.count,
            self.window.target_fps,
        )
    }
}
