//! Per-frame simulation state, independent of any window
//!
//! All mutable state lives in one value that `advance_frame` steps forward,
//! so whole frames can be replayed in tests with a seeded random source.

use crate::config::RacerConfig;
use crate::input::AxisSample;
use crate::road::{compute_road_trapezoid, MarkingScroller};
use crate::scenery::{BushField, RandomSource};
use crate::vehicle::VehicleState;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub markings: MarkingScroller,
    pub bushes: BushField,
    pub vehicle: VehicleState,
}

impl SimulationState {
    pub fn new(config: &RacerConfig, rng: &mut impl RandomSource) -> Self {
        Self {
            markings: MarkingScroller::new(),
            bushes: BushField::new(&config.bushes, &config.projection, rng),
            vehicle: VehicleState::new(&config.vehicle, &config.projection),
        }
    }
}

/// Step one frame: markings scroll, bushes drift, then the car moves.
pub fn advance_frame(
    mut state: SimulationState,
    axis: Option<AxisSample>,
    config: &RacerConfig,
    rng: &mut impl RandomSource,
) -> SimulationState {
    let proj = &config.projection;
    let road = compute_road_trapezoid(proj);

    state.markings.advance(MarkingScroller::frame_delta(proj), &config.markings);
    state.bushes.advance(&config.bushes, proj, rng);
    state.vehicle.update(axis, &config.vehicle, &road, proj);

    state
}
