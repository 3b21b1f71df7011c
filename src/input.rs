//! Input sampling
//!
//! Polled once at the start of every frame, last sample wins.

use macroquad::prelude::*;

/// Normalized steering axes, each in [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisSample {
    /// Negative steers left
    pub lateral: f32,
    /// Negative moves up the screen (away from the viewer)
    pub depth: f32,
}

impl AxisSample {
    pub fn new(lateral: f32, depth: f32) -> Self {
        Self {
            lateral: lateral.clamp(-1.0, 1.0),
            depth: depth.clamp(-1.0, 1.0),
        }
    }
}

/// Everything read from the input device for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSample {
    pub quit: bool,
    /// None when no steering device is attached
    pub axis: Option<AxisSample>,
}

pub trait InputSource {
    /// Sample once per frame. `axis` is None when no steering device is attached.
    fn poll(&mut self) -> InputSample;
}

/// Keyboard steering (arrows or WASD), Escape or window close to quit
pub struct KeyboardInput;

impl KeyboardInput {
    /// Takes over the window close button so the loop can finish its frame
    pub fn new() -> Self {
        prevent_quit();
        Self
    }

    fn key_axis(negative: &[KeyCode], positive: &[KeyCode]) -> f32 {
        let neg = negative.iter().any(|k| is_key_down(*k));
        let pos = positive.iter().any(|k| is_key_down(*k));
        match (neg, pos) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

impl InputSource for KeyboardInput {
    fn poll(&mut self) -> InputSample {
        let quit = is_quit_requested() || is_key_pressed(KeyCode::Escape);

        let lateral = Self::key_axis(&[KeyCode::Left, KeyCode::A], &[KeyCode::Right, KeyCode::D]);
        let depth = Self::key_axis(&[KeyCode::Up, KeyCode::W], &[KeyCode::Down, KeyCode::S]);

        InputSample {
            quit,
            axis: Some(AxisSample::new(lateral, depth)),
        }
    }
}
