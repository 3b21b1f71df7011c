//! Frame pacing

use macroquad::time::get_time;

/// Sleeps away whatever is left of each frame's time budget.
/// Best effort only; a slow frame is never made up for.
pub struct FramePacer {
    frame_budget: f64,
    frame_start: f64,
    frames: u64,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: 1.0 / target_fps.max(1) as f64,
            frame_start: get_time(),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Call once per frame after presenting
    pub fn pace(&mut self) {
        self.frames += 1;

        // The browser paces wasm builds itself
        #[cfg(not(target_arch = "wasm32"))]
        {
            let elapsed = get_time() - self.frame_start;
            if let Some(remaining) = remaining_budget(self.frame_budget, elapsed) {
                std::thread::sleep(std::time::Duration::from_secs_f64(remaining));
            }
        }

        self.frame_start = get_time();
    }
}

/// Time left in the frame, if any
fn remaining_budget(budget: f64, elapsed: f64) -> Option<f64> {
    let remaining = budget - elapsed;
    (remaining > 0.0).then_some(remaining)
}
