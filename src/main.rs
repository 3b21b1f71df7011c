//! Bushline Racer: pseudo-3D road racer
//!
//! A road receding toward a vanishing point, drawn with a CPU rasterizer:
//! - Quadratic depth projection (no 3D transforms at all)
//! - Scrolling center-line dashes clipped at the horizon
//! - Recycled roadside bushes
//! - A car steered within the road edges

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod rasterizer;
mod road;
mod scenery;
mod vehicle;
mod input;
mod clock;
mod config;
mod sim;
mod app;

use macroquad::prelude::*;
use app::Game;
use clock::FramePacer;
use config::RacerConfig;
use input::{InputSource, KeyboardInput};
use rasterizer::{present, Framebuffer};

fn window_conf() -> Conf {
    // Errors are reported properly once main runs
    let config = RacerConfig::embedded().unwrap_or_default();
    Conf {
        window_title: config.window.title.clone(),
        window_width: config.projection.screen_width as i32,
        window_height: config.projection.screen_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match RacerConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Bushline Racer v{} ===", VERSION);
    println!("Config: {}", config.summary());

    let mut fb = Framebuffer::new(
        config.projection.screen_width as usize,
        config.projection.screen_height as usize,
    );
    let mut input = KeyboardInput::new();
    println!("Steering: arrow keys / WASD, Esc to quit");

    let mut pacer = FramePacer::new(config.window.target_fps);
    let mut game = Game::new(config, ::rand::thread_rng());

    loop {
        let sample = input.poll();
        if sample.quit {
            break;
        }

        game.frame(sample.axis, &mut fb);

        present(&fb, screen_width(), screen_height());
        next_frame().await;
        pacer.pace();
    }

    println!("Exiting after {} frames", pacer.frames());
}
