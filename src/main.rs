// Crate-level lints: pixel math converts between u32 layout constants and i32 coordinates
#![allow(clippy::cast_possible_truncation)] // u32->i32 casts for pixel math
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive

//! Car control dashboard simulator.
//!
//! A desktop window showing a simulated car's dashboard:
//! - Front and rear camera previews, aspect-fitted into 320x240 boxes
//! - Speed ramping up to 50 while running, hard braking down to 0
//! - Left/right turn signals blinking at 500 ms
//! - Brake lamp, lit while braking and for one refresh after release
//! - Event log of everything that happened
//!
//! All behavior lives in `car_control_common`. This binary owns the window,
//! turns key events into commands, and advances the controller by the real
//! time elapsed between loop passes.
//!
//! # Controls
//!
//! | Key | Action |
//! |-----|--------|
//! | `Enter` | Start the car |
//! | `Backspace` | Stop the car |
//! | `A` / `D` | Toggle left / right turn signal |
//! | `S` (hold) | Brake |
//! | `1` / `2` | Next front / rear camera source |
//!
//! Key repeat is ignored and Space is swallowed (see [`input`]).
//!
//! # Camera Sources
//!
//! ```text
//! --front pattern:bars@1280x720     synthetic color bars, BGR
//! --rear  raw:/path/clip.bgr@640x480 packed BGR24 frames, no header
//! ```
//!
//! A source that fails to open leaves its box showing "NO SIGNAL"; the other
//! channel keeps running.
//!
//! # Loop
//!
//! ```text
//! ┌─> poll window events ─> KeyRouter ─> controller.execute / reconfigure
//! │   controller.advance(elapsed) ─> sinks (DashboardPanel) mark regions dirty
//! │   redraw dirty regions ─> window.update
//! └── sleep until FRAME_TIME
//! ```

mod cli;
mod colors;
mod config;
mod dashboard;
mod input;
mod logging;
mod playlist;
mod styles;
mod video;
mod widgets;

use std::thread;
use std::time::Instant;

use car_control_common::config::DEFAULT_TARGET_BOX;
use car_control_common::{Channel, DashboardController, FrameSource};
use clap::Parser;
use cli::Args;
use colors::BLACK;
use config::{CAMERA_TOP, FRAME_TIME, FRONT_LEFT, MAX_ADVANCE, REAR_LEFT, SCREEN_HEIGHT, SCREEN_WIDTH};
use dashboard::DashboardPanel;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use input::{ButtonKeyFilter, InputAction, KeyRouter};
use logging::init_logging;
use playlist::SourceList;
use video::SimBackend;
use widgets::{draw_camera_view, draw_event_log, draw_header, draw_indicators};

type Controller = DashboardController<SimBackend, DashboardPanel>;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);
    log::info!("Car control dashboard v{}", env!("CARGO_PKG_VERSION"));

    // Initialize display and window
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(args.scale).build();
    let mut window = Window::new("Car Control Dashboard", &output_settings);

    display.clear(BLACK).ok();
    draw_header(&mut display);
    window.update(&display);

    // ==========================================================================
    // Controller Setup
    // ==========================================================================

    let mut controller: Controller = DashboardController::new(
        FrameSource::new(SimBackend, DEFAULT_TARGET_BOX),
        FrameSource::new(SimBackend, DEFAULT_TARGET_BOX),
        DashboardPanel::new(),
    );
    let mut sources = [SourceList::new(args.front), SourceList::new(args.rear)];

    // Previews start right away; a failed open is already on the event log
    for (channel, list) in Channel::ALL.into_iter().zip(&sources) {
        if let Some(source_id) = list.current() {
            controller.configure(channel, source_id, DEFAULT_TARGET_BOX).ok();
        }
    }

    let mut keys = KeyRouter::new(ButtonKeyFilter::new());
    let mut last_tick = Instant::now();

    // ==========================================================================
    // Main Loop
    // ==========================================================================

    'running: loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            let action = match ev {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => keys.key_down(keycode, repeat),
                SimulatorEvent::KeyUp { keycode, repeat, .. } => keys.key_up(keycode, repeat),
                _ => None,
            };

            match action {
                Some(InputAction::Command(command)) => controller.execute(command),
                Some(InputAction::CycleSource(channel)) => {
                    let list = match channel {
                        Channel::Front => &mut sources[0],
                        Channel::Rear => &mut sources[1],
                    };
                    if let Some(source_id) = list.advance() {
                        controller.reconfigure(channel, source_id).ok();
                    }
                }
                None => {}
            }
        }

        // Deliver every timer firing that fell into the real time elapsed
        let now = Instant::now();
        controller.advance(now.duration_since(last_tick).min(MAX_ADVANCE));
        last_tick = now;

        render(&mut display, &mut controller);
        window.update(&display);

        let busy = frame_start.elapsed();
        if busy < FRAME_TIME {
            thread::sleep(FRAME_TIME - busy);
        }
    }

    log::info!("window closed, {} keys swallowed", keys.filter().swallowed());
    controller.shutdown();
}

/// Redraw the regions the controller's last updates marked dirty.
fn render<D>(
    display: &mut D,
    controller: &mut Controller,
) where
    D: DrawTarget<Color = Rgb888>,
{
    let running = controller.vehicle().running;
    let panel = controller.sinks_mut();
    let dirty = panel.take_dirty();
    if !dirty.any() {
        return;
    }

    if dirty.cameras[0] {
        draw_camera_view(
            display,
            Point::new(FRONT_LEFT, CAMERA_TOP),
            Channel::Front.label(),
            panel.view(Channel::Front),
        );
    }
    if dirty.cameras[1] {
        draw_camera_view(
            display,
            Point::new(REAR_LEFT, CAMERA_TOP),
            Channel::Rear.label(),
            panel.view(Channel::Rear),
        );
    }
    if dirty.indicators {
        draw_indicators(display, panel.speed(), panel.visuals(), running);
    }
    if dirty.log {
        draw_event_log(display, panel.event_log());
    }
}
