use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use gilrs::Gilrs;
use rpi_led_matrix::{LedMatrix, LedMatrixOptions};
use tracing::{info, warn};

use robo_eyes::gamepad::{handle_gamepad_input, print_control_mapping, PadState};
use robo_eyes::matrix::MatrixSurface;
use robo_eyes::{EngineConfig, RoboEyes, StdRandom, SystemClock};

// Hardware constants
const PANEL_WIDTH: i32 = 64;
const PANEL_HEIGHT: i32 = 32;
const CHAIN_LENGTH: i32 = 2;
const FRAME_RATE: u32 = 50;

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

fn main() -> Result<()> {
    init_logging();

    // Initialize LED matrix
    let mut options = LedMatrixOptions::new();
    options.set_rows(PANEL_HEIGHT as u32);
    options.set_cols(PANEL_WIDTH as u32);
    options.set_chain_length(CHAIN_LENGTH as u32);
    options.set_hardware_mapping("adafruit-hat");

    let matrix = LedMatrix::new(Some(options), None)
        .map_err(|e| anyhow!("failed to initialize LED matrix: {e}"))?;
    let surface = MatrixSurface::new(matrix, true);

    // Eyes sized for a 128x32 chain
    let config = EngineConfig {
        screen_width: PANEL_WIDTH * CHAIN_LENGTH,
        screen_height: PANEL_HEIGHT,
        eye_width: 28,
        eye_height: 24,
        border_radius: 6,
        spacing: 24,
        ..EngineConfig::default()
    };
    let mut eyes = RoboEyes::with_config(config, surface, SystemClock::new(), StdRandom::new());
    eyes.begin(FRAME_RATE);

    let mut pad = PadState::new();
    eyes.set_autoblinker(pad.autoblink, 3, 2);
    eyes.set_idle_mode(pad.idle, 2, 3);

    // Gamepad is optional
    let mut gilrs = match Gilrs::new() {
        Ok(gilrs) => {
            for (id, gamepad) in gilrs.gamepads() {
                info!("🎮 Connected: {} (ID: {:?})", gamepad.name(), id);
            }
            print_control_mapping();
            Some(gilrs)
        }
        Err(e) => {
            warn!("⚠️  Gamepad unavailable, controls disabled: {}", e);
            None
        }
    };

    info!("🚀 Starting animation loop...");
    loop {
        if let Some(gilrs) = gilrs.as_mut() {
            handle_gamepad_input(gilrs, &mut eyes, &mut pad);
        }
        eyes.update();

        // The engine never blocks; yield so the loop doesn't spin a core
        thread::sleep(Duration::from_millis(1));
    }
}

fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("robo_eyes=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
