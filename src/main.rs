//! Endless Road headless driver
//!
//! Runs the simulation with a simple autopilot and logs what a host would render,
//! play and display.
//!
//! Usage: `endless-road [settings.json] [seed] [ticks]`

#[cfg(not(target_arch = "wasm32"))]
use endless_road::sim::{Controls, GameEvent, GameLoop, Simulation};

/// Keeps the car near the road center, boosts now and then, brakes when fast.
///
/// Boosts are skipped while the car sits in the outer half of the road.
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(sim: &Simulation) -> Controls {
    let state = sim.state();
    let from_center = sim.car_x() - sim.road().lateral_offset;
    let deadband = sim.config().lateral_limit() / 10.0;
    let centered = from_center.abs() < sim.config().lateral_limit() / 2.0;
    Controls {
        left: from_center > deadband,
        right: from_center < -deadband,
        down: state.speed > 120.0,
        boost_requested: centered && state.ticks % 2000 == 0,
        restart: !state.running,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings_path = args.next();
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(0x5eed);
    let ticks: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(10_000);

    let mut game = GameLoop::new(seed);
    let started = match &settings_path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(json) => game.start_from_json(&json),
            Err(e) => {
                log::error!("Failed to read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => game.start(Default::default()),
    };
    if let Err(e) = started {
        log::error!("Invalid settings: {}", e);
        std::process::exit(1);
    }

    log::info!("Endless Road (headless) running {} ticks, seed {}", ticks, seed);

    for _ in 0..ticks {
        let controls = match game.simulation() {
            Some(sim) => autopilot(sim),
            None => break,
        };
        game.tick(&controls);

        for event in game.drain_events() {
            log::info!("{:?}", event);
            match event {
                GameEvent::GameOver { final_score } => {
                    println!("GAME OVER  score {}", final_score)
                }
                GameEvent::LocationShown { name, .. } => println!("-> {}", name),
                _ => {}
            }
        }
    }

    if let Some(hud) = game.hud() {
        println!(
            "{}s  {} km/h  {} km  {}  score {}",
            hud.elapsed_seconds,
            hud.display_speed_kmh,
            hud.display_distance_km,
            hud.location_name,
            hud.score
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `GameLoop` directly
}
