//! perigee-app: a headless demo round of the stage.
//!
//! Usage:
//!   perigee-app [--seed <N>]
//!
//! Runs the frame loop thread, scripts one round (start, thrust pulse,
//! powerless dive, crash, reset), and logs the engine events.

use std::process;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use perigee_app::runner::{spawn_frame_loop, FRAME_DURATION};
use perigee_app::state::{LoopCommand, SharedSnapshot};
use perigee_core::commands::GameCommand;
use perigee_core::enums::GamePhase;
use perigee_core::state::StageSnapshot;
use perigee_sim::engine::GameConfig;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut seed = GameConfig::default().seed;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = match args[i].parse() {
                    Ok(value) => value,
                    Err(_) => {
                        eprintln!("Invalid seed: {}", args[i]);
                        process::exit(1);
                    }
                };
            }
            "help" | "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    log::info!("Starting demo round (seed {seed})");
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let command_tx = spawn_frame_loop(GameConfig { seed }, Arc::clone(&latest_snapshot));

    let send = |command| {
        command_tx
            .send(LoopCommand::Game(command))
            .expect("frame loop thread died");
    };

    send(GameCommand::StartGame);
    wait_for(&latest_snapshot, Duration::from_secs(2), |snapshot| {
        snapshot.phase == GamePhase::Playing
    });
    // Let the camera framing land before the burn.
    std::thread::sleep(Duration::from_millis(1200));

    send(GameCommand::ThrustPressed);
    std::thread::sleep(Duration::from_millis(500));
    send(GameCommand::ThrustReleased);
    log::info!("Burn complete, diving");

    let crash = wait_for(&latest_snapshot, Duration::from_secs(30), |snapshot| {
        snapshot.phase == GamePhase::GameOver
    });
    log::info!(
        "Crashed at altitude {:.3} after {} frames",
        crash.rocket.position.y,
        crash.time.frame
    );

    // Let the return framing land, then re-arm.
    std::thread::sleep(Duration::from_millis(1200));
    send(GameCommand::Reset);
    wait_for(&latest_snapshot, Duration::from_secs(2), |snapshot| {
        snapshot.phase == GamePhase::Idle
    });
    log::info!("Stage reset, shutting down");

    command_tx
        .send(LoopCommand::Shutdown)
        .expect("frame loop thread died");
    std::thread::sleep(2 * FRAME_DURATION);
}

/// Polls the snapshot slot until the predicate holds or the timeout passes.
fn wait_for(
    latest_snapshot: &SharedSnapshot,
    timeout: Duration,
    predicate: impl Fn(&StageSnapshot) -> bool,
) -> StageSnapshot {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(slot) = latest_snapshot.lock() {
            if let Some(snapshot) = slot.as_ref() {
                if predicate(snapshot) {
                    return snapshot.clone();
                }
            }
        }
        if Instant::now() > deadline {
            eprintln!("Timed out waiting for the stage");
            process::exit(1);
        }
        std::thread::sleep(4 * FRAME_DURATION);
    }
}

fn print_usage() {
    eprintln!(
        "perigee-app: headless demo round\n\
         \n\
         Options:\n\
         \n\
           --seed <N>   Asteroid spawn seed (default: 42)\n"
    );
}
