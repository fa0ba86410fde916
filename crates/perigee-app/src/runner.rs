//! Frame loop thread: runs the game engine at 60Hz and publishes snapshots.
//!
//! The engine is created inside the thread so it never has to be `Send`.
//! Commands arrive via `mpsc` channel; snapshots land in a shared slot the
//! host polls.

use std::sync::{mpsc, Mutex};
use std::time::{Duration, Instant};

use perigee_core::state::StageSnapshot;
use perigee_sim::engine::{GameConfig, GameEngine};

use crate::state::{LoopCommand, SharedSnapshot};

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Spawns the frame loop in a new thread.
///
/// Returns the command sender for the host to use.
pub fn spawn_frame_loop(config: GameConfig, latest_snapshot: SharedSnapshot) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("perigee-frame-loop".into())
        .spawn(move || {
            run_frame_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn frame loop thread");

    cmd_tx
}

/// The frame loop. Runs until Shutdown command or channel disconnect.
fn run_frame_loop(
    config: GameConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<StageSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    engine.init();

    let run_start = Instant::now();
    let mut next_frame_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Game(command)) => engine.queue_command(command),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame on the wall clock
        let time_ms = run_start.elapsed().as_secs_f64() * 1000.0;
        let snapshot = engine.frame(time_ms);
        for event in &snapshot.events {
            log::info!("frame {}: {:?}", snapshot.time.frame, event);
        }

        // 3. Store the latest snapshot for the host
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perigee_core::commands::GameCommand;
    use perigee_core::enums::GamePhase;
    use perigee_core::events::GameEvent;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::Game(GameCommand::StartGame)).unwrap();
        tx.send(LoopCommand::Game(GameCommand::ThrustPressed))
            .unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            LoopCommand::Game(GameCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            LoopCommand::Game(GameCommand::ThrustPressed)
        ));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_scripted_round_reaches_game_over() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.init();
        engine.queue_command(GameCommand::StartGame);
        engine.queue_command(GameCommand::ThrustReleased);

        let mut seen = Vec::new();
        let mut crash_frame = None;
        for i in 0..200u64 {
            let snapshot = engine.frame(i as f64 * 16.0);
            seen.extend_from_slice(&snapshot.events);
            if snapshot.phase == GamePhase::GameOver {
                crash_frame = Some(i);
                break;
            }
        }
        let crash_frame = crash_frame.expect("powerless dive never hit the planet");
        assert!(seen.contains(&GameEvent::Started));
        assert!(seen
            .iter()
            .any(|event| matches!(event, GameEvent::Crashed { .. })));

        engine.queue_command(GameCommand::Reset);
        let snapshot = engine.frame((crash_frame + 1) as f64 * 16.0);
        assert_eq!(snapshot.phase, GamePhase::Idle);
        assert_eq!(snapshot.events, vec![GameEvent::Reset]);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = GameEngine::new(GameConfig::default());
        engine.init();
        engine.queue_command(GameCommand::StartGame);

        // Run past the first spawn window to populate the field.
        let mut snapshot = engine.frame(0.0);
        for i in 1..70u64 {
            snapshot = engine.frame(i as f64 * 16.0);
        }

        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.667ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
