//! Game engine: the core of the stage.
//!
//! `GameEngine` owns the scheduler, the tween set, and the stage; processes
//! player commands; drives the game state machine (Idle → Playing → GameOver
//! → Idle); and produces `StageSnapshot`s. Completely headless (no renderer
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use perigee_anim::{CallbackId, Scheduler, Tween, TweenEngine, TweenId, TweenStep};
use perigee_core::commands::GameCommand;
use perigee_core::constants::*;
use perigee_core::enums::{CollisionKind, GamePhase};
use perigee_core::events::GameEvent;
use perigee_core::state::StageSnapshot;
use perigee_core::types::StageTime;

use crate::stage::{GameWorld, Stage};
use crate::systems;

/// Configuration for a new stage.
pub struct GameConfig {
    /// RNG seed for determinism. Same seed = same spawn radii.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The orchestrating engine. Owns the scheduler and all stage state.
pub struct GameEngine {
    scheduler: Scheduler<GameWorld>,
    world: GameWorld,
    time: StageTime,
    phase: GamePhase,
    command_queue: VecDeque<GameCommand>,
    /// Rocket flight physics, registered only while Playing.
    flight_callback: Option<CallbackId>,
    /// Spawn/cull/tumble/collision pass, registered only while Playing.
    game_loop_callback: Option<CallbackId>,
    /// The live framing tween (start or game-over), if any. At most one.
    transition_tween: Option<TweenId>,
    initialized: bool,
}

impl GameEngine {
    /// Create a new engine with the given config. Call `init` before the
    /// first frame.
    pub fn new(config: GameConfig) -> Self {
        Self {
            scheduler: Scheduler::new(),
            world: GameWorld {
                tweens: TweenEngine::new(),
                stage: Stage::new(ChaCha8Rng::seed_from_u64(config.seed)),
            },
            time: StageTime::default(),
            phase: GamePhase::default(),
            command_queue: VecDeque::new(),
            flight_callback: None,
            game_loop_callback: None,
            transition_tween: None,
            initialized: false,
        }
    }

    /// Register the baseline per-frame callbacks. Idempotent.
    ///
    /// Registration order fixes invocation order: tween advance runs first,
    /// then the entity updates. The Playing-only callbacks registered by
    /// `start_game` land after these.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        // 1. Tween advance
        self.scheduler.register(|world, frame| {
            let GameWorld { tweens, stage } = world;
            tweens.advance(stage, frame.time);
        });
        // 2. Planet orbit (continuous in every phase)
        self.scheduler.register(|world, frame| {
            world.stage.planet.advance_orbit(frame.time);
        });
        // 3. Rocket cosmetic spin (continuous in every phase)
        self.scheduler.register(|world, frame| {
            world.stage.rocket.update_spin(frame.time);
        });
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = GameCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the stage by one frame and return the resulting snapshot.
    ///
    /// `time_ms` is the absolute elapsed time from the external clock; it
    /// must be monotonic across calls. Queued commands are drained first,
    /// then the scheduler runs every registered callback, then any collision
    /// detected during the tick is applied as the Playing → GameOver
    /// transition. The snapshot is the frame's render handoff.
    pub fn frame(&mut self, time_ms: f64) -> StageSnapshot {
        self.process_commands();
        self.scheduler.tick(&mut self.world, time_ms);

        if let Some(cause) = self.world.stage.pending_crash.take() {
            self.game_over(cause);
        }

        self.time.record(time_ms);
        let events = std::mem::take(&mut self.world.stage.events);
        systems::snapshot::build_snapshot(&self.world.stage, self.time, self.phase, events)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current frame clock.
    pub fn time(&self) -> StageTime {
        self.time
    }

    /// Get a read-only reference to the stage.
    pub fn stage(&self) -> &Stage {
        &self.world.stage
    }

    /// Number of registered tweens (for tests).
    #[cfg(test)]
    pub fn tween_count(&self) -> usize {
        self.world.tweens.len()
    }

    /// Number of registered scheduler callbacks (for tests).
    #[cfg(test)]
    pub fn callback_count(&self) -> usize {
        self.scheduler.len()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Thrust is live only while Playing.
    fn handle_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::StartGame => self.start_game(),
            GameCommand::Reset => self.reset(),
            GameCommand::ThrustPressed => {
                if self.phase == GamePhase::Playing {
                    self.world.stage.rocket.fly_up();
                }
            }
            GameCommand::ThrustReleased => {
                if self.phase == GamePhase::Playing {
                    self.world.stage.rocket.fly_down();
                }
            }
        }
    }

    /// Idle → Playing. A no-op in any other phase.
    ///
    /// Starts the 1000 ms framing tween from the current camera, planet yaw,
    /// and rocket tilt to the playing values, and registers the Playing-only
    /// callbacks (flight physics, then the game-loop pass).
    pub fn start_game(&mut self) {
        if self.phase != GamePhase::Idle {
            return;
        }
        self.phase = GamePhase::Playing;

        let stage = &self.world.stage;
        let tween = Tween::new(TRANSITION_MS)
            .channel("camera_z", stage.camera.position.z, CAMERA_PLAY_Z)
            .channel("camera_y", stage.camera.position.y, CAMERA_PLAY_Y)
            .channel("planet_yaw", stage.planet.yaw(), PLANET_PLAY_YAW)
            .channel("rocket_tilt", stage.rocket.tilt(), ROCKET_PLAY_TILT);
        self.replace_transition(tween, |stage, step| {
            stage.camera.position.z = step.value("camera_z");
            stage.camera.position.y = step.value("camera_y");
            stage.planet.set_yaw(step.value("planet_yaw"));
            stage.rocket.set_tilt(step.value("rocket_tilt"));
        });

        // 4. Flight physics
        self.flight_callback = Some(self.scheduler.register(|world, _frame| {
            world.stage.rocket.integrate();
        }));
        // 5. Game loop: spawn/cull, tumble, collision
        self.game_loop_callback = Some(self.scheduler.register(|world, frame| {
            let stage = &mut world.stage;
            systems::asteroids::run(
                &mut stage.asteroids,
                &mut stage.rng,
                &stage.planet,
                stage.rocket.position().z,
                &mut stage.last_spawn_window,
                &mut stage.despawn_buffer,
                frame.time,
            );
            systems::asteroids::spin(&mut stage.asteroids, frame.time);
            if let Some(cause) =
                systems::collision::check(&stage.asteroids, &stage.planet, &stage.rocket)
            {
                stage.pending_crash = Some(cause);
            }
        }));

        self.world.stage.events.push(GameEvent::Started);
    }

    /// GameOver → Idle. A no-op in any other phase.
    ///
    /// Cancels a still-running return tween and snaps the stage to the idle
    /// baselines, so Idle is deterministic regardless of when the player
    /// re-armed.
    pub fn reset(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::Idle;

        if let Some(id) = self.transition_tween.take() {
            self.world.tweens.cancel(id);
        }
        let stage = &mut self.world.stage;
        stage.camera.position = DVec3::new(0.0, CAMERA_IDLE_Y, CAMERA_IDLE_Z);
        stage.rocket.rest();
        stage.planet.rest();
        stage.last_spawn_window = None;
        stage.events.push(GameEvent::Reset);
    }

    /// Playing → GameOver, applied at the tick boundary after a collision.
    ///
    /// Unregisters the Playing-only callbacks (freezing the flight state),
    /// clears the asteroid set, and starts the 1000 ms return tween to the
    /// idle framing, including the rocket's altitude.
    fn game_over(&mut self, cause: CollisionKind) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.phase = GamePhase::GameOver;

        if let Some(id) = self.flight_callback.take() {
            self.scheduler.unregister(id);
        }
        if let Some(id) = self.game_loop_callback.take() {
            self.scheduler.unregister(id);
        }
        self.world.stage.asteroids.clear();

        let stage = &self.world.stage;
        let tween = Tween::new(TRANSITION_MS)
            .channel("camera_z", stage.camera.position.z, CAMERA_IDLE_Z)
            .channel("camera_y", stage.camera.position.y, CAMERA_IDLE_Y)
            .channel("planet_yaw", stage.planet.yaw(), PLANET_IDLE_YAW)
            .channel("rocket_tilt", stage.rocket.tilt(), ROCKET_IDLE_TILT)
            .channel("rocket_altitude", stage.rocket.altitude(), 0.0);
        self.replace_transition(tween, |stage, step| {
            stage.camera.position.z = step.value("camera_z");
            stage.camera.position.y = step.value("camera_y");
            stage.planet.set_yaw(step.value("planet_yaw"));
            stage.rocket.set_tilt(step.value("rocket_tilt"));
            stage.rocket.set_altitude(step.value("rocket_altitude"));
        });

        self.world.stage.events.push(GameEvent::Crashed { cause });
    }

    /// Replace the live framing tween. At most one start/game-over tween may
    /// run at a time; an unfinished predecessor is cancelled without a final
    /// update.
    fn replace_transition(
        &mut self,
        tween: Tween,
        on_update: impl FnMut(&mut Stage, &TweenStep) + 'static,
    ) {
        if let Some(id) = self.transition_tween.take() {
            self.world.tweens.cancel(id);
        }
        self.transition_tween = Some(self.world.tweens.start(tween, on_update));
    }
}
