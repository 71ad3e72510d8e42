#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic wave scheduling system that releases night attack waves.
//!
//! The system stays idle through the day. `NightStarted` resolves the active
//! settings from the wave book, `TimeAdvanced` paces spawn commands across
//! the phase, and `DayStarted` unconditionally disarms the scheduler.

use std::time::Duration;

use garden_defence_core::{Command, Event, WaveBook, WaveSettings};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the wave system.
#[derive(Clone, Debug)]
pub struct Config {
    book: WaveBook,
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration from a validated wave book and seed.
    #[must_use]
    pub const fn new(book: WaveBook, rng_seed: u64) -> Self {
        Self { book, rng_seed }
    }
}

/// Pure system that paces ant spawn commands across night phases.
#[derive(Debug)]
pub struct Waves {
    book: WaveBook,
    rng: ChaCha8Rng,
    now: Duration,
    phase: PhaseState,
}

#[derive(Clone, Debug)]
enum PhaseState {
    Idle,
    Spawning {
        settings: WaveSettings,
        spawned: u32,
        next_spawn_at: Duration,
    },
}

impl Waves {
    /// Creates a new wave system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            book: config.book,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            now: Duration::ZERO,
            phase: PhaseState::Idle,
        }
    }

    /// Reports whether the scheduler is currently pacing a wave.
    #[must_use]
    pub fn is_spawning(&self) -> bool {
        matches!(self.phase, PhaseState::Spawning { .. })
    }

    /// Consumes world events to emit spawn commands.
    ///
    /// Events are processed in emission order, so a `NightStarted` produced
    /// by the same tick as its `TimeAdvanced` arms the scheduler at the
    /// already-advanced clock position.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Command>) {
        for event in events {
            match event {
                Event::TimeAdvanced { dt } => {
                    self.now = self.now.saturating_add(*dt);
                    self.pump(out);
                }
                Event::NightStarted { day } => self.arm(*day),
                Event::DayStarted { .. } => self.phase = PhaseState::Idle,
                _ => {}
            }
        }
    }

    fn arm(&mut self, day: u32) {
        let settings = self.book.settings_for_day(day).clone();
        if settings.total_units == 0 || settings.spawn_points.is_empty() {
            // Nothing to release this phase; stay idle until the next night.
            self.phase = PhaseState::Idle;
            return;
        }

        let jitter = settings.spawn_interval.mul_f64(self.rng.gen::<f64>() * 0.5);
        self.phase = PhaseState::Spawning {
            settings,
            spawned: 0,
            next_spawn_at: self.now.saturating_add(jitter),
        };
    }

    fn pump(&mut self, out: &mut Vec<Command>) {
        loop {
            let (spawn, exhausted) = {
                let PhaseState::Spawning {
                    settings,
                    spawned,
                    next_spawn_at,
                } = &mut self.phase
                else {
                    return;
                };

                if *spawned >= settings.total_units {
                    (None, true)
                } else if self.now < *next_spawn_at {
                    return;
                } else {
                    let index = self.rng.gen_range(0..settings.spawn_points.len());
                    let position = settings.spawn_points[index];
                    *spawned += 1;
                    *next_spawn_at = next_spawn_at.saturating_add(settings.spawn_interval);
                    (Some(position), *spawned >= settings.total_units)
                }
            };

            if let Some(position) = spawn {
                out.push(Command::SpawnAnt { position });
            }
            if exhausted {
                self.phase = PhaseState::Idle;
                return;
            }
        }
    }
}
