//! TOML scenario schema mapped onto the engine's typed configuration.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use garden_defence_core::{
    AntProfile, ClockConfig, LootTable, PlantProfile, Position, WaveBook, WaveSettings, WaveWindow,
};
use garden_defence_world::WorldConfig;
use serde::Deserialize;

/// On-disk scenario description with serde-supplied defaults.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ScenarioFile {
    clock: ClockSection,
    house: HouseSection,
    ants: AntSection,
    plants: PlantSection,
    planting: PlantingSection,
    waves: Vec<WaveSection>,
    default_wave: WaveSettingsSection,
}

impl Default for ScenarioFile {
    fn default() -> Self {
        Self {
            clock: ClockSection::default(),
            house: HouseSection::default(),
            ants: AntSection::default(),
            plants: PlantSection::default(),
            planting: PlantingSection::default(),
            waves: vec![
                WaveSection {
                    start_day: 1,
                    end_day: 2,
                    total_units: 4,
                    spawn_interval_seconds: 4.0,
                    spawn_points: default_spawn_points(),
                },
                WaveSection {
                    start_day: 3,
                    end_day: 5,
                    total_units: 8,
                    spawn_interval_seconds: 3.0,
                    spawn_points: default_spawn_points(),
                },
            ],
            default_wave: WaveSettingsSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ClockSection {
    day_length_seconds: f32,
    night_start: f32,
    day_start: f32,
    initial_time_of_day: f32,
}

impl Default for ClockSection {
    fn default() -> Self {
        Self {
            day_length_seconds: 720.0,
            night_start: 0.75,
            day_start: 0.25,
            initial_time_of_day: 0.3,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct HouseSection {
    position: [f32; 2],
    max_health: f32,
    arrival_radius: f32,
}

impl Default for HouseSection {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0],
            max_health: 100.0,
            arrival_radius: 0.6,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct AntSection {
    speed: f32,
    contact_damage: f32,
    max_health: f32,
    drop_chance: f32,
    min_drop: u32,
    max_drop: u32,
}

impl Default for AntSection {
    fn default() -> Self {
        Self {
            speed: 1.0,
            contact_damage: 10.0,
            max_health: 10.0,
            drop_chance: 1.0,
            min_drop: 1,
            max_drop: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PlantSection {
    attack_range: f32,
    attack_cooldown_seconds: f32,
    growth_time_seconds: f32,
    max_stage: u8,
    max_durability: f32,
    decay_per_second: f32,
    durability_cost_per_attack: f32,
    damage_per_attack: f32,
}

impl Default for PlantSection {
    fn default() -> Self {
        Self {
            attack_range: 1.5,
            attack_cooldown_seconds: 2.0,
            growth_time_seconds: 5.0,
            max_stage: 1,
            max_durability: 50.0,
            decay_per_second: 0.02,
            durability_cost_per_attack: 1.0,
            damage_per_attack: 5.0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PlantingSection {
    spacing: f32,
    positions: Vec<[f32; 2]>,
    extra_seeds: u32,
}

impl Default for PlantingSection {
    fn default() -> Self {
        Self {
            spacing: 0.5,
            positions: vec![[-2.0, 0.0], [2.0, 0.0], [0.0, 2.0], [0.0, -2.0]],
            extra_seeds: 0,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WaveSection {
    start_day: u32,
    end_day: u32,
    total_units: u32,
    spawn_interval_seconds: f32,
    spawn_points: Vec<[f32; 2]>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct WaveSettingsSection {
    total_units: u32,
    spawn_interval_seconds: f32,
    spawn_points: Vec<[f32; 2]>,
}

impl Default for WaveSettingsSection {
    fn default() -> Self {
        Self {
            total_units: 0,
            spawn_interval_seconds: 5.0,
            spawn_points: Vec::new(),
        }
    }
}

fn default_spawn_points() -> Vec<[f32; 2]> {
    vec![[-8.0, 0.0], [8.0, 0.0], [0.0, 8.0]]
}

fn position(raw: [f32; 2]) -> Position {
    Position::new(raw[0], raw[1])
}

fn seconds(name: &str, value: f32) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f32(value).with_context(|| format!("{name} of {value}s is not a valid duration"))
}

impl ScenarioFile {
    /// Converts the file into the world's typed configuration.
    pub(crate) fn world_config(&self, rng_seed: u64) -> anyhow::Result<WorldConfig> {
        Ok(WorldConfig {
            clock: ClockConfig {
                day_length: seconds("day length", self.clock.day_length_seconds)?,
                night_start: self.clock.night_start,
                day_start: self.clock.day_start,
                initial_time_of_day: self.clock.initial_time_of_day,
            },
            house_position: position(self.house.position),
            house_max_health: self.house.max_health,
            arrival_radius: self.house.arrival_radius,
            ant_profile: AntProfile {
                speed: self.ants.speed,
                contact_damage: self.ants.contact_damage,
                max_health: self.ants.max_health,
                loot: LootTable {
                    drop_chance: self.ants.drop_chance,
                    min_drop: self.ants.min_drop,
                    max_drop: self.ants.max_drop,
                    ..LootTable::default()
                },
            },
            plant_profile: PlantProfile {
                attack_range: self.plants.attack_range,
                attack_cooldown: seconds("attack cooldown", self.plants.attack_cooldown_seconds)?,
                growth_time: seconds("growth time", self.plants.growth_time_seconds)?,
                max_stage: self.plants.max_stage,
                max_durability: self.plants.max_durability,
                decay_per_second: self.plants.decay_per_second,
                durability_cost_per_attack: self.plants.durability_cost_per_attack,
                damage_per_attack: self.plants.damage_per_attack,
            },
            plant_spacing: self.planting.spacing,
            starting_seeds: self.planting.positions.len() as u32 + self.planting.extra_seeds,
            rng_seed,
        })
    }

    /// Builds and validates the wave book described by the file.
    pub(crate) fn wave_book(&self) -> anyhow::Result<WaveBook> {
        let mut windows = Vec::with_capacity(self.waves.len());
        for wave in &self.waves {
            windows.push(WaveWindow {
                start_day: wave.start_day,
                end_day: wave.end_day,
                settings: WaveSettings {
                    total_units: wave.total_units,
                    spawn_interval: seconds("spawn interval", wave.spawn_interval_seconds)?,
                    spawn_points: wave.spawn_points.iter().copied().map(position).collect(),
                },
            });
        }
        let fallback = WaveSettings {
            total_units: self.default_wave.total_units,
            spawn_interval: seconds("spawn interval", self.default_wave.spawn_interval_seconds)?,
            spawn_points: self
                .default_wave
                .spawn_points
                .iter()
                .copied()
                .map(position)
                .collect(),
        };
        Ok(WaveBook::new(windows, fallback)?)
    }

    /// Positions the driver plants at before the first tick.
    pub(crate) fn plant_positions(&self) -> Vec<Position> {
        self.planting.positions.iter().copied().map(position).collect()
    }
}

/// Loads and parses a scenario file from disk.
pub(crate) fn load(path: &Path) -> anyhow::Result<ScenarioFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading scenario file {}", path.display()))?;
    toml::from_str(&raw).context("parsing scenario TOML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_produce_a_valid_scenario() {
        let file = ScenarioFile::default();
        let config = file.world_config(7).expect("durations convert");
        assert!(config.validate().is_ok());
        assert_eq!(config.starting_seeds, 4);
        assert!(file.wave_book().is_ok());
        assert_eq!(file.plant_positions().len(), 4);
    }

    #[test]
    fn toml_overrides_are_honored() {
        let file: ScenarioFile = toml::from_str(
            r#"
            [clock]
            day_length_seconds = 100.0
            initial_time_of_day = 0.7

            [ants]
            max_health = 25.0

            [[waves]]
            start_day = 1
            end_day = 9
            total_units = 5
            spawn_interval_seconds = 2.0
            spawn_points = [[-4.0, 0.0], [4.0, 0.0]]
            "#,
        )
        .expect("valid scenario TOML");

        let config = file.world_config(7).expect("durations convert");
        assert_eq!(config.clock.day_length, Duration::from_secs(100));
        assert!((config.ant_profile.max_health - 25.0).abs() < f32::EPSILON);

        let book = file.wave_book().expect("valid wave book");
        assert_eq!(book.windows().len(), 1);
        assert_eq!(book.settings_for_day(4).total_units, 5);
        assert_eq!(book.fallback().total_units, 0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result: Result<ScenarioFile, _> = toml::from_str("[clock]\nday_len = 10.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn negative_durations_are_reported() {
        let file: ScenarioFile = toml::from_str(
            r#"
            [plants]
            growth_time_seconds = -1.0
            "#,
        )
        .expect("schema accepts the raw value");
        assert!(file.world_config(7).is_err(), "conversion rejects it");
    }
}
