#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Garden Defence.
//!
//! The world owns the day/night clock, the house, every ant, plant, and loot
//! pickup, and the resource inventory. Adapters and systems mutate it
//! exclusively through [`apply`], which executes one [`Command`] and pushes
//! the resulting [`Event`] values into the caller's buffer. The [`query`]
//! module exposes immutable snapshots for systems to read.

mod ants;
mod clock;
mod inventory;
mod plants;

use std::collections::BTreeMap;
use std::time::Duration;

use garden_defence_core::{
    AntId, AntProfile, ClockConfig, Command, ConfigError, DamageOutcome, Event, Health, PickupId,
    PlacementError, PlantId, PlantProfile, Position, ReleaseReason, ResourceKind, WELCOME_BANNER,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use ants::AntRegistry;
use clock::Clock;
use inventory::Inventory;
use plants::PlantRegistry;

/// Maximum positional jitter applied to each dropped pickup.
const LOOT_SCATTER: f32 = 0.3;

const DEFAULT_RNG_SEED: u64 = 0x6a09_e667_f3bc_c908;

/// Configuration assembled by adapters to construct a world.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldConfig {
    /// Timing parameters for the day/night cycle.
    pub clock: ClockConfig,
    /// Position the defended house occupies.
    pub house_position: Position,
    /// Maximum health of the house's pool.
    pub house_max_health: f32,
    /// Radius the motion layer treats as contact with the house.
    pub arrival_radius: f32,
    /// Stats stamped onto every spawned ant.
    pub ant_profile: AntProfile,
    /// Stats stamped onto every placed plant.
    pub plant_profile: PlantProfile,
    /// Minimum spacing between living plants.
    pub plant_spacing: f32,
    /// Seeds available in the inventory when the simulation starts.
    pub starting_seeds: u32,
    /// Seed for the world's loot-roll random stream.
    pub rng_seed: u64,
}

impl WorldConfig {
    /// Validates the configuration against the error taxonomy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.clock.validate()?;
        self.ant_profile.validate()?;
        self.plant_profile.validate()?;
        if self.house_max_health <= 0.0 {
            return Err(ConfigError::NonPositiveStat {
                name: "house max health",
            });
        }
        if self.arrival_radius <= 0.0 {
            return Err(ConfigError::NonPositiveStat {
                name: "arrival radius",
            });
        }
        if self.plant_spacing < 0.0 {
            return Err(ConfigError::NegativeStat {
                name: "plant spacing",
            });
        }
        Ok(())
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            clock: ClockConfig::default(),
            house_position: Position::new(0.0, 0.0),
            house_max_health: 100.0,
            arrival_radius: 0.5,
            ant_profile: AntProfile::default(),
            plant_profile: PlantProfile::default(),
            plant_spacing: 0.5,
            starting_seeds: 0,
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

#[derive(Clone, Debug)]
struct HouseState {
    position: Position,
    health: Health,
}

#[derive(Clone, Copy, Debug)]
struct PickupState {
    kind: ResourceKind,
    amount: u32,
    position: Position,
}

/// Represents the authoritative Garden Defence world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    clock: Clock,
    house: Option<HouseState>,
    ants: AntRegistry,
    plants: PlantRegistry,
    pickups: BTreeMap<PickupId, PickupState>,
    next_pickup_id: u32,
    inventory: Inventory,
    ant_profile: AntProfile,
    plant_profile: PlantProfile,
    plant_spacing: f32,
    arrival_radius: f32,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates a new Garden Defence world ready for simulation.
    ///
    /// Configuration problems are reported here, once, before any state
    /// exists; nothing later in the simulation is allowed to fail fatally.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            banner: WELCOME_BANNER,
            clock: Clock::new(&config.clock),
            house: Some(HouseState {
                position: config.house_position,
                health: Health::new(config.house_max_health),
            }),
            ants: AntRegistry::new(),
            plants: PlantRegistry::new(),
            pickups: BTreeMap::new(),
            next_pickup_id: 0,
            inventory: Inventory::with_seeds(config.starting_seeds),
            ant_profile: config.ant_profile,
            plant_profile: config.plant_profile,
            plant_spacing: config.plant_spacing,
            arrival_radius: config.arrival_radius,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        })
    }

    /// External inventory contract: adds `amount` of the named resource.
    ///
    /// Unknown names and zero amounts are rejected without state change.
    pub fn add_resource(&mut self, kind: &str, amount: u32) -> bool {
        self.inventory.add_by_name(kind, amount)
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        out_events.push(Event::TimeAdvanced { dt });
        self.clock.advance(dt, out_events);
        self.advance_ants(dt);
        self.advance_plants(dt, out_events);
        self.validate_locks(out_events);
    }

    fn advance_ants(&mut self, dt: Duration) {
        let step = self.ant_profile.speed * dt.as_secs_f32();
        if step <= 0.0 {
            return;
        }

        for ant in self.ants.iter_mut() {
            let Some(target) = ant.target_point else {
                continue;
            };
            if step >= ant.position.distance_to(target) {
                ant.position = target;
            } else if let Some(heading) = ant.position.heading_to(target) {
                ant.position = ant.position.offset_by(heading.x() * step, heading.y() * step);
            }
        }
    }

    fn advance_plants(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        let profile = self.plant_profile;
        let mut withered: Vec<PlantId> = Vec::new();

        for plant in self.plants.iter_mut() {
            if !plant.durability.is_alive() {
                continue;
            }

            if !plant.is_mature(profile.max_stage) {
                plant.growth_remaining = plant.growth_remaining.saturating_sub(dt);
                if plant.growth_remaining.is_zero() {
                    plant.stage = plant.stage.saturating_add(1);
                    out_events.push(Event::PlantStageChanged {
                        plant: plant.id,
                        stage: plant.stage,
                    });
                    if !plant.is_mature(profile.max_stage) {
                        plant.growth_remaining = profile.growth_time;
                    }
                }
                continue;
            }

            plant.ready_in = plant.ready_in.saturating_sub(dt);
            match plant.durability.decay(dt) {
                DamageOutcome::Applied => out_events.push(Event::PlantDurabilityChanged {
                    plant: plant.id,
                    ratio: plant.durability.ratio(),
                }),
                DamageOutcome::Depleted => {
                    out_events.push(Event::PlantDurabilityChanged {
                        plant: plant.id,
                        ratio: 0.0,
                    });
                    withered.push(plant.id);
                }
                DamageOutcome::Rejected => {}
            }
        }

        for plant in withered {
            self.wither_plant(plant, out_events);
        }
    }

    /// Re-checks every lock against current liveness and distance.
    ///
    /// Lock validity must be re-read from current state every tick; a lock
    /// may never act on a cached snapshot of its target.
    fn validate_locks(&mut self, out_events: &mut Vec<Event>) {
        let range_squared = self.plant_profile.attack_range * self.plant_profile.attack_range;
        let mut releases: Vec<(PlantId, ReleaseReason)> = Vec::new();

        for plant in self.plants.iter() {
            if !plant.durability.is_alive() {
                continue;
            }
            let Some(target) = plant.locked_target else {
                continue;
            };
            match self.ants.get(target) {
                None => releases.push((plant.id, ReleaseReason::TargetDestroyed)),
                Some(ant) if !ant.health.is_alive() => {
                    releases.push((plant.id, ReleaseReason::TargetDestroyed));
                }
                Some(ant) => {
                    if plant.position.distance_squared_to(ant.position) > range_squared {
                        releases.push((plant.id, ReleaseReason::TargetLeftRange));
                    }
                }
            }
        }

        for (plant_id, reason) in releases {
            if let Some(plant) = self.plants.get_mut(plant_id) {
                plant.locked_target = None;
            }
            out_events.push(Event::TargetReleased {
                plant: plant_id,
                reason,
            });
        }
    }

    fn spawn_ant(&mut self, position: Position, out_events: &mut Vec<Event>) {
        let target_point = self.house.as_ref().map(|house| house.position);
        let ant = self.ants.allocate(
            position,
            target_point,
            Health::new(self.ant_profile.max_health),
        );
        out_events.push(Event::AntSpawned { ant, position });
    }

    fn place_plant(&mut self, position: Position, out_events: &mut Vec<Event>) {
        let spacing_squared = self.plant_spacing * self.plant_spacing;
        let occupied = self.plants.iter().any(|plant| {
            plant.durability.is_alive()
                && plant.position.distance_squared_to(position) < spacing_squared
        });
        if occupied {
            out_events.push(Event::PlantPlacementRejected {
                position,
                reason: PlacementError::Occupied,
            });
            return;
        }

        if !self.inventory.spend(ResourceKind::Seed, 1) {
            out_events.push(Event::PlantPlacementRejected {
                position,
                reason: PlacementError::MissingSeeds,
            });
            return;
        }

        let plant = self.plants.allocate(position, &self.plant_profile);
        out_events.push(Event::PlantPlaced { plant, position });
    }

    fn lock_target(&mut self, plant_id: PlantId, ant_id: AntId, out_events: &mut Vec<Event>) {
        let range_squared = self.plant_profile.attack_range * self.plant_profile.attack_range;
        let max_stage = self.plant_profile.max_stage;

        let Some(ant) = self.ants.get(ant_id) else {
            return;
        };
        if !ant.health.is_alive() {
            return;
        }
        let ant_position = ant.position;

        let Some(plant) = self.plants.get_mut(plant_id) else {
            return;
        };
        if !plant.durability.is_alive()
            || !plant.is_mature(max_stage)
            || plant.locked_target.is_some()
        {
            return;
        }
        if plant.position.distance_squared_to(ant_position) > range_squared {
            return;
        }

        plant.locked_target = Some(ant_id);
        out_events.push(Event::TargetLocked {
            plant: plant_id,
            ant: ant_id,
        });
    }

    fn strike_ant(
        &mut self,
        plant_id: PlantId,
        target: AntId,
        out_events: &mut Vec<Event>,
    ) {
        let profile = self.plant_profile;

        let Some(plant) = self.plants.get_mut(plant_id) else {
            return;
        };
        if !plant.durability.is_alive() || !plant.is_mature(profile.max_stage) {
            return;
        }
        if plant.locked_target != Some(target) || !plant.ready_in.is_zero() {
            return;
        }

        // Liveness is re-read from the registry at the moment of the strike.
        let target_alive = self
            .ants
            .get(target)
            .map_or(false, |ant| ant.health.is_alive());
        if !target_alive {
            plant.locked_target = None;
            out_events.push(Event::TargetReleased {
                plant: plant_id,
                reason: ReleaseReason::TargetDestroyed,
            });
            return;
        }

        plant.ready_in = profile.attack_cooldown;
        let spend = plant.durability.spend(profile.durability_cost_per_attack);
        let ratio = plant.durability.ratio();
        match spend {
            DamageOutcome::Depleted => {
                // The spend killed the plant; the attack does not proceed.
                out_events.push(Event::PlantDurabilityChanged {
                    plant: plant_id,
                    ratio,
                });
                self.wither_plant(plant_id, out_events);
                return;
            }
            DamageOutcome::Applied => out_events.push(Event::PlantDurabilityChanged {
                plant: plant_id,
                ratio,
            }),
            DamageOutcome::Rejected => {}
        }

        out_events.push(Event::AttackTriggered {
            plant: plant_id,
            target,
        });

        let lethal = self.ants.get_mut(target).map_or(false, |ant| {
            matches!(
                ant.health.damage(profile.damage_per_attack),
                DamageOutcome::Depleted
            )
        });
        if lethal {
            self.kill_ant(target, out_events);
        }
    }

    /// Removes a slain ant, rolls its loot, and invalidates every lock on it.
    ///
    /// Runs at most once per ant: the caller only reaches this on the single
    /// `Depleted` outcome, and removal makes later lookups fail.
    fn kill_ant(&mut self, ant_id: AntId, out_events: &mut Vec<Event>) {
        let Some(ant) = self.ants.remove(ant_id) else {
            return;
        };

        let loot = self.ant_profile.loot;
        if self.rng.gen::<f32>() <= loot.drop_chance {
            let count = if loot.max_drop > loot.min_drop {
                self.rng.gen_range(loot.min_drop..=loot.max_drop)
            } else {
                loot.min_drop
            };
            for _ in 0..count {
                let dx = self.rng.gen_range(-LOOT_SCATTER..=LOOT_SCATTER);
                let dy = self.rng.gen_range(-LOOT_SCATTER..=LOOT_SCATTER);
                let position = ant.position.offset_by(dx, dy);
                let pickup = self.allocate_pickup(loot.kind, 1, position);
                out_events.push(Event::LootDropped {
                    pickup,
                    kind: loot.kind,
                    position,
                });
            }
        }

        out_events.push(Event::AntDied {
            ant: ant_id,
            position: ant.position,
        });
        self.release_locks_on(ant_id, out_events);
    }

    fn ant_arrived(&mut self, ant_id: AntId, out_events: &mut Vec<Event>) {
        if self.ants.remove(ant_id).is_none() {
            return;
        }

        let damage = self.ant_profile.contact_damage;
        out_events.push(Event::AntArrived {
            ant: ant_id,
            damage,
        });

        if let Some(house) = self.house.as_mut() {
            match house.health.damage(damage) {
                DamageOutcome::Applied => out_events.push(Event::HouseHealthChanged {
                    current: house.health.current(),
                    max: house.health.max(),
                }),
                DamageOutcome::Depleted => {
                    out_events.push(Event::HouseHealthChanged {
                        current: 0.0,
                        max: house.health.max(),
                    });
                    out_events.push(Event::HouseDestroyed);
                    self.house = None;
                }
                DamageOutcome::Rejected => {}
            }
        }

        self.release_locks_on(ant_id, out_events);
    }

    fn collect_pickup(&mut self, pickup_id: PickupId, out_events: &mut Vec<Event>) {
        let Some(pickup) = self.pickups.remove(&pickup_id) else {
            return;
        };
        if self.inventory.add(pickup.kind, pickup.amount) {
            out_events.push(Event::PickupCollected {
                pickup: pickup_id,
                kind: pickup.kind,
                amount: pickup.amount,
            });
        } else {
            let _ = self.pickups.insert(pickup_id, pickup);
        }
    }

    fn wither_plant(&mut self, plant_id: PlantId, out_events: &mut Vec<Event>) {
        if let Some(plant) = self.plants.get_mut(plant_id) {
            if plant.locked_target.take().is_some() {
                out_events.push(Event::TargetReleased {
                    plant: plant_id,
                    reason: ReleaseReason::PlantDisabled,
                });
            }
            out_events.push(Event::PlantDied { plant: plant_id });
        }
    }

    fn release_locks_on(&mut self, ant_id: AntId, out_events: &mut Vec<Event>) {
        for plant in self.plants.iter_mut() {
            if plant.locked_target == Some(ant_id) {
                plant.locked_target = None;
                out_events.push(Event::TargetReleased {
                    plant: plant.id,
                    reason: ReleaseReason::TargetDestroyed,
                });
            }
        }
    }

    fn allocate_pickup(&mut self, kind: ResourceKind, amount: u32, position: Position) -> PickupId {
        let id = PickupId::new(self.next_pickup_id);
        self.next_pickup_id = self.next_pickup_id.wrapping_add(1);
        let _ = self.pickups.insert(
            id,
            PickupState {
                kind,
                amount,
                position,
            },
        );
        id
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::Tick { dt } => world.tick(dt, out_events),
        Command::SpawnAnt { position } => world.spawn_ant(position, out_events),
        Command::PlacePlant { position } => world.place_plant(position, out_events),
        Command::LockTarget { plant, ant } => world.lock_target(plant, ant, out_events),
        Command::StrikeAnt { plant, target } => world.strike_ant(plant, target, out_events),
        Command::ReportAntArrival { ant } => world.ant_arrived(ant, out_events),
        Command::CollectPickup { pickup } => world.collect_pickup(pickup, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use garden_defence_core::{
        AntSnapshot, AntView, ClockSnapshot, HouseSnapshot, InventorySnapshot, PickupSnapshot,
        PickupView, PlantSnapshot, PlantView, Position,
    };

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Captures the current clock state.
    #[must_use]
    pub fn clock_view(world: &World) -> ClockSnapshot {
        world.clock.snapshot()
    }

    /// Captures the house state, or `None` once it has been destroyed.
    #[must_use]
    pub fn house(world: &World) -> Option<HouseSnapshot> {
        world.house.as_ref().map(|house| HouseSnapshot {
            position: house.position,
            health: house.health,
        })
    }

    /// Radius the motion layer treats as contact with the house.
    #[must_use]
    pub fn arrival_radius(world: &World) -> f32 {
        world.arrival_radius
    }

    /// Captures a read-only view of the ants marching through the garden.
    #[must_use]
    pub fn ant_view(world: &World) -> AntView {
        let snapshots: Vec<AntSnapshot> = world
            .ants
            .iter()
            .map(|ant| AntSnapshot {
                id: ant.id,
                position: ant.position,
                heading: ant
                    .target_point
                    .and_then(|target| ant.position.heading_to(target)),
                speed: world.ant_profile.speed,
                health: ant.health,
            })
            .collect();
        AntView::from_snapshots(snapshots)
    }

    /// Captures a read-only view of the plants rooted in the garden.
    #[must_use]
    pub fn plant_view(world: &World) -> PlantView {
        let profile = world.plant_profile;
        let snapshots: Vec<PlantSnapshot> = world
            .plants
            .iter()
            .map(|plant| PlantSnapshot {
                id: plant.id,
                position: plant.position,
                stage: plant.stage,
                mature: plant.is_mature(profile.max_stage),
                range: profile.attack_range,
                ready_in: plant.ready_in,
                locked_target: plant.locked_target,
                durability: plant.durability,
            })
            .collect();
        PlantView::from_snapshots(snapshots)
    }

    /// Captures a read-only view of the loot pickups lying in the garden.
    #[must_use]
    pub fn pickup_view(world: &World) -> PickupView {
        let snapshots: Vec<PickupSnapshot> = world
            .pickups
            .iter()
            .map(|(id, pickup)| PickupSnapshot {
                id: *id,
                kind: pickup.kind,
                amount: pickup.amount,
                position: pickup.position,
            })
            .collect();
        PickupView::from_snapshots(snapshots)
    }

    /// Captures the current inventory counts.
    #[must_use]
    pub fn inventory(world: &World) -> InventorySnapshot {
        world.inventory.snapshot()
    }

    /// Position of the house, while it still stands.
    #[must_use]
    pub fn house_position(world: &World) -> Option<Position> {
        world.house.as_ref().map(|house| house.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garden_defence_core::LootTable;

    fn quiet_clock() -> ClockConfig {
        // Mid-morning start so multi-second test ticks stay inside the day.
        ClockConfig {
            day_length: Duration::from_secs(100_000),
            ..ClockConfig::default()
        }
    }

    fn combat_config() -> WorldConfig {
        WorldConfig {
            clock: quiet_clock(),
            house_position: Position::new(50.0, 0.0),
            plant_profile: PlantProfile {
                attack_range: 10.0,
                attack_cooldown: Duration::ZERO,
                growth_time: Duration::ZERO,
                max_stage: 1,
                max_durability: 100.0,
                decay_per_second: 0.1,
                durability_cost_per_attack: 5.0,
                damage_per_attack: 1.0,
            },
            ant_profile: AntProfile {
                speed: 1.0,
                contact_damage: 10.0,
                max_health: 1000.0,
                loot: LootTable::default(),
            },
            starting_seeds: 4,
            ..WorldConfig::default()
        }
    }

    fn apply_all(world: &mut World, commands: Vec<Command>) -> Vec<Event> {
        let mut events = Vec::new();
        for command in commands {
            apply(world, command, &mut events);
        }
        events
    }

    fn placed_plant(events: &[Event]) -> PlantId {
        events
            .iter()
            .find_map(|event| match event {
                Event::PlantPlaced { plant, .. } => Some(*plant),
                _ => None,
            })
            .expect("plant placed")
    }

    fn spawned_ant(events: &[Event]) -> AntId {
        events
            .iter()
            .find_map(|event| match event {
                Event::AntSpawned { ant, .. } => Some(*ant),
                _ => None,
            })
            .expect("ant spawned")
    }

    #[test]
    fn invalid_configuration_is_rejected_at_construction() {
        let config = WorldConfig {
            house_max_health: 0.0,
            ..WorldConfig::default()
        };
        assert_eq!(
            World::new(config).err(),
            Some(ConfigError::NonPositiveStat {
                name: "house max health",
            })
        );
    }

    #[test]
    fn durability_ledger_matches_strikes_and_decay() {
        let mut world = World::new(combat_config()).expect("valid config");
        let events = apply_all(
            &mut world,
            vec![
                Command::PlacePlant {
                    position: Position::new(0.0, 0.0),
                },
                Command::SpawnAnt {
                    position: Position::new(1.0, 0.0),
                },
                // Zero-length tick matures the zero-growth-time plant.
                Command::Tick { dt: Duration::ZERO },
            ],
        );
        let plant = placed_plant(&events);
        let ant = spawned_ant(&events);

        let mut events = apply_all(&mut world, vec![Command::LockTarget { plant, ant }]);
        assert!(events.contains(&Event::TargetLocked { plant, ant }));

        for _ in 0..10 {
            apply(
                &mut world,
                Command::StrikeAnt {
                    plant,
                    target: ant,
                },
                &mut events,
            );
        }
        apply(
            &mut world,
            Command::Tick {
                dt: Duration::from_secs(50),
            },
            &mut events,
        );

        let strikes = events
            .iter()
            .filter(|event| matches!(event, Event::AttackTriggered { .. }))
            .count();
        assert_eq!(strikes, 10);

        let snapshot = query::plant_view(&world)
            .into_vec()
            .into_iter()
            .find(|snapshot| snapshot.id == plant)
            .expect("plant snapshot");
        assert!(
            (snapshot.durability.current() - 45.0).abs() < 1e-3,
            "100 - 10 strikes * 5 - 50s * 0.1 = 45, got {}",
            snapshot.durability.current()
        );
        assert!(snapshot.durability.is_alive(), "dies only at zero");
    }

    #[test]
    fn placement_rejections_carry_reasons() {
        let mut world = World::new(combat_config()).expect("valid config");
        let first = apply_all(
            &mut world,
            vec![Command::PlacePlant {
                position: Position::new(0.0, 0.0),
            }],
        );
        let _ = placed_plant(&first);

        let crowded = apply_all(
            &mut world,
            vec![Command::PlacePlant {
                position: Position::new(0.1, 0.0),
            }],
        );
        assert!(crowded.contains(&Event::PlantPlacementRejected {
            position: Position::new(0.1, 0.0),
            reason: PlacementError::Occupied,
        }));

        // Drain the remaining seeds, then one more placement must fail.
        let _ = apply_all(
            &mut world,
            vec![
                Command::PlacePlant {
                    position: Position::new(2.0, 0.0),
                },
                Command::PlacePlant {
                    position: Position::new(4.0, 0.0),
                },
                Command::PlacePlant {
                    position: Position::new(6.0, 0.0),
                },
            ],
        );
        let broke = apply_all(
            &mut world,
            vec![Command::PlacePlant {
                position: Position::new(8.0, 0.0),
            }],
        );
        assert!(broke.contains(&Event::PlantPlacementRejected {
            position: Position::new(8.0, 0.0),
            reason: PlacementError::MissingSeeds,
        }));
    }

    #[test]
    fn arrival_damages_house_once_and_consumes_ant() {
        let mut world = World::new(combat_config()).expect("valid config");
        let events = apply_all(
            &mut world,
            vec![Command::SpawnAnt {
                position: Position::new(49.0, 0.0),
            }],
        );
        let ant = spawned_ant(&events);

        let events = apply_all(&mut world, vec![Command::ReportAntArrival { ant }]);
        assert!(events.contains(&Event::AntArrived { ant, damage: 10.0 }));
        assert!(events.contains(&Event::HouseHealthChanged {
            current: 90.0,
            max: 100.0,
        }));
        assert!(query::ant_view(&world).into_vec().is_empty());

        // A second report for the same ant is a stale no-op.
        let stale = apply_all(&mut world, vec![Command::ReportAntArrival { ant }]);
        assert!(stale.is_empty());
        let house = query::house(&world).expect("house stands");
        assert_eq!(house.health.current(), 90.0);
    }

    #[test]
    fn house_destruction_fires_once_and_removes_it() {
        let config = WorldConfig {
            house_max_health: 15.0,
            ..combat_config()
        };
        let mut world = World::new(config).expect("valid config");

        let events = apply_all(
            &mut world,
            vec![
                Command::SpawnAnt {
                    position: Position::new(49.0, 0.0),
                },
                Command::SpawnAnt {
                    position: Position::new(49.0, 1.0),
                },
            ],
        );
        let ants: Vec<AntId> = events
            .iter()
            .filter_map(|event| match event {
                Event::AntSpawned { ant, .. } => Some(*ant),
                _ => None,
            })
            .collect();

        let mut destroyed = Vec::new();
        for ant in ants {
            apply(&mut world, Command::ReportAntArrival { ant }, &mut destroyed);
        }

        let destructions = destroyed
            .iter()
            .filter(|event| matches!(event, Event::HouseDestroyed))
            .count();
        assert_eq!(destructions, 1);
        assert!(query::house(&world).is_none());
    }

    #[test]
    fn slain_ant_drops_loot_and_clears_locks() {
        let config = WorldConfig {
            ant_profile: AntProfile {
                max_health: 1.0,
                ..combat_config().ant_profile
            },
            ..combat_config()
        };
        let mut world = World::new(config).expect("valid config");

        let events = apply_all(
            &mut world,
            vec![
                Command::PlacePlant {
                    position: Position::new(0.0, 0.0),
                },
                Command::SpawnAnt {
                    position: Position::new(1.0, 0.0),
                },
                Command::Tick { dt: Duration::ZERO },
            ],
        );
        let plant = placed_plant(&events);
        let ant = spawned_ant(&events);

        let events = apply_all(
            &mut world,
            vec![
                Command::LockTarget { plant, ant },
                Command::StrikeAnt {
                    plant,
                    target: ant,
                },
            ],
        );

        assert!(events.contains(&Event::AntDied {
            ant,
            position: Position::new(1.0, 0.0),
        }));
        assert!(events.contains(&Event::TargetReleased {
            plant,
            reason: ReleaseReason::TargetDestroyed,
        }));
        let drops = events
            .iter()
            .filter(|event| matches!(event, Event::LootDropped { .. }))
            .count();
        assert_eq!(drops, 1, "default table drops exactly one scrap");

        // The dropped pickup is collectable into the inventory.
        let pickup = query::pickup_view(&world).into_vec()[0].id;
        let events = apply_all(&mut world, vec![Command::CollectPickup { pickup }]);
        assert!(events.contains(&Event::PickupCollected {
            pickup,
            kind: ResourceKind::ChitinScrap,
            amount: 1,
        }));
        assert_eq!(query::inventory(&world).chitin, 1);
    }

    #[test]
    fn lock_clears_when_target_marches_out_of_range() {
        let config = WorldConfig {
            plant_profile: PlantProfile {
                attack_range: 1.5,
                ..combat_config().plant_profile
            },
            ..combat_config()
        };
        let mut world = World::new(config).expect("valid config");

        let events = apply_all(
            &mut world,
            vec![
                Command::PlacePlant {
                    position: Position::new(0.0, 0.0),
                },
                Command::SpawnAnt {
                    position: Position::new(1.0, 0.0),
                },
                Command::Tick { dt: Duration::ZERO },
            ],
        );
        let plant = placed_plant(&events);
        let ant = spawned_ant(&events);

        let _ = apply_all(&mut world, vec![Command::LockTarget { plant, ant }]);
        let events = apply_all(
            &mut world,
            vec![Command::Tick {
                dt: Duration::from_secs(2),
            }],
        );

        assert!(events.contains(&Event::TargetReleased {
            plant,
            reason: ReleaseReason::TargetLeftRange,
        }));
        let snapshot = query::plant_view(&world).into_vec()[0];
        assert_eq!(snapshot.locked_target, None);
    }

    #[test]
    fn stale_commands_are_silent_no_ops() {
        let mut world = World::new(combat_config()).expect("valid config");
        let events = apply_all(
            &mut world,
            vec![
                Command::LockTarget {
                    plant: PlantId::new(9),
                    ant: AntId::new(9),
                },
                Command::StrikeAnt {
                    plant: PlantId::new(9),
                    target: AntId::new(9),
                },
                Command::ReportAntArrival { ant: AntId::new(9) },
                Command::CollectPickup {
                    pickup: PickupId::new(9),
                },
            ],
        );
        assert!(events.is_empty());
    }

    #[test]
    fn immature_plants_neither_lock_nor_strike() {
        let config = WorldConfig {
            plant_profile: PlantProfile {
                growth_time: Duration::from_secs(5),
                ..combat_config().plant_profile
            },
            ..combat_config()
        };
        let mut world = World::new(config).expect("valid config");

        let events = apply_all(
            &mut world,
            vec![
                Command::PlacePlant {
                    position: Position::new(0.0, 0.0),
                },
                Command::SpawnAnt {
                    position: Position::new(1.0, 0.0),
                },
            ],
        );
        let plant = placed_plant(&events);
        let ant = spawned_ant(&events);

        let events = apply_all(&mut world, vec![Command::LockTarget { plant, ant }]);
        assert!(events.is_empty(), "seed-stage plants cannot lock");

        // Maturity arrives after the full growth time has elapsed.
        let events = apply_all(
            &mut world,
            vec![
                Command::Tick {
                    dt: Duration::from_secs(3),
                },
                Command::Tick {
                    dt: Duration::from_secs(2),
                },
            ],
        );
        assert!(events.contains(&Event::PlantStageChanged { plant, stage: 1 }));
    }

    #[test]
    fn external_resource_contract_rejects_unknown_kinds() {
        let mut world = World::new(combat_config()).expect("valid config");
        assert!(world.add_resource("ChitinScrap", 2));
        assert!(!world.add_resource("Obsidian", 2));
        assert!(!world.add_resource("Seed", 0));
        assert_eq!(query::inventory(&world).chitin, 2);
    }
}
