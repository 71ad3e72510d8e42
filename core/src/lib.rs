#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Garden Defence engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values for systems to
//! react to deterministically. Systems consume event streams, query immutable
//! snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Canonical banner emitted when the experience boots.
pub const WELCOME_BANNER: &str = "Welcome to Garden Defence.";

/// Day or night portion of the clock's cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Daylight phase during which no waves spawn.
    Day,
    /// Night phase during which the wave scheduler is armed.
    Night,
}

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
    /// Requests that a new ant enter the garden at the provided position.
    SpawnAnt {
        /// World position the ant occupies after spawning.
        position: Position,
    },
    /// Requests placement of a plant at the provided position.
    PlacePlant {
        /// World position the plant should occupy.
        position: Position,
    },
    /// Requests that a plant lock onto the provided ant.
    LockTarget {
        /// Plant acquiring the lock.
        plant: PlantId,
        /// Ant the plant intends to track.
        ant: AntId,
    },
    /// Requests that a plant strike its locked target.
    StrikeAnt {
        /// Plant performing the strike.
        plant: PlantId,
        /// Ant the plant expects to hit.
        target: AntId,
    },
    /// Reports that an ant reached the house, as observed by the motion layer.
    ReportAntArrival {
        /// Ant that made contact with the house.
        ant: AntId,
    },
    /// Requests collection of a loot pickup lying in the garden.
    CollectPickup {
        /// Identifier of the pickup being collected.
        pickup: PickupId,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Indicates that the simulation clock advanced.
    TimeAdvanced {
        /// Duration of simulated time that elapsed in the tick.
        dt: Duration,
    },
    /// Announces that the clock crossed into the night phase.
    NightStarted {
        /// Day the night belongs to.
        day: u32,
    },
    /// Announces that the clock crossed into the day phase.
    DayStarted {
        /// Day that just began.
        day: u32,
    },
    /// Confirms that an ant entered the garden.
    AntSpawned {
        /// Identifier assigned to the newly spawned ant.
        ant: AntId,
        /// Position the ant occupies after spawning.
        position: Position,
    },
    /// Reports that an ant was slain by plant damage.
    AntDied {
        /// Identifier of the ant that died.
        ant: AntId,
        /// Position the ant occupied when it died.
        position: Position,
    },
    /// Reports that an ant reached the house and was consumed by the impact.
    AntArrived {
        /// Identifier of the ant that arrived.
        ant: AntId,
        /// Contact damage applied to the house.
        damage: f32,
    },
    /// Reports the house's health after it changed.
    HouseHealthChanged {
        /// Health remaining after the change.
        current: f32,
        /// Maximum health of the house.
        max: f32,
    },
    /// Announces that the house was destroyed and the defense is lost.
    HouseDestroyed,
    /// Confirms that a plant was placed into the garden.
    PlantPlaced {
        /// Identifier assigned to the plant by the world.
        plant: PlantId,
        /// Position the plant occupies.
        position: Position,
    },
    /// Reports that a plant placement request was rejected.
    PlantPlacementRejected {
        /// Position provided in the placement request.
        position: Position,
        /// Specific reason the placement failed.
        reason: PlacementError,
    },
    /// Announces that a plant advanced one growth stage.
    PlantStageChanged {
        /// Plant that grew.
        plant: PlantId,
        /// Stage the plant now occupies.
        stage: u8,
    },
    /// Reports a plant's durability ratio after it changed.
    PlantDurabilityChanged {
        /// Plant whose durability changed.
        plant: PlantId,
        /// Remaining durability expressed as a ratio in `[0, 1]`.
        ratio: f32,
    },
    /// Announces that a plant's durability depleted and it withered.
    PlantDied {
        /// Plant that withered.
        plant: PlantId,
    },
    /// Confirms that a plant locked onto an ant.
    TargetLocked {
        /// Plant holding the lock.
        plant: PlantId,
        /// Ant being tracked.
        ant: AntId,
    },
    /// Reports that a plant's lock was cleared.
    TargetReleased {
        /// Plant whose lock was cleared.
        plant: PlantId,
        /// Specific reason the lock was lost.
        reason: ReleaseReason,
    },
    /// Announces that a plant snapped at its locked target.
    AttackTriggered {
        /// Plant performing the attack.
        plant: PlantId,
        /// Ant being struck.
        target: AntId,
    },
    /// Confirms that a loot pickup dropped into the garden.
    LootDropped {
        /// Identifier assigned to the pickup.
        pickup: PickupId,
        /// Kind of resource the pickup carries.
        kind: ResourceKind,
        /// Position the pickup landed at.
        position: Position,
    },
    /// Confirms that a pickup was collected into the inventory.
    PickupCollected {
        /// Identifier of the collected pickup.
        pickup: PickupId,
        /// Kind of resource that was collected.
        kind: ResourceKind,
        /// Amount added to the inventory.
        amount: u32,
    },
    /// Publishes the summary of a completed night phase.
    NightSummaryPublished {
        /// Aggregated counters for the night that just ended.
        summary: NightSummary,
    },
}

/// Unique identifier assigned to an ant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AntId(u32);

impl AntId {
    /// Creates a new ant identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a plant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlantId(u32);

impl PlantId {
    /// Creates a new plant identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Unique identifier assigned to a loot pickup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PickupId(u32);

impl PickupId {
    /// Creates a new pickup identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Location in the garden expressed in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f32,
    y: f32,
}

impl Position {
    /// Creates a new position from world-unit components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the position.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical component of the position.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }

    /// Returns a copy of the position translated by the provided offsets.
    #[must_use]
    pub fn offset_by(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Computes the squared Euclidean distance to another position.
    #[must_use]
    pub fn distance_squared_to(self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another position.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f32 {
        self.distance_squared_to(other).sqrt()
    }

    /// Computes the unit heading toward another position.
    ///
    /// Returns `None` when the two positions coincide, leaving the caller
    /// without a meaningful direction.
    #[must_use]
    pub fn heading_to(self, other: Position) -> Option<Heading> {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let length = (dx * dx + dy * dy).sqrt();
        if length <= f32::EPSILON {
            return None;
        }
        Some(Heading {
            x: dx / length,
            y: dy / length,
        })
    }
}

/// Unit direction vector consumed by the external motion layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Heading {
    x: f32,
    y: f32,
}

impl Heading {
    /// Horizontal component of the unit direction.
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.x
    }

    /// Vertical component of the unit direction.
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.y
    }
}

/// Outcome of routing an amount through a depletable pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The amount was rejected and no state changed.
    Rejected,
    /// The amount was applied and the pool remains above zero.
    Applied,
    /// The amount drained the pool; the owner died in this call.
    Depleted,
}

/// Depletable health resource shared by ants and the house.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
    alive: bool,
}

impl Health {
    /// Creates a full pool with the provided maximum.
    #[must_use]
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self {
            current: max,
            max,
            alive: max > 0.0,
        }
    }

    /// Health remaining in the pool.
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Maximum capacity of the pool.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.max
    }

    /// Reports whether the owner is still alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Remaining health expressed as a ratio in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }

    /// Routes damage through the pool, clamping at zero.
    ///
    /// Non-positive amounts and damage to a dead owner are rejected without
    /// state change. Depletion is reported exactly once; every later call
    /// is rejected, so death side effects never run twice.
    pub fn damage(&mut self, amount: f32) -> DamageOutcome {
        if !self.alive || amount <= 0.0 {
            return DamageOutcome::Rejected;
        }

        self.current = (self.current - amount).clamp(0.0, self.max);
        if self.current <= 0.0 {
            self.current = 0.0;
            self.alive = false;
            DamageOutcome::Depleted
        } else {
            DamageOutcome::Applied
        }
    }

    /// Restores health, clamping at the maximum.
    ///
    /// Returns `false` when the owner is dead or the amount is non-positive.
    pub fn heal(&mut self, amount: f32) -> bool {
        if !self.alive || amount <= 0.0 {
            return false;
        }

        self.current = (self.current + amount).clamp(0.0, self.max);
        true
    }
}

/// Depletable durability resource used by plants.
///
/// Durability follows [`Health`] semantics and additionally drains
/// continuously over time while the plant is mature. Decay and per-attack
/// spending both funnel through the single damage path so depletion is
/// observed exactly once regardless of which source drained the pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Durability {
    pool: Health,
    decay_per_second: f32,
}

impl Durability {
    /// Creates a full durability pool with the provided decay rate.
    #[must_use]
    pub fn new(max: f32, decay_per_second: f32) -> Self {
        Self {
            pool: Health::new(max),
            decay_per_second: decay_per_second.max(0.0),
        }
    }

    /// Durability remaining in the pool.
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.pool.current()
    }

    /// Maximum capacity of the pool.
    #[must_use]
    pub const fn max(&self) -> f32 {
        self.pool.max()
    }

    /// Reports whether the owning plant is still alive.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.pool.is_alive()
    }

    /// Remaining durability expressed as a ratio in `[0, 1]`.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        self.pool.ratio()
    }

    /// Passive decay rate applied while the owning plant is mature.
    #[must_use]
    pub const fn decay_per_second(&self) -> f32 {
        self.decay_per_second
    }

    /// Applies continuous decay for the elapsed duration.
    pub fn decay(&mut self, dt: Duration) -> DamageOutcome {
        self.pool.damage(self.decay_per_second * dt.as_secs_f32())
    }

    /// Spends durability as the cost of a single attack.
    pub fn spend(&mut self, amount: f32) -> DamageOutcome {
        self.pool.damage(amount)
    }
}

/// Kinds of resources that loot pickups can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Seeds spent to place new plants.
    Seed,
    /// Chitin scraps dropped by slain ants.
    ChitinScrap,
}

impl ResourceKind {
    /// Canonical name of the resource kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Seed => "Seed",
            Self::ChitinScrap => "ChitinScrap",
        }
    }

    /// Resolves a resource kind from its canonical name.
    ///
    /// Unknown names yield `None` so string-keyed callers reject them
    /// without touching inventory state.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Seed" => Some(Self::Seed),
            "ChitinScrap" => Some(Self::ChitinScrap),
            _ => None,
        }
    }
}

/// Probabilistic loot emitted when an ant is slain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LootTable {
    /// Kind of resource dropped.
    pub kind: ResourceKind,
    /// Probability in `[0, 1]` that the roll drops anything at all.
    pub drop_chance: f32,
    /// Smallest number of pickups emitted by a successful roll.
    pub min_drop: u32,
    /// Largest number of pickups emitted by a successful roll.
    pub max_drop: u32,
}

impl LootTable {
    /// Validates the table against the configuration error taxonomy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.drop_chance) {
            return Err(ConfigError::DropChanceOutOfRange {
                value: self.drop_chance,
            });
        }
        if self.min_drop > self.max_drop {
            return Err(ConfigError::InvertedDropRange {
                min_drop: self.min_drop,
                max_drop: self.max_drop,
            });
        }
        Ok(())
    }
}

impl Default for LootTable {
    fn default() -> Self {
        Self {
            kind: ResourceKind::ChitinScrap,
            drop_chance: 1.0,
            min_drop: 1,
            max_drop: 1,
        }
    }
}

/// Stats stamped onto every ant at spawn time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntProfile {
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Damage applied to the house on arrival.
    pub contact_damage: f32,
    /// Maximum health of the ant's pool.
    pub max_health: f32,
    /// Loot rolled when the ant is slain.
    pub loot: LootTable,
}

impl AntProfile {
    /// Validates the profile against the configuration error taxonomy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.speed <= 0.0 {
            return Err(ConfigError::NonPositiveStat { name: "ant speed" });
        }
        if self.contact_damage <= 0.0 {
            return Err(ConfigError::NonPositiveStat {
                name: "ant contact damage",
            });
        }
        if self.max_health <= 0.0 {
            return Err(ConfigError::NonPositiveStat {
                name: "ant max health",
            });
        }
        self.loot.validate()
    }
}

impl Default for AntProfile {
    fn default() -> Self {
        Self {
            speed: 1.0,
            contact_damage: 10.0,
            max_health: 10.0,
            loot: LootTable::default(),
        }
    }
}

/// Stats stamped onto every plant at placement time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantProfile {
    /// Radius within which a mature plant detects and strikes ants.
    pub attack_range: f32,
    /// Minimum time between successive strikes.
    pub attack_cooldown: Duration,
    /// Time a plant spends in each growth stage before advancing.
    pub growth_time: Duration,
    /// Final growth stage at which detection becomes active.
    pub max_stage: u8,
    /// Maximum durability of the plant's pool.
    pub max_durability: f32,
    /// Passive durability drain per second while mature.
    pub decay_per_second: f32,
    /// Durability spent by each strike.
    pub durability_cost_per_attack: f32,
    /// Damage applied to the struck ant.
    pub damage_per_attack: f32,
}

impl PlantProfile {
    /// Validates the profile against the configuration error taxonomy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attack_range <= 0.0 {
            return Err(ConfigError::NonPositiveStat {
                name: "plant attack range",
            });
        }
        if self.max_durability <= 0.0 {
            return Err(ConfigError::NonPositiveStat {
                name: "plant max durability",
            });
        }
        if self.damage_per_attack <= 0.0 {
            return Err(ConfigError::NonPositiveStat {
                name: "plant damage per attack",
            });
        }
        if self.decay_per_second < 0.0 {
            return Err(ConfigError::NegativeStat {
                name: "plant durability decay",
            });
        }
        if self.durability_cost_per_attack < 0.0 {
            return Err(ConfigError::NegativeStat {
                name: "plant durability cost",
            });
        }
        Ok(())
    }
}

impl Default for PlantProfile {
    fn default() -> Self {
        Self {
            attack_range: 1.5,
            attack_cooldown: Duration::from_secs(2),
            growth_time: Duration::from_secs(5),
            max_stage: 1,
            max_durability: 50.0,
            decay_per_second: 0.1,
            durability_cost_per_attack: 5.0,
            damage_per_attack: 5.0,
        }
    }
}

/// Timing parameters that shape the day/night cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockConfig {
    /// Real duration of one in-game day.
    pub day_length: Duration,
    /// Normalized time at which night begins.
    pub night_start: f32,
    /// Normalized time at which day begins.
    pub day_start: f32,
    /// Normalized time the clock shows when the simulation starts.
    pub initial_time_of_day: f32,
}

impl ClockConfig {
    /// Validates the configuration against the error taxonomy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.day_length.is_zero() {
            return Err(ConfigError::NonPositiveDayLength);
        }
        for value in [self.night_start, self.day_start, self.initial_time_of_day] {
            if !(0.0..1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { value });
            }
        }
        Ok(())
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            day_length: Duration::from_secs(720),
            night_start: 0.75,
            day_start: 0.25,
            initial_time_of_day: 0.3,
        }
    }
}

/// Spawn pacing shared by every wave released during one night.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveSettings {
    /// Total number of ants released over the phase.
    pub total_units: u32,
    /// Pause between successive spawns.
    pub spawn_interval: Duration,
    /// Ordered list of positions ants may enter from.
    pub spawn_points: Vec<Position>,
}

impl WaveSettings {
    /// Validates the settings against the configuration error taxonomy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spawn_interval.is_zero() {
            return Err(ConfigError::NonPositiveSpawnInterval);
        }
        if self.total_units > 0 && self.spawn_points.is_empty() {
            return Err(ConfigError::MissingSpawnPoints);
        }
        Ok(())
    }
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            total_units: 0,
            spawn_interval: Duration::from_secs(5),
            spawn_points: Vec::new(),
        }
    }
}

/// Wave settings bound to an inclusive range of days.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveWindow {
    /// First day the window covers.
    pub start_day: u32,
    /// Last day the window covers.
    pub end_day: u32,
    /// Settings applied to nights falling within the window.
    pub settings: WaveSettings,
}

impl WaveWindow {
    /// Reports whether the window covers the provided day.
    #[must_use]
    pub const fn contains(&self, day: u32) -> bool {
        self.start_day <= day && day <= self.end_day
    }
}

/// Ordered collection of wave windows plus a distinguished fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveBook {
    windows: Vec<WaveWindow>,
    fallback: WaveSettings,
}

impl WaveBook {
    /// Creates a wave book after validating every window and the fallback.
    pub fn new(windows: Vec<WaveWindow>, fallback: WaveSettings) -> Result<Self, ConfigError> {
        for window in &windows {
            if window.start_day > window.end_day {
                return Err(ConfigError::InvertedDayRange {
                    start_day: window.start_day,
                    end_day: window.end_day,
                });
            }
            window.settings.validate()?;
        }
        fallback.validate()?;
        Ok(Self { windows, fallback })
    }

    /// Resolves the settings active on the provided day.
    ///
    /// The first window containing the day wins; overlapping windows are
    /// tie-broken by list order. The fallback applies when no window matches.
    #[must_use]
    pub fn settings_for_day(&self, day: u32) -> &WaveSettings {
        self.windows
            .iter()
            .find(|window| window.contains(day))
            .map_or(&self.fallback, |window| &window.settings)
    }

    /// Windows composing the book in resolution order.
    #[must_use]
    pub fn windows(&self) -> &[WaveWindow] {
        &self.windows
    }

    /// Fallback settings applied when no window matches.
    #[must_use]
    pub fn fallback(&self) -> &WaveSettings {
        &self.fallback
    }
}

/// Reasons a plant placement request may be rejected by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlacementError {
    /// The inventory holds no seed to spend on the placement.
    MissingSeeds,
    /// Another living plant already occupies the requested spot.
    Occupied,
}

/// Reasons a plant's target lock may be cleared by the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReleaseReason {
    /// The tracked ant died or was removed from the garden.
    TargetDestroyed,
    /// The tracked ant moved outside the plant's detection radius.
    TargetLeftRange,
    /// The plant itself withered and can no longer track anything.
    PlantDisabled,
}

/// Validation failures surfaced once when configuration is loaded.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The day length was zero, which would halt the clock.
    #[error("day length must be positive")]
    NonPositiveDayLength,
    /// A normalized time value fell outside `[0, 1)`.
    #[error("time-of-day value {value} falls outside [0, 1)")]
    ThresholdOutOfRange {
        /// Offending normalized time value.
        value: f32,
    },
    /// A wave window's day range was inverted.
    #[error("wave window day range {start_day}..={end_day} is inverted")]
    InvertedDayRange {
        /// First day of the window.
        start_day: u32,
        /// Last day of the window.
        end_day: u32,
    },
    /// A wave's spawn interval was zero.
    #[error("spawn interval must be positive")]
    NonPositiveSpawnInterval,
    /// A wave promises units but lists no spawn points.
    #[error("wave settings promise units but list no spawn points")]
    MissingSpawnPoints,
    /// A loot drop chance fell outside `[0, 1]`.
    #[error("drop chance {value} falls outside [0, 1]")]
    DropChanceOutOfRange {
        /// Offending probability value.
        value: f32,
    },
    /// A loot drop count range was inverted.
    #[error("drop count range {min_drop}..={max_drop} is inverted")]
    InvertedDropRange {
        /// Smallest drop count.
        min_drop: u32,
        /// Largest drop count.
        max_drop: u32,
    },
    /// A stat that must be strictly positive was zero or negative.
    #[error("{name} must be positive")]
    NonPositiveStat {
        /// Human-readable name of the offending stat.
        name: &'static str,
    },
    /// A stat that must be non-negative was negative.
    #[error("{name} must not be negative")]
    NegativeStat {
        /// Human-readable name of the offending stat.
        name: &'static str,
    },
}

/// Aggregated counters describing one completed night phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NightSummary {
    /// Day the summarized night belonged to.
    pub day: u32,
    /// Ants released by the wave scheduler.
    pub ants_spawned: u32,
    /// Ants slain by plants.
    pub ants_slain: u32,
    /// Ants that reached the house.
    pub ants_arrived: u32,
    /// Total damage the house absorbed.
    pub house_damage: f32,
    /// Plants that withered during the night.
    pub plants_lost: u32,
    /// Loot pickups dropped by slain ants.
    pub loot_dropped: u32,
}

/// Immutable representation of the clock state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockSnapshot {
    /// Normalized time of day in `[0, 1)`.
    pub time_of_day: f32,
    /// Current day counter, starting at 1.
    pub day: u32,
    /// Phase the clock currently reports.
    pub phase: Phase,
}

/// Immutable representation of the house state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HouseSnapshot {
    /// Position the house occupies.
    pub position: Position,
    /// Health pool of the house.
    pub health: Health,
}

/// Immutable representation of a single ant's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AntSnapshot {
    /// Unique identifier assigned to the ant.
    pub id: AntId,
    /// Position the ant currently occupies.
    pub position: Position,
    /// Unit direction toward the ant's target point, if one remains.
    pub heading: Option<Heading>,
    /// Movement speed in world units per second.
    pub speed: f32,
    /// Health pool of the ant.
    pub health: Health,
}

/// Read-only snapshot describing all ants within the garden.
#[derive(Clone, Debug, Default)]
pub struct AntView {
    snapshots: Vec<AntSnapshot>,
}

impl AntView {
    /// Creates a new ant view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<AntSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured ant snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &AntSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<AntSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single plant's state used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlantSnapshot {
    /// Unique identifier assigned to the plant.
    pub id: PlantId,
    /// Position the plant occupies.
    pub position: Position,
    /// Growth stage the plant currently occupies.
    pub stage: u8,
    /// Indicates whether the plant reached its final stage.
    pub mature: bool,
    /// Detection radius of the plant.
    pub range: f32,
    /// Time remaining until the plant may strike again.
    pub ready_in: Duration,
    /// Ant the plant is currently tracking, if any.
    pub locked_target: Option<AntId>,
    /// Durability pool of the plant.
    pub durability: Durability,
}

/// Read-only snapshot describing all plants within the garden.
#[derive(Clone, Debug, Default)]
pub struct PlantView {
    snapshots: Vec<PlantSnapshot>,
}

impl PlantView {
    /// Creates a new plant view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<PlantSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured plant snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &PlantSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<PlantSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of a single loot pickup used for queries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickupSnapshot {
    /// Unique identifier assigned to the pickup.
    pub id: PickupId,
    /// Kind of resource the pickup carries.
    pub kind: ResourceKind,
    /// Amount added to the inventory when collected.
    pub amount: u32,
    /// Position the pickup lies at.
    pub position: Position,
}

/// Read-only snapshot describing all pickups lying in the garden.
#[derive(Clone, Debug, Default)]
pub struct PickupView {
    snapshots: Vec<PickupSnapshot>,
}

impl PickupView {
    /// Creates a new pickup view from the provided snapshots.
    #[must_use]
    pub fn from_snapshots(mut snapshots: Vec<PickupSnapshot>) -> Self {
        snapshots.sort_by_key(|snapshot| snapshot.id);
        Self { snapshots }
    }

    /// Iterator over the captured pickup snapshots in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &PickupSnapshot> {
        self.snapshots.iter()
    }

    /// Consumes the view, yielding the underlying snapshots.
    #[must_use]
    pub fn into_vec(self) -> Vec<PickupSnapshot> {
        self.snapshots
    }
}

/// Immutable representation of the inventory used for queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InventorySnapshot {
    /// Seeds available for plant placement.
    pub seeds: u32,
    /// Chitin scraps collected from slain ants.
    pub chitin: u32,
}
