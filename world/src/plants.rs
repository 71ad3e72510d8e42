//! Authoritative plant state management utilities.

use std::collections::BTreeMap;
use std::time::Duration;

use garden_defence_core::{AntId, Durability, PlantId, PlantProfile, Position};

/// State of a single plant stored inside the world.
#[derive(Clone, Debug)]
pub(crate) struct PlantState {
    /// Identifier allocated by the world for the plant.
    pub(crate) id: PlantId,
    /// Position the plant occupies.
    pub(crate) position: Position,
    /// Growth stage the plant currently occupies.
    pub(crate) stage: u8,
    /// Time remaining until the next stage advance.
    pub(crate) growth_remaining: Duration,
    /// Time remaining until the plant may strike again.
    pub(crate) ready_in: Duration,
    /// Durability pool owned exclusively by the plant.
    pub(crate) durability: Durability,
    /// Ant the plant currently tracks, if any.
    pub(crate) locked_target: Option<AntId>,
}

impl PlantState {
    /// Reports whether the plant reached the provided final stage.
    pub(crate) fn is_mature(&self, max_stage: u8) -> bool {
        self.stage >= max_stage
    }
}

/// Registry that stores plants and manages identifier allocation.
#[derive(Debug)]
pub(crate) struct PlantRegistry {
    entries: BTreeMap<PlantId, PlantState>,
    next_id: u32,
}

impl PlantRegistry {
    /// Creates an empty plant registry with a reset identifier counter.
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Inserts a seed-stage plant and returns its allocated identifier.
    pub(crate) fn allocate(&mut self, position: Position, profile: &PlantProfile) -> PlantId {
        let id = PlantId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let _ = self.entries.insert(
            id,
            PlantState {
                id,
                position,
                stage: 0,
                growth_remaining: profile.growth_time,
                ready_in: Duration::ZERO,
                durability: Durability::new(profile.max_durability, profile.decay_per_second),
                locked_target: None,
            },
        );
        id
    }

    pub(crate) fn get_mut(&mut self, id: PlantId) -> Option<&mut PlantState> {
        self.entries.get_mut(&id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &PlantState> {
        self.entries.values()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlantState> {
        self.entries.values_mut()
    }
}
