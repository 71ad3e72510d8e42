#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that computes deterministic lock-on commands from snapshots.
//!
//! A mature, living plant without a lock claims the first ant inside its
//! detection radius. "First seen" is resolved as lowest identifier, which is
//! the oldest ant still marching; the plant keeps that lock until the world
//! reports it lost rather than re-evaluating for a closer ant.

use garden_defence_core::{AntId, AntView, Command, PlantId, PlantView, Position};

/// Lock-on system that reuses scratch buffers to avoid repeated allocations.
#[derive(Debug, Default)]
pub struct PlantTargeting {
    plant_workspace: Vec<PlantCandidate>,
    ant_workspace: Vec<AntCandidate>,
}

impl PlantTargeting {
    /// Creates a new targeting system with empty scratch buffers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes lock commands for the provided world snapshot.
    pub fn handle(&mut self, plants: &PlantView, ants: &AntView, out: &mut Vec<Command>) {
        if plants.iter().next().is_none() || ants.iter().next().is_none() {
            return;
        }

        self.prepare_plant_workspace(plants);
        if self.plant_workspace.is_empty() {
            return;
        }

        self.prepare_ant_workspace(ants);
        if self.ant_workspace.is_empty() {
            return;
        }

        for plant in &self.plant_workspace {
            let claimed = self
                .ant_workspace
                .iter()
                .find(|ant| plant.position.distance_squared_to(ant.position) <= plant.range_squared);
            if let Some(ant) = claimed {
                out.push(Command::LockTarget {
                    plant: plant.id,
                    ant: ant.id,
                });
            }
        }
    }

    fn prepare_plant_workspace(&mut self, plants: &PlantView) {
        self.plant_workspace.clear();
        let (lower, _) = plants.iter().size_hint();
        self.plant_workspace.reserve(lower);

        for snapshot in plants.iter() {
            if !snapshot.mature
                || !snapshot.durability.is_alive()
                || snapshot.locked_target.is_some()
            {
                continue;
            }
            self.plant_workspace.push(PlantCandidate {
                id: snapshot.id,
                position: snapshot.position,
                range_squared: snapshot.range * snapshot.range,
            });
        }
    }

    fn prepare_ant_workspace(&mut self, ants: &AntView) {
        self.ant_workspace.clear();
        let (lower, _) = ants.iter().size_hint();
        self.ant_workspace.reserve(lower);

        // The view is already ordered by identifier, so the first in-range
        // candidate below is the lowest-id match.
        for snapshot in ants.iter() {
            if !snapshot.health.is_alive() {
                continue;
            }
            self.ant_workspace.push(AntCandidate {
                id: snapshot.id,
                position: snapshot.position,
            });
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct PlantCandidate {
    id: PlantId,
    position: Position,
    range_squared: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct AntCandidate {
    id: AntId,
    position: Position,
}
