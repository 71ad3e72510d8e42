#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure system that emits strike commands for ready plants.
//!
//! A strike is proposed for every living, mature plant that holds a lock and
//! whose cooldown countdown reached zero. The world re-validates each strike
//! against current state, so a proposal racing an ant's death in the same
//! tick degrades to a no-op rather than hitting a stale target.

use garden_defence_core::{Command, PlantView};

/// Combat system that queues strike commands for ready plants.
#[derive(Debug, Default)]
pub struct PlantCombat {
    scratch: Vec<Command>,
}

impl PlantCombat {
    /// Creates a new combat system with an empty scratch buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits `Command::StrikeAnt` entries for plants ready to attack.
    pub fn handle(&mut self, plants: &PlantView, out: &mut Vec<Command>) {
        self.scratch.clear();

        for snapshot in plants.iter() {
            if !snapshot.mature || !snapshot.durability.is_alive() || !snapshot.ready_in.is_zero()
            {
                continue;
            }
            if let Some(target) = snapshot.locked_target {
                self.scratch.push(Command::StrikeAnt {
                    plant: snapshot.id,
                    target,
                });
            }
        }

        if self.scratch.is_empty() {
            return;
        }

        out.reserve(self.scratch.len());
        out.append(&mut self.scratch);
    }
}
