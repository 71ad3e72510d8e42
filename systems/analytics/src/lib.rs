#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic analytics system that summarizes completed night phases.
//!
//! The system watches the event stream between a `NightStarted` and the
//! following `DayStarted`, accumulates counters, and publishes the finished
//! [`NightSummary`] as an event for adapters to render.

use garden_defence_core::{Event, NightSummary};

/// Pure analytics system that accumulates and publishes night summaries.
#[derive(Debug, Default)]
pub struct Analytics {
    active: Option<NightSummary>,
    last_summary: Option<NightSummary>,
}

impl Analytics {
    /// Creates a new analytics system with no night in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last summary published by the system, if any.
    #[must_use]
    pub fn last_summary(&self) -> Option<&NightSummary> {
        self.last_summary.as_ref()
    }

    /// Consumes world events and publishes summaries at each day break.
    pub fn handle(&mut self, events: &[Event], out: &mut Vec<Event>) {
        for event in events {
            match event {
                Event::NightStarted { day } => {
                    self.active = Some(NightSummary {
                        day: *day,
                        ..NightSummary::default()
                    });
                }
                Event::DayStarted { .. } => {
                    if let Some(summary) = self.active.take() {
                        self.last_summary = Some(summary.clone());
                        out.push(Event::NightSummaryPublished { summary });
                    }
                }
                _ => self.accumulate(event),
            }
        }
    }

    fn accumulate(&mut self, event: &Event) {
        let Some(summary) = self.active.as_mut() else {
            return;
        };
        match event {
            Event::AntSpawned { .. } => summary.ants_spawned += 1,
            Event::AntDied { .. } => summary.ants_slain += 1,
            Event::AntArrived { damage, .. } => {
                summary.ants_arrived += 1;
                summary.house_damage += damage;
            }
            Event::PlantDied { .. } => summary.plants_lost += 1,
            Event::LootDropped { .. } => summary.loot_dropped += 1,
            _ => {}
        }
    }
}
