//! Headless driver that wires the world and systems into a tick loop.
//!
//! The driver owns the roles the engine leaves external: it advances time,
//! plays the motion layer by reporting house contact, places the opening
//! plants, and sweeps dropped loot into the inventory at each day break.

use std::time::Duration;

use anyhow::Context;
use garden_defence_core::{AntId, Command, Event, NightSummary, PickupId};
use garden_defence_system_analytics::Analytics;
use garden_defence_system_plant_combat::PlantCombat;
use garden_defence_system_plant_targeting::PlantTargeting;
use garden_defence_system_waves::{Config as WaveConfig, Waves};
use garden_defence_world::{self as world, query, World};

use crate::config_file::ScenarioFile;

const WAVE_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Final state of a finished scenario run.
#[derive(Debug)]
pub(crate) struct Outcome {
    /// Day the clock showed when the run stopped.
    pub(crate) final_day: u32,
    /// Whether the house still stood at the end.
    pub(crate) house_stands: bool,
    /// Remaining house health ratio, zero once destroyed.
    pub(crate) house_ratio: f32,
    /// Chitin scraps swept into the inventory.
    pub(crate) chitin_collected: u32,
    /// Summaries of every completed night, in order.
    pub(crate) nights: Vec<NightSummary>,
}

/// Runs the scenario until the house falls or the day limit is reached.
pub(crate) fn run(
    file: &ScenarioFile,
    days: u32,
    tick_ms: u64,
    seed: u64,
) -> anyhow::Result<Outcome> {
    let world_config = file.world_config(seed)?;
    let book = file.wave_book().context("validating wave settings")?;
    let mut world = World::new(world_config).context("validating world configuration")?;
    let mut waves = Waves::new(WaveConfig::new(book, seed ^ WAVE_SEED_SALT));
    let mut targeting = PlantTargeting::new();
    let mut combat = PlantCombat::new();
    let mut analytics = Analytics::new();

    println!("{}", query::welcome_banner(&world));

    let mut events = Vec::new();
    for position in file.plant_positions() {
        world::apply(&mut world, Command::PlacePlant { position }, &mut events);
    }
    for event in &events {
        if let Event::PlantPlacementRejected { position, reason } = event {
            println!(
                "placement at ({:.1}, {:.1}) rejected: {reason:?}",
                position.x(),
                position.y()
            );
        }
    }

    let dt = Duration::from_millis(tick_ms.max(1));
    let mut nights = Vec::new();
    let mut house_stands = true;

    loop {
        let mut events = Vec::new();
        world::apply(&mut world, Command::Tick { dt }, &mut events);

        let mut commands = Vec::new();
        waves.handle(&events, &mut commands);
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }

        let mut commands = Vec::new();
        targeting.handle(
            &query::plant_view(&world),
            &query::ant_view(&world),
            &mut commands,
        );
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }

        let mut commands = Vec::new();
        combat.handle(&query::plant_view(&world), &mut commands);
        for command in commands {
            world::apply(&mut world, command, &mut events);
        }

        report_arrivals(&mut world, &mut events);

        let mut published = Vec::new();
        analytics.handle(&events, &mut published);
        for event in published {
            if let Event::NightSummaryPublished { summary } = event {
                print_summary(&summary);
                nights.push(summary);
            }
        }

        if events
            .iter()
            .any(|event| matches!(event, Event::DayStarted { .. }))
        {
            sweep_pickups(&mut world);
        }

        if events
            .iter()
            .any(|event| matches!(event, Event::HouseDestroyed))
        {
            println!("the house has fallen");
            house_stands = false;
            break;
        }

        if query::clock_view(&world).day > days {
            break;
        }
    }

    let house_ratio = query::house(&world).map_or(0.0, |house| house.health.ratio());
    Ok(Outcome {
        final_day: query::clock_view(&world).day,
        house_stands,
        house_ratio,
        chitin_collected: query::inventory(&world).chitin,
        nights,
    })
}

/// Plays the motion layer: any ant within the arrival radius has arrived.
fn report_arrivals(world: &mut World, out_events: &mut Vec<Event>) {
    let Some(house) = query::house(world) else {
        return;
    };
    let radius = query::arrival_radius(world);
    let arrived: Vec<AntId> = query::ant_view(world)
        .into_vec()
        .into_iter()
        .filter(|ant| ant.position.distance_to(house.position) <= radius)
        .map(|ant| ant.id)
        .collect();
    for ant in arrived {
        world::apply(world, Command::ReportAntArrival { ant }, out_events);
    }
}

/// Sweeps every pickup lying in the garden into the inventory.
fn sweep_pickups(world: &mut World) {
    let pickups: Vec<PickupId> = query::pickup_view(world)
        .into_vec()
        .into_iter()
        .map(|pickup| pickup.id)
        .collect();
    let mut events = Vec::new();
    for pickup in pickups {
        world::apply(world, Command::CollectPickup { pickup }, &mut events);
    }
}

fn print_summary(summary: &NightSummary) {
    println!(
        "night {}: {} spawned, {} slain, {} reached the house ({:.0} damage), {} plants lost, {} loot dropped",
        summary.day,
        summary.ants_spawned,
        summary.ants_slain,
        summary.ants_arrived,
        summary.house_damage,
        summary.plants_lost,
        summary.loot_dropped,
    );
}
