//! Day/night clock owned by the authoritative world.

use std::time::Duration;

use garden_defence_core::{ClockConfig, ClockSnapshot, Event, Phase};

/// Tracks normalized time of day and raises phase-transition events.
///
/// Threshold crossings fire `NightStarted` and `DayStarted` symmetrically;
/// the day counter increments silently when time wraps past 1.0, which does
/// not necessarily coincide with the night-to-day boundary.
#[derive(Clone, Debug)]
pub(crate) struct Clock {
    day_length: Duration,
    night_start: f32,
    day_start: f32,
    time_of_day: f32,
    day: u32,
    night: bool,
}

impl Clock {
    pub(crate) fn new(config: &ClockConfig) -> Self {
        let time_of_day = config.initial_time_of_day.rem_euclid(1.0);
        let mut clock = Self {
            day_length: config.day_length,
            night_start: config.night_start,
            day_start: config.day_start,
            time_of_day,
            day: 1,
            night: false,
        };
        clock.night = clock.is_night_at(time_of_day);
        clock
    }

    /// Advances the clock by the elapsed duration, emitting transitions.
    ///
    /// A zero day length disables advancement entirely; the misconfiguration
    /// is surfaced by validation, and the clock degrades to a no-op here.
    pub(crate) fn advance(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        if self.day_length.is_zero() {
            return;
        }

        self.time_of_day += dt.as_secs_f32() / self.day_length.as_secs_f32();
        while self.time_of_day >= 1.0 {
            self.time_of_day -= 1.0;
            self.day = self.day.saturating_add(1);
        }

        let night_now = self.is_night_at(self.time_of_day);
        if !self.night && night_now {
            out_events.push(Event::NightStarted { day: self.day });
        } else if self.night && !night_now {
            out_events.push(Event::DayStarted { day: self.day });
        }
        self.night = night_now;
    }

    fn is_night_at(&self, time: f32) -> bool {
        time >= self.night_start || time < self.day_start
    }

    pub(crate) fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot {
            time_of_day: self.time_of_day,
            day: self.day,
            phase: if self.night { Phase::Night } else { Phase::Day },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClockConfig {
        ClockConfig {
            day_length: Duration::from_secs(100),
            night_start: 0.75,
            day_start: 0.25,
            initial_time_of_day: 0.70,
        }
    }

    fn count_events(events: &[Event]) -> (usize, usize) {
        let nights = events
            .iter()
            .filter(|event| matches!(event, Event::NightStarted { .. }))
            .count();
        let days = events
            .iter()
            .filter(|event| matches!(event, Event::DayStarted { .. }))
            .count();
        (nights, days)
    }

    #[test]
    fn night_fires_once_when_threshold_is_crossed() {
        let mut clock = Clock::new(&test_config());
        let mut events = Vec::new();

        for _ in 0..6 {
            clock.advance(Duration::from_secs(1), &mut events);
        }

        let (nights, days) = count_events(&events);
        assert_eq!(nights, 1, "exactly one NightStarted");
        assert_eq!(days, 0);
        assert_eq!(clock.snapshot().phase, Phase::Night);
    }

    #[test]
    fn day_increments_once_and_day_start_fires_once() {
        let mut clock = Clock::new(&test_config());
        let mut events = Vec::new();

        // Through the night threshold, past midnight, and into the next day.
        for _ in 0..61 {
            clock.advance(Duration::from_secs(1), &mut events);
        }

        let (nights, days) = count_events(&events);
        assert_eq!(nights, 1);
        assert_eq!(days, 1, "exactly one DayStarted");
        let snapshot = clock.snapshot();
        assert_eq!(snapshot.day, 2, "day increments exactly once");
        assert_eq!(snapshot.phase, Phase::Day);
    }

    #[test]
    fn midnight_wrap_alone_does_not_fire_day_start() {
        let config = ClockConfig {
            initial_time_of_day: 0.9,
            ..test_config()
        };
        let mut clock = Clock::new(&config);
        assert_eq!(clock.snapshot().phase, Phase::Night);

        let mut events = Vec::new();
        clock.advance(Duration::from_secs(15), &mut events);

        assert_eq!(clock.snapshot().day, 2);
        let (nights, days) = count_events(&events);
        assert_eq!(nights, 0);
        assert_eq!(days, 0, "still night after the wrap");
    }

    #[test]
    fn zero_day_length_disables_advancement() {
        let config = ClockConfig {
            day_length: Duration::ZERO,
            ..test_config()
        };
        let mut clock = Clock::new(&config);
        let mut events = Vec::new();

        clock.advance(Duration::from_secs(500), &mut events);

        assert!(events.is_empty());
        let snapshot = clock.snapshot();
        assert_eq!(snapshot.day, 1);
        assert!((snapshot.time_of_day - 0.70).abs() < f32::EPSILON);
    }

    #[test]
    fn oversized_tick_wraps_multiple_days() {
        let mut clock = Clock::new(&test_config());
        let mut events = Vec::new();

        clock.advance(Duration::from_secs(250), &mut events);

        assert_eq!(clock.snapshot().day, 3);
    }
}
