//! Grind timer: counter, direction, and the 10 Hz tick
//!
//! The timer owns the shared counter (in deciseconds) and the operating
//! direction. Preset buttons load or extend a countdown; the manual
//! button counts up until released. The grinder relay is commanded on
//! exactly while the direction is not [`Direction::Idle`].

use crate::config::GrindDurations;
use crate::input::{ButtonSample, GrindButton};

/// Operating direction of the counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Not running
    #[default]
    Idle,
    /// Manual/continuous mode: run until the button is released
    CountingUp,
    /// Timed preset mode: run until the counter reaches zero
    CountingDown,
}

/// Command for the run/stop side effects of a debounced sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunCommand {
    /// Assert the grinder and make sure tick + display timers run
    Start,
    /// Clear the grinder and stop everything
    Stop,
}

/// Outcome of one 10 Hz tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Timer is idle; nothing moved
    Idle,
    /// Counter moved, grind continues
    Running,
    /// Countdown reached zero; enter the all-off state
    Expired,
}

/// The grind timer
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GrindTimer {
    counter: u16,
    direction: Direction,
    durations: GrindDurations,
}

impl Default for GrindTimer {
    fn default() -> Self {
        Self::new(GrindDurations::default())
    }
}

impl GrindTimer {
    /// Create an idle timer with the given preset durations
    pub const fn new(durations: GrindDurations) -> Self {
        Self {
            counter: 0,
            direction: Direction::Idle,
            durations,
        }
    }

    /// Current counter value in deciseconds
    pub fn counter(&self) -> u16 {
        self.counter
    }

    /// Current operating direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The grinder relay is asserted exactly while not idle
    pub fn grinder_on(&self) -> bool {
        self.direction != Direction::Idle
    }

    /// Return to the all-off state
    pub fn reset(&mut self) {
        self.counter = 0;
        self.direction = Direction::Idle;
    }

    /// Apply a debounced button sample.
    ///
    /// Only the highest-priority asserted button is honored. A sample
    /// with nothing asserted is a manual release when counting up, and
    /// is otherwise ignored (preset countdowns keep running).
    pub fn apply_sample(&mut self, sample: ButtonSample) -> RunCommand {
        match sample.highest_priority() {
            Some(GrindButton::Manual) => {
                self.counter = 0;
                self.direction = Direction::CountingUp;
            }
            Some(GrindButton::FullCarafe) => {
                self.counter = self.counter.saturating_add(self.durations.full_ds);
                self.direction = Direction::CountingDown;
            }
            Some(GrindButton::HalfCarafe) => {
                self.counter = self.counter.saturating_add(self.durations.half_ds);
                self.direction = Direction::CountingDown;
            }
            Some(GrindButton::SingleCup) => {
                self.counter = self.counter.saturating_add(self.durations.single_ds);
                self.direction = Direction::CountingDown;
            }
            None => {
                if self.direction == Direction::CountingUp {
                    self.reset();
                }
            }
        }

        if self.grinder_on() {
            RunCommand::Start
        } else {
            RunCommand::Stop
        }
    }

    /// Advance one 10 Hz tick.
    ///
    /// The counter is never decremented below zero; reaching zero while
    /// counting down expires the grind and returns the timer to idle.
    pub fn tick(&mut self) -> TickOutcome {
        match self.direction {
            Direction::Idle => return TickOutcome::Idle,
            Direction::CountingDown => {
                if self.counter > 0 {
                    self.counter -= 1;
                }
                if self.counter == 0 {
                    self.direction = Direction::Idle;
                    return TickOutcome::Expired;
                }
            }
            Direction::CountingUp => {
                // Continuous mode has no ceiling; saturation only bounds
                // the counter at the type limit instead of wrapping.
                self.counter = self.counter.saturating_add(1);
            }
        }
        TickOutcome::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let t = GrindTimer::default();
        assert_eq!(t.counter(), 0);
        assert_eq!(t.direction(), Direction::Idle);
        assert!(!t.grinder_on());
    }

    #[test]
    fn test_single_cup_preset() {
        let mut t = GrindTimer::default();
        let cmd = t.apply_sample(ButtonSample::pressed(GrindButton::SingleCup));
        assert_eq!(cmd, RunCommand::Start);
        assert_eq!(t.counter(), 30);
        assert_eq!(t.direction(), Direction::CountingDown);
        assert!(t.grinder_on());
    }

    #[test]
    fn test_presets_accumulate() {
        let mut t = GrindTimer::default();
        t.apply_sample(ButtonSample::pressed(GrindButton::FullCarafe));
        t.apply_sample(ButtonSample::pressed(GrindButton::HalfCarafe));
        assert_eq!(t.counter(), 360 + 180);
        assert_eq!(t.direction(), Direction::CountingDown);
    }

    #[test]
    fn test_manual_resets_countdown() {
        let mut t = GrindTimer::default();
        t.apply_sample(ButtonSample::pressed(GrindButton::FullCarafe));
        t.apply_sample(ButtonSample::pressed(GrindButton::Manual));
        assert_eq!(t.counter(), 0);
        assert_eq!(t.direction(), Direction::CountingUp);
    }

    #[test]
    fn test_manual_counts_up_until_release() {
        let mut t = GrindTimer::default();
        t.apply_sample(ButtonSample::pressed(GrindButton::Manual));

        for _ in 0..25 {
            assert_eq!(t.tick(), TickOutcome::Running);
        }
        assert_eq!(t.counter(), 25);

        let cmd = t.apply_sample(ButtonSample::released());
        assert_eq!(cmd, RunCommand::Stop);
        assert_eq!(t.counter(), 0);
        assert_eq!(t.direction(), Direction::Idle);
    }

    #[test]
    fn test_release_ignored_while_counting_down() {
        let mut t = GrindTimer::default();
        t.apply_sample(ButtonSample::pressed(GrindButton::SingleCup));
        let cmd = t.apply_sample(ButtonSample::released());
        assert_eq!(cmd, RunCommand::Start);
        assert_eq!(t.counter(), 30);
        assert_eq!(t.direction(), Direction::CountingDown);
    }

    #[test]
    fn test_countdown_expires_at_zero() {
        let mut t = GrindTimer::default();
        t.apply_sample(ButtonSample::pressed(GrindButton::SingleCup));

        for _ in 0..29 {
            assert_eq!(t.tick(), TickOutcome::Running);
        }
        assert_eq!(t.counter(), 1);
        assert_eq!(t.tick(), TickOutcome::Expired);
        assert_eq!(t.counter(), 0);
        assert_eq!(t.direction(), Direction::Idle);
        assert!(!t.grinder_on());

        // Stays idle afterwards
        assert_eq!(t.tick(), TickOutcome::Idle);
        assert_eq!(t.counter(), 0);
    }

    #[test]
    fn test_counter_never_goes_below_zero() {
        let mut t = GrindTimer::default();
        t.apply_sample(ButtonSample::pressed(GrindButton::SingleCup));
        for _ in 0..100 {
            t.tick();
            assert!(t.counter() <= 30);
        }
        assert_eq!(t.counter(), 0);
    }

    #[test]
    fn test_simultaneous_buttons_honor_priority() {
        let mut t = GrindTimer::default();
        let both = ButtonSample {
            half_carafe: true,
            single_cup: true,
            ..ButtonSample::released()
        };
        t.apply_sample(both);
        assert_eq!(t.counter(), 180);
    }
}
