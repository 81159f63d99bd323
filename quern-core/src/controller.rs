//! Grinder controller
//!
//! Single owner of the debouncer, grind timer, power manager, and
//! device state machine. Each asynchronous event source in the firmware
//! (button edge, settle sample, 10 Hz tick) calls exactly one method
//! here; every method runs to completion, so the shared counter and
//! direction are never observed mid-update.

use crate::config::GrindDurations;
use crate::input::{ButtonSample, Debouncer};
use crate::power::{PowerManager, SleepMode, TimerId};
use crate::state::{DeviceState, Event};
use crate::timing::{Direction, GrindTimer, RunCommand, TickOutcome};

/// Controller for the whole device
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GrinderController {
    debouncer: Debouncer,
    timer: GrindTimer,
    power: PowerManager,
    state: DeviceState,
}

impl GrinderController {
    /// Create a controller in the all-off boot state
    pub fn new(durations: GrindDurations) -> Self {
        Self {
            debouncer: Debouncer::new(),
            timer: GrindTimer::new(durations),
            power: PowerManager::new(),
            state: DeviceState::Off,
        }
    }

    /// Handle a raw edge on any button input.
    ///
    /// Arms the settle timer and requests shallow sleep so it can fire.
    /// Returns `false` for edges inside an already-open settle window,
    /// which are ignored without re-arming.
    pub fn on_button_edge(&mut self) -> bool {
        if !self.debouncer.edge() {
            return false;
        }
        self.power.timer_started(TimerId::Debounce);
        true
    }

    /// Handle the settle timer firing with the debounced sample.
    ///
    /// The settle timer disables itself first, then the sample decides
    /// whether the grind starts, extends, or stops. Returns the state
    /// machine event this sample produced, if any.
    pub fn on_settle(&mut self, sample: ButtonSample) -> Option<Event> {
        if !self.debouncer.settle() {
            return None;
        }
        self.power.timer_stopped(TimerId::Debounce);

        let was_running = self.state == DeviceState::Running;
        match self.timer.apply_sample(sample) {
            RunCommand::Start => {
                self.state = self.state.transition(Event::GrindRequested);
                // Idempotent: restarting a live tick timer would discard
                // in-flight digit-cycle state on the display.
                if !self.power.is_running(TimerId::Tick) {
                    self.power.timer_started(TimerId::Tick);
                    self.power.timer_started(TimerId::DisplayRefresh);
                }
                Some(Event::GrindRequested)
            }
            RunCommand::Stop => {
                self.all_off(Event::ManualReleased);
                was_running.then_some(Event::ManualReleased)
            }
        }
    }

    /// Handle one 10 Hz tick of the grind timer.
    ///
    /// On expiry the device enters the all-off state: timers stopped,
    /// grinder cleared, power-down requested.
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();
        if outcome == TickOutcome::Expired {
            self.all_off(Event::CountdownExpired);
        }
        outcome
    }

    fn all_off(&mut self, event: Event) {
        self.state = self.state.transition(event);
        self.power.timer_stopped(TimerId::Tick);
        self.power.timer_stopped(TimerId::DisplayRefresh);
    }

    /// Current counter value in deciseconds
    pub fn counter(&self) -> u16 {
        self.timer.counter()
    }

    /// Current counting direction
    pub fn direction(&self) -> Direction {
        self.timer.direction()
    }

    /// Commanded grinder relay state
    pub fn grinder_on(&self) -> bool {
        self.timer.grinder_on()
    }

    /// Whether the display refresh timer should be running
    pub fn display_active(&self) -> bool {
        self.power.is_running(TimerId::DisplayRefresh)
    }

    /// Whether the grind tick timer should be running
    pub fn tick_active(&self) -> bool {
        self.power.is_running(TimerId::Tick)
    }

    /// Requested CPU sleep depth
    pub fn sleep_mode(&self) -> SleepMode {
        self.power.sleep_mode()
    }

    /// Current device state
    pub fn state(&self) -> DeviceState {
        self.state
    }
}
