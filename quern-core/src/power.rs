//! Power management policy
//!
//! Tracks which of the three periodic timers is clocked and derives the
//! requested CPU sleep depth: shallow idle sleep while anything needs to
//! fire (timers keep running, CPU halts), full power-down when the
//! device is completely quiet. Each timer is clock-gated independently
//! when stopped.

/// CPU sleep depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepMode {
    /// CPU halts, peripheral timers keep running
    Idle,
    /// Everything off; only a button edge wakes the device
    PowerDown,
}

/// The three independently gated periodic timers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerId {
    /// Debounce settle timer (~10 ms one-shot)
    Debounce,
    /// Grind timer tick (10 Hz)
    Tick,
    /// Display refresh (400 Hz)
    DisplayRefresh,
}

/// Tracks timer clock gating and the requested sleep depth
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerManager {
    debounce: bool,
    tick: bool,
    display: bool,
}

impl PowerManager {
    /// Create a manager with all timers gated off
    pub const fn new() -> Self {
        Self {
            debounce: false,
            tick: false,
            display: false,
        }
    }

    /// Un-gate a timer's clock
    pub fn timer_started(&mut self, id: TimerId) {
        *self.slot(id) = true;
    }

    /// Gate a timer's clock
    pub fn timer_stopped(&mut self, id: TimerId) {
        *self.slot(id) = false;
    }

    /// Check if a timer is currently clocked
    pub fn is_running(&self, id: TimerId) -> bool {
        match id {
            TimerId::Debounce => self.debounce,
            TimerId::Tick => self.tick,
            TimerId::DisplayRefresh => self.display,
        }
    }

    /// Check if any timer is clocked
    pub fn any_running(&self) -> bool {
        self.debounce || self.tick || self.display
    }

    /// The sleep depth the main loop should enter.
    ///
    /// Power-down is only safe when nothing needs a timer to fire; a
    /// button edge is then the only wake source.
    pub fn sleep_mode(&self) -> SleepMode {
        if self.any_running() {
            SleepMode::Idle
        } else {
            SleepMode::PowerDown
        }
    }

    fn slot(&mut self, id: TimerId) -> &mut bool {
        match id {
            TimerId::Debounce => &mut self.debounce,
            TimerId::Tick => &mut self.tick,
            TimerId::DisplayRefresh => &mut self.display,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boots_in_power_down() {
        let p = PowerManager::new();
        assert!(!p.any_running());
        assert_eq!(p.sleep_mode(), SleepMode::PowerDown);
    }

    #[test]
    fn test_any_timer_requests_idle_sleep() {
        for id in [TimerId::Debounce, TimerId::Tick, TimerId::DisplayRefresh] {
            let mut p = PowerManager::new();
            p.timer_started(id);
            assert!(p.is_running(id));
            assert_eq!(p.sleep_mode(), SleepMode::Idle);

            p.timer_stopped(id);
            assert_eq!(p.sleep_mode(), SleepMode::PowerDown);
        }
    }

    #[test]
    fn test_timers_gated_independently() {
        let mut p = PowerManager::new();
        p.timer_started(TimerId::Tick);
        p.timer_started(TimerId::DisplayRefresh);

        p.timer_stopped(TimerId::Tick);
        assert!(!p.is_running(TimerId::Tick));
        assert!(p.is_running(TimerId::DisplayRefresh));
        assert_eq!(p.sleep_mode(), SleepMode::Idle);
    }
}
