//! State machine definition
//!
//! All relay, display, and power behavior is a function of the current
//! state and an event.

use super::events::Event;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceState {
    /// All timers stopped, grinder off, display dark, power-down sleep
    #[default]
    Off,
    /// Tick and display timers active, grinder asserted
    Running,
}

impl DeviceState {
    /// Check if this state allows the grinder relay to be asserted
    pub fn grinder_allowed(&self) -> bool {
        matches!(self, DeviceState::Running)
    }

    /// Check if the display should be refreshing
    pub fn display_active(&self) -> bool {
        matches!(self, DeviceState::Running)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use DeviceState::*;
        use Event::*;

        match (self, event) {
            (Off, GrindRequested) => Running,
            // Further presets while running accumulate; the state holds
            (Running, GrindRequested) => Running,
            (Running, ManualReleased) => Off,
            (Running, CountdownExpired) => Off,
            // The watchdog reboot lands in Off from anywhere
            (_, WatchdogReset) => Off,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_off_to_running() {
        assert_eq!(
            DeviceState::Off.transition(Event::GrindRequested),
            DeviceState::Running
        );
    }

    #[test]
    fn test_running_stays_on_further_requests() {
        assert_eq!(
            DeviceState::Running.transition(Event::GrindRequested),
            DeviceState::Running
        );
    }

    #[test]
    fn test_stop_events_return_to_off() {
        for event in [Event::ManualReleased, Event::CountdownExpired] {
            assert_eq!(DeviceState::Running.transition(event), DeviceState::Off);
        }
    }

    #[test]
    fn test_watchdog_resets_from_any_state() {
        for state in [DeviceState::Off, DeviceState::Running] {
            assert_eq!(state.transition(Event::WatchdogReset), DeviceState::Off);
        }
    }

    #[test]
    fn test_release_ignored_when_off() {
        assert_eq!(
            DeviceState::Off.transition(Event::ManualReleased),
            DeviceState::Off
        );
    }

    #[test]
    fn test_outputs_follow_state() {
        assert!(DeviceState::Running.grinder_allowed());
        assert!(DeviceState::Running.display_active());
        assert!(!DeviceState::Off.grinder_allowed());
        assert!(!DeviceState::Off.display_active());
    }
}
