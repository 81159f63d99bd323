//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A debounced sample asked for a grind (manual hold or preset)
    GrindRequested,
    /// A debounced sample showed the manual button released
    ManualReleased,
    /// The countdown reached zero
    CountdownExpired,
    /// The watchdog fired and the device rebooted
    WatchdogReset,
}

impl Event {
    /// Check if this event came from a debounced button sample
    pub fn is_user_event(&self) -> bool {
        matches!(self, Event::GrindRequested | Event::ManualReleased)
    }

    /// Check if this event stops the grinder
    pub fn is_stop_event(&self) -> bool {
        matches!(
            self,
            Event::ManualReleased | Event::CountdownExpired | Event::WatchdogReset
        )
    }
}
