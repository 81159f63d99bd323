//! Watchdog abstraction
//!
//! The watchdog is the only fault-recovery mechanism in the grinder
//! firmware: if it is not fed within its timeout the device resets into
//! the all-off state.

/// Hardware watchdog timer
pub trait Watchdog {
    /// Arm the watchdog with the given timeout.
    ///
    /// Once armed the watchdog must be fed at least once per timeout
    /// period or the device resets. Some chips (RP2040 included) cannot
    /// disarm the watchdog after this call.
    fn start(&mut self, timeout_ms: u32);

    /// Feed the watchdog, restarting its countdown.
    fn feed(&mut self);
}
