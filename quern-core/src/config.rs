//! Fixed policy constants
//!
//! The grinder has no runtime configuration: every duration and rate is
//! a compile-time policy constant. Times are kept in deciseconds (tenths
//! of a second), the unit the counter and the display work in.

/// Grind timer tick rate (counter moves once per tick)
pub const TICK_HZ: u32 = 10;

/// Grind timer tick period in milliseconds
pub const TICK_PERIOD_MS: u32 = 1000 / TICK_HZ;

/// Display digit-slot refresh rate. One digit is lit per slot, so the
/// full 4-digit cycle repeats at a quarter of this - 100 Hz, comfortably
/// above flicker fusion.
pub const DISPLAY_REFRESH_HZ: u32 = 400;

/// Display digit-slot period in microseconds
pub const DISPLAY_SLOT_PERIOD_US: u64 = 1_000_000 / DISPLAY_REFRESH_HZ as u64;

/// Settle window after a button edge before the inputs are trusted
pub const DEBOUNCE_WINDOW_MS: u32 = 10;

/// Watchdog timeout; an unfed watchdog resets the device into all-off
pub const WATCHDOG_TIMEOUT_MS: u32 = 15;

/// Interval at which the watchdog feeder runs (must be well under the
/// timeout)
pub const WATCHDOG_FEED_INTERVAL_MS: u32 = 5;

/// Single cup grind time in seconds
pub const SINGLE_CUP_GRIND_SECONDS: u16 = 3;

/// Half carafe grind time in seconds
pub const HALF_CARAFE_GRIND_SECONDS: u16 = 18;

/// Full carafe grind time in seconds
pub const FULL_CARAFE_GRIND_SECONDS: u16 = 36;

/// Preset grind durations in deciseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GrindDurations {
    /// Single cup preset
    pub single_ds: u16,
    /// Half carafe preset
    pub half_ds: u16,
    /// Full carafe preset
    pub full_ds: u16,
}

impl Default for GrindDurations {
    fn default() -> Self {
        Self {
            single_ds: SINGLE_CUP_GRIND_SECONDS * 10,
            half_ds: HALF_CARAFE_GRIND_SECONDS * 10,
            full_ds: FULL_CARAFE_GRIND_SECONDS * 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_policy_durations() {
        let d = GrindDurations::default();
        assert_eq!(d.single_ds, 30);
        assert_eq!(d.half_ds, 180);
        assert_eq!(d.full_ds, 360);
    }

    #[test]
    fn test_rates_are_consistent() {
        assert_eq!(TICK_PERIOD_MS, 100);
        assert_eq!(DISPLAY_SLOT_PERIOD_US, 2500);
        assert!(WATCHDOG_FEED_INTERVAL_MS < WATCHDOG_TIMEOUT_MS);
    }
}
