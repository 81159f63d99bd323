//! Grinder relay driver
//!
//! The grinder motor is switched by a single relay output. The driver
//! only tracks commanded state and polarity; the timing policy (when to
//! switch) lives entirely in the core controller.

use quern_hal::OutputPin;

/// Relay wiring configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayConfig {
    /// Relay coil is driven active-high (true) or active-low (false)
    pub active_high: bool,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { active_high: true }
    }
}

/// Relay over a single output pin
pub struct Relay<P: OutputPin> {
    pin: P,
    config: RelayConfig,
    on: bool,
}

impl<P: OutputPin> Relay<P> {
    /// Create a relay driver and force the output to the off level
    pub fn new(mut pin: P, config: RelayConfig) -> Self {
        pin.set_state(!config.active_high);
        Self {
            pin,
            config,
            on: false,
        }
    }

    /// Switch the relay
    pub fn set(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on == self.config.active_high);
    }

    /// Commanded relay state
    pub fn is_on(&self) -> bool {
        self.on
    }
}
