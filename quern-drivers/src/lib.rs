//! Hardware-facing drivers for the grinder timer
//!
//! Drivers are written against the `quern-hal` pin traits so they can
//! run on any board implementation and be unit-tested on the host with
//! mock pins.

#![no_std]
#![deny(unsafe_code)]

pub mod relay;
pub mod sevenseg;

pub use relay::{Relay, RelayConfig};
pub use sevenseg::{PanelConfig, SevenSegmentPanel};
