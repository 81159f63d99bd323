//! Quern Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits consumed by the
//! grinder control logic and drivers. Implementing them for a specific
//! board lets the same application code run on different hardware, and
//! lets the drivers be unit-tested on the host with mock pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (quern-firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  quern-drivers (panel, relay)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  quern-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Board impls (embassy-rp in firmware)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`watchdog::Watchdog`] - Liveness watchdog

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod watchdog;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use watchdog::Watchdog;
