//! Device state machine
//!
//! Defines the authoritative runtime behavior of the grinder.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::DeviceState;
