//! Board-agnostic core logic for the grinder timer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Policy constants (grind durations, tick rates, debounce window)
//! - Button sampling and debounce bookkeeping
//! - The grind timer (counter + direction, 10 Hz tick)
//! - The display multiplexer (digit decomposition, 7-segment decode)
//! - Power management policy (sleep depth, timer clock gating)
//! - The device state machine and the controller tying it all together
//!
//! Everything here is pure state: the firmware feeds events in (button
//! edge, settle sample, tick) and reads commanded outputs back, so the
//! whole device can be exercised host-side as a synchronous event
//! dispatcher.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod power;
pub mod state;
pub mod timing;
