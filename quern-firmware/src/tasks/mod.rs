//! Embassy async tasks
//!
//! Each task owns one asynchronous event source (button edges, settle
//! sample, 10 Hz tick, display refresh, watchdog) and communicates via
//! channels/signals.

pub mod buttons;
pub mod controller;
pub mod display;
pub mod grinder;
pub mod watchdog;

pub use buttons::buttons_task;
pub use controller::controller_task;
pub use display::display_task;
pub use grinder::grinder_task;
pub use watchdog::watchdog_task;
