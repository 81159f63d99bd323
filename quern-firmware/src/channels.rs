//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks, plus the shared grind counter. Exactly one task writes each
//! of these: the button task produces edges and samples, the controller
//! task produces commands and the counter value.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicU16;

use quern_core::input::ButtonSample;

/// Channel capacity for debounced button samples
const SAMPLE_CHANNEL_SIZE: usize = 4;

/// Raw edge seen on any button input (opens the settle window)
pub static EDGE_SEEN: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Debounced button samples, one per settle window
pub static BUTTON_SAMPLES: Channel<CriticalSectionRawMutex, ButtonSample, SAMPLE_CHANNEL_SIZE> =
    Channel::new();

/// Grinder relay command (updated by controller on change)
pub static GRINDER_CMD: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Display refresh start/stop (updated by controller on change)
pub static DISPLAY_ACTIVE: Signal<CriticalSectionRawMutex, bool> = Signal::new();

/// Current counter value in deciseconds.
///
/// Written only by the controller task, read by the display task; the
/// display snapshots it once per 4-digit cycle.
pub static GRIND_COUNTER: AtomicU16 = AtomicU16::new(0);
