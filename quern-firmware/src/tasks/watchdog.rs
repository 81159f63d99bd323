//! Watchdog feeder task
//!
//! Arms the hardware watchdog with the short liveness timeout and feeds
//! it on a fixed interval. If any task hangs or monopolizes the
//! executor the feeder starves, the watchdog fires, and the device
//! resets into the all-off state - the only fault-recovery path the
//! firmware has.
//!
//! The RP2040 watchdog cannot be disarmed once started, so there is no
//! disable-around-sleep dance; the continuous feeder stands in for
//! re-arming at every scheduling point.

use defmt::*;
use embassy_time::{Duration, Ticker};

use quern_core::config::{WATCHDOG_FEED_INTERVAL_MS, WATCHDOG_TIMEOUT_MS};
use quern_hal::Watchdog;

use crate::boards::BoardWatchdog;

/// Watchdog feed task
#[embassy_executor::task]
pub async fn watchdog_task(mut wdt: BoardWatchdog) {
    info!("Watchdog armed: {} ms timeout", WATCHDOG_TIMEOUT_MS);
    wdt.start(WATCHDOG_TIMEOUT_MS);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(WATCHDOG_FEED_INTERVAL_MS)));
    loop {
        wdt.feed();
        ticker.next().await;
    }
}
