//! Grinder relay task
//!
//! Applies relay commands from the controller. The relay is on exactly
//! while the grind direction is not idle; everything else (timing,
//! debounce, expiry) has already been decided upstream.

use defmt::*;

use crate::boards::BoardRelay;
use crate::channels::GRINDER_CMD;

/// Grinder relay control task
#[embassy_executor::task]
pub async fn grinder_task(mut relay: BoardRelay) {
    info!("Grinder task started");

    loop {
        let on = GRINDER_CMD.wait().await;
        if on != relay.is_on() {
            info!("Grinder {}", if on { "on" } else { "off" });
            relay.set(on);
        }
    }
}
