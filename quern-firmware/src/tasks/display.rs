//! Display refresh task
//!
//! Parked while the device is off. When the controller starts the
//! display, runs the 400 Hz digit-slot ticker: read the shared counter,
//! advance the multiplexer, show one digit. The multiplexer state
//! (digit index, residual snapshot) lives here and nowhere else.

use defmt::*;
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use quern_core::config::DISPLAY_SLOT_PERIOD_US;
use quern_core::display::DisplayMux;

use crate::boards::BoardPanel;
use crate::channels::{DISPLAY_ACTIVE, GRIND_COUNTER};

/// Display multiplexing task
#[embassy_executor::task]
pub async fn display_task(mut panel: BoardPanel) {
    info!("Display task started");

    let mut mux = DisplayMux::new();
    let mut ticker = Ticker::every(Duration::from_micros(DISPLAY_SLOT_PERIOD_US));

    loop {
        // Parked until the controller starts the display
        while !DISPLAY_ACTIVE.wait().await {}
        debug!("Display refresh started");

        mux.reset();
        ticker.reset();

        loop {
            if let Some(active) = DISPLAY_ACTIVE.try_take() {
                if !active {
                    break;
                }
            }

            let counter = GRIND_COUNTER.load(Ordering::Relaxed);
            let frame = mux.advance(counter);
            panel.show(&frame);

            ticker.next().await;
        }

        panel.blank();
        debug!("Display refresh stopped");
    }
}
