//! Button input task
//!
//! Waits for an edge on any of the four button inputs, signals the
//! controller so it can account for the settle timer, sleeps out the
//! settle window, then samples all four pins once and forwards the
//! debounced sample. Edges during the settle sleep are inherently
//! ignored - the window is never re-armed.

use defmt::*;
use embassy_futures::select::select4;
use embassy_time::Timer;

use quern_core::config::DEBOUNCE_WINDOW_MS;
use quern_core::input::ButtonSample;

use crate::boards::Buttons;
use crate::channels::{BUTTON_SAMPLES, EDGE_SEEN};

/// Button edge + debounce task
#[embassy_executor::task]
pub async fn buttons_task(mut buttons: Buttons) {
    info!("Button task started");

    loop {
        select4(
            buttons.manual.wait_for_any_edge(),
            buttons.full_carafe.wait_for_any_edge(),
            buttons.half_carafe.wait_for_any_edge(),
            buttons.single_cup.wait_for_any_edge(),
        )
        .await;

        EDGE_SEEN.signal(());

        // Settle window: let the contacts stop bouncing
        Timer::after_millis(u64::from(DEBOUNCE_WINDOW_MS)).await;

        // Pulled up: pressed reads low
        let sample = ButtonSample {
            manual: buttons.manual.is_low(),
            full_carafe: buttons.full_carafe.is_low(),
            half_carafe: buttons.half_carafe.is_low(),
            single_cup: buttons.single_cup.is_low(),
        };
        trace!("Debounced sample: {:?}", sample);

        BUTTON_SAMPLES.send(sample).await;
    }
}
