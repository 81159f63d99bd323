//! Main controller task
//!
//! Owns the [`GrinderController`] and feeds it the three event sources
//! in run-to-completion order: button edges, debounced samples, and the
//! 10 Hz grind tick. After every event the commanded outputs are
//! published to the relay and display tasks.

use core::future::pending;

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Ticker};
use portable_atomic::Ordering;

use quern_core::config::{GrindDurations, TICK_PERIOD_MS};
use quern_core::controller::GrinderController;
use quern_core::power::SleepMode;

use crate::channels::{BUTTON_SAMPLES, DISPLAY_ACTIVE, EDGE_SEEN, GRINDER_CMD, GRIND_COUNTER};

/// Wait for the next grind tick, or forever while the tick timer is
/// gated off. With every task parked the executor drops into its WFE
/// standby, which is where the power-down request lands in practice.
async fn tick_wait(active: bool, ticker: &mut Ticker) {
    if active {
        ticker.next().await;
    } else {
        pending::<()>().await;
    }
}

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    let mut ctl = GrinderController::new(GrindDurations::default());
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(TICK_PERIOD_MS)));

    let mut grinder_on = false;
    let mut display_active = false;
    let mut sleep_mode = ctl.sleep_mode();

    loop {
        let tick_active = ctl.tick_active();
        let event = select3(
            EDGE_SEEN.wait(),
            BUTTON_SAMPLES.receive(),
            tick_wait(tick_active, &mut ticker),
        )
        .await;

        match event {
            Either3::First(()) => {
                if ctl.on_button_edge() {
                    trace!("Settle window armed");
                }
            }
            Either3::Second(sample) => {
                if let Some(event) = ctl.on_settle(sample) {
                    debug!("Sample event: {:?}", event);
                }
                // A fresh episode ticks a full period from now
                if !tick_active && ctl.tick_active() {
                    ticker.reset();
                }
            }
            Either3::Third(()) => {
                ctl.on_tick();
            }
        }

        publish(&ctl, &mut grinder_on, &mut display_active, &mut sleep_mode);
    }
}

/// Push commanded outputs to the peripheral tasks, signaling only on
/// change.
fn publish(
    ctl: &GrinderController,
    grinder_on: &mut bool,
    display_active: &mut bool,
    sleep_mode: &mut SleepMode,
) {
    GRIND_COUNTER.store(ctl.counter(), Ordering::Relaxed);

    if ctl.grinder_on() != *grinder_on {
        *grinder_on = ctl.grinder_on();
        GRINDER_CMD.signal(*grinder_on);
    }

    if ctl.display_active() != *display_active {
        *display_active = ctl.display_active();
        DISPLAY_ACTIVE.signal(*display_active);
    }

    if ctl.sleep_mode() != *sleep_mode {
        *sleep_mode = ctl.sleep_mode();
        debug!("Sleep mode: {:?}", *sleep_mode);
    }
}
