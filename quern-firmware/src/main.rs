//! Quern - Coffee Grinder Timer Firmware
//!
//! Main firmware binary for RP2040-based grinder timer boards. Four
//! button inputs, one relay output, a multiplexed 4-digit 7-segment
//! display, and a short hardware watchdog as the only fault handler.
//!
//! All timing state is volatile: the device boots (and reboots after a
//! watchdog reset) into the all-off state with the counter at zero.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod boards;
mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Quern firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = boards::init(p);
    info!("Peripherals initialized");

    spawner.must_spawn(tasks::watchdog_task(board.watchdog));
    spawner.must_spawn(tasks::buttons_task(board.buttons));
    spawner.must_spawn(tasks::controller_task());
    spawner.must_spawn(tasks::display_task(board.panel));
    spawner.must_spawn(tasks::grinder_task(board.relay));

    info!("All tasks running; device in all-off state");
}
