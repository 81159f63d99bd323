//! Board support: reference pin map and `quern-hal` trait impls
//!
//! Pin assignment for the reference grinder board. Buttons are pulled
//! up and read low when pressed; segment lines sink current
//! (active-low), digit enables source it.
//!
//! | Function        | GPIO        |
//! |-----------------|-------------|
//! | Manual button   | 2           |
//! | Full carafe     | 3           |
//! | Half carafe     | 4           |
//! | Single cup      | 5           |
//! | Grinder relay   | 6           |
//! | Segments a..g   | 7..13       |
//! | Digit enables   | 16..19      |

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::watchdog::Watchdog as RpWatchdog;
use embassy_rp::Peripherals;
use embassy_time::Duration;

use quern_drivers::{PanelConfig, Relay, RelayConfig, SevenSegmentPanel};

/// Output pin wrapper implementing the HAL trait over embassy-rp
pub struct OutPin(Output<'static>);

impl quern_hal::OutputPin for OutPin {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn toggle(&mut self) {
        self.0.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Hardware watchdog wrapper implementing the HAL trait
pub struct BoardWatchdog(RpWatchdog);

impl quern_hal::Watchdog for BoardWatchdog {
    fn start(&mut self, timeout_ms: u32) {
        self.0.start(Duration::from_millis(u64::from(timeout_ms)));
    }

    fn feed(&mut self) {
        self.0.feed();
    }
}

/// The four button inputs, pulled up
pub struct Buttons {
    pub manual: Input<'static>,
    pub full_carafe: Input<'static>,
    pub half_carafe: Input<'static>,
    pub single_cup: Input<'static>,
}

/// Concrete panel type for this board
pub type BoardPanel = SevenSegmentPanel<OutPin, OutPin>;

/// Concrete relay type for this board
pub type BoardRelay = Relay<OutPin>;

/// Everything the tasks need, carved out of the peripherals
pub struct Board {
    pub buttons: Buttons,
    pub relay: BoardRelay,
    pub panel: BoardPanel,
    pub watchdog: BoardWatchdog,
}

/// Construct the board per the reference pin map
pub fn init(p: Peripherals) -> Board {
    let buttons = Buttons {
        manual: Input::new(p.PIN_2, Pull::Up),
        full_carafe: Input::new(p.PIN_3, Pull::Up),
        half_carafe: Input::new(p.PIN_4, Pull::Up),
        single_cup: Input::new(p.PIN_5, Pull::Up),
    };

    let relay = Relay::new(
        OutPin(Output::new(p.PIN_6, Level::Low)),
        RelayConfig::default(),
    );

    let segments = [
        OutPin(Output::new(p.PIN_7, Level::High)),
        OutPin(Output::new(p.PIN_8, Level::High)),
        OutPin(Output::new(p.PIN_9, Level::High)),
        OutPin(Output::new(p.PIN_10, Level::High)),
        OutPin(Output::new(p.PIN_11, Level::High)),
        OutPin(Output::new(p.PIN_12, Level::High)),
        OutPin(Output::new(p.PIN_13, Level::High)),
    ];
    let digits = [
        OutPin(Output::new(p.PIN_16, Level::Low)),
        OutPin(Output::new(p.PIN_17, Level::Low)),
        OutPin(Output::new(p.PIN_18, Level::Low)),
        OutPin(Output::new(p.PIN_19, Level::Low)),
    ];
    let panel = SevenSegmentPanel::new(segments, digits, PanelConfig::default());

    let watchdog = BoardWatchdog(RpWatchdog::new(p.WATCHDOG));

    Board {
        buttons,
        relay,
        panel,
        watchdog,
    }
}
