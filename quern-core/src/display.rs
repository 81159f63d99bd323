//! Display multiplexer
//!
//! The 4-digit display shares one set of segment lines across four
//! digit-enable lines; only one digit is lit at a time, cycled fast
//! enough to appear simultaneous. Each refresh slot advances the digit
//! index, decomposes one decimal digit of the counter, and produces a
//! [`DigitFrame`] for the panel driver.
//!
//! The counter is snapshotted into a working residual only when the
//! index wraps to 0, so all four digits of one cycle show the same
//! counter value even if it changes mid-cycle.

/// Number of digit positions on the panel
pub const DIGIT_COUNT: usize = 4;

/// Standard 7-segment decode table, bit 0 = segment a .. bit 6 = segment g.
///
/// Values above 9 have no entry and decode to blank, which is what the
/// panel shows for a counter beyond 9999.
const SEGMENT_PATTERNS: [u8; 10] = [
    0b0111111, // 0
    0b0000110, // 1
    0b1011011, // 2
    0b1001111, // 3
    0b1100110, // 4
    0b1101101, // 5
    0b1111101, // 6
    0b0000111, // 7
    0b1111111, // 8
    0b1101111, // 9
];

/// One digit slot: which position to light and the value to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitFrame {
    /// Digit position, 0 = thousands .. 3 = units
    pub position: u8,
    /// Decimal digit value; anything above 9 renders blank
    pub value: u8,
}

impl DigitFrame {
    /// Segment pattern for this frame (bit set = segment lit)
    pub fn segments(&self) -> u8 {
        SEGMENT_PATTERNS
            .get(self.value as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Digit-enable lines for this frame; exactly one is asserted
    pub fn digit_enables(&self) -> [bool; DIGIT_COUNT] {
        let mut enables = [false; DIGIT_COUNT];
        if (self.position as usize) < DIGIT_COUNT {
            enables[self.position as usize] = true;
        }
        enables
    }
}

/// Time-division multiplexer state
///
/// Owned exclusively by the display refresh handler; it reads the
/// counter and never mutates it.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayMux {
    index: u8,
    residual: u16,
}

impl DisplayMux {
    /// Create a mux at digit 0 with an empty residual
    pub const fn new() -> Self {
        Self {
            index: 0,
            residual: 0,
        }
    }

    /// Return to digit 0; called whenever the display restarts
    pub fn reset(&mut self) {
        self.index = 0;
        self.residual = 0;
    }

    /// Advance one refresh slot and decompose the current digit.
    ///
    /// The counter is snapshotted only when the cycle starts over at
    /// position 0; the remaining three digits consume the snapshot.
    pub fn advance(&mut self, counter: u16) -> DigitFrame {
        let position = self.index;
        self.index = (self.index + 1) % DIGIT_COUNT as u8;

        let value = match position {
            0 => {
                self.residual = counter;
                let d = self.residual / 1000;
                self.residual %= 1000;
                d
            }
            1 => {
                let d = self.residual / 100;
                self.residual %= 100;
                d
            }
            2 => {
                let d = self.residual / 10;
                self.residual %= 10;
                d
            }
            _ => self.residual,
        };

        DigitFrame {
            position,
            value: value as u8,
        }
    }
}
