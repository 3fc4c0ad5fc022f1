//! Raw peripheral access contract for the input/power subsystem.
//!
//! Everything with decision logic in this crate reads hardware through
//! this trait, so the decode, debounce, and battery paths run unchanged
//! on the host during tests.

/// ADC channels the subsystem samples (12-bit, `0..=4095`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdcChannel {
    /// GPIO1 - Right/Left/Confirm/Back ladder.
    NavLadder,
    /// GPIO2 - Vol Up/Down ladder.
    VolLadder,
    /// GPIO0 - battery rail behind a 2:1 divider.
    Battery,
}

/// Digital lines the subsystem reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitalLine {
    /// GPIO20 - HIGH while external power is present.
    UsbDetect,
    /// GPIO3 - power button, active LOW.
    PowerButton,
}

/// Board-side collaborators: raw reads plus the display wake signal.
pub trait BoardIo {
    /// One raw 12-bit sample from `channel`.
    fn read_raw_adc(&mut self, channel: AdcChannel) -> u16;

    /// Level of `line`, normalised so `true` is the asserted state
    /// (power present, button pressed).
    fn read_digital(&mut self, line: DigitalLine) -> bool;

    /// Ask the display side to leave any low-power refresh state.
    /// Invoked on every accepted key press.
    fn wake_display(&mut self);
}
