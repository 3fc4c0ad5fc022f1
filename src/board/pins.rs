//! GPIO |     Function     |      Notes
//! -----+------------------+----------------------------------
//!  0   | ADC - Battery    | Voltage divider (2x100K), reads 1/2 actual voltage
//!  1   | ADC - Nav ladder | Resistance ladder: Right/Left/Confirm/Back
//!  2   | ADC - Vol ladder | Resistance ladder: Volume Up/Down
//!  3   | Digital - Power  | Active LOW, internal pullup
//! 20   | Digital - USB    | UART0_RXD, HIGH while external power present

// ----- Buttons (ADC ladders) -----
pub const BTN_NAV_ADC: u8 = 1; // GPIO1 - Right/Left/Confirm/Back
pub const BTN_VOL_ADC: u8 = 2; // GPIO2 - Vol Up/Down

// ----- Power Button -----
pub const BTN_POWER: u8 = 3; // Digital, active LOW

// ----- Battery / charge sensing -----
pub const BATTERY_ADC: u8 = 0; // GPIO0 - voltage divider, 1/2 of battery voltage
pub const USB_DETECT: u8 = 20; // HIGH when USB power is present
