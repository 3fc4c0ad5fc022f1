//! XTEink X4 board support: button ladders, charge sensing, power hooks.
//!
//! Maps physical hardware to named subsystems so the decision logic in
//! `drivers/` never sees GPIO numbers or peripheral types. The concrete
//! ESP32-C3 bindings live behind the `esp` feature; host builds only see
//! the [`BoardIo`] contract and the pure decode tables.

pub mod button;
pub mod io;
pub mod pins;

#[cfg(feature = "esp")]
mod hw;

pub use button::{Button, LadderCalibration, NAV_LADDER, VOL_LADDER, decode_ladder};
pub use io::{AdcChannel, BoardIo, DigitalLine};

#[cfg(feature = "esp")]
pub use hw::{Board, X4Io, X4SystemControl};
