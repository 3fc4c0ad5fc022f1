// Input and power-state board support for the XTEink X4 (ESP32-C3, e-paper)

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod drivers;
