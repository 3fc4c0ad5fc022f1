// Decision logic for the input/power subsystem — board-independent.
//
// Each module reads hardware only through `board::BoardIo`, so all of
// this runs on the host under `cargo test`.

pub mod battery;
pub mod input;
pub mod power;
