//! Application services driving the ports
//!
//! These types contain the per-utility control flow: one conversion read
//! for the temperature tool, the toggle loop for the blink tool. They
//! only see port traits, so both run under test with fakes.

pub mod blinker;
pub mod thermometer;

pub use blinker::Blinker;
pub use thermometer::Thermometer;
