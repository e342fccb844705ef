//! Domain layer - pure conversion logic independent of hardware
//!
//! This module contains the entity and service types that turn a raw
//! converter code into human-readable temperature units. Nothing here
//! performs I/O.

pub mod conversion;
pub mod sample;

pub use conversion::{celsius_to_fahrenheit, AdcConfig, SampleConverter, SensorCalibration};
pub use sample::TemperatureSample;
