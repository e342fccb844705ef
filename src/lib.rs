//! Raspberry Pi Analog Temperature & Blink Utilities
//!
//! This library backs two small command-line tools: `read-temp`, which reads
//! a TMP36 analog temperature sensor through an MCP3008 SPI analog-to-digital
//! converter, and `blink`, which toggles an LED on a GPIO pin at a fixed
//! interval.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - TemperatureSample entity                                      │
//! │  - SampleConverter service (code -> mV -> °C -> °F)              │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - AnalogPort: read raw codes from an ADC channel                │
//! │  - DigitalOutputPort: drive a digital output level               │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters                                     │
//! │  - Mcp3008: SPI ADC via rppal                                    │
//! │  - GpioOutput: GPIO output pin via rppal                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Benefits
//!
//! - **Testable** - Ports allow faking the ADC and the output pin, so the
//!   conversion pipeline and the blink loop run under `cargo test` without
//!   hardware.
//! - **Substitutable** - Reference voltage and sensor calibration are
//!   explicit config records, not embedded literals; a different sensor or
//!   converter only needs different constants.

/// Domain layer - pure conversion logic
pub mod domain;

/// Ports - traits defining hardware boundaries
pub mod ports;

/// Application services driving the ports
pub mod app;

/// Adapters - concrete rppal-backed implementations
pub mod adapters;

// Re-export key domain types
pub use domain::{AdcConfig, SampleConverter, SensorCalibration, TemperatureSample};

// Re-export key port traits
pub use ports::{AnalogPort, DigitalOutputPort, Level};

// Re-export application services
pub use app::{Blinker, Thermometer};

// Re-export adapters
pub use adapters::{GpioOutput, Mcp3008};
