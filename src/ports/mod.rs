//! Ports (interfaces) defining the boundaries of the application
//!
//! Ports are traits that define how the domain interacts with hardware.
//! They allow the application services to remain independent of specific
//! peripheral implementations.
//!
//! # Hexagonal Architecture
//!
//! In hexagonal architecture, ports define the "holes" in the hexagon where
//! adapters plug in:
//!
//! - **AnalogPort**: How we read raw codes from an ADC (SPI, fake)
//! - **DigitalOutputPort**: How we drive an output level (GPIO, fake)

pub mod analog;
pub mod digital;

pub use analog::{AnalogError, AnalogPort};
pub use digital::{DigitalError, DigitalOutputPort, Level};
