//! Adapters - concrete implementations of ports
//!
//! Adapters connect the application to real Raspberry Pi peripherals by
//! implementing the port traits over rppal.
//!
//! # Available Adapters
//!
//! - **mcp3008**: MCP3008 10-bit ADC over the SPI bus
//! - **gpio_pin**: GPIO output pin (BCM numbering)

pub mod gpio_pin;
pub mod mcp3008;

pub use gpio_pin::GpioOutput;
pub use mcp3008::Mcp3008;
