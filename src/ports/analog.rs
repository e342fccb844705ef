//! Analog input port - abstraction for reading ADC channels
//!
//! This trait allows the application to read raw converter codes without
//! knowing the specific hardware implementation (SPI ADC, fake, etc.)

use thiserror::Error;

/// Error type for analog input operations
#[derive(Clone, Debug, Error)]
pub enum AnalogError {
    /// Requested channel does not exist on the converter
    #[error("invalid analog channel {channel}, converter has channels 0-{max}")]
    InvalidChannel {
        /// Channel that was requested
        channel: u8,
        /// Highest channel the converter provides
        max: u8,
    },
    /// Bus or driver failure, carrying the underlying system error
    #[error("analog read failed: {0}")]
    Hardware(String),
}

/// Port for reading raw codes from an analog-to-digital converter
///
/// This trait abstracts the converter hardware, allowing the application
/// to be exercised in tests with a fake implementation.
///
/// # Example Implementation
///
/// ```ignore
/// struct Mcp3008 {
///     spi: Spi,
/// }
///
/// impl AnalogPort for Mcp3008 {
///     fn read_channel(&mut self, channel: u8) -> Result<u16, AnalogError> {
///         let tx = request_frame(channel);
///         let mut rx = [0u8; 3];
///         self.spi.transfer(&mut rx, &tx)?;
///         Ok(decode_response(rx))
///     }
/// }
/// ```
pub trait AnalogPort {
    /// Read one raw code from the given channel
    ///
    /// Returns the converter's digital output for a single conversion,
    /// or an error if the channel is out of range or the bus transfer
    /// fails.
    fn read_channel(&mut self, channel: u8) -> Result<u16, AnalogError>;
}
