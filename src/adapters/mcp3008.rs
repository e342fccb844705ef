//! MCP3008 SPI analog-to-digital converter adapter
//!
//! This adapter implements the AnalogPort trait for the MCP3008 10-bit
//! converter on the Raspberry Pi SPI bus, speaking the single-ended
//! protocol from the datasheet directly through the spidev interface.

use log::debug;
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};

use crate::ports::analog::{AnalogError, AnalogPort};

/// Highest single-ended channel on the MCP3008
pub const MAX_CHANNEL: u8 = 7;

/// SPI clock rate. The datasheet caps the MCP3008 at 1.35MHz on a 2.7V
/// supply; stay at that conservative rate on the 3.3V rail.
const CLOCK_HZ: u32 = 1_350_000;

/// MCP3008 converter on the Raspberry Pi SPI bus
///
/// Opening the device is the peripheral setup step: it fails if the SPI
/// kernel module is not loaded or the device node is not accessible, and
/// no read may be attempted in that case.
pub struct Mcp3008 {
    spi: Spi,
}

impl Mcp3008 {
    /// Open the SPI bus and prepare the converter
    pub fn new(bus: Bus, slave_select: SlaveSelect) -> Result<Self, AnalogError> {
        let spi = Spi::new(bus, slave_select, CLOCK_HZ, Mode::Mode0)
            .map_err(|e| AnalogError::Hardware(e.to_string()))?;
        Ok(Self { spi })
    }
}

/// Request frame for a single-ended conversion: a start bit alone in the
/// first byte, then SGL/DIFF=1 and the channel number in the top nibble
/// of the second. The third byte just clocks the response out.
fn request_frame(channel: u8) -> [u8; 3] {
    [0x01, 0x80 | (channel << 4), 0x00]
}

/// The 10-bit code arrives in the low two bits of the second response
/// byte and all of the third.
fn decode_response(rx: [u8; 3]) -> u16 {
    (u16::from(rx[1] & 0x03) << 8) | u16::from(rx[2])
}

impl AnalogPort for Mcp3008 {
    fn read_channel(&mut self, channel: u8) -> Result<u16, AnalogError> {
        if channel > MAX_CHANNEL {
            return Err(AnalogError::InvalidChannel {
                channel,
                max: MAX_CHANNEL,
            });
        }

        let tx = request_frame(channel);
        let mut rx = [0u8; 3];
        self.spi
            .transfer(&mut rx, &tx)
            .map_err(|e| AnalogError::Hardware(e.to_string()))?;

        let code = decode_response(rx);
        debug!("mcp3008 channel {channel}: code {code}");
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_frame() {
        assert_eq!(request_frame(0), [0x01, 0x80, 0x00]);
        assert_eq!(request_frame(5), [0x01, 0xD0, 0x00]);
        assert_eq!(request_frame(7), [0x01, 0xF0, 0x00]);
    }

    #[test]
    fn test_decode_masks_to_ten_bits() {
        // Bits above the 10-bit code in the second byte are undefined
        // on the wire and must be ignored
        assert_eq!(decode_response([0xFF, 0xFF, 0xFF]), 1023);
        assert_eq!(decode_response([0x00, 0x01, 0x65]), 357);
        assert_eq!(decode_response([0x00, 0x00, 0x00]), 0);
    }
}
