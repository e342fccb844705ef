//! GPIO output pin adapter
//!
//! This adapter implements the DigitalOutputPort trait over an rppal
//! GPIO pin configured as an output.

use rppal::gpio::{Gpio, OutputPin};

use crate::ports::digital::{DigitalError, DigitalOutputPort, Level};

/// Digital output backed by a Raspberry Pi GPIO pin (BCM numbering)
pub struct GpioOutput {
    pin: OutputPin,
}

impl GpioOutput {
    /// Claim the pin and configure it as an output
    ///
    /// Fails if the GPIO character device cannot be opened (permissions,
    /// missing driver) or the pin is already in use.
    pub fn new(bcm_pin: u8) -> Result<Self, DigitalError> {
        let pin = Gpio::new()
            .map_err(|e| DigitalError::Hardware(e.to_string()))?
            .get(bcm_pin)
            .map_err(|e| DigitalError::Hardware(e.to_string()))?
            .into_output();
        Ok(Self { pin })
    }
}

impl DigitalOutputPort for GpioOutput {
    fn set_level(&mut self, level: Level) -> Result<(), DigitalError> {
        // rppal pin writes are infallible once the pin is claimed
        match level {
            Level::High => self.pin.set_high(),
            Level::Low => self.pin.set_low(),
        }
        Ok(())
    }
}
