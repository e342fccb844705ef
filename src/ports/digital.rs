//! Digital output port - abstraction for driving an output level
//!
//! This trait allows the blink loop to toggle an output without knowing
//! the specific hardware implementation (GPIO pin, fake, etc.)

use thiserror::Error;

/// Logic level on a digital output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Logic low
    Low,
    /// Logic high
    High,
}

impl Level {
    /// The opposite level
    pub fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Error type for digital output operations
#[derive(Clone, Debug, Error)]
pub enum DigitalError {
    /// Driver failure, carrying the underlying system error
    #[error("digital output failed: {0}")]
    Hardware(String),
}

/// Port for driving a single digital output
pub trait DigitalOutputPort {
    /// Set the output to the given level
    fn set_level(&mut self, level: Level) -> Result<(), DigitalError>;
}
