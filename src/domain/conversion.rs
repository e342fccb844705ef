//! Sample conversion domain service
//!
//! This module provides the pure pipeline converting a raw ADC code to
//! temperature values: code -> millivolts -> Celsius -> Fahrenheit.
//! Every operation is total and side-effect free.

use crate::domain::TemperatureSample;

/// Analog-to-digital converter parameters
///
/// Maps a raw converter code to millivolts using a linear formula:
/// `millivolts = code * (reference_mv / resolution_steps)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdcConfig {
    /// Full-scale reference voltage in millivolts
    pub reference_mv: f64,
    /// Step count across the full scale (1024 for a 10-bit converter)
    pub resolution_steps: u32,
}

impl AdcConfig {
    /// MCP3008 powered from the Raspberry Pi +3.3V rail
    ///
    /// Per equation 4-2 of the MCP3008 datasheet, one step of the digital
    /// output corresponds to Vref / 1024. With Vref tied to the 3.3V pin
    /// that is 3300mV across 1024 steps.
    pub const MCP3008_3V3: Self = Self {
        reference_mv: 3300.0,
        resolution_steps: 1024,
    };

    /// Create a config for a different converter or reference voltage
    pub const fn new(reference_mv: f64, resolution_steps: u32) -> Self {
        Self {
            reference_mv,
            resolution_steps,
        }
    }

    /// Convert a raw converter code to millivolts
    ///
    /// Codes outside the converter's range are not rejected; they
    /// extrapolate linearly. A real converter can only produce in-range
    /// codes, so a guard here would be unreachable in production.
    #[inline]
    pub fn code_to_millivolts(&self, code: u16) -> f64 {
        code as f64 * (self.reference_mv / self.resolution_steps as f64)
    }
}

/// Linear analog temperature sensor calibration
///
/// Converts the sensor's output voltage to Celsius:
/// `celsius = (millivolts - offset_mv) / mv_per_degree`
///
/// The offset and slope are sensor-specific calibration parameters, not
/// universal constants. A different sensor model substitutes its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SensorCalibration {
    /// Sensor output in millivolts at 0°C
    pub offset_mv: f64,
    /// Output slope in millivolts per degree Celsius
    pub mv_per_degree: f64,
}

impl SensorCalibration {
    /// TMP36 calibration: 500mV at 0°C, 10mV per degree
    pub const TMP36: Self = Self {
        offset_mv: 500.0,
        mv_per_degree: 10.0,
    };

    /// Create a calibration for a different sensor
    pub const fn new(offset_mv: f64, mv_per_degree: f64) -> Self {
        Self {
            offset_mv,
            mv_per_degree,
        }
    }

    /// Convert a sensor voltage in millivolts to Celsius
    #[inline]
    pub fn millivolts_to_celsius(&self, millivolts: f64) -> f64 {
        (millivolts - self.offset_mv) / self.mv_per_degree
    }
}

/// Convert Celsius to Fahrenheit
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Full conversion pipeline from raw code to every temperature stage
///
/// Composes one converter config and one sensor calibration, so the two
/// sets of constants travel together and can be swapped as a unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleConverter {
    /// Converter parameters (reference voltage, resolution)
    pub adc: AdcConfig,
    /// Sensor calibration (offset, slope)
    pub sensor: SensorCalibration,
}

impl SampleConverter {
    /// TMP36 wired to an MCP3008 on the 3.3V rail
    pub const TMP36_ON_MCP3008: Self = Self {
        adc: AdcConfig::MCP3008_3V3,
        sensor: SensorCalibration::TMP36,
    };

    /// Create a converter from custom parameters
    pub const fn new(adc: AdcConfig, sensor: SensorCalibration) -> Self {
        Self { adc, sensor }
    }

    /// Run the full pipeline on one raw code
    pub fn convert(&self, code: u16) -> TemperatureSample {
        let millivolts = self.adc.code_to_millivolts(code);
        let celsius = self.sensor.millivolts_to_celsius(millivolts);
        let fahrenheit = celsius_to_fahrenheit(celsius);
        TemperatureSample {
            raw: code,
            millivolts,
            celsius,
            fahrenheit,
        }
    }
}
