//! Diagnostic conversion of raw readings
//!
//! The frame always carries the raw conversion. These helpers turn it into a
//! voltage and into the temperature of the analog probe wired to the input,
//! for log output on the firmware side and for receivers.
//!
//! # Temperature probe
//! ```text
//! V = raw * reference_voltage / full_scale
//! T = (V - 1.375 V) / 0.0225 V/°C
//! ```
//! The result is rounded to the probe resolution of 0.2 °C.

/// Probe output at 0 °C (V)
const PROBE_OFFSET_VOLTS: f32 = 1.375;

/// Probe slope (V/°C)
const PROBE_VOLTS_PER_DEGREE: f32 = 0.0225;

/// Probe resolution (°C)
const PROBE_RESOLUTION: f32 = 0.2;

/// Describes how raw ADC counts map onto volts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdcScale {
    pub reference_volts: f32,
    pub full_scale: f32,
}

impl AdcScale {
    /// RP2350: 3.3 V reference, 12 bit
    pub const RP2350: Self = Self::new(3.3, 4096.0);

    /// 5 V AVR boards: 5 V reference, 10 bit (top code 1023)
    pub const AVR_5V: Self = Self::new(5.0, 1023.0);

    pub const fn new(reference_volts: f32, full_scale: f32) -> Self {
        Self {
            reference_volts,
            full_scale,
        }
    }

    pub fn volts(&self, raw: i16) -> f32 {
        f32::from(raw) * self.reference_volts / self.full_scale
    }

    /// Probe temperature in °C, rounded to the probe resolution
    pub fn temperature_celsius(&self, raw: i16) -> f32 {
        let celsius = (self.volts(raw) - PROBE_OFFSET_VOLTS) / PROBE_VOLTS_PER_DEGREE;
        libm::roundf(celsius / PROBE_RESOLUTION) * PROBE_RESOLUTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-3,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn full_scale_maps_to_reference_voltage() {
        assert_close(AdcScale::AVR_5V.volts(1023), 5.0);
        assert_close(AdcScale::RP2350.volts(2048), 1.65);
        assert_close(AdcScale::RP2350.volts(0), 0.0);
    }

    #[test]
    fn probe_offset_reads_zero_degrees() {
        // 1.375 V on a 5 V / 1023 converter is 281.325 counts
        assert_close(AdcScale::AVR_5V.temperature_celsius(281), 0.0);
    }

    #[test]
    fn temperature_is_rounded_to_probe_resolution() {
        // 512 counts: 2.5024 V -> 50.11 °C -> 50.2 °C
        assert_close(AdcScale::AVR_5V.temperature_celsius(512), 50.2);

        let t = AdcScale::RP2350.temperature_celsius(2500);
        let steps = t / PROBE_RESOLUTION;
        assert_close(steps, libm::roundf(steps));
    }
}
