//! Hardware seams
//!
//! The loop only needs an analog input and a byte sink towards the companion
//! module. Firmware adapters map the embassy-rp drivers onto these traits and
//! translate driver errors into [`Error`]. The reset line is a plain
//! `embedded_hal::digital::OutputPin` and pacing goes through
//! `embedded_hal_async::delay::DelayNs`, so neither needs a trait of its own.

#![allow(async_fn_in_trait)]

use crate::error::Error;

/// A single analog channel
pub trait AnalogInput {
    /// Perform one conversion and return the raw result
    async fn read(&mut self) -> Result<u16, Error>;
}

/// Outbound link to the companion module
pub trait FrameSink {
    /// Write one complete frame in a single call. No retry, no partial writes.
    async fn write_frame(&mut self, frame: &[u8]) -> Result<(), Error>;
}
