//! Firmware errors
//!
//! Nothing here is fatal. The loop logs the error and moves on to the next
//! iteration.

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Error {
    /// ADC conversion failed
    Adc,
    /// Raw reading does not fit the frame field
    ReadingOutOfRange(u16),
    /// Companion link did not accept the frame
    Link,
    /// Companion reset line could not be driven
    ResetLine,
}
