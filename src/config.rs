//! Compile-time settings
//!
//! The firmware is not configurable at runtime; pins are assigned in the
//! firmware resource table.

/// Baud rate of both serial channels (host and companion module)
pub const BAUD_RATE: u32 = 115_200;

/// Pause between two samples (ms)
pub const SAMPLE_INTERVAL_MS: u32 = 1000;

/// Width of one frame field in bytes (fields are `i16`, little endian)
pub const FIELD_LEN: usize = core::mem::size_of::<i16>();

/// Bytes per frame: sensor value followed by sequence number
pub const FRAME_LEN: usize = 2 * FIELD_LEN;
