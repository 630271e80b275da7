//! Sample record and its wire format
//!
//! One frame is sent per loop iteration:
//!
//! ```text
//! offset  size  field            encoding
//! 0       2     sensor_value     i16, little endian
//! 2       2     sequence_number  i16, little endian
//! ```
//!
//! Frames are written back to back with no delimiter, length prefix or
//! checksum. A receiver has to know `FRAME_LEN` up front.

use crate::config::{FIELD_LEN, FRAME_LEN};

/// One sample as it goes out on the companion link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct SampleRecord {
    /// Raw ADC conversion result
    pub sensor_value: i16,
    /// Iteration number, wraps on overflow
    pub sequence_number: i16,
}

impl SampleRecord {
    pub const fn new(sensor_value: i16, sequence_number: i16) -> Self {
        Self {
            sensor_value,
            sequence_number,
        }
    }

    /// Serialize into the fixed frame layout
    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        let mut frame = [0u8; FRAME_LEN];
        frame[..FIELD_LEN].copy_from_slice(&self.sensor_value.to_le_bytes());
        frame[FIELD_LEN..].copy_from_slice(&self.sequence_number.to_le_bytes());
        frame
    }

    /// Parse a complete frame
    pub fn from_bytes(frame: &[u8; FRAME_LEN]) -> Self {
        Self {
            sensor_value: i16::from_le_bytes([frame[0], frame[1]]),
            sequence_number: i16::from_le_bytes([frame[2], frame[3]]),
        }
    }
}

/// Receiver side reassembly of frames from a byte stream.
///
/// Bytes may arrive in arbitrary chunks; every `FRAME_LEN` bytes form one
/// record. There is no way to resynchronise mid-stream, so the decoder must be
/// started on a frame boundary (e.g. right after the sender was reset).
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: [u8; FRAME_LEN],
    filled: usize,
}

impl FrameDecoder {
    pub const fn new() -> Self {
        Self {
            buffer: [0; FRAME_LEN],
            filled: 0,
        }
    }

    /// Feed a single byte, returns a record once a frame is complete
    pub fn push(&mut self, byte: u8) -> Option<SampleRecord> {
        self.buffer[self.filled] = byte;
        self.filled += 1;
        if self.filled < FRAME_LEN {
            return None;
        }
        self.filled = 0;
        Some(SampleRecord::from_bytes(&self.buffer))
    }

    /// Feed a chunk of bytes, calling `on_record` for every completed frame
    pub fn feed(&mut self, bytes: &[u8], mut on_record: impl FnMut(SampleRecord)) {
        for &byte in bytes {
            if let Some(record) = self.push(byte) {
                on_record(record);
            }
        }
    }

    /// Number of bytes of an incomplete frame currently held
    pub fn pending(&self) -> usize {
        self.filled
    }

    /// Drop a partially received frame
    pub fn reset(&mut self) {
        self.filled = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_is_value_then_sequence_little_endian() {
        let record = SampleRecord::new(0x1234, 0x0506);
        assert_eq!(record.to_bytes(), [0x34, 0x12, 0x06, 0x05]);
        assert_eq!(record.to_bytes().len(), FRAME_LEN);
    }

    #[test]
    fn three_readings_produce_expected_frames() {
        let frames: Vec<[u8; FRAME_LEN]> = [512i16, 513, 511]
            .iter()
            .enumerate()
            .map(|(seq, &value)| SampleRecord::new(value, seq as i16).to_bytes())
            .collect();

        assert_eq!(frames[0], [0x00, 0x02, 0x00, 0x00]);
        assert_eq!(frames[1], [0x01, 0x02, 0x01, 0x00]);
        assert_eq!(frames[2], [0xFF, 0x01, 0x02, 0x00]);
    }

    #[test]
    fn negative_fields_use_twos_complement() {
        let record = SampleRecord::new(-1, i16::MIN);
        assert_eq!(record.to_bytes(), [0xFF, 0xFF, 0x00, 0x80]);
        assert_eq!(SampleRecord::from_bytes(&record.to_bytes()), record);
    }

    #[test]
    fn decoder_reassembles_frames_split_across_chunks() {
        let mut stream = Vec::new();
        for (seq, value) in [(0, 512), (1, 513), (2, 511)] {
            stream.extend_from_slice(&SampleRecord::new(value, seq).to_bytes());
        }

        let mut decoder = FrameDecoder::new();
        let mut records = Vec::new();
        decoder.feed(&stream[..3], |r| records.push(r));
        assert!(records.is_empty());
        assert_eq!(decoder.pending(), 3);

        decoder.feed(&stream[3..9], |r| records.push(r));
        assert_eq!(records.len(), 2);
        assert_eq!(decoder.pending(), 1);

        decoder.feed(&stream[9..], |r| records.push(r));
        assert_eq!(decoder.pending(), 0);
        assert_eq!(
            records,
            vec![
                SampleRecord::new(512, 0),
                SampleRecord::new(513, 1),
                SampleRecord::new(511, 2),
            ]
        );
    }

    #[test]
    fn decoder_reset_discards_partial_frame() {
        let mut decoder = FrameDecoder::new();
        assert_eq!(decoder.push(0xAA), None);
        decoder.reset();
        assert_eq!(decoder.pending(), 0);

        let frame = SampleRecord::new(7, 8).to_bytes();
        let mut last = None;
        for byte in frame {
            last = decoder.push(byte);
        }
        assert_eq!(last, Some(SampleRecord::new(7, 8)));
    }
}
