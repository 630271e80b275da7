//! Sample-and-send loop
//!
//! Every cycle reads the analog input once, sends the reading together with
//! the current sequence number as one frame, advances the counter and then
//! sleeps for [`SAMPLE_INTERVAL_MS`].
//!
//! # Failure handling
//! - Failed conversion: nothing is sent for this cycle
//! - Failed write: the frame is lost, no retry
//!
//! In both cases the counter still advances and the pause still happens, so a
//! receiver sees a missing sequence number rather than a made-up value.

use embedded_hal_async::delay::DelayNs;

use crate::config::SAMPLE_INTERVAL_MS;
use crate::error::{Error, Result};
use crate::frame::SampleRecord;
use crate::hal::{AnalogInput, FrameSink};
use crate::sequence::SequenceCounter;

pub struct Sampler<A, L> {
    input: A,
    link: L,
    sequence: SequenceCounter,
}

impl<A, L> Sampler<A, L>
where
    A: AnalogInput,
    L: FrameSink,
{
    pub fn new(input: A, link: L) -> Self {
        Self {
            input,
            link,
            sequence: SequenceCounter::new(),
        }
    }

    /// Sequence number the next frame will carry
    pub fn next_sequence(&self) -> i16 {
        self.sequence.current()
    }

    /// One iteration without the pause: acquire, construct, transmit, advance
    pub async fn step(&mut self) -> Result<SampleRecord> {
        let result = self.sample_and_send().await;
        self.sequence.advance();
        result
    }

    /// One full iteration including the pause before the next one
    pub async fn cycle<D: DelayNs>(&mut self, delay: &mut D) -> Result<SampleRecord> {
        let result = self.step().await;
        match &result {
            Ok(record) => log_debug!(
                "Frame sent: value {}, seq {}",
                record.sensor_value,
                record.sequence_number
            ),
            Err(e) => log_warn!("Cycle failed: {:?}", e),
        }
        delay.delay_ms(SAMPLE_INTERVAL_MS).await;
        result
    }

    async fn sample_and_send(&mut self) -> Result<SampleRecord> {
        let raw = self.input.read().await?;
        let sensor_value = i16::try_from(raw).map_err(|_| Error::ReadingOutOfRange(raw))?;
        let record = SampleRecord::new(sensor_value, self.sequence.current());
        self.link.write_frame(&record.to_bytes()).await?;
        Ok(record)
    }
}
