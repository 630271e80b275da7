//! embassy-rp drivers behind the portable hardware traits

use embassy_rp::adc::{Adc, Async as AdcAsync, Channel};
use embassy_rp::uart::{Async as UartAsync, UartTx};
use sensor_relay::hal::{AnalogInput, FrameSink};
use sensor_relay::{Error, Result};

/// One ADC channel with its own converter instance
pub struct AdcInput {
    adc: Adc<'static, AdcAsync>,
    channel: Channel<'static>,
}

impl AdcInput {
    pub fn new(adc: Adc<'static, AdcAsync>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for AdcInput {
    async fn read(&mut self) -> Result<u16> {
        self.adc.read(&mut self.channel).await.map_err(|e| {
            defmt::error!("ADC read error: {:?}", e);
            Error::Adc
        })
    }
}

/// Transmit half of the companion UART
pub struct UartLink {
    tx: UartTx<'static, UartAsync>,
}

impl UartLink {
    pub fn new(tx: UartTx<'static, UartAsync>) -> Self {
        Self { tx }
    }
}

impl FrameSink for UartLink {
    async fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.tx.write(frame).await.map_err(|e| {
            defmt::error!("UART write error: {:?}", e);
            Error::Link
        })
    }
}
