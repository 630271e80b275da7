//! Sample-and-send task
//!
//! Reads the analog input once per second and relays each reading with its
//! sequence number to the companion module.
//!
//! # Timing
//! - The pause follows the transmit, so the period is the interval plus the
//!   time for one conversion and one 4 byte write (well below 1 ms at 115200 baud)
//! - The pause blocks this task only, nothing else runs in the firmware

use defmt::debug;
use embassy_rp::gpio::Output;
use embassy_rp::uart::{Blocking, Uart};
use embassy_time::Delay;
use sensor_relay::reading::AdcScale;
use sensor_relay::sampler::Sampler;
use sensor_relay::startup::Companion;

use crate::system::adapters::{AdcInput, UartLink};

/// The loop as wired on this board
pub type BoardSampler = Sampler<AdcInput, Companion<Output<'static>, UartLink>>;

/// Runs the sample-and-send loop, never returns.
///
/// `_host` is only held so the host channel stays open.
#[embassy_executor::task]
pub async fn sample_send(mut sampler: BoardSampler, _host: Uart<'static, Blocking>) {
    let mut delay = Delay;
    loop {
        if let Ok(record) = sampler.cycle(&mut delay).await {
            debug!(
                "Sensor at {} V ({} C)",
                AdcScale::RP2350.volts(record.sensor_value),
                AdcScale::RP2350.temperature_celsius(record.sensor_value)
            );
        }
    }
}
