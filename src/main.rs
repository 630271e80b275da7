//! Sensor relay firmware entry point
//!
//! Brings up the board once (companion reset, both serial channels, ADC) and
//! spawns the sample-and-send task, which runs forever.

#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

/// Board resources and driver adapters
#[cfg(target_os = "none")]
mod system;
/// Task implementations
#[cfg(target_os = "none")]
mod task;

#[cfg(target_os = "none")]
use {defmt_rtt as _, panic_probe as _};

/// Firmware image type for bootloader
#[cfg(target_os = "none")]
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: embassy_rp::block::ImageDef = embassy_rp::block::ImageDef::secure_exe();

/// Firmware entry point
#[cfg(target_os = "none")]
#[embassy_executor::main]
async fn main(spawner: embassy_executor::Spawner) {
    use defmt::info;
    use sensor_relay::sampler::Sampler;
    use sensor_relay::startup::Companion;
    use system::resources::{
        self, AssignedResources, CompanionResources, HostUartResources, SensorResources,
    };

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // Split the peripherals into the groups owned by each part of the firmware
    let r = split_resources!(p);

    // Companion reset goes low before the link is used, so no frame can reach
    // the module ahead of it
    let (reset, link) = resources::init_companion(r.companion);
    let companion = Companion::hold_in_reset(reset, link);

    // Opened for debugging, nothing is written to it
    let host = resources::init_host_uart(r.host_uart);

    let input = resources::init_analog_input(r.sensor);
    info!("Initialization complete, starting sample loop");

    spawner
        .spawn(task::sample_send::sample_send(Sampler::new(input, companion), host))
        .unwrap();
}

/// The firmware only targets the RP2350; the host build exists to run the
/// library unit tests.
#[cfg(not(target_os = "none"))]
fn main() {}
