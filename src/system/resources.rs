//! Hardware Resource Management
//!
//! Assigns the board's pins and peripherals to the parts of the firmware and
//! brings up the drivers for them.
//!
//! # Resource Groups
//! - Companion module: reset line and the dedicated UART (TX only is used)
//! - Host UART: debug channel, opened but never written
//! - Sensor: ADC and the analog input pin
//!
//! Every driver is owned by exactly one place, nothing here is shared between
//! tasks.

use assign_resources::assign_resources;
use defmt::info;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::peripherals;
use embassy_rp::uart::{Blocking, Config as UartConfig, Uart, UartTx};
use sensor_relay::config::BAUD_RATE;

use crate::system::adapters::{AdcInput, UartLink};

assign_resources! {
    /// Companion radio module: reset line and dedicated serial link
    companion: CompanionResources {
        reset_pin: PIN_3,
        uart: UART1,
        tx_pin: PIN_4,
        tx_dma: DMA_CH0,
    },
    /// Host / debug serial channel
    host_uart: HostUartResources {
        uart: UART0,
        tx_pin: PIN_0,
        rx_pin: PIN_1,
    },
    /// Analog sensor input (ADC0)
    sensor: SensorResources {
        adc: ADC,
        pin: PIN_26,
    },
}

bind_interrupts!(pub struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

fn uart_config() -> UartConfig {
    let mut config = UartConfig::default();
    config.baudrate = BAUD_RATE;
    config
}

/// Configures the companion reset line and opens the companion link.
///
/// The reset pin is created at logic low so it never glitches high while
/// being configured.
pub fn init_companion(r: CompanionResources) -> (Output<'static>, UartLink) {
    let reset = Output::new(r.reset_pin, Level::Low);
    let tx = UartTx::new(r.uart, r.tx_pin, r.tx_dma, uart_config());
    info!("Companion link opened at {} baud", BAUD_RATE);
    (reset, UartLink::new(tx))
}

/// Opens the host serial channel.
///
/// The returned driver has to be kept alive, dropping it releases the pins.
pub fn init_host_uart(r: HostUartResources) -> Uart<'static, Blocking> {
    let uart = Uart::new_blocking(r.uart, r.tx_pin, r.rx_pin, uart_config());
    info!("Host link opened at {} baud", BAUD_RATE);
    uart
}

/// Brings up the ADC for the sensor pin.
pub fn init_analog_input(r: SensorResources) -> AdcInput {
    let adc = Adc::new(r.adc, Irqs, AdcConfig::default());
    let channel = Channel::new_pin(r.pin, Pull::None);
    AdcInput::new(adc, channel)
}
