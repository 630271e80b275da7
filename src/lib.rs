//! Sensor relay core
//!
//! Portable part of the firmware: the sample record and its wire format, the
//! sequence counter, the initializer and the sample-and-send loop. Everything in
//! here is written against small hardware traits so it builds and tests on the
//! host; the embassy tasks and RP2350 bindings live in the firmware binary.

#![cfg_attr(not(test), no_std)]

#[macro_use]
pub mod logging;

pub mod config;
pub mod error;
pub mod frame;
pub mod hal;
pub mod reading;
pub mod sampler;
pub mod sequence;
pub mod startup;

pub use error::{Error, Result};
