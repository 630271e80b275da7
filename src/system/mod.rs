//! Board specific parts of the firmware
pub mod adapters;
pub mod resources;
