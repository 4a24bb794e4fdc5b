//! Caller-owned record of one discovered device.

use alloc::string::String;

use platform::config::{CANONICAL_ADDR_LEN, UNKNOWN_DEVICE_NAME};
use platform::DeviceDescriptor;

/// A remote Bluetooth Classic device found by an inquiry.
///
/// Holds copies of the descriptor fields, so it stays valid after the radio
/// service reuses its results buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDevice {
    /// Remote device name, or `"Unknown"` when the stack reported none.
    pub name: String,
    /// Canonical address text, e.g. `00:1a:7d:da:71:13`.
    pub address: heapless::String<CANONICAL_ADDR_LEN>,
}

impl DiscoveredDevice {
    /// Copy the name and address out of a borrowed descriptor.
    pub fn from_descriptor<D: DeviceDescriptor + ?Sized>(descriptor: &D) -> Self {
        let name = match descriptor.name() {
            "" => UNKNOWN_DEVICE_NAME,
            reported => reported,
        };
        Self {
            name: String::from(name),
            address: descriptor.address().to_canonical(),
        }
    }
}
