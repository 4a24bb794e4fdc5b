//! Mock implementations for testing
//!
//! This module provides a mock Bluetooth Classic service for use in unit
//! and integration tests and in the desktop demo.

#![cfg(any(test, feature = "std"))]

use std::string::String;
use std::vec::Vec;

use crate::bluetooth::{ClassicBluetooth, DeviceDescriptor, ScanResults};
use crate::bt_types::BdAddr;

/// Mock remote device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockDevice {
    /// Name reported by the stack (may be empty)
    pub name: String,
    /// Address reported by the stack
    pub address: BdAddr,
}

impl MockDevice {
    /// Create new mock device
    pub fn new(name: &str, address: BdAddr) -> Self {
        Self {
            name: String::from(name),
            address,
        }
    }
}

impl DeviceDescriptor for MockDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> BdAddr {
        self.address
    }
}

/// Mock inquiry results; a `None` slot models a descriptor the stack could not produce.
#[derive(Debug, Clone, Default)]
pub struct MockScanResults {
    slots: Vec<Option<MockDevice>>,
}

impl ScanResults for MockScanResults {
    type Device = MockDevice;

    fn count(&self) -> usize {
        self.slots.len()
    }

    fn device_at(&self, index: usize) -> Option<&MockDevice> {
        self.slots.get(index).and_then(Option::as_ref)
    }
}

/// Mock service errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Controller or host stack refused to start
    StartFailed,
    /// Inquiry produced no results collection
    DiscoveryFailed,
}

/// Mock Bluetooth Classic service
#[derive(Debug, Default)]
pub struct MockClassicBluetooth {
    start_failures_left: usize,
    fail_discovery: bool,
    running: bool,
    planned: Vec<Option<MockDevice>>,
    results: MockScanResults,
    start_calls: usize,
    discover_calls: usize,
    stop_calls: usize,
    last_device_name: Option<String>,
    last_timeout_ms: Option<u32>,
}

impl MockClassicBluetooth {
    /// Create new mock service that starts cleanly and finds nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `start` call fail
    #[must_use]
    pub fn failing_start(mut self) -> Self {
        self.start_failures_left = usize::MAX;
        self
    }

    /// Make the next `times` calls to `start` fail, then succeed
    #[must_use]
    pub fn failing_start_times(mut self, times: usize) -> Self {
        self.start_failures_left = times;
        self
    }

    /// Make every `discover` call fail
    #[must_use]
    pub fn failing_discovery(mut self) -> Self {
        self.fail_discovery = true;
        self
    }

    /// Add a device to the next inquiry results
    #[must_use]
    pub fn with_device(mut self, name: &str, address: BdAddr) -> Self {
        self.planned.push(Some(MockDevice::new(name, address)));
        self
    }

    /// Add an empty slot to the next inquiry results
    #[must_use]
    pub fn with_empty_slot(mut self) -> Self {
        self.planned.push(None);
        self
    }

    /// Replace the devices reported by later inquiries
    pub fn set_devices(&mut self, devices: impl IntoIterator<Item = MockDevice>) {
        self.planned = devices.into_iter().map(Some).collect();
    }

    /// Check if the stack is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get start call count
    pub fn start_calls(&self) -> usize {
        self.start_calls
    }

    /// Get discover call count
    pub fn discover_calls(&self) -> usize {
        self.discover_calls
    }

    /// Get stop call count
    pub fn stop_calls(&self) -> usize {
        self.stop_calls
    }

    /// Name passed to the most recent `start`
    pub fn last_device_name(&self) -> Option<&str> {
        self.last_device_name.as_deref()
    }

    /// Timeout passed to the most recent `discover`
    pub fn last_timeout_ms(&self) -> Option<u32> {
        self.last_timeout_ms
    }
}

impl ClassicBluetooth for MockClassicBluetooth {
    type Error = MockError;
    type Results = MockScanResults;

    fn start(&mut self, device_name: &str) -> Result<(), Self::Error> {
        self.start_calls = self.start_calls.saturating_add(1);
        self.last_device_name = Some(String::from(device_name));
        if self.start_failures_left > 0 {
            // usize::MAX means "always fail".
            if self.start_failures_left != usize::MAX {
                self.start_failures_left = self.start_failures_left.saturating_sub(1);
            }
            return Err(MockError::StartFailed);
        }
        self.running = true;
        Ok(())
    }

    fn discover(&mut self, timeout_ms: u32) -> Result<&Self::Results, Self::Error> {
        self.discover_calls = self.discover_calls.saturating_add(1);
        self.last_timeout_ms = Some(timeout_ms);
        if self.fail_discovery || !self.running {
            return Err(MockError::DiscoveryFailed);
        }
        // The collection is rebuilt in place, as the vendor stack reuses its buffer.
        self.results.slots.clone_from(&self.planned);
        Ok(&self.results)
    }

    fn stop(&mut self) {
        self.stop_calls = self.stop_calls.saturating_add(1);
        self.running = false;
    }
}
