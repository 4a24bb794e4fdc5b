//! Bluetooth Classic service abstraction
//!
//! The radio stack (controller bring-up, inquiry procedure, RF scanning) lives
//! behind [`ClassicBluetooth`]. Implementations wrap the vendor stack on
//! hardware and [`crate::mocks::MockClassicBluetooth`] in tests.

use crate::bt_types::BdAddr;

/// One remote device reported by an inquiry.
pub trait DeviceDescriptor {
    /// Remote device name; empty when the stack did not resolve one.
    fn name(&self) -> &str;

    /// Remote device address.
    fn address(&self) -> BdAddr;
}

/// Results collection produced by [`ClassicBluetooth::discover`].
///
/// The collection belongs to the service. Callers only ever see it through a
/// shared borrow and must copy out whatever they need before the next call
/// into the service.
pub trait ScanResults {
    /// Descriptor type stored in the collection
    type Device: DeviceDescriptor;

    /// Number of device slots reported by the stack.
    fn count(&self) -> usize;

    /// Descriptor at `index`, or `None` if the slot is empty.
    fn device_at(&self, index: usize) -> Option<&Self::Device>;
}

/// Bluetooth Classic service trait
///
/// The underlying radio is a process-wide singleton: a value implementing
/// this trait stands for the one physical controller, and only one such value
/// may exist per process.
pub trait ClassicBluetooth {
    /// Error type
    type Error: core::fmt::Debug;

    /// Results collection lent out by [`discover`](Self::discover)
    type Results: ScanResults;

    /// Start the controller and host stack under `device_name`.
    fn start(&mut self, device_name: &str) -> Result<(), Self::Error>;

    /// Run a blocking inquiry for up to `timeout_ms` milliseconds.
    ///
    /// The returned collection is borrowed from the service and is reused
    /// by the next call.
    fn discover(&mut self, timeout_ms: u32) -> Result<&Self::Results, Self::Error>;

    /// Stop the stack and release the controller.
    fn stop(&mut self);
}

impl<T: ClassicBluetooth + ?Sized> ClassicBluetooth for &mut T {
    type Error = T::Error;
    type Results = T::Results;

    fn start(&mut self, device_name: &str) -> Result<(), Self::Error> {
        (**self).start(device_name)
    }

    fn discover(&mut self, timeout_ms: u32) -> Result<&Self::Results, Self::Error> {
        (**self).discover(timeout_ms)
    }

    fn stop(&mut self) {
        (**self).stop();
    }
}
