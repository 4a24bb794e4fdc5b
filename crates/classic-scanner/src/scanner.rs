//! Blocking Bluetooth Classic scanner.
//!
//! Wraps a [`ClassicBluetooth`] service with a begin / scan / end lifecycle.
//! Dropping the scanner runs [`ClassicScanner::end`], so the radio is
//! released on every exit path.
//!
//! # Single radio
//!
//! The scanner owns (or exclusively borrows) its radio value, so one radio
//! value can never back two live scanners. Creating two radio values for the
//! same physical controller is not supported: the scanner's state only tracks
//! its own view of the controller.

use alloc::vec::Vec;

use platform::config::DEFAULT_DEVICE_NAME;
use platform::{ClassicBluetooth, ScanDuration, ScanResults};

use crate::device::DiscoveredDevice;
use crate::error::ScannerError;
use crate::state::ScannerState;

/// Bluetooth Classic inquiry scanner over a radio service `B`.
pub struct ClassicScanner<B: ClassicBluetooth> {
    radio: B,
    state: ScannerState,
}

impl<B: ClassicBluetooth> ClassicScanner<B> {
    /// Wrap `radio`. The radio is not started until [`begin`](Self::begin).
    pub fn new(radio: B) -> Self {
        Self {
            radio,
            state: ScannerState::Uninitialized,
        }
    }

    /// Start Bluetooth Classic under `device_name`.
    ///
    /// Returns `true` on success or if already started.
    pub fn begin(&mut self, device_name: &str) -> bool {
        self.try_begin(device_name).is_ok()
    }

    /// [`begin`](Self::begin) with the default local name, `ESP32_Scanner`.
    pub fn begin_default(&mut self) -> bool {
        self.begin(DEFAULT_DEVICE_NAME)
    }

    /// Start Bluetooth Classic under `device_name`, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns [`ScannerError::Start`] carrying the service error when the
    /// controller or host stack does not come up. The scanner stays
    /// uninitialized and `begin` may be retried.
    pub fn try_begin(&mut self, device_name: &str) -> Result<(), ScannerError<B::Error>> {
        if self.state.is_initialized() {
            info!("Bluetooth already initialized.");
            return Ok(());
        }

        if let Err(err) = self.radio.start(device_name) {
            error!("Failed to initialize Bluetooth Classic module (controller or host stack failed).");
            self.state = ScannerState::Uninitialized;
            return Err(ScannerError::Start(err));
        }

        self.state = ScannerState::Initialized;
        info!("Bluetooth Classic initialized successfully.");
        info!("Local device name: {}", device_name);
        Ok(())
    }

    /// Run a blocking inquiry for `scan_time` and return what was found.
    ///
    /// Blocks the calling thread for up to `scan_time`. Not initialized,
    /// discovery failure and radio silence all yield an empty list; use
    /// [`try_scan_classic_devices`](Self::try_scan_classic_devices) to tell
    /// them apart.
    pub fn scan_classic_devices(&mut self, scan_time: ScanDuration) -> Vec<DiscoveredDevice> {
        self.try_scan_classic_devices(scan_time).unwrap_or_default()
    }

    /// Run a blocking inquiry for `scan_time`, reporting why it failed.
    ///
    /// Devices are returned in the order the stack reported them, without
    /// sorting or de-duplication. Empty result slots are skipped.
    ///
    /// # Errors
    ///
    /// - [`ScannerError::NotInitialized`] if called before a successful
    ///   `begin`; the radio is not touched.
    /// - [`ScannerError::Discovery`] if the service produced no results.
    pub fn try_scan_classic_devices(
        &mut self,
        scan_time: ScanDuration,
    ) -> Result<Vec<DiscoveredDevice>, ScannerError<B::Error>> {
        if !self.state.is_initialized() {
            error!("Bluetooth module not initialized. Call begin() first.");
            return Err(ScannerError::NotInitialized);
        }

        info!(
            "Starting Bluetooth Classic scan for {} seconds...",
            scan_time.as_secs()
        );

        let devices = match self.radio.discover(scan_time.as_millis()) {
            Ok(results) => {
                info!("Scan complete. Found {} device(s).", results.count());
                collect_devices(results)
            }
            Err(err) => {
                error!("Scan failed: discovery returned no results.");
                return Err(ScannerError::Discovery(err));
            }
        };

        info!("Bluetooth Classic scan finished.");
        Ok(devices)
    }

    /// Stop Bluetooth Classic and release the controller. No-op if not started.
    pub fn end(&mut self) {
        if self.state.is_initialized() {
            self.radio.stop();
            self.state = ScannerState::Uninitialized;
            info!("Bluetooth Classic de-initialized.");
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> ScannerState {
        self.state
    }

    /// Returns `true` between a successful `begin` and the next `end`.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.is_initialized()
    }

    /// Borrow the underlying radio service.
    #[must_use]
    pub fn radio(&self) -> &B {
        &self.radio
    }
}

impl<B: ClassicBluetooth> Drop for ClassicScanner<B> {
    fn drop(&mut self) {
        self.end();
    }
}

/// Copy every present descriptor out of the service-owned collection.
fn collect_devices<R: ScanResults>(results: &R) -> Vec<DiscoveredDevice> {
    // count() is not trusted for allocation: slots past the real storage read as None.
    let mut devices = Vec::new();
    for index in 0..results.count() {
        match results.device_at(index) {
            Some(descriptor) => devices.push(DiscoveredDevice::from_descriptor(descriptor)),
            None => warn!("Skipping empty result slot {}.", index),
        }
    }
    devices
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::indexing_slicing)] // Tests use expect() and indexing for readable assertions
mod tests {
    use super::*;
    use platform::mocks::{MockClassicBluetooth, MockError};
    use platform::BdAddr;

    const PHONE: BdAddr = BdAddr::new([0x00, 0x1A, 0x7D, 0xDA, 0x71, 0x13]);
    const SPEAKER: BdAddr = BdAddr::new([0xF4, 0x5C, 0x89, 0xAB, 0x01, 0x22]);

    #[test]
    fn test_new_scanner_is_uninitialized() {
        let scanner = ClassicScanner::new(MockClassicBluetooth::new());
        assert_eq!(scanner.state(), ScannerState::Uninitialized);
        assert_eq!(scanner.radio().start_calls(), 0);
    }

    #[test]
    fn test_begin_default_uses_default_name() {
        let mut scanner = ClassicScanner::new(MockClassicBluetooth::new());
        assert!(scanner.begin_default());
        assert_eq!(scanner.radio().last_device_name(), Some("ESP32_Scanner"));
    }

    #[test]
    fn test_try_begin_reports_start_error() {
        let mut scanner = ClassicScanner::new(MockClassicBluetooth::new().failing_start());
        assert_eq!(
            scanner.try_begin("Rig1"),
            Err(ScannerError::Start(MockError::StartFailed))
        );
        assert!(!scanner.is_initialized());
    }

    #[test]
    fn test_try_scan_before_begin_is_not_initialized() {
        let mut scanner = ClassicScanner::new(MockClassicBluetooth::new());
        assert_eq!(
            scanner.try_scan_classic_devices(ScanDuration::default()),
            Err(ScannerError::NotInitialized)
        );
        assert_eq!(scanner.radio().discover_calls(), 0);
    }

    #[test]
    fn test_try_scan_reports_discovery_error() {
        let mut scanner = ClassicScanner::new(MockClassicBluetooth::new().failing_discovery());
        assert!(scanner.begin("Rig1"));
        assert_eq!(
            scanner.try_scan_classic_devices(ScanDuration::new(3)),
            Err(ScannerError::Discovery(MockError::DiscoveryFailed))
        );
    }

    #[test]
    fn test_scan_converts_seconds_to_millis() {
        let mut scanner = ClassicScanner::new(MockClassicBluetooth::new());
        assert!(scanner.begin("Rig1"));
        let _ = scanner.scan_classic_devices(ScanDuration::new(7));
        assert_eq!(scanner.radio().last_timeout_ms(), Some(7_000));
    }

    #[test]
    fn test_scan_skips_empty_slots() {
        let radio = MockClassicBluetooth::new()
            .with_device("Phone", PHONE)
            .with_empty_slot()
            .with_device("Speaker", SPEAKER);
        let mut scanner = ClassicScanner::new(radio);
        assert!(scanner.begin("Rig1"));

        let devices = scanner
            .try_scan_classic_devices(ScanDuration::new(5))
            .expect("scan should succeed");
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].name, "Phone");
        assert_eq!(devices[1].name, "Speaker");
    }

    #[test]
    fn test_empty_inquiry_is_ok_and_empty() {
        let mut scanner = ClassicScanner::new(MockClassicBluetooth::new());
        assert!(scanner.begin("Rig1"));
        let devices = scanner
            .try_scan_classic_devices(ScanDuration::default())
            .expect("radio silence is not an error");
        assert!(devices.is_empty());
    }
}
