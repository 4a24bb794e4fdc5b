//! Scanner configuration and constants
//!
//! This module defines central configuration values used across the workspace.
//! Defaults for the local device name and scan length should reference these
//! constants rather than hardcoding values.

/// Name the local controller advertises when none is given
pub const DEFAULT_DEVICE_NAME: &str = "ESP32_Scanner";

/// Default inquiry length in seconds
pub const DEFAULT_SCAN_SECS: u8 = 10;

/// Placeholder reported for a remote device whose name is empty
pub const UNKNOWN_DEVICE_NAME: &str = "Unknown";

/// Length of the canonical `aa:bb:cc:dd:ee:ff` address text
pub const CANONICAL_ADDR_LEN: usize = 17;
