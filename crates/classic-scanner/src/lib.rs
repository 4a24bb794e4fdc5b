//! Bluetooth Classic device discovery — begin, blocking inquiry, end.
//!
//! This crate is `no_std` by default; it uses `core`, `alloc` and `heapless`.
//! The radio itself sits behind [`platform::ClassicBluetooth`].
//!
//! # Modules
//!
//! - [`scanner`] — `ClassicScanner` lifecycle and inquiry
//! - [`device`] — `DiscoveredDevice` caller-owned result record
//! - [`state`] — `ScannerState`
//! - [`error`] — `ScannerError`
//!
//! # Features
//!
//! - `defmt`: log through defmt (hardware)
//! - `tracing`: log through tracing (desktop)
//! - `std`: `std::error::Error` impls and the platform mocks

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

extern crate alloc;

#[cfg(all(feature = "std", not(test)))]
extern crate std;

#[macro_use]
mod fmt;

pub mod device;
pub mod error;
pub mod scanner;
pub mod state;

// Top-level re-exports for convenience
pub use device::DiscoveredDevice;
pub use error::ScannerError;
pub use scanner::ClassicScanner;
pub use state::ScannerState;
