//! Hardware Abstraction Layer (HAL) for the Bluetooth Classic scanner
//!
//! This crate provides trait-based abstractions for the radio service,
//! enabling development and testing without physical hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Application Layer (firmware / desktop demo)
//!         ↓
//! Feature Layer (classic-scanner)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Vendor Bluetooth stack (controller + host)
//! ```
//!
//! # Contents
//!
//! - [`ClassicBluetooth`] - Start, inquire, stop
//! - [`ScanResults`] / [`DeviceDescriptor`] - Borrowed view of inquiry results
//! - [`bt_types`] - `BdAddr` and `ScanDuration` newtypes
//! - [`config`] - Compile-time defaults
//!
//! # Features
//!
//! - `std`: Enable standard library support and the [`mocks`] module
//! - `defmt`: Enable defmt logging derives
//!
//! # Example
//!
//! ```no_run
//! use platform::{ClassicBluetooth, ScanDuration, ScanResults};
//!
//! fn count_devices<B: ClassicBluetooth>(radio: &mut B) -> usize {
//!     radio
//!         .discover(ScanDuration::default().as_millis())
//!         .map(|results| results.count())
//!         .unwrap_or(0)
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::doc_markdown)] // BD_ADDR and vendor names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod bluetooth;
pub mod bt_types;
pub mod config;
pub mod mocks;

// Re-export main high-level traits
pub use bluetooth::{ClassicBluetooth, DeviceDescriptor, ScanResults};

// Re-export domain types
pub use bt_types::{AddrParseError, BdAddr, OutOfRangeError, ScanDuration};
