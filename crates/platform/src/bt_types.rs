//! Bluetooth domain newtypes.
//!
//! - `BdAddr`: 48-bit device address with the canonical `aa:bb:cc:dd:ee:ff` text form
//! - `ScanDuration`: inquiry length in whole seconds, 1–255

use core::fmt::{self, Write as _};
use core::str::FromStr;

use crate::config::{CANONICAL_ADDR_LEN, DEFAULT_SCAN_SECS};

// ── Error types ──────────────────────────────────────────────────────────────

/// Error returned when a value is out of the valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was out of range.
    pub value: u32,
    /// The inclusive minimum allowed value.
    pub min: u32,
    /// The inclusive maximum allowed value.
    pub max: u32,
}

impl fmt::Display for OutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {} outside allowed range {}..={}",
            self.value, self.min, self.max
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OutOfRangeError {}

/// Error returned when text is not a canonical Bluetooth address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddrParseError {
    /// Input is not exactly 17 characters long.
    InvalidLength(usize),
    /// A separator position does not hold `:`.
    MissingSeparator,
    /// A byte pair is not two hex digits.
    InvalidHex,
}

impl fmt::Display for AddrParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "address must be {CANONICAL_ADDR_LEN} characters, got {len}")
            }
            Self::MissingSeparator => write!(f, "address bytes must be separated by ':'"),
            Self::InvalidHex => write!(f, "address byte is not a hex pair"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddrParseError {}

// ── BdAddr ───────────────────────────────────────────────────────────────────

/// A Bluetooth device address (BD_ADDR).
///
/// Bytes are kept in display order: `bytes[0]` is the most significant
/// octet and is printed first. This matches how the vendor stack hands
/// addresses over in its inquiry results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct BdAddr([u8; 6]);

impl BdAddr {
    /// Wrap six address octets, most significant first.
    #[must_use]
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Return the raw octets, most significant first.
    #[must_use]
    pub const fn bytes(self) -> [u8; 6] {
        self.0
    }

    /// Render the canonical lowercase text form without allocating.
    #[must_use]
    pub fn to_canonical(self) -> heapless::String<CANONICAL_ADDR_LEN> {
        let mut out = heapless::String::new();
        // Six hex pairs and five separators fill the buffer exactly.
        write!(out, "{self}").ok();
        out
    }
}

impl fmt::Display for BdAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl From<[u8; 6]> for BdAddr {
    fn from(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
}

impl FromStr for BdAddr {
    type Err = AddrParseError;

    /// Parse `aa:bb:cc:dd:ee:ff` (hex digits in either case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != CANONICAL_ADDR_LEN {
            return Err(AddrParseError::InvalidLength(s.len()));
        }

        let mut bytes = [0u8; 6];
        let mut parts = s.split(':');
        for slot in &mut bytes {
            let pair = parts.next().ok_or(AddrParseError::MissingSeparator)?;
            if pair.len() != 2 {
                return Err(AddrParseError::MissingSeparator);
            }
            // from_str_radix tolerates a leading '+', the canonical form does not.
            if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(AddrParseError::InvalidHex);
            }
            *slot = u8::from_str_radix(pair, 16).map_err(|_| AddrParseError::InvalidHex)?;
        }
        if parts.next().is_some() {
            return Err(AddrParseError::MissingSeparator);
        }

        Ok(Self(bytes))
    }
}

// ── ScanDuration ─────────────────────────────────────────────────────────────

/// Length of a Bluetooth Classic inquiry, in whole seconds.
///
/// Wraps a `u8` with the invariant `1 <= value <= 255`. Typical scans are
/// 5–15 seconds; the default is 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct ScanDuration(u8);

impl ScanDuration {
    /// Shortest accepted scan.
    pub const MIN_SECS: u8 = 1;

    /// Create a `ScanDuration`, raising 0 to the 1-second minimum.
    #[must_use]
    pub fn new(secs: u8) -> Self {
        Self(secs.max(Self::MIN_SECS))
    }

    /// Create a `ScanDuration`, returning an error for a zero-length scan.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRangeError`] if `secs == 0`.
    pub fn try_new(secs: u8) -> Result<Self, OutOfRangeError> {
        if secs < Self::MIN_SECS {
            Err(OutOfRangeError {
                value: u32::from(secs),
                min: u32::from(Self::MIN_SECS),
                max: u32::from(u8::MAX),
            })
        } else {
            Ok(Self(secs))
        }
    }

    /// Scan length in seconds.
    #[must_use]
    pub fn as_secs(self) -> u8 {
        self.0
    }

    /// Scan length in milliseconds, as the discovery primitive expects it.
    #[must_use]
    pub fn as_millis(self) -> u32 {
        // u8::MAX * 1000 = 255_000, far below u32::MAX.
        u32::from(self.0).saturating_mul(1000)
    }
}

impl Default for ScanDuration {
    fn default() -> Self {
        Self(DEFAULT_SCAN_SECS)
    }
}
