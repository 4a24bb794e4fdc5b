//! Scanner lifecycle state.

/// Whether this scanner has brought the radio up.
///
/// `Uninitialized → Initialized` on a successful `begin`,
/// `Initialized → Uninitialized` on `end`. Repeating either transition is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScannerState {
    /// Radio not started by this scanner.
    #[default]
    Uninitialized,
    /// Radio started; scans are allowed.
    Initialized,
}

impl ScannerState {
    /// Returns `true` once `begin` has succeeded and `end` has not run since.
    #[must_use]
    pub fn is_initialized(self) -> bool {
        matches!(self, ScannerState::Initialized)
    }
}
