//! Scanner errors.

use core::fmt;

/// Why a scanner operation produced no result.
///
/// `E` is the radio service's own error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScannerError<E> {
    /// A scan was requested before a successful `begin`.
    NotInitialized,
    /// The controller or host stack failed to start.
    Start(E),
    /// The inquiry returned no results collection.
    Discovery(E),
}

// The service error only promises Debug, so it is rendered with {:?}.
#[allow(clippy::use_debug)]
impl<E: fmt::Debug> fmt::Display for ScannerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "Bluetooth module not initialized, call begin() first"),
            Self::Start(err) => write!(
                f,
                "Failed to initialize Bluetooth Classic controller or host stack: {err:?}"
            ),
            Self::Discovery(err) => {
                write!(f, "Bluetooth Classic discovery returned no results: {err:?}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for ScannerError<E> {}

#[cfg(test)]
mod tests {
    use super::ScannerError;
    use platform::mocks::MockError;

    #[test]
    fn test_start_error_message_names_service_error() {
        let err: ScannerError<MockError> = ScannerError::Start(MockError::StartFailed);
        assert!(err.to_string().contains("StartFailed"));
    }

    #[test]
    fn test_discovery_error_message_names_service_error() {
        let err: ScannerError<MockError> = ScannerError::Discovery(MockError::DiscoveryFailed);
        assert!(err.to_string().contains("DiscoveryFailed"));
    }

    #[test]
    fn test_not_initialized_message() {
        let err: ScannerError<MockError> = ScannerError::NotInitialized;
        assert_eq!(
            err.to_string(),
            "Bluetooth module not initialized, call begin() first"
        );
    }
}
