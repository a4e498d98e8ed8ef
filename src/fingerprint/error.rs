use thiserror::Error;

/// Error type for fingerprint operations.
///
/// Only the signature checksum surfaces this; certificate fingerprints fold
/// every failure into an unavailable result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FingerprintError {
    /// The digest backend has no implementation for the named algorithm
    #[error("digest algorithm '{0}' is not available")]
    UnavailableAlgorithm(String),
}
