use md5::Md5;
use sha2::{Digest, Sha256};

use crate::fingerprint::FingerprintError;

/// Digest algorithms available to the fingerprint routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Md5,
    Sha256,
}

impl DigestAlgorithm {
    /// Look up an algorithm by its standard name ("MD5", "SHA-256").
    pub fn from_name(name: &str) -> Result<Self, FingerprintError> {
        match name.to_ascii_uppercase().as_str() {
            "MD5" => Ok(DigestAlgorithm::Md5),
            "SHA-256" | "SHA256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(FingerprintError::UnavailableAlgorithm(name.to_string())),
        }
    }

    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Md5 => Md5::digest(data).to_vec(),
            DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        }
    }
}

/// Compute the raw digest of `data` with the algorithm called `name`.
pub fn digest_named(name: &str, data: &[u8]) -> Result<Vec<u8>, FingerprintError> {
    Ok(DigestAlgorithm::from_name(name)?.digest(data))
}
