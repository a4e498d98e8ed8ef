//! Identity strings for signing certificates and signatures.
//!
//! Certificate fingerprints are uppercase SHA-256 hex; signature checksums are
//! lowercase MD5 hex. Downstream comparisons are case-sensitive, so the two
//! renderings must stay as they are.

use log::{debug, warn};

use crate::certificate::EncodedCertificate;
use crate::fingerprint::constants::{CERTIFICATE_DIGEST, MIN_CERTIFICATE_LEN, SIGNATURE_DIGEST};
use crate::fingerprint::error::FingerprintError;
use crate::signature::Signature;
use crate::utils::hash::digest_named;

/// Why no fingerprint could be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// The certificate could not produce its encoded bytes
    EncodingFailure(String),
    /// The encoding is shorter than [`MIN_CERTIFICATE_LEN`]
    UndersizedInput { len: usize },
    /// Digest computation failed
    HashingFailure(String),
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnavailableReason::EncodingFailure(reason) => {
                write!(f, "certificate encoding failed: {}", reason)
            }
            UnavailableReason::UndersizedInput { len } => {
                write!(
                    f,
                    "encoding is {} bytes, at least {} required",
                    len, MIN_CERTIFICATE_LEN
                )
            }
            UnavailableReason::HashingFailure(reason) => {
                write!(f, "hashing failed: {}", reason)
            }
        }
    }
}

/// Outcome of deriving a certificate fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Derivation {
    Fingerprint(String),
    Unavailable(UnavailableReason),
}

impl Derivation {
    /// Collapse to the string form, with "" standing for unavailable.
    pub fn into_string(self) -> String {
        match self {
            Derivation::Fingerprint(fp) => fp,
            Derivation::Unavailable(_) => String::new(),
        }
    }
}

/// MD5 checksum of a signature's canonical text, as lowercase hex.
pub fn hash_signature(signature_text: &str) -> Result<String, FingerprintError> {
    let digest = digest_named(SIGNATURE_DIGEST, signature_text.as_bytes())?;
    Ok(hex::encode(digest))
}

/// Checksum of a [`Signature`] via its canonical character form.
pub fn calculate_hash(signature: &Signature) -> Result<String, FingerprintError> {
    hash_signature(&signature.to_chars_string())
}

/// Fingerprint of a certificate's encoded bytes, or "" if none is available.
pub fn fingerprint_from_certificate_bytes(encoded: &[u8]) -> String {
    derive_from_bytes(encoded).into_string()
}

/// Fingerprint of a certificate, or "" if its bytes cannot be extracted or
/// are not fingerprintable.
pub fn fingerprint_from_certificate<C: EncodedCertificate + ?Sized>(certificate: &C) -> String {
    derive_from_certificate(certificate).into_string()
}

pub fn derive_from_certificate<C: EncodedCertificate + ?Sized>(certificate: &C) -> Derivation {
    match certificate.encoded() {
        Ok(encoded) => derive_from_bytes(&encoded),
        Err(e) => {
            warn!("Could not extract certificate encoding: {}", e);
            Derivation::Unavailable(UnavailableReason::EncodingFailure(e.to_string()))
        }
    }
}

pub fn derive_from_bytes(encoded: &[u8]) -> Derivation {
    derive_with(CERTIFICATE_DIGEST, encoded)
}

fn derive_with(algorithm: &str, encoded: &[u8]) -> Derivation {
    if encoded.len() < MIN_CERTIFICATE_LEN {
        debug!(
            "Skipping fingerprint for {}-byte encoding (minimum {})",
            encoded.len(),
            MIN_CERTIFICATE_LEN
        );
        return Derivation::Unavailable(UnavailableReason::UndersizedInput {
            len: encoded.len(),
        });
    }

    match digest_named(algorithm, encoded) {
        Ok(digest) => Derivation::Fingerprint(hex::encode_upper(digest)),
        Err(e) => {
            warn!("Certificate fingerprint failed: {}", e);
            Derivation::Unavailable(UnavailableReason::HashingFailure(e.to_string()))
        }
    }
}
