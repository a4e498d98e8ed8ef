//! Stable identity strings for package signing material.
//!
//! A certificate fingerprint is the uppercase SHA-256 hex of the certificate's
//! encoded form, or "" when no fingerprint is available. A signature checksum
//! is the lowercase MD5 hex of the signature's canonical text.

pub mod certificate;
pub mod commands;
pub mod fingerprint;
pub mod signature;
pub mod utils;

pub use certificate::{CertificateEncodingError, CertificateFile, EncodedCertificate};
pub use fingerprint::{
    FingerprintError, calculate_hash, fingerprint_from_certificate,
    fingerprint_from_certificate_bytes, hash_signature,
};
pub use signature::Signature;
