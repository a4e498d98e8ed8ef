mod constants;
pub mod derive;
mod error;

// Re-export public items
pub use constants::{CERTIFICATE_DIGEST, MIN_CERTIFICATE_LEN, SIGNATURE_DIGEST};
pub use derive::{
    Derivation, UnavailableReason, calculate_hash, derive_from_bytes, derive_from_certificate,
    fingerprint_from_certificate, fingerprint_from_certificate_bytes, hash_signature,
};
pub use error::FingerprintError;
