/// Encodings shorter than this are not fingerprinted
pub const MIN_CERTIFICATE_LEN: usize = 256;
/// Digest used for certificate fingerprints
pub const CERTIFICATE_DIGEST: &str = "SHA-256";
/// Digest used for signature checksums
pub const SIGNATURE_DIGEST: &str = "MD5";
