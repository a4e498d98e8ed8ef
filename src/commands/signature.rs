use std::fs;
use std::io;
use std::path::Path;

use crate::fingerprint::calculate_hash;
use crate::signature::Signature;

/// Checksum of a signature given as its hex character form. The text is
/// normalised to the canonical lowercase form before hashing.
pub fn run(signature_chars: &str) -> io::Result<String> {
    let signature = Signature::from_chars_string(signature_chars)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    calculate_hash(&signature).map_err(io::Error::other)
}

/// Checksum of a signature stored in a file as hex characters. Surrounding
/// whitespace, such as a trailing newline, is not part of the signature.
pub fn run_file(file: &Path) -> io::Result<String> {
    let text = fs::read_to_string(file)?;
    run(text.trim())
}
