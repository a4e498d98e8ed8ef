use std::io;
use std::path::Path;

use crate::commands::certificate::{self, CertificateReport};

pub struct CompareResult {
    pub first: CertificateReport,
    pub second: CertificateReport,
    pub matches: bool,
}

/// Compare the fingerprints of two certificate files. Two unavailable
/// fingerprints do not match each other.
pub fn run(file1: &Path, file2: &Path) -> io::Result<CompareResult> {
    let first = certificate::run(file1)?;
    let second = certificate::run(file2)?;
    let matches = first.is_available() && first.fingerprint == second.fingerprint;
    Ok(CompareResult {
        first,
        second,
        matches,
    })
}
