use std::io;
use std::path::Path;

use crate::commands::certificate;
use crate::fingerprint::{Derivation, UnavailableReason};

pub enum CheckResult {
    Match,
    NoMatch { actual: String },
    Unavailable(UnavailableReason),
}

/// Compare a certificate file's fingerprint to `expected`. The comparison is
/// case-sensitive and an unavailable fingerprint matches nothing.
pub fn run(expected: &str, file: &Path) -> io::Result<CheckResult> {
    match certificate::derive(file)? {
        Derivation::Fingerprint(actual) if actual == expected => Ok(CheckResult::Match),
        Derivation::Fingerprint(actual) => Ok(CheckResult::NoMatch { actual }),
        Derivation::Unavailable(reason) => Ok(CheckResult::Unavailable(reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CERT_DER: &[u8] = include_bytes!("../../tests/fixtures/cert.der");
    const SMALL_DER: &[u8] = include_bytes!("../../tests/fixtures/small.der");
    const CERT_FINGERPRINT: &str =
        "199F40E15B422F9926ACCF1BB6582691FD113CD237DA64EEB38705A0B2CE1863";

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn matching_fingerprint_returns_match() {
        let file = create_temp_file(CERT_DER);

        let result = run(CERT_FINGERPRINT, file.path()).unwrap();

        assert!(matches!(result, CheckResult::Match));
    }

    #[test]
    fn lowercase_fingerprint_does_not_match() {
        let file = create_temp_file(CERT_DER);

        let result = run(&CERT_FINGERPRINT.to_lowercase(), file.path()).unwrap();

        match result {
            CheckResult::NoMatch { actual } => assert_eq!(actual, CERT_FINGERPRINT),
            _ => panic!("Expected NoMatch"),
        }
    }

    #[test]
    fn empty_expected_never_matches_unavailable() {
        let file = create_temp_file(SMALL_DER);

        let result = run("", file.path()).unwrap();

        assert!(matches!(
            result,
            CheckResult::Unavailable(UnavailableReason::UndersizedInput { len: 253 })
        ));
    }

    #[test]
    fn nonexistent_file_returns_error() {
        let result = run("somehash", Path::new("/nonexistent/file.der"));
        assert!(result.is_err());
    }
}
