use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::certificate::CertificateFile;
use crate::fingerprint::{Derivation, UnavailableReason, derive_from_certificate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    EncodingFailure,
    Undersized,
    HashingFailure,
}

/// Fingerprint of one certificate file, in the shape printed by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct CertificateReport {
    pub file: String,
    pub fingerprint: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CertificateReport {
    fn new(file: &Path, derivation: Derivation) -> Self {
        let file = file.display().to_string();
        match derivation {
            Derivation::Fingerprint(fingerprint) => CertificateReport {
                file,
                fingerprint,
                status: Status::Ok,
                reason: None,
            },
            Derivation::Unavailable(reason) => CertificateReport {
                file,
                fingerprint: String::new(),
                status: match reason {
                    UnavailableReason::EncodingFailure(_) => Status::EncodingFailure,
                    UnavailableReason::UndersizedInput { .. } => Status::Undersized,
                    UnavailableReason::HashingFailure(_) => Status::HashingFailure,
                },
                reason: Some(reason.to_string()),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Derive the fingerprint of a DER or PEM certificate file.
pub fn derive(file: &Path) -> io::Result<Derivation> {
    let data = fs::read(file)?;
    Ok(derive_from_certificate(&CertificateFile::from_bytes(data)))
}

pub fn run(file: &Path) -> io::Result<CertificateReport> {
    Ok(CertificateReport::new(file, derive(file)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CERT_DER: &[u8] = include_bytes!("../../tests/fixtures/cert.der");
    const CERT_PEM: &[u8] = include_bytes!("../../tests/fixtures/cert.pem");
    const SMALL_DER: &[u8] = include_bytes!("../../tests/fixtures/small.der");
    const CERT_FINGERPRINT: &str =
        "199F40E15B422F9926ACCF1BB6582691FD113CD237DA64EEB38705A0B2CE1863";

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn der_file_is_fingerprinted() {
        let file = create_temp_file(CERT_DER);

        let report = run(file.path()).unwrap();

        assert!(report.is_available());
        assert_eq!(report.fingerprint, CERT_FINGERPRINT);
        assert_eq!(report.reason, None);
    }

    #[test]
    fn pem_file_matches_its_der() {
        let file = create_temp_file(CERT_PEM);

        let report = run(file.path()).unwrap();

        assert!(report.is_available());
        assert_eq!(report.fingerprint, CERT_FINGERPRINT);
    }

    #[test]
    fn small_certificate_is_undersized() {
        let file = create_temp_file(SMALL_DER);

        let report = run(file.path()).unwrap();

        assert_eq!(report.status, Status::Undersized);
        assert_eq!(report.fingerprint, "");
        assert!(report.reason.is_some());
    }

    #[test]
    fn non_certificate_is_encoding_failure() {
        let file = create_temp_file(&[0u8; 300]);

        let report = run(file.path()).unwrap();

        assert_eq!(report.status, Status::EncodingFailure);
        assert_eq!(report.fingerprint, "");
    }

    #[test]
    fn private_key_pem_is_encoding_failure() {
        let pem = String::from_utf8(CERT_PEM.to_vec())
            .unwrap()
            .replace("CERTIFICATE", "PRIVATE KEY");
        let file = create_temp_file(pem.as_bytes());

        let report = run(file.path()).unwrap();

        assert_eq!(report.status, Status::EncodingFailure);
        assert_eq!(report.fingerprint, "");
    }

    #[test]
    fn report_serializes_status_in_snake_case() {
        let file = create_temp_file(SMALL_DER);
        let report = run(file.path()).unwrap();

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["status"], "undersized");
        assert_eq!(json["fingerprint"], "");
    }

    #[test]
    fn nonexistent_file_returns_error() {
        let result = run(Path::new("/nonexistent/cert.der"));
        assert!(result.is_err());
    }
}
