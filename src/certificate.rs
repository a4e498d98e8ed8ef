//! Certificate sources that can hand out their encoded form.
//!
//! The fingerprint routines only need the exact bytes a certificate encodes
//! to. Files are decoded into an X.509 certificate first, so anything that is
//! not a certificate fails here instead of being fingerprinted.

use thiserror::Error;
use x509_cert::Certificate;
use x509_cert::der::{Decode, DecodePem, Encode};

const PEM_BEGIN: &[u8] = b"-----BEGIN ";

/// Failure to produce a certificate's encoded bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CertificateEncodingError {
    /// The input is not a DER or PEM encoded X.509 certificate
    #[error("malformed certificate: {0}")]
    Malformed(#[from] x509_cert::der::Error),
    /// The certificate has no content at all
    #[error("certificate has no encoded content")]
    Empty,
}

/// Anything that can produce the canonical encoded bytes of a certificate.
pub trait EncodedCertificate {
    fn encoded(&self) -> Result<Vec<u8>, CertificateEncodingError>;
}

impl EncodedCertificate for Certificate {
    fn encoded(&self) -> Result<Vec<u8>, CertificateEncodingError> {
        Ok(self.to_der()?)
    }
}

/// Certificate file contents, classified by encoding but not yet decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateFile {
    Der(Vec<u8>),
    Pem(Vec<u8>),
}

impl CertificateFile {
    /// Classify file contents: anything opening with a PEM armor line is PEM,
    /// everything else is taken as DER.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        let start = data
            .iter()
            .position(|b| !b.is_ascii_whitespace())
            .unwrap_or(data.len());
        if data[start..].starts_with(PEM_BEGIN) {
            CertificateFile::Pem(data[start..].to_vec())
        } else {
            CertificateFile::Der(data)
        }
    }

    /// Decode the contents as an X.509 certificate. PEM input must carry the
    /// `CERTIFICATE` label on both armor lines.
    pub fn decode(&self) -> Result<Certificate, CertificateEncodingError> {
        let certificate = match self {
            CertificateFile::Der(der) if der.is_empty() => {
                return Err(CertificateEncodingError::Empty);
            }
            CertificateFile::Der(der) => Certificate::from_der(der)?,
            CertificateFile::Pem(pem) => Certificate::from_pem(pem)?,
        };
        Ok(certificate)
    }
}

impl EncodedCertificate for CertificateFile {
    fn encoded(&self) -> Result<Vec<u8>, CertificateEncodingError> {
        self.decode()?.encoded()
    }
}
