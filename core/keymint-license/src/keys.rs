//! Issuer key material: the private signing key and its certificate.
//!
//! Provisioning happens once at startup; the loaded material is read-only
//! afterwards and shared across requests. The key and certificate are
//! assumed to match — a mismatch is not detected here and surfaces only
//! when a downstream verifier rejects the token.

use std::path::Path;

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::RsaPrivateKey;
use x509_cert::der::{DecodePem, Encode};
use x509_cert::Certificate;

use crate::error::{LicenseError, LicenseResult};

/// A parsed private key plus the issuer certificate, ready for signing.
#[derive(Clone)]
pub struct SigningMaterial {
    private_key: RsaPrivateKey,
    certificate: Certificate,
    certificate_der: Vec<u8>,
}

impl std::fmt::Debug for SigningMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningMaterial")
            .field("private_key", &"[REDACTED]")
            .field("subject", &self.issuer_subject())
            .finish()
    }
}

impl SigningMaterial {
    /// Parses key material from PEM text.
    ///
    /// The private key may be PKCS#1 (`BEGIN RSA PRIVATE KEY`) or PKCS#8
    /// (`BEGIN PRIVATE KEY`); the certificate must be an X.509 PEM.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidKey`] or
    /// [`LicenseError::InvalidCertificate`] if either input is unparseable.
    /// Callers must treat this as fatal: serving requests on a broken trust
    /// anchor produces tokens that can never verify.
    pub fn from_pem(key_pem: &str, cert_pem: &str) -> LicenseResult<Self> {
        let private_key = RsaPrivateKey::from_pkcs1_pem(key_pem)
            .or_else(|_| RsaPrivateKey::from_pkcs8_pem(key_pem))
            .map_err(|e| LicenseError::InvalidKey(e.to_string()))?;

        let certificate = Certificate::from_pem(cert_pem.as_bytes())
            .map_err(|e| LicenseError::InvalidCertificate(e.to_string()))?;
        let certificate_der = certificate
            .to_der()
            .map_err(|e| LicenseError::InvalidCertificate(e.to_string()))?;

        Ok(Self {
            private_key,
            certificate,
            certificate_der,
        })
    }

    /// Reads and parses key material from PEM files on disk.
    pub fn load(key_path: &Path, cert_path: &Path) -> LicenseResult<Self> {
        let key_pem = std::fs::read_to_string(key_path)?;
        let cert_pem = std::fs::read_to_string(cert_path)?;
        Self::from_pem(&key_pem, &cert_pem)
    }

    /// Returns the parsed private key.
    #[must_use]
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    /// Returns the DER encoding of the issuer certificate.
    #[must_use]
    pub fn certificate_der(&self) -> &[u8] {
        &self.certificate_der
    }

    /// Returns the certificate subject as an RFC 4514 string.
    #[must_use]
    pub fn issuer_subject(&self) -> String {
        self.certificate.tbs_certificate.subject.to_string()
    }
}
