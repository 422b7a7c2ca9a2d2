//! RSA signing and token packaging.
//!
//! A token is four `-`-joined segments: the license identifier, then the
//! base64 (standard alphabet, padded) record bytes, signature, and issuer
//! certificate DER. Standard base64 output never contains `-` and neither
//! does the identifier alphabet, which is what makes the delimiter safe.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::Pkcs1v15Sign;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use sha2::Sha256;

use crate::encoder::{encode_record, generate_license_id};
use crate::error::LicenseResult;
use crate::keys::SigningMaterial;
use crate::record::LicenseRecord;

/// Separator between token segments.
pub const TOKEN_DELIMITER: char = '-';

/// Digest algorithm used inside the PKCS#1 v1.5 signature.
///
/// SHA-1 is the default because existing verifiers of this token format
/// expect it; it is a compatibility constraint, not an endorsement. New
/// deployments with no legacy verifiers should pick SHA-256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureDigest {
    /// SHA-1 (160-bit), legacy verifier compatibility.
    #[default]
    Sha1,
    /// SHA-256.
    Sha256,
}

impl SignatureDigest {
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha1 => Sha1::digest(data).to_vec(),
            Self::Sha256 => Sha256::digest(data).to_vec(),
        }
    }

    /// Returns the PKCS#1 v1.5 padding scheme carrying this digest's OID.
    #[must_use]
    pub fn padding(&self) -> Pkcs1v15Sign {
        match self {
            Self::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
            Self::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        }
    }
}

impl std::str::FromStr for SignatureDigest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            other => Err(format!("unknown digest '{other}' (expected sha1 or sha256)")),
        }
    }
}

/// Issues signed license tokens from finalized records.
///
/// Holds the provisioned key material read-only; concurrent requests share
/// one signer with no locking. Apart from entropy consumed for identifier
/// generation, issuance is a pure function of (record, key, certificate).
#[derive(Debug, Clone)]
pub struct LicenseSigner {
    material: SigningMaterial,
    digest: SignatureDigest,
}

impl LicenseSigner {
    /// Creates a signer with the default (SHA-1) digest.
    #[must_use]
    pub fn new(material: SigningMaterial) -> Self {
        Self::with_digest(material, SignatureDigest::default())
    }

    /// Creates a signer with an explicit digest algorithm.
    #[must_use]
    pub fn with_digest(material: SigningMaterial, digest: SignatureDigest) -> Self {
        Self { material, digest }
    }

    /// Returns the configured digest algorithm.
    #[must_use]
    pub fn digest(&self) -> SignatureDigest {
        self.digest
    }

    /// Returns the DER encoding of the issuer certificate.
    #[must_use]
    pub fn certificate_der(&self) -> &[u8] {
        self.material.certificate_der()
    }

    /// Returns the issuer certificate subject.
    #[must_use]
    pub fn issuer_subject(&self) -> String {
        self.material.issuer_subject()
    }

    /// Issues a signed token for the record.
    ///
    /// Assigns a fresh identifier (any caller-supplied `id` is overwritten),
    /// serializes the record, signs the digest of the serialized bytes with
    /// RSA PKCS#1 v1.5, and packages everything into the composite token.
    ///
    /// # Errors
    ///
    /// Fails if identifier generation, serialization, or the signing
    /// primitive fails. No partial token is ever produced.
    pub fn issue(&self, mut record: LicenseRecord) -> LicenseResult<String> {
        record.id = generate_license_id()?;
        let record_bytes = encode_record(&record)?;

        let digest = self.digest.digest(&record_bytes);
        let signature = self
            .material
            .private_key()
            .sign(self.digest.padding(), &digest)?;

        let record_b64 = STANDARD.encode(&record_bytes);
        let signature_b64 = STANDARD.encode(&signature);
        let certificate_b64 = STANDARD.encode(self.material.certificate_der());

        Ok(format!(
            "{}{TOKEN_DELIMITER}{record_b64}{TOKEN_DELIMITER}{signature_b64}{TOKEN_DELIMITER}{certificate_b64}",
            record.id
        ))
    }
}
