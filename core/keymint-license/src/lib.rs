//! License issuing for Keymint.
//!
//! This crate handles:
//! - License record modeling and canonical serialization
//! - Unique license identifier generation
//! - RSA PKCS#1 v1.5 signing and token packaging
//! - Loading the issuer's private key and certificate
//!
//! # Design Principles
//!
//! - **Stateless issuance**: records are built per request, signed, and
//!   discarded — nothing is stored or tracked server-side
//! - **Explicit provisioning**: the key and certificate are injected into
//!   the signer, never read from global state
//! - **Verifier-neutral**: the token carries everything an external
//!   verifier needs (record bytes, signature, issuer certificate)
//!
//! # Token Format
//!
//! Tokens are formatted as: `{id}-{base64(record)}-{base64(signature)}-{base64(cert DER)}`
//! The record is canonical JSON signed with RSA PKCS#1 v1.5 over a
//! configurable digest (SHA-1 by default, for legacy verifier compatibility).

mod encoder;
mod error;
mod keys;
mod record;
mod signer;

pub use encoder::{encode_record, generate_license_id, ID_ALPHABET, LICENSE_ID_LEN};
pub use error::{LicenseError, LicenseResult};
pub use keys::SigningMaterial;
pub use record::{LicenseRecord, ProductEntitlement};
pub use signer::{LicenseSigner, SignatureDigest, TOKEN_DELIMITER};
