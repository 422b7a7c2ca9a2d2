//! Shared test helpers for license tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use keymint_license::{LicenseRecord, ProductEntitlement, SigningMaterial};

/// PKCS#1 RSA private key fixture (4096-bit throwaway key).
pub const KEY_PEM: &str = include_str!("../fixtures/signing_key.pem");

/// X.509 certificate fixture matching the private key.
pub const CERT_PEM: &str = include_str!("../fixtures/issuer.pem");

/// Parses the fixture key material.
pub fn test_material() -> SigningMaterial {
    SigningMaterial::from_pem(KEY_PEM, CERT_PEM).expect("fixture key material must parse")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A representative record with one product entitlement.
pub fn sample_record() -> LicenseRecord {
    LicenseRecord {
        id: String::new(),
        licensee_name: "Acme".to_string(),
        assignee_name: "J Doe".to_string(),
        assignee_email: "j@acme.com".to_string(),
        license_restriction: "node-locked".to_string(),
        check_concurrent_use: false,
        products: vec![ProductEntitlement {
            code: "APP".to_string(),
            fallback_date: date(2025, 1, 1),
            paid_up_to: date(2026, 1, 1),
            extended: false,
        }],
        metadata: String::new(),
        hash: String::new(),
        grace_period_days: 30,
        auto_prolongated: false,
        is_auto_prolongated: false,
    }
}

/// Splits a token into its four segments, panicking on a malformed token.
pub fn split_token(token: &str) -> (String, Vec<u8>, Vec<u8>, Vec<u8>) {
    use base64::{engine::general_purpose::STANDARD, Engine};

    let parts: Vec<&str> = token.split('-').collect();
    assert_eq!(parts.len(), 4, "token must have four segments: {token}");
    (
        parts[0].to_string(),
        STANDARD.decode(parts[1]).expect("record segment base64"),
        STANDARD.decode(parts[2]).expect("signature segment base64"),
        STANDARD.decode(parts[3]).expect("certificate segment base64"),
    )
}
