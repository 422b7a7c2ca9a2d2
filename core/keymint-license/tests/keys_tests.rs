mod common;

use common::{CERT_PEM, KEY_PEM};
use keymint_license::{LicenseError, SigningMaterial};

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn fixture_material_parses() {
    let material = SigningMaterial::from_pem(KEY_PEM, CERT_PEM).unwrap();
    assert!(!material.certificate_der().is_empty());
}

#[test]
fn subject_is_extracted() {
    let material = SigningMaterial::from_pem(KEY_PEM, CERT_PEM).unwrap();
    assert!(material.issuer_subject().contains("CN=Novice"));
}

#[test]
fn garbage_key_is_rejected() {
    let result = SigningMaterial::from_pem("not a key", CERT_PEM);
    assert!(matches!(result, Err(LicenseError::InvalidKey(_))));
}

#[test]
fn certificate_pem_is_not_a_private_key() {
    let result = SigningMaterial::from_pem(CERT_PEM, CERT_PEM);
    assert!(matches!(result, Err(LicenseError::InvalidKey(_))));
}

#[test]
fn garbage_certificate_is_rejected() {
    let result = SigningMaterial::from_pem(KEY_PEM, "not a certificate");
    assert!(matches!(result, Err(LicenseError::InvalidCertificate(_))));
}

#[test]
fn truncated_certificate_is_rejected() {
    let truncated = &CERT_PEM[..CERT_PEM.len() / 2];
    let result = SigningMaterial::from_pem(KEY_PEM, truncated);
    assert!(matches!(result, Err(LicenseError::InvalidCertificate(_))));
}

// ── File loading ─────────────────────────────────────────────────

#[test]
fn loads_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let key_path = dir.path().join("signing_key.pem");
    let cert_path = dir.path().join("issuer.pem");
    std::fs::write(&key_path, KEY_PEM).unwrap();
    std::fs::write(&cert_path, CERT_PEM).unwrap();

    let material = SigningMaterial::load(&key_path, &cert_path).unwrap();
    assert!(material.issuer_subject().contains("Novice"));
}

#[test]
fn missing_key_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let cert_path = dir.path().join("issuer.pem");
    std::fs::write(&cert_path, CERT_PEM).unwrap();

    let result = SigningMaterial::load(&dir.path().join("nope.pem"), &cert_path);
    assert!(matches!(result, Err(LicenseError::Io(_))));
}

// ── Debug output ─────────────────────────────────────────────────

#[test]
fn debug_redacts_private_key() {
    let material = SigningMaterial::from_pem(KEY_PEM, CERT_PEM).unwrap();
    let debug = format!("{material:?}");
    assert!(debug.contains("[REDACTED]"));
    assert!(!debug.contains("RsaPrivateKey"));
}
