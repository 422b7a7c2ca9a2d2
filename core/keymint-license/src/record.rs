//! The license record and its per-product entitlements.
//!
//! Wire names are camelCase to match the record shape external verifiers
//! expect; `id` travels as `licenseId`. Field declaration order is the
//! canonical serialization order and must not be reshuffled, since the
//! signature covers the serialized bytes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An entitlement window for a single product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntitlement {
    /// Product code (e.g. "APP").
    pub code: String,
    /// Expiration date used when the paid-up date cannot be honored.
    pub fallback_date: NaiveDate,
    /// Date the entitlement is paid up to.
    pub paid_up_to: NaiveDate,
    /// Whether the entitlement is extended.
    pub extended: bool,
}

/// The license record being issued.
///
/// All fields except `id` are caller-supplied and pass through unmodified;
/// `id` is assigned server-side during issuance and any caller-provided
/// value is overwritten. `hash` is opaque caller data, not a checksum
/// computed here, and is unrelated to the token signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    /// Unique license identifier, assigned at issuance.
    #[serde(rename = "licenseId", default)]
    pub id: String,
    /// Name of the licensee (organization or individual).
    pub licensee_name: String,
    /// Name of the person the license is assigned to.
    pub assignee_name: String,
    /// Email of the assignee.
    pub assignee_email: String,
    /// Restriction tag (e.g. named-user vs floating); opaque to the issuer.
    pub license_restriction: String,
    /// Whether verifiers should enforce concurrent-use limits.
    pub check_concurrent_use: bool,
    /// Per-product entitlement windows, order preserved.
    pub products: Vec<ProductEntitlement>,
    /// Opaque caller-supplied metadata.
    pub metadata: String,
    /// Opaque caller-supplied string; NOT computed or validated here.
    pub hash: String,
    /// Grace period granted past expiry, in days.
    pub grace_period_days: u32,
    /// Auto-prolongation flag; overlaps with `is_auto_prolongated`, both
    /// are preserved verbatim and precedence is left to the verifier.
    pub auto_prolongated: bool,
    /// Duplicate auto-prolongation flag, preserved verbatim.
    pub is_auto_prolongated: bool,
}
