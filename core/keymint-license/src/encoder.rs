//! License identifier generation and canonical record serialization.

use crate::error::{LicenseError, LicenseResult};
use crate::record::LicenseRecord;
use rand::rngs::OsRng;
use rand::RngCore;

/// Length of a license identifier in characters.
pub const LICENSE_ID_LEN: usize = 10;

/// Alphabet license identifiers are drawn from. Must never contain the
/// token delimiter `-`, or issued tokens stop splitting into four parts.
pub const ID_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// Largest multiple of the alphabet size that fits in a byte; draws at or
// above it are rejected to keep the per-character distribution uniform.
const REJECTION_BOUND: u8 = (u8::MAX / 36) * 36;

/// Generates a fresh license identifier: 10 characters drawn uniformly
/// and independently from `A-Z0-9` using the OS secure random source.
///
/// Uniqueness rests on randomness alone — no registry is consulted. At 36^10
/// possible identifiers the collision probability is negligible for any
/// realistic issuance volume.
///
/// # Errors
///
/// Returns [`LicenseError::Rng`] if the OS random source fails. This is
/// not retried; a dead entropy source is an operational fault.
pub fn generate_license_id() -> LicenseResult<String> {
    let mut id = String::with_capacity(LICENSE_ID_LEN);
    let mut byte = [0u8; 1];
    while id.len() < LICENSE_ID_LEN {
        OsRng
            .try_fill_bytes(&mut byte)
            .map_err(|e| LicenseError::Rng(e.to_string()))?;
        if byte[0] < REJECTION_BOUND {
            id.push(ID_ALPHABET[(byte[0] % 36) as usize] as char);
        }
    }
    Ok(id)
}

/// Serializes a finalized record to its canonical byte sequence.
///
/// The output is what gets signed, so it must be deterministic: serde
/// emits struct fields in declaration order, giving byte-identical output
/// for the same record on every call.
///
/// # Errors
///
/// Returns [`LicenseError::Serialization`] if the record contains values
/// JSON cannot represent.
pub fn encode_record(record: &LicenseRecord) -> LicenseResult<Vec<u8>> {
    Ok(serde_json::to_vec(record)?)
}
