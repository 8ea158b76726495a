// crates/formwork-core/src/core/hashing.rs
// ============================================================================
// Module: Formwork Canonical Hashing
// Description: Canonical JSON encoding and digest computation for snapshots.
// Purpose: Give persisted templates stable, verifiable content hashes.
// Dependencies: serde, serde_jcs, sha2, thiserror
// ============================================================================

//! ## Overview
//! Snapshot hashes must be independent of map key ordering and formatting,
//! so hashing never runs over default serde output. Values are first
//! canonicalized per RFC 8785 (JCS) and the digest is computed over the
//! canonical bytes. Stores recompute these hashes on load and fail closed
//! on mismatch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default hash algorithm for snapshot content hashes.
pub const DEFAULT_HASH_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha256;

// ============================================================================
// SECTION: Hashing Errors
// ============================================================================

/// Canonical hashing errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Canonical JSON encoding failed (for example, non-finite floats).
    #[error("canonicalization failed: {0}")]
    Canonicalization(String),
    /// Canonical payload exceeds the permitted size.
    #[error("canonical payload too large: {actual_bytes} > {max_bytes}")]
    TooLarge {
        /// Maximum allowed bytes.
        max_bytes: usize,
        /// Actual canonical payload size in bytes.
        actual_bytes: usize,
    },
}

// ============================================================================
// SECTION: Hash Algorithm
// ============================================================================

/// Supported hash algorithms.
///
/// # Invariants
/// - Variants are stable for serialization and stored-record verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
}

impl HashAlgorithm {
    /// Returns the stable wire name of the algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Hash Digest
// ============================================================================

/// Hash digest with its producing algorithm.
///
/// # Invariants
/// - `hex` is the lowercase hexadecimal encoding of the digest bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashDigest {
    /// Algorithm that produced the digest.
    pub algorithm: HashAlgorithm,
    /// Lowercase hexadecimal digest bytes.
    pub hex: String,
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.hex)
    }
}

// ============================================================================
// SECTION: Hashing Functions
// ============================================================================

/// Encodes a serializable value as canonical JSON bytes (RFC 8785).
///
/// # Errors
///
/// Returns [`HashError::Canonicalization`] when the value cannot be encoded
/// canonically.
pub fn canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, HashError> {
    serde_jcs::to_vec(value).map_err(|err| HashError::Canonicalization(err.to_string()))
}

/// Hashes raw bytes with the given algorithm.
#[must_use]
pub fn hash_bytes(algorithm: HashAlgorithm, bytes: &[u8]) -> HashDigest {
    match algorithm {
        HashAlgorithm::Sha256 => {
            let digest = Sha256::digest(bytes);
            HashDigest {
                algorithm,
                hex: to_hex(&digest),
            }
        }
    }
}

/// Hashes a serializable value over its canonical JSON encoding.
///
/// # Errors
///
/// Returns [`HashError`] when canonical encoding fails.
pub fn hash_canonical_json<T: Serialize>(
    algorithm: HashAlgorithm,
    value: &T,
) -> Result<HashDigest, HashError> {
    let bytes = canonical_json_bytes(value)?;
    Ok(hash_bytes(algorithm, &bytes))
}

/// Hashes a serializable value over its canonical JSON encoding, rejecting
/// payloads larger than `max_bytes`.
///
/// # Errors
///
/// Returns [`HashError`] when canonical encoding fails or the canonical
/// payload exceeds `max_bytes`.
pub fn hash_canonical_json_with_limit<T: Serialize>(
    algorithm: HashAlgorithm,
    value: &T,
    max_bytes: usize,
) -> Result<HashDigest, HashError> {
    let bytes = canonical_json_bytes(value)?;
    if bytes.len() > max_bytes {
        return Err(HashError::TooLarge {
            max_bytes,
            actual_bytes: bytes.len(),
        });
    }
    Ok(hash_bytes(algorithm, &bytes))
}

/// Encodes digest bytes as lowercase hexadecimal.
fn to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = fmt::Write::write_fmt(&mut hex, format_args!("{byte:02x}"));
    }
    hex
}
